use std::{collections::HashSet, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use shared::domain::{ExternalAction, SectionId};
use site_core::{
    load_settings, load_settings_from, AnchorLocator, Integrations, NavigationController,
    ScrollOptions, SectionRegistry,
};

#[derive(Parser, Debug)]
struct Cli {
    /// Site settings file; defaults to ./site.toml when present.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the navigation sections in page order.
    Sections {
        #[arg(long)]
        json: bool,
    },
    /// Replay navigation calls against a page without a renderer.
    Navigate {
        ids: Vec<String>,
        /// Sections that have a mounted anchor; all registered sections when omitted.
        #[arg(long, value_delimiter = ',')]
        mounted: Option<Vec<String>>,
    },
    /// Resolve the links behind the page's outbound buttons.
    Links {
        #[arg(long)]
        json: bool,
        /// Only resolve this action, e.g. `view-packages`.
        #[arg(long)]
        action: Option<ExternalAction>,
    },
}

/// Anchors a headless page would expose; records what would have scrolled.
struct HeadlessPage {
    mounted: HashSet<SectionId>,
    last_scroll: Option<SectionId>,
}

impl AnchorLocator for HeadlessPage {
    type Target = SectionId;

    fn locate(&self, id: &SectionId) -> Option<SectionId> {
        self.mounted.get(id).cloned()
    }

    fn reveal(&mut self, target: SectionId, _options: ScrollOptions) {
        self.last_scroll = Some(target);
    }
}

#[derive(Serialize)]
struct LinkReport {
    action: ExternalAction,
    url: Option<String>,
    error: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = SectionRegistry::portfolio();

    match cli.command {
        Command::Sections { json } => {
            if json {
                let rendered = serde_json::to_string_pretty(registry.list())
                    .context("failed to serialize sections")?;
                println!("{rendered}");
            } else {
                for (index, section) in registry.list().iter().enumerate() {
                    println!("{index}\t{}\t{}", section.id, section.label);
                }
            }
        }
        Command::Navigate { ids, mounted } => {
            let mounted = match mounted {
                Some(ids) => ids.into_iter().map(SectionId::from).collect(),
                None => registry.ids().cloned().collect(),
            };
            let page = HeadlessPage {
                mounted,
                last_scroll: None,
            };
            let mut nav = NavigationController::new(registry, page);
            println!("start\tactive={}", nav.active());

            for id in ids {
                nav.locator_mut().last_scroll = None;
                nav.navigate_to(id.as_str());
                let scrolled = nav
                    .locator()
                    .last_scroll
                    .as_ref()
                    .map(SectionId::to_string)
                    .unwrap_or_else(|| "skipped".to_string());
                let known = if nav.active_descriptor().is_some() {
                    "registered"
                } else {
                    "unregistered"
                };
                println!("{id}\tactive={}\tscroll={scrolled}\t{known}", nav.active());
            }
        }
        Command::Links { json, action } => {
            let settings = match &cli.settings {
                Some(path) => load_settings_from(path),
                None => load_settings(),
            };
            let integrations = Integrations::new(settings);
            let actions = match action {
                Some(action) => vec![action],
                None => ExternalAction::ALL.to_vec(),
            };
            let reports: Vec<LinkReport> = actions
                .into_iter()
                .map(|action| match integrations.resolve(action) {
                    Ok(link) => LinkReport {
                        action,
                        url: Some(link.url.to_string()),
                        error: None,
                    },
                    Err(err) => LinkReport {
                        action,
                        url: None,
                        error: Some(err.to_string()),
                    },
                })
                .collect();

            if json {
                let rendered = serde_json::to_string_pretty(&reports)
                    .context("failed to serialize link report")?;
                println!("{rendered}");
            } else {
                for report in reports {
                    match (report.url, report.error) {
                        (Some(url), _) => println!("{}\t{url}", report.action),
                        (None, Some(err)) => println!("{}\t-\t{err}", report.action),
                        (None, None) => println!("{}\t-", report.action),
                    }
                }
            }
        }
    }

    Ok(())
}
