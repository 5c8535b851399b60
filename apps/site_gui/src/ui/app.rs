use chrono::Datelike;
use crossbeam_channel::{bounded, Receiver, Sender};
use eframe::egui;
use serde::{Deserialize, Serialize};
use shared::domain::{ExternalAction, SectionId};
use site_core::{Integrations, NavigationController, SectionRegistry, SiteSettings};

use crate::controller::{
    anchors::EguiAnchors,
    events::{notice_label, NoticeCategory, UiEvent, UiNotice},
    orchestration::dispatch_ui_event,
};
use crate::ui::{
    content,
    theme::{self, SitePalette, ThemePreset},
    widgets,
};

pub const SETTINGS_STORAGE_KEY: &str = "portfolio_site_view_settings";

/// Below this width the nav collapses into the compact strip under the header.
const COMPACT_NAV_BREAKPOINT: f32 = 860.0;
const PAGE_MAX_WIDTH: f32 = 1100.0;
const SECTION_VERTICAL_PADDING: f32 = 48.0;
const UI_EVENT_QUEUE_CAPACITY: usize = 64;

/// Only the look of the page survives restarts; the active section does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedViewSettings {
    pub theme_preset: ThemePreset,
}

impl Default for PersistedViewSettings {
    fn default() -> Self {
        Self {
            theme_preset: ThemePreset::Light,
        }
    }
}

/// Inert contact form. Nothing here is transmitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.email.trim().is_empty()
            && self.message.trim().is_empty()
    }
}

pub struct PortfolioApp {
    nav: NavigationController<EguiAnchors>,
    integrations: Integrations,
    ui_tx: Sender<UiEvent>,
    ui_rx: Receiver<UiEvent>,
    notice: Option<UiNotice>,
    draft: ContactDraft,
    theme: ThemePreset,
    theme_dirty: bool,
}

impl PortfolioApp {
    pub fn new(settings: SiteSettings, persisted: Option<PersistedViewSettings>) -> Self {
        let (ui_tx, ui_rx) = bounded(UI_EVENT_QUEUE_CAPACITY);
        let persisted = persisted.unwrap_or_default();
        Self {
            nav: NavigationController::new(SectionRegistry::portfolio(), EguiAnchors::default()),
            integrations: Integrations::new(settings),
            ui_tx,
            ui_rx,
            notice: None,
            draft: ContactDraft::default(),
            theme: persisted.theme_preset,
            theme_dirty: true,
        }
    }

    fn palette(&self) -> SitePalette {
        theme::palette(self.theme)
    }

    fn emit(&mut self, event: UiEvent) {
        dispatch_ui_event(&self.ui_tx, event, &mut self.notice);
    }

    fn navigate(&mut self, id: &str) {
        self.emit(UiEvent::Navigate(SectionId::from(id)));
    }

    fn external(&mut self, action: ExternalAction) {
        self.emit(UiEvent::External(action));
    }

    fn process_ui_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Navigate(id) => {
                    self.nav.navigate_to(id);
                    ctx.request_repaint();
                }
                UiEvent::External(action) => self.open_external(ctx, action),
                UiEvent::DismissNotice => self.notice = None,
            }
        }
    }

    fn open_external(&mut self, ctx: &egui::Context, action: ExternalAction) {
        if action == ExternalAction::SubmitInquiry {
            tracing::info!(
                draft_blank = self.draft.is_blank(),
                message_len = self.draft.message.len(),
                "contact form submit requested"
            );
        }

        match self.integrations.resolve(action) {
            Ok(link) => {
                tracing::info!(action = %action, url = %link.url, "opening external link");
                ctx.open_url(egui::OpenUrl::new_tab(link.url.as_str()));
                self.notice = Some(UiNotice::new(
                    NoticeCategory::Opened,
                    format!("Opened {}", link.url),
                ));
            }
            Err(err) => {
                if err.is_capability_gap() {
                    tracing::info!(action = %action, "external action not configured");
                } else {
                    tracing::warn!(action = %action, "external action failed: {err}");
                }
                self.notice = Some(UiNotice::from_integration_error(&err));
            }
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.theme_dirty {
            theme::apply(ctx, self.theme);
            self.theme_dirty = false;
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        let palette = self.palette();
        egui::TopBottomPanel::top("site_header")
            .frame(
                egui::Frame::new()
                    .fill(palette.background)
                    .stroke(egui::Stroke::new(1.0, palette.card_stroke))
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                let compact = ui.available_width() < COMPACT_NAV_BREAKPOINT;

                ui.horizontal(|ui| {
                    self.show_brand(ui, &palette);

                    if !compact {
                        ui.add_space(16.0);
                        self.show_nav_entries(ui, &palette);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if widgets::primary_button(ui, "Download PDF →", &palette).clicked() {
                            self.external(ExternalAction::DownloadPortfolio);
                        }
                        if !compact && widgets::secondary_button(ui, "Contact", &palette).clicked() {
                            self.navigate("contact");
                        }
                    });
                });

                if compact {
                    ui.add_space(6.0);
                    ui.separator();
                    egui::ScrollArea::horizontal()
                        .id_salt("compact_nav_scroll")
                        .show(ui, |ui| {
                            ui.horizontal(|ui| self.show_nav_entries(ui, &palette));
                        });
                }
            });
    }

    fn show_brand(&mut self, ui: &mut egui::Ui, palette: &SitePalette) {
        let settings = self.integrations.settings();
        let name = settings.owner_name.clone();
        let headline = settings.headline.clone();

        let response = ui
            .vertical(|ui| {
                ui.label(egui::RichText::new(name).strong().size(14.0));
                ui.label(
                    egui::RichText::new(headline)
                        .size(11.0)
                        .color(palette.muted_text),
                );
            })
            .response
            .interact(egui::Sense::click())
            .on_hover_text("Go to top");

        if response.clicked() {
            self.navigate("home");
        }
    }

    /// Shared by the primary nav and the compact strip.
    fn show_nav_entries(&mut self, ui: &mut egui::Ui, palette: &SitePalette) {
        let mut clicked = None;
        for section in self.nav.registry().list() {
            let selected = self.nav.is_active(section.id.as_str());
            if widgets::nav_entry(ui, &section.label, selected, palette).clicked() {
                clicked = Some(section.id.clone());
            }
        }
        if let Some(id) = clicked {
            self.emit(UiEvent::Navigate(id));
        }
    }

    fn show_status_banner(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.notice.clone() else {
            return;
        };
        let palette = self.palette();
        let accent = if notice.is_error() {
            egui::Color32::from_rgb(220, 38, 38)
        } else {
            palette.muted_text
        };

        egui::TopBottomPanel::bottom("status_banner")
            .frame(
                egui::Frame::new()
                    .fill(palette.subtle_fill)
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(notice_label(notice.category()))
                            .strong()
                            .color(accent),
                    );
                    ui.label(notice.message());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Dismiss").clicked() {
                            self.emit(UiEvent::DismissNotice);
                        }
                    });
                });
            });
    }

    fn show_page(&mut self, ctx: &egui::Context) {
        let palette = self.palette();
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.background))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("page_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let content_origin = ui.max_rect().min;

                        if let Some(pending) = self.nav.locator_mut().take_pending() {
                            ui.scroll_to_rect_animation(
                                pending.screen_rect(content_origin),
                                Some(pending.align()),
                                pending.animation(),
                            );
                        }

                        let sections: Vec<SectionId> = self.nav.registry().ids().cloned().collect();
                        for id in sections {
                            let rendered = ui.vertical_centered(|ui| {
                                ui.set_max_width(PAGE_MAX_WIDTH);
                                ui.add_space(SECTION_VERTICAL_PADDING);
                                let known = self.show_section(ui, &id, &palette);
                                ui.add_space(SECTION_VERTICAL_PADDING);
                                known
                            });

                            let anchors = self.nav.locator_mut();
                            if rendered.inner {
                                anchors.record(&id, rendered.response.rect, content_origin);
                            } else {
                                anchors.forget(&id);
                            }
                            ui.separator();
                        }

                        self.show_footer(ui, &palette);
                    });
            });
    }

    /// Returns false for ids this renderer has no content for.
    fn show_section(&mut self, ui: &mut egui::Ui, id: &SectionId, palette: &SitePalette) -> bool {
        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
            match id.as_str() {
                "home" => self.show_hero(ui, palette),
                "about" => self.show_about(ui, palette),
                "work" => self.show_case_studies(ui, palette),
                "framework" => self.show_framework(ui, palette),
                "safety" => self.show_safety(ui, palette),
                "services" => self.show_services(ui, palette),
                "contact" => self.show_contact(ui, palette),
                _ => return false,
            }
            true
        })
        .inner
    }

    fn show_hero(&mut self, ui: &mut egui::Ui, palette: &SitePalette) {
        widgets::muted(ui, content::HERO_BADGE, palette);
        ui.add_space(8.0);
        ui.label(egui::RichText::new(content::HERO_TITLE).size(36.0).strong());
        ui.add_space(8.0);
        widgets::muted(ui, content::HERO_INTRO, palette);
        ui.add_space(12.0);

        ui.horizontal_wrapped(|ui| {
            if widgets::primary_button(ui, "View Case Studies →", palette).clicked() {
                self.navigate("work");
            }
            if widgets::secondary_button(ui, "Explore \"Do It Afraid\"", palette).clicked() {
                self.navigate("framework");
            }
        });
        ui.add_space(12.0);

        ui.columns(content::HERO_STATS.len(), |columns| {
            for (column, stat) in columns.iter_mut().zip(content::HERO_STATS.iter()) {
                widgets::stat(column, stat, palette);
            }
        });
        ui.add_space(12.0);

        widgets::card(ui, palette, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(content::AT_A_GLANCE.title).strong().size(18.0));
            widgets::muted(ui, content::AT_A_GLANCE.body, palette);
            ui.add_space(8.0);
            widgets::bullet_list(ui, &content::AT_A_GLANCE_BULLETS, palette);
            ui.add_space(8.0);
            widgets::callout(ui, "Do It Afraid", content::METHOD_TAGLINE, palette);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if widgets::primary_button(ui, "Work with me →", palette).clicked() {
                    self.navigate("contact");
                }
                if widgets::secondary_button(ui, "Connect", palette).clicked() {
                    self.external(ExternalAction::Connect);
                }
            });
        });
    }

    fn show_about(&mut self, ui: &mut egui::Ui, palette: &SitePalette) {
        widgets::section_heading(ui, "About");
        for paragraph in content::ABOUT_PARAGRAPHS {
            widgets::muted(ui, paragraph, palette);
            ui.add_space(6.0);
        }
        ui.columns(content::ABOUT_CARDS.len(), |columns| {
            for (column, list) in columns.iter_mut().zip(content::ABOUT_CARDS.iter()) {
                widgets::titled_list_card(column, list, "A quick snapshot.", palette);
            }
        });
        ui.add_space(8.0);
        widgets::card(ui, palette, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Core competencies").strong());
            ui.add_space(6.0);
            widgets::chips(ui, &content::CORE_COMPETENCIES, palette);
        });
    }

    fn show_case_studies(&mut self, ui: &mut egui::Ui, palette: &SitePalette) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                widgets::section_heading(ui, "Case Studies");
                widgets::muted(ui, content::CASE_STUDIES_INTRO, palette);
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if widgets::secondary_button(ui, "See services →", palette).clicked() {
                    self.navigate("services");
                }
            });
        });
        ui.add_space(8.0);

        for study in &content::CASE_STUDIES {
            widgets::card(ui, palette, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(study.title).strong().size(18.0));
                widgets::muted(ui, study.subtitle, palette);
                ui.add_space(8.0);
                let blocks = [
                    ("The problem", study.problem),
                    ("Design", study.design),
                    ("Outcomes", study.outcomes),
                ];
                ui.columns(blocks.len(), |columns| {
                    for (column, (title, items)) in columns.iter_mut().zip(blocks) {
                        column.label(egui::RichText::new(title).size(12.0).strong());
                        widgets::bullet_list(column, items, palette);
                    }
                });
            });
            ui.add_space(8.0);
        }
    }

    fn show_framework(&mut self, ui: &mut egui::Ui, palette: &SitePalette) {
        widgets::section_heading(ui, "Do It Afraid");
        widgets::muted(ui, content::FRAMEWORK_INTRO, palette);
        ui.add_space(8.0);
        widgets::callout(ui, "Core idea", content::FRAMEWORK_CORE_IDEA, palette);
        ui.add_space(8.0);

        widgets::card(ui, palette, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("Experience → Reflection → Identity")
                    .strong()
                    .size(18.0),
            );
            widgets::muted(
                ui,
                "A repeatable loop I use to turn activities into lasting change.",
                palette,
            );
            ui.add_space(8.0);
            for step in &content::FRAMEWORK_STEPS {
                widgets::callout(ui, step.title, step.body, palette);
                ui.add_space(4.0);
            }
            ui.columns(content::FRAMEWORK_MINIS.len(), |columns| {
                for (column, mini) in columns.iter_mut().zip(content::FRAMEWORK_MINIS.iter()) {
                    column.label(egui::RichText::new(mini.title).size(12.0).strong());
                    widgets::chips(column, mini.items, palette);
                }
            });
        });
    }

    fn show_safety(&mut self, ui: &mut egui::Ui, palette: &SitePalette) {
        widgets::section_heading(ui, "Safety & Risk Management");
        widgets::muted(ui, content::SAFETY_INTRO, palette);
        ui.add_space(8.0);
        for card in &content::SAFETY_CARDS {
            widgets::callout(ui, card.title, card.body, palette);
            ui.add_space(4.0);
        }
        widgets::card(ui, palette, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("How I keep programs safe").strong().size(18.0));
            ui.add_space(6.0);
            widgets::bullet_list(ui, &content::SAFETY_PRACTICES, palette);
        });
    }

    fn show_services(&mut self, ui: &mut egui::Ui, palette: &SitePalette) {
        widgets::section_heading(ui, "Services");
        widgets::muted(ui, content::SERVICES_INTRO, palette);
        ui.add_space(8.0);
        widgets::callout(ui, "Best fit for", content::SERVICES_BEST_FIT, palette);
        ui.add_space(8.0);

        for pair in content::SERVICES.chunks(2) {
            ui.columns(2, |columns| {
                for (column, service) in columns.iter_mut().zip(pair) {
                    widgets::titled_list_card(
                        column,
                        service,
                        "Practical, flexible, and scalable.",
                        palette,
                    );
                }
            });
            ui.add_space(8.0);
        }

        widgets::card(ui, palette, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(content::PACKAGE_PITCH.title).strong().size(18.0));
            widgets::muted(ui, content::PACKAGE_PITCH.body, palette);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if widgets::primary_button(ui, "Request availability →", palette).clicked() {
                    self.navigate("contact");
                }
                if widgets::secondary_button(ui, "View packages", palette).clicked() {
                    self.external(ExternalAction::ViewPackages);
                }
            });
        });
    }

    fn show_contact(&mut self, ui: &mut egui::Ui, palette: &SitePalette) {
        widgets::section_heading(ui, "Contact");
        widgets::muted(ui, content::CONTACT_INTRO, palette);
        ui.add_space(8.0);

        let recipient = self.integrations.settings().contact_email.clone();
        widgets::card(ui, palette, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Email").size(12.0).strong());
            widgets::muted(ui, &recipient, palette);
            if widgets::primary_button(ui, "Email me", palette).clicked() {
                self.external(ExternalAction::EmailCollaboration);
            }
        });
        ui.add_space(6.0);
        widgets::callout(ui, "Quick note", content::CONTACT_QUICK_NOTE, palette);
        ui.add_space(8.0);

        widgets::card(ui, palette, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Send a message").strong().size(18.0));
            widgets::muted(ui, content::CONTACT_FORM_NOTE, palette);
            ui.add_space(8.0);

            ui.label("Name");
            ui.add(
                egui::TextEdit::singleline(&mut self.draft.name)
                    .hint_text("Your name")
                    .desired_width(f32::INFINITY),
            );
            ui.label("Email");
            ui.add(
                egui::TextEdit::singleline(&mut self.draft.email)
                    .hint_text("you@email.com")
                    .desired_width(f32::INFINITY),
            );
            ui.label("Message");
            ui.add(
                egui::TextEdit::multiline(&mut self.draft.message)
                    .hint_text("Tell me what you're building…")
                    .desired_rows(5)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if widgets::primary_button(ui, "Send →", palette).clicked() {
                    self.external(ExternalAction::SubmitInquiry);
                }
                if widgets::secondary_button(ui, "Use email instead", palette).clicked() {
                    self.external(ExternalAction::EmailInquiry);
                }
            });
        });
    }

    fn show_footer(&mut self, ui: &mut egui::Ui, palette: &SitePalette) {
        let year = chrono::Local::now().year();
        let owner = self.integrations.settings().owner_name.clone();

        ui.add_space(16.0);
        ui.horizontal_wrapped(|ui| {
            widgets::muted(
                ui,
                &format!("© {year} {owner} • {}", content::FOOTER_TAGLINE),
                palette,
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(self.theme.toggled().label()).clicked() {
                    self.theme = self.theme.toggled();
                    self.theme_dirty = true;
                }
                if ui.link("Privacy").clicked() {
                    self.external(ExternalAction::Privacy);
                }
                ui.label("•");
                if ui.link("Back to top").clicked() {
                    self.navigate("home");
                }
            });
        });
        ui.add_space(24.0);
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events(ctx);
        self.apply_theme_if_needed(ctx);

        self.show_header(ctx);
        self.show_status_banner(ctx);
        self.show_page(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedViewSettings {
            theme_preset: self.theme,
        };
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_on_first_section_with_persisted_theme() {
        let app = PortfolioApp::new(
            SiteSettings::default(),
            Some(PersistedViewSettings {
                theme_preset: ThemePreset::Dark,
            }),
        );
        assert_eq!(app.nav.active(), "home");
        assert_eq!(app.theme, ThemePreset::Dark);
    }

    #[test]
    fn queued_navigation_is_applied_on_next_frame() {
        let ctx = egui::Context::default();
        let mut app = PortfolioApp::new(SiteSettings::default(), None);

        app.navigate("services");
        assert_eq!(app.nav.active(), "home");

        app.process_ui_events(&ctx);
        assert_eq!(app.nav.active(), "services");
    }

    #[test]
    fn unconfigured_button_shows_tip_instead_of_opening() {
        let ctx = egui::Context::default();
        let mut app = PortfolioApp::new(SiteSettings::default(), None);

        app.external(ExternalAction::DownloadPortfolio);
        app.process_ui_events(&ctx);

        let notice = app.notice.clone().expect("notice");
        assert_eq!(notice.category(), NoticeCategory::NotConfigured);
        assert!(notice.message().contains("PDF portfolio"));

        app.emit(UiEvent::DismissNotice);
        app.process_ui_events(&ctx);
        assert!(app.notice.is_none());
    }

    #[test]
    fn persisted_view_settings_tolerate_missing_fields() {
        let parsed: PersistedViewSettings = serde_json::from_str("{}").expect("parse");
        assert_eq!(parsed, PersistedViewSettings::default());
    }

    #[test]
    fn contact_draft_blankness_ignores_whitespace() {
        let mut draft = ContactDraft::default();
        assert!(draft.is_blank());
        draft.message = "  \n".into();
        assert!(draft.is_blank());
        draft.name = "Ada".into();
        assert!(!draft.is_blank());
    }
}
