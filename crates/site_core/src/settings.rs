use std::{collections::HashMap, fs, path::Path};

use serde::{Deserialize, Serialize};
use shared::error::SettingsError;
use url::Url;

pub const DEFAULT_SETTINGS_FILE: &str = "site.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub owner_name: String,
    pub headline: String,
    pub contact_email: String,
    pub collaboration_subject: String,
    pub inquiry_subject: String,
    pub portfolio_pdf_url: Option<String>,
    pub booking_url: Option<String>,
    pub packages_url: Option<String>,
    pub privacy_url: Option<String>,
    pub inquiry_endpoint: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            owner_name: "Justin Griswold".into(),
            headline: "Experience Designer • Facilitator • Safety Instructor".into(),
            contact_email: "youremail@example.com".into(),
            collaboration_subject: "Collaboration Request - Justin Griswold".into(),
            inquiry_subject: "Website Inquiry - Justin Griswold".into(),
            portfolio_pdf_url: None,
            booking_url: None,
            packages_url: None,
            privacy_url: None,
            inquiry_endpoint: None,
        }
    }
}

impl SiteSettings {
    /// Checks the configured links. Unset optional links are fine; they are
    /// reported as capability gaps when clicked.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.contact_email.trim().is_empty() {
            return Err(SettingsError::Empty {
                key: "contact_email",
            });
        }

        let links = [
            ("portfolio_pdf_url", &self.portfolio_pdf_url),
            ("booking_url", &self.booking_url),
            ("packages_url", &self.packages_url),
            ("privacy_url", &self.privacy_url),
            ("inquiry_endpoint", &self.inquiry_endpoint),
        ];
        for (key, value) in links {
            let Some(value) = value else {
                continue;
            };
            Url::parse(value).map_err(|err| SettingsError::InvalidUrl {
                key,
                value: value.clone(),
                message: err.to_string(),
            })?;
        }

        Ok(())
    }
}

/// Defaults, then `site.toml` in the working directory, then the environment.
pub fn load_settings() -> SiteSettings {
    load_settings_from(Path::new(DEFAULT_SETTINGS_FILE))
}

pub fn load_settings_from(path: &Path) -> SiteSettings {
    let mut settings = SiteSettings::default();

    match fs::read_to_string(path) {
        Ok(raw) => match toml::from_str::<HashMap<String, String>>(&raw) {
            Ok(file_cfg) => apply_overrides(&mut settings, |key| file_cfg.get(key).cloned()),
            Err(err) => {
                tracing::warn!(path = %path.display(), "ignoring malformed settings file: {err}");
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => {
            tracing::warn!(path = %path.display(), "unable to read settings file: {err}");
        }
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    settings
}

/// `SITE_<KEY>` first, then the `APP__<KEY>` alias, which wins when both are set.
pub fn apply_env_overrides(settings: &mut SiteSettings, lookup: impl Fn(&str) -> Option<String>) {
    apply_overrides(settings, |key| {
        let upper = key.to_ascii_uppercase();
        lookup(&format!("APP__{upper}")).or_else(|| lookup(&format!("SITE_{upper}")))
    });
}

fn apply_overrides(settings: &mut SiteSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("owner_name") {
        settings.owner_name = v;
    }
    if let Some(v) = lookup("headline") {
        settings.headline = v;
    }
    if let Some(v) = lookup("contact_email") {
        settings.contact_email = v;
    }
    if let Some(v) = lookup("collaboration_subject") {
        settings.collaboration_subject = v;
    }
    if let Some(v) = lookup("inquiry_subject") {
        settings.inquiry_subject = v;
    }

    set_optional(&mut settings.portfolio_pdf_url, lookup("portfolio_pdf_url"));
    set_optional(&mut settings.booking_url, lookup("booking_url"));
    set_optional(&mut settings.packages_url, lookup("packages_url"));
    set_optional(&mut settings.privacy_url, lookup("privacy_url"));
    set_optional(&mut settings.inquiry_endpoint, lookup("inquiry_endpoint"));
}

// An explicitly blank value clears a link configured at an earlier layer.
fn set_optional(slot: &mut Option<String>, value: Option<String>) {
    if let Some(v) = value {
        let v = v.trim();
        *slot = if v.is_empty() { None } else { Some(v.to_string()) };
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
