//! Links behind the page's buttons that leave the document.

use shared::{domain::ExternalAction, error::IntegrationError};
use url::{form_urlencoded, Url};

use crate::settings::SiteSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    pub action: ExternalAction,
    pub url: Url,
}

#[derive(Debug, Clone)]
pub struct Integrations {
    settings: SiteSettings,
}

impl Integrations {
    pub fn new(settings: SiteSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    pub fn resolve(&self, action: ExternalAction) -> Result<ExternalLink, IntegrationError> {
        let url = match action {
            ExternalAction::EmailCollaboration => {
                self.mailto(action, &self.settings.collaboration_subject)?
            }
            ExternalAction::EmailInquiry => self.mailto(action, &self.settings.inquiry_subject)?,
            _ => {
                let configured = self
                    .configured_url(action)
                    .ok_or(IntegrationError::NotConfigured { action })?;
                Url::parse(configured).map_err(|err| IntegrationError::InvalidLink {
                    action,
                    message: err.to_string(),
                })?
            }
        };

        Ok(ExternalLink { action, url })
    }

    pub fn is_configured(&self, action: ExternalAction) -> bool {
        action.is_mailto() || self.configured_url(action).is_some()
    }

    fn configured_url(&self, action: ExternalAction) -> Option<&str> {
        let slot = match action {
            ExternalAction::DownloadPortfolio => &self.settings.portfolio_pdf_url,
            ExternalAction::Connect => &self.settings.booking_url,
            ExternalAction::ViewPackages => &self.settings.packages_url,
            ExternalAction::SubmitInquiry => &self.settings.inquiry_endpoint,
            ExternalAction::Privacy => &self.settings.privacy_url,
            ExternalAction::EmailCollaboration | ExternalAction::EmailInquiry => return None,
        };
        slot.as_deref()
    }

    fn mailto(&self, action: ExternalAction, subject: &str) -> Result<Url, IntegrationError> {
        let recipient = self.settings.contact_email.trim();
        if recipient.is_empty() {
            return Err(IntegrationError::NotConfigured { action });
        }

        // Mail clients expect %20 rather than the form-encoded '+'.
        let subject = form_urlencoded::byte_serialize(subject.as_bytes())
            .collect::<String>()
            .replace('+', "%20");

        Url::parse(&format!("mailto:{recipient}?subject={subject}")).map_err(|err| {
            IntegrationError::InvalidLink {
                action,
                message: err.to_string(),
            }
        })
    }
}

#[cfg(test)]
#[path = "tests/integrations_tests.rs"]
mod tests;
