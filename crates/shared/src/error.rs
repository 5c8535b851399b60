use thiserror::Error;

use crate::domain::{ExternalAction, SectionId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("section registry must contain at least one section")]
    Empty,
    #[error("duplicate section id '{0}'")]
    DuplicateId(SectionId),
    #[error("section id must not be blank (label '{label}')")]
    BlankId { label: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrationError {
    /// The button exists on the page but nothing is wired behind it yet.
    #[error("{action} is not configured yet: {}", action.setup_hint())]
    NotConfigured { action: ExternalAction },
    #[error("failed to build link for {action}: {message}")]
    InvalidLink {
        action: ExternalAction,
        message: String,
    },
}

impl IntegrationError {
    pub fn action(&self) -> ExternalAction {
        match self {
            IntegrationError::NotConfigured { action }
            | IntegrationError::InvalidLink { action, .. } => *action,
        }
    }

    pub fn is_capability_gap(&self) -> bool {
        matches!(self, IntegrationError::NotConfigured { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("setting '{key}' is not a valid url ({value}): {message}")]
    InvalidUrl {
        key: &'static str,
        value: String,
        message: String,
    },
    #[error("setting '{key}' must not be empty")]
    Empty { key: &'static str },
}
