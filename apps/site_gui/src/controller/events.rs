//! UI events raised while drawing a frame, and the notices shown in the status banner.

use shared::{
    domain::{ExternalAction, SectionId},
    error::IntegrationError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Nav entry or in-page call-to-action targeting a section.
    Navigate(SectionId),
    External(ExternalAction),
    DismissNotice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeCategory {
    /// The button is wired to nothing yet.
    NotConfigured,
    InvalidLink,
    Opened,
    Queue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiNotice {
    category: NoticeCategory,
    message: String,
}

impl UiNotice {
    pub fn new(category: NoticeCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    pub fn from_integration_error(err: &IntegrationError) -> Self {
        match err {
            IntegrationError::NotConfigured { action } => Self::new(
                NoticeCategory::NotConfigured,
                format!("Tip: {}", action.setup_hint()),
            ),
            IntegrationError::InvalidLink { .. } => {
                Self::new(NoticeCategory::InvalidLink, err.to_string())
            }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self.category,
            NoticeCategory::InvalidLink | NoticeCategory::Queue
        )
    }

    pub fn category(&self) -> NoticeCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn notice_label(category: NoticeCategory) -> &'static str {
    match category {
        NoticeCategory::NotConfigured => "Not configured",
        NoticeCategory::InvalidLink => "Broken link",
        NoticeCategory::Opened => "Opened",
        NoticeCategory::Queue => "Unexpected",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_gap_becomes_tip() {
        let notice = UiNotice::from_integration_error(&IntegrationError::NotConfigured {
            action: ExternalAction::Privacy,
        });
        assert_eq!(notice.category(), NoticeCategory::NotConfigured);
        assert!(notice.message().starts_with("Tip: Add a privacy policy link"));
        assert!(!notice.is_error());
    }

    #[test]
    fn invalid_link_is_an_error() {
        let notice = UiNotice::from_integration_error(&IntegrationError::InvalidLink {
            action: ExternalAction::ViewPackages,
            message: "relative URL without a base".into(),
        });
        assert!(notice.is_error());
        assert!(notice.message().contains("view_packages"));
    }
}
