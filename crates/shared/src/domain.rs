use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

macro_rules! str_id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

// Doubles as the anchor name a section is rendered under.
str_id_newtype!(SectionId);

/// One navigable block of the page, as listed in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    pub id: SectionId,
    pub label: String,
}

impl SectionDescriptor {
    pub fn new(id: impl Into<SectionId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Buttons on the page that leave the document instead of scrolling it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalAction {
    DownloadPortfolio,
    Connect,
    ViewPackages,
    SubmitInquiry,
    Privacy,
    EmailCollaboration,
    EmailInquiry,
}

impl ExternalAction {
    pub const ALL: [ExternalAction; 7] = [
        ExternalAction::DownloadPortfolio,
        ExternalAction::Connect,
        ExternalAction::ViewPackages,
        ExternalAction::SubmitInquiry,
        ExternalAction::Privacy,
        ExternalAction::EmailCollaboration,
        ExternalAction::EmailInquiry,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExternalAction::DownloadPortfolio => "download_portfolio",
            ExternalAction::Connect => "connect",
            ExternalAction::ViewPackages => "view_packages",
            ExternalAction::SubmitInquiry => "submit_inquiry",
            ExternalAction::Privacy => "privacy",
            ExternalAction::EmailCollaboration => "email_collaboration",
            ExternalAction::EmailInquiry => "email_inquiry",
        }
    }

    pub fn is_mailto(self) -> bool {
        matches!(
            self,
            ExternalAction::EmailCollaboration | ExternalAction::EmailInquiry
        )
    }

    /// What to tell the visitor (or site owner) while the link is unset.
    pub fn setup_hint(self) -> &'static str {
        match self {
            ExternalAction::DownloadPortfolio => "Add a link to your PDF portfolio here.",
            ExternalAction::Connect => "Add your LinkedIn or a booking link here.",
            ExternalAction::ViewPackages => {
                "Add your rate sheet or package list as a PDF link here."
            }
            ExternalAction::SubmitInquiry => {
                "Connect this form to your email provider when you deploy."
            }
            ExternalAction::Privacy => {
                "Add a privacy policy link if you collect form submissions."
            }
            ExternalAction::EmailCollaboration | ExternalAction::EmailInquiry => {
                "Set a contact email address."
            }
        }
    }
}

impl fmt::Display for ExternalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExternalAction {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        ExternalAction::ALL
            .into_iter()
            .find(|action| action.as_str() == normalized)
            .ok_or_else(|| format!("unknown external action '{value}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_id_compares_with_plain_str() {
        let id = SectionId::from("about");
        assert_eq!(id, "about");
        assert_eq!(id.to_string(), "about");
    }

    #[test]
    fn section_id_serializes_as_bare_string() {
        let json = serde_json::to_string(&SectionId::from("work")).expect("serialize");
        assert_eq!(json, "\"work\"");
    }

    #[test]
    fn external_action_parses_kebab_and_snake_case() {
        assert_eq!(
            "view-packages".parse::<ExternalAction>(),
            Ok(ExternalAction::ViewPackages)
        );
        assert_eq!(
            "EMAIL_INQUIRY".parse::<ExternalAction>(),
            Ok(ExternalAction::EmailInquiry)
        );
        assert!("fax".parse::<ExternalAction>().is_err());
    }
}
