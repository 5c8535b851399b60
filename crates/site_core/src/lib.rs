//! Navigation core of the portfolio site: the section registry, the
//! controller that owns the active section, and the links behind the
//! page's outbound buttons.

pub mod integrations;
pub mod navigation;
pub mod registry;
pub mod settings;

pub use integrations::{ExternalLink, Integrations};
pub use navigation::{
    AnchorLocator, NavigationController, NavigationState, ScrollAlign, ScrollBehavior,
    ScrollOptions,
};
pub use registry::SectionRegistry;
pub use settings::{load_settings, load_settings_from, SiteSettings};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
