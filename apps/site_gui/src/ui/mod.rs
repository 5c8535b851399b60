//! UI layer: app shell, page copy, widgets, and themes.

pub mod app;
pub mod content;
pub mod theme;
pub mod widgets;

pub use app::{PersistedViewSettings, PortfolioApp, SETTINGS_STORAGE_KEY};
