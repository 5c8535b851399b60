//! Active-section state and scroll-to-section behavior.

use shared::domain::{SectionDescriptor, SectionId};
use tracing::debug;

use crate::registry::SectionRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Where the revealed anchor should land inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub align: ScrollAlign,
}

impl ScrollOptions {
    pub const SECTION_START: Self = Self {
        behavior: ScrollBehavior::Smooth,
        align: ScrollAlign::Start,
    };
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self::SECTION_START
    }
}

/// Finds the rendered anchor of a section and scrolls it into view.
///
/// `locate` returns `None` while a section is not mounted; the controller
/// then skips the scroll. `reveal` starts the scroll and returns
/// immediately. A later reveal replaces any scroll still in flight.
pub trait AnchorLocator {
    type Target;

    fn locate(&self, id: &SectionId) -> Option<Self::Target>;

    fn reveal(&mut self, target: Self::Target, options: ScrollOptions);
}

impl<L: AnchorLocator + ?Sized> AnchorLocator for &mut L {
    type Target = L::Target;

    fn locate(&self, id: &SectionId) -> Option<Self::Target> {
        (**self).locate(id)
    }

    fn reveal(&mut self, target: Self::Target, options: ScrollOptions) {
        (**self).reveal(target, options)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    active: SectionId,
}

impl NavigationState {
    pub fn new(registry: &SectionRegistry) -> Self {
        Self {
            active: registry.first().id.clone(),
        }
    }

    pub fn active(&self) -> &SectionId {
        &self.active
    }
}

/// Owns the active section and drives scrolling through an [`AnchorLocator`].
#[derive(Debug)]
pub struct NavigationController<L> {
    registry: SectionRegistry,
    state: NavigationState,
    locator: L,
}

impl<L: AnchorLocator> NavigationController<L> {
    pub fn new(registry: SectionRegistry, locator: L) -> Self {
        let state = NavigationState::new(&registry);
        Self {
            registry,
            state,
            locator,
        }
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn active(&self) -> &SectionId {
        self.state.active()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.state.active == id
    }

    /// `None` when the last navigation targeted an id the registry does not know.
    pub fn active_descriptor(&self) -> Option<&SectionDescriptor> {
        self.registry.get(self.state.active.as_str())
    }

    /// Marks `id` active, then scrolls its anchor into view if one is mounted.
    ///
    /// Any id is accepted. The state update never depends on the scroll.
    pub fn navigate_to(&mut self, id: impl Into<SectionId>) {
        let id = id.into();
        if !self.registry.contains(id.as_str()) {
            debug!(section = %id, "navigating to unregistered section");
        }

        self.state.active = id;

        match self.locator.locate(&self.state.active) {
            Some(target) => {
                debug!(section = %self.state.active, "scrolling section anchor into view");
                self.locator.reveal(target, ScrollOptions::SECTION_START);
            }
            None => {
                debug!(section = %self.state.active, "section anchor not mounted; scroll skipped");
            }
        }
    }

    pub fn locator(&self) -> &L {
        &self.locator
    }

    pub fn locator_mut(&mut self) -> &mut L {
        &mut self.locator
    }
}
