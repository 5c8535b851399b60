use shared::domain::{SectionDescriptor, SectionId};
use site_core::{AnchorLocator, NavigationController, ScrollOptions, SectionRegistry};

/// Anchors for every registered section, as a fully mounted page would have.
struct MountedPage {
    anchors: Vec<SectionId>,
    scrolls: Vec<SectionId>,
}

impl AnchorLocator for MountedPage {
    type Target = SectionId;

    fn locate(&self, id: &SectionId) -> Option<SectionId> {
        self.anchors.iter().find(|anchor| *anchor == id).cloned()
    }

    fn reveal(&mut self, target: SectionId, _options: ScrollOptions) {
        self.scrolls.push(target);
    }
}

#[test]
fn home_about_contact_walkthrough() {
    let registry = SectionRegistry::new(vec![
        SectionDescriptor::new("home", "Home"),
        SectionDescriptor::new("about", "About"),
        SectionDescriptor::new("contact", "Contact"),
    ])
    .expect("registry");
    let page = MountedPage {
        anchors: registry.ids().cloned().collect(),
        scrolls: Vec::new(),
    };
    let mut nav = NavigationController::new(registry, page);

    assert_eq!(nav.active(), "home");

    nav.navigate_to("about");
    assert_eq!(nav.active(), "about");
    assert_eq!(nav.locator().scrolls, [SectionId::from("about")]);

    nav.navigate_to("missing");
    assert_eq!(nav.active(), "missing");
    assert_eq!(nav.locator().scrolls.len(), 1);

    nav.navigate_to("about");
    assert_eq!(nav.active(), "about");
    assert_eq!(
        nav.locator().scrolls,
        [SectionId::from("about"), SectionId::from("about")]
    );
}
