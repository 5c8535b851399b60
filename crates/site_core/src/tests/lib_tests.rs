use super::*;

use std::{cell::RefCell, collections::HashSet, rc::Rc};

use shared::{
    domain::{SectionDescriptor, SectionId},
    error::RegistryError,
};

/// Records every reveal; only ids in `mounted` have anchors.
#[derive(Default)]
struct RecordingLocator {
    mounted: HashSet<String>,
    revealed: Rc<RefCell<Vec<(String, ScrollOptions)>>>,
}

impl RecordingLocator {
    fn with_mounted(ids: &[&str]) -> Self {
        Self {
            mounted: ids.iter().map(|id| id.to_string()).collect(),
            revealed: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl AnchorLocator for RecordingLocator {
    type Target = String;

    fn locate(&self, id: &SectionId) -> Option<Self::Target> {
        self.mounted.get(id.as_str()).cloned()
    }

    fn reveal(&mut self, target: Self::Target, options: ScrollOptions) {
        self.revealed.borrow_mut().push((target, options));
    }
}

fn three_section_registry() -> SectionRegistry {
    SectionRegistry::new(vec![
        SectionDescriptor::new("home", "Home"),
        SectionDescriptor::new("about", "About"),
        SectionDescriptor::new("contact", "Contact"),
    ])
    .expect("valid registry")
}

#[test]
fn portfolio_registry_lists_sections_in_page_order() {
    let registry = SectionRegistry::portfolio();
    let ids: Vec<&str> = registry.ids().map(SectionId::as_str).collect();
    assert_eq!(
        ids,
        ["home", "about", "work", "framework", "safety", "services", "contact"]
    );
    assert_eq!(registry.get("work").map(|s| s.label.as_str()), Some("Case Studies"));
}

#[test]
fn portfolio_registry_ids_are_pairwise_distinct() {
    let registry = SectionRegistry::portfolio();
    let unique: HashSet<&str> = registry.ids().map(SectionId::as_str).collect();
    assert_eq!(unique.len(), registry.len());
    SectionRegistry::new(registry.list().to_vec()).expect("portfolio passes validation");
}

#[test]
fn registry_list_is_stable_across_calls() {
    let registry = SectionRegistry::portfolio();
    let first = registry.list().to_vec();
    assert_eq!(registry.list(), first.as_slice());
    assert_eq!(registry.list(), SectionRegistry::portfolio().list());
}

#[test]
fn registry_rejects_duplicates_and_empty_input() {
    assert_eq!(SectionRegistry::new(Vec::new()), Err(RegistryError::Empty));

    let duplicate = SectionRegistry::new(vec![
        SectionDescriptor::new("home", "Home"),
        SectionDescriptor::new("home", "Start"),
    ]);
    assert_eq!(
        duplicate,
        Err(RegistryError::DuplicateId(SectionId::from("home")))
    );

    let blank = SectionRegistry::new(vec![SectionDescriptor::new(" ", "Nothing")]);
    assert!(matches!(blank, Err(RegistryError::BlankId { .. })));
}

#[test]
fn registry_lookup_helpers() {
    let registry = three_section_registry();
    assert_eq!(registry.first().id, "home");
    assert_eq!(registry.position("contact"), Some(2));
    assert!(registry.contains("about"));
    assert!(!registry.contains("missing"));
    assert!(!registry.is_empty());
}

#[test]
fn controller_starts_on_first_section() {
    let controller =
        NavigationController::new(SectionRegistry::portfolio(), RecordingLocator::default());
    assert_eq!(controller.active(), "home");
    assert!(controller.is_active("home"));
    assert_eq!(
        controller.active_descriptor().map(|s| s.label.as_str()),
        Some("Home")
    );
}

#[test]
fn navigate_reveals_mounted_anchor_at_section_start() {
    let locator = RecordingLocator::with_mounted(&["home", "about"]);
    let revealed = locator.revealed.clone();
    let mut controller = NavigationController::new(three_section_registry(), locator);

    controller.navigate_to("about");

    assert_eq!(controller.active(), "about");
    assert_eq!(
        revealed.borrow().as_slice(),
        [("about".to_string(), ScrollOptions::SECTION_START)]
    );
    assert_eq!(ScrollOptions::SECTION_START.behavior, ScrollBehavior::Smooth);
    assert_eq!(ScrollOptions::SECTION_START.align, ScrollAlign::Start);
}

#[test]
fn navigate_updates_state_even_when_anchor_is_not_mounted() {
    let locator = RecordingLocator::with_mounted(&["home"]);
    let revealed = locator.revealed.clone();
    let mut controller = NavigationController::new(three_section_registry(), locator);

    controller.navigate_to("contact");

    assert_eq!(controller.active(), "contact");
    assert!(revealed.borrow().is_empty());
}

#[test]
fn navigate_accepts_unknown_ids() {
    let mut controller =
        NavigationController::new(three_section_registry(), RecordingLocator::default());

    controller.navigate_to("missing");

    assert_eq!(controller.active(), "missing");
    assert!(controller.active_descriptor().is_none());
    assert_eq!(controller.registry(), &three_section_registry());
}

#[test]
fn repeated_navigation_is_idempotent_but_scrolls_again() {
    let locator = RecordingLocator::with_mounted(&["about"]);
    let revealed = locator.revealed.clone();
    let mut controller = NavigationController::new(three_section_registry(), locator);

    controller.navigate_to("about");
    controller.navigate_to("about");

    assert_eq!(controller.active(), "about");
    assert_eq!(revealed.borrow().len(), 2);
}

#[test]
fn last_navigation_wins() {
    let mut controller = NavigationController::new(
        SectionRegistry::portfolio(),
        RecordingLocator::with_mounted(&["home", "work", "contact"]),
    );
    let sequence = ["work", "nowhere", "safety", "contact", "framework", "home"];

    for (index, id) in sequence.iter().enumerate() {
        controller.navigate_to(*id);
        assert_eq!(controller.active(), sequence[index]);
    }
    assert_eq!(controller.active(), "home");
}

#[test]
fn controller_can_borrow_locator() {
    let mut locator = RecordingLocator::with_mounted(&["about"]);
    {
        let mut controller = NavigationController::new(three_section_registry(), &mut locator);
        controller.navigate_to("about");
        controller.locator_mut().mounted.insert("contact".into());
    }
    assert_eq!(locator.revealed.borrow().len(), 1);
    assert!(locator.mounted.contains("contact"));
}
