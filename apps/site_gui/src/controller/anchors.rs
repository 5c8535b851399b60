//! Section anchors of the rendered page, as seen by the navigation controller.
//!
//! Rects are stored relative to the top-left of the scroll content, so a
//! lookup made before the next frame stays valid whatever the scroll
//! offset is by then.

use std::collections::HashMap;

use eframe::egui;
use shared::domain::SectionId;
use site_core::{AnchorLocator, ScrollAlign, ScrollBehavior, ScrollOptions};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingScroll {
    pub rect: egui::Rect,
    pub options: ScrollOptions,
}

impl PendingScroll {
    /// Rect in screen space for the content origin of the current frame.
    pub fn screen_rect(&self, content_origin: egui::Pos2) -> egui::Rect {
        self.rect.translate(content_origin.to_vec2())
    }

    pub fn align(&self) -> egui::Align {
        match self.options.align {
            ScrollAlign::Start => egui::Align::Min,
            ScrollAlign::Center => egui::Align::Center,
            ScrollAlign::End => egui::Align::Max,
        }
    }

    pub fn animation(&self) -> egui::style::ScrollAnimation {
        match self.options.behavior {
            ScrollBehavior::Smooth => egui::style::ScrollAnimation::default(),
            ScrollBehavior::Instant => egui::style::ScrollAnimation::none(),
        }
    }
}

#[derive(Debug, Default)]
pub struct EguiAnchors {
    rects: HashMap<SectionId, egui::Rect>,
    pending: Option<PendingScroll>,
}

impl EguiAnchors {
    pub fn record(&mut self, id: &SectionId, screen_rect: egui::Rect, content_origin: egui::Pos2) {
        let relative = screen_rect.translate(-content_origin.to_vec2());
        match self.rects.get_mut(id) {
            Some(rect) => *rect = relative,
            None => {
                self.rects.insert(id.clone(), relative);
            }
        }
    }

    pub fn forget(&mut self, id: &SectionId) {
        self.rects.remove(id);
    }

    pub fn is_mounted(&self, id: &SectionId) -> bool {
        self.rects.contains_key(id)
    }

    pub fn take_pending(&mut self) -> Option<PendingScroll> {
        self.pending.take()
    }
}

impl AnchorLocator for EguiAnchors {
    type Target = egui::Rect;

    fn locate(&self, id: &SectionId) -> Option<egui::Rect> {
        self.rects.get(id).copied()
    }

    fn reveal(&mut self, target: egui::Rect, options: ScrollOptions) {
        // Replaces a scroll that has not been applied yet.
        self.pending = Some(PendingScroll {
            rect: target,
            options,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_core::{NavigationController, SectionRegistry};

    fn rect(y: f32, h: f32) -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, y), egui::vec2(800.0, h))
    }

    #[test]
    fn records_rects_relative_to_content_origin() {
        let mut anchors = EguiAnchors::default();
        let id = SectionId::from("about");

        anchors.record(&id, rect(900.0, 400.0), egui::pos2(0.0, 100.0));

        assert_eq!(anchors.locate(&id), Some(rect(800.0, 400.0)));
    }

    #[test]
    fn pending_scroll_maps_back_to_current_frame() {
        let pending = PendingScroll {
            rect: rect(800.0, 400.0),
            options: ScrollOptions::SECTION_START,
        };

        assert_eq!(
            pending.screen_rect(egui::pos2(0.0, -300.0)),
            rect(500.0, 400.0)
        );
        assert_eq!(pending.align(), egui::Align::Min);
    }

    #[test]
    fn later_navigation_replaces_pending_scroll() {
        let mut anchors = EguiAnchors::default();
        anchors.record(&SectionId::from("home"), rect(0.0, 600.0), egui::Pos2::ZERO);
        anchors.record(&SectionId::from("work"), rect(1400.0, 700.0), egui::Pos2::ZERO);

        let mut nav = NavigationController::new(SectionRegistry::portfolio(), anchors);
        nav.navigate_to("home");
        nav.navigate_to("work");

        let pending = nav.locator_mut().take_pending().expect("pending scroll");
        assert_eq!(pending.rect, rect(1400.0, 700.0));
        assert!(nav.locator_mut().take_pending().is_none());
    }

    #[test]
    fn unmounted_section_leaves_no_pending_scroll() {
        let mut nav = NavigationController::new(SectionRegistry::portfolio(), EguiAnchors::default());

        nav.navigate_to("contact");

        assert_eq!(nav.active(), "contact");
        assert!(nav.locator_mut().take_pending().is_none());
    }

    #[test]
    fn forgotten_anchor_is_no_longer_located() {
        let mut anchors = EguiAnchors::default();
        let id = SectionId::from("safety");
        anchors.record(&id, rect(10.0, 10.0), egui::Pos2::ZERO);
        assert!(anchors.is_mounted(&id));

        anchors.forget(&id);

        assert!(!anchors.is_mounted(&id));
    }
}
