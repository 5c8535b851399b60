//! Controller layer: UI events, section anchors, and event queueing.

pub mod anchors;
pub mod events;
pub mod orchestration;
