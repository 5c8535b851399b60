//! Queueing of UI events raised mid-frame; they are applied at the start of the next frame.

use crossbeam_channel::{Sender, TrySendError};

use crate::controller::events::{NoticeCategory, UiEvent, UiNotice};

pub fn dispatch_ui_event(ui_tx: &Sender<UiEvent>, event: UiEvent, notice: &mut Option<UiNotice>) {
    let event_name = match &event {
        UiEvent::Navigate(_) => "navigate",
        UiEvent::External(_) => "external",
        UiEvent::DismissNotice => "dismiss_notice",
    };

    match ui_tx.try_send(event) {
        Ok(()) => tracing::debug!(event = event_name, "queued ui event"),
        Err(TrySendError::Full(_)) => {
            *notice = Some(UiNotice::new(
                NoticeCategory::Queue,
                "UI event queue is full; please retry",
            ));
        }
        Err(TrySendError::Disconnected(_)) => {
            *notice = Some(UiNotice::new(
                NoticeCategory::Queue,
                "UI event queue disconnected; restart the app",
            ));
        }
    }
}
