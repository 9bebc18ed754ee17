//! Corner toast notifications.
//!
//! One global slot: pushing a new notice evicts the current one. The
//! lifecycle is a fixed timeline from creation: a short off-screen hold so
//! the slide transition registers, then slide in, dwell, slide out, and
//! removal.

use std::time::Instant;

use crate::{TOAST_SLIDE_IN_DELAY, TOAST_VISIBLE_FOR, TRANSITION_DURATION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
    created: Instant,
}

impl Notice {
    /// Slide progress at `now`: 0.0 is fully off-screen, 1.0 fully shown.
    /// `None` means the notice's lifetime is over and it must be removed.
    pub fn slide(&self, now: Instant) -> Option<f32> {
        let elapsed = now.saturating_duration_since(self.created);
        let slide_in_end = TOAST_SLIDE_IN_DELAY + TRANSITION_DURATION;
        if elapsed < TOAST_SLIDE_IN_DELAY {
            Some(0.0)
        } else if elapsed < slide_in_end {
            let p = (elapsed - TOAST_SLIDE_IN_DELAY).as_secs_f32()
                / TRANSITION_DURATION.as_secs_f32();
            Some(p)
        } else if elapsed < TOAST_VISIBLE_FOR {
            Some(1.0)
        } else if elapsed < TOAST_VISIBLE_FOR + TRANSITION_DURATION {
            let p = (elapsed - TOAST_VISIBLE_FOR).as_secs_f32()
                / TRANSITION_DURATION.as_secs_f32();
            Some(1.0 - p)
        } else {
            None
        }
    }
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    slot: Option<Notice>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a notice, replacing any current occupant.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        tracing::debug!(id, ?kind, %message, "toast shown");
        self.slot = Some(Notice {
            id,
            kind,
            message,
            created: now,
        });
        id
    }

    pub fn current(&self) -> Option<&Notice> {
        self.slot.as_ref()
    }

    /// Removes the notice once its timeline has fully elapsed.
    pub fn sweep(&mut self, now: Instant) {
        if self.slot.as_ref().is_some_and(|notice| notice.slide(now).is_none()) {
            self.slot = None;
        }
    }

    pub fn animating(&self, now: Instant) -> bool {
        self.slot
            .as_ref()
            .and_then(|notice| notice.slide(now))
            .is_some_and(|p| p < 1.0)
    }
}
