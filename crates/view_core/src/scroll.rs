//! Same-page anchor handling and the smooth-scroll animation.

use std::time::{Duration, Instant};

use crate::SCROLL_OFFSET;

/// How long the eased travel takes, whatever the distance.
const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(400);

/// Extracts the section id from a same-page anchor href. The bare `#` and
/// non-anchor hrefs yield `None` and are left to their default behavior.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(target) => Some(target),
    }
}

#[derive(Debug, Clone, Copy)]
struct ScrollAnim {
    from: f32,
    to: f32,
    started: Instant,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollModel {
    offset: f32,
    anim: Option<ScrollAnim>,
}

impl ScrollModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Begins an eased scroll to `section_top` minus the fixed header
    /// offset, clamped at the top of the page.
    pub fn scroll_to(&mut self, section_top: f32, now: Instant) {
        let to = (section_top - SCROLL_OFFSET).max(0.0);
        self.anim = Some(ScrollAnim {
            from: self.offset,
            to,
            started: now,
        });
    }

    /// A manual scroll takes over and cancels any animation in flight.
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
        self.anim = None;
    }

    /// Advances the animation and returns the offset to render this frame.
    pub fn tick(&mut self, now: Instant) -> f32 {
        if let Some(anim) = self.anim {
            let elapsed = now.saturating_duration_since(anim.started);
            if elapsed >= SMOOTH_SCROLL_DURATION {
                self.offset = anim.to;
                self.anim = None;
            } else {
                let p = elapsed.as_secs_f32() / SMOOTH_SCROLL_DURATION.as_secs_f32();
                self.offset = anim.from + (anim.to - anim.from) * smoothstep(p);
            }
        }
        self.offset
    }

    pub fn animating(&self) -> bool {
        self.anim.is_some()
    }
}

fn smoothstep(p: f32) -> f32 {
    let p = p.clamp(0.0, 1.0);
    p * p * (3.0 - 2.0 * p)
}
