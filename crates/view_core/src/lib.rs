//! Headless page-behavior layer for the portfolio app.
//!
//! Everything interactive (the collapsible menu, gallery filtering, form
//! validation, toasts, smooth scrolling, the initial reveal) lives here as
//! plain state machines parameterized on [`std::time::Instant`], with no
//! toolkit types anywhere. The GUI shell feeds events in and renders what
//! the models report; tests drive the clock directly.

use std::time::{Duration, Instant};

use shared::domain::{FieldSpec, FilterToken, ProjectSummary};

pub mod filter;
pub mod form;
pub mod menu;
pub mod notify;
pub mod reveal;
pub mod scroll;

pub use filter::{CardPhase, CardVisual, GalleryModel, ProjectCard};
pub use form::{FieldValidation, FormModel, SubmitPhase};
pub use menu::{MenuEffect, MenuEvent, MenuModel, MenuState};
pub use notify::{Notice, NoticeKind, NotificationCenter};
pub use reveal::RevealSchedule;
pub use scroll::{anchor_target, ScrollModel};

/// Hold between laying a card out and arming its enter transition.
pub const FILTER_STAGE_DELAY: Duration = Duration::from_millis(50);
/// Duration of every fade/slide transition.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);
/// Off-screen hold before a toast slides in.
pub const TOAST_SLIDE_IN_DELAY: Duration = Duration::from_millis(100);
/// How long a toast stays before it starts sliding out.
pub const TOAST_VISIBLE_FOR: Duration = Duration::from_millis(5000);
/// Gap between consecutive reveal slots on initial load.
pub const REVEAL_STEP: Duration = Duration::from_millis(100);
/// Fixed header allowance subtracted from smooth-scroll targets.
pub const SCROLL_OFFSET: f32 = 80.0;
/// Window width at and above which an open menu auto-closes.
pub const MENU_BREAKPOINT: f32 = 768.0;

/// The behavior context for one page view.
///
/// Construction never fails: each anchor is optional, and a missing one
/// (no nav entries, no projects, no form fields) disables exactly the
/// behaviors that depend on it.
pub struct PageBehavior {
    pub menu: Option<MenuModel>,
    pub gallery: Option<GalleryModel>,
    pub form: Option<FormModel>,
    pub notices: NotificationCenter,
    pub scroll: ScrollModel,
    pub reveal: RevealSchedule,
}

impl PageBehavior {
    pub fn new(
        has_menu: bool,
        projects: Vec<ProjectSummary>,
        fields: Vec<FieldSpec>,
        now: Instant,
    ) -> Self {
        Self {
            menu: has_menu.then(MenuModel::new),
            gallery: (!projects.is_empty()).then(|| GalleryModel::new(projects)),
            form: (!fields.is_empty()).then(|| FormModel::new(fields)),
            notices: NotificationCenter::new(),
            scroll: ScrollModel::new(),
            reveal: RevealSchedule::new(now),
        }
    }

    /// Flips the menu; a no-op without a menu anchor.
    pub fn toggle_menu(&mut self) -> Option<MenuEffect> {
        self.menu_event(MenuEvent::Toggle)
    }

    pub fn menu_event(&mut self, event: MenuEvent) -> Option<MenuEffect> {
        self.menu.as_mut().and_then(|menu| menu.apply(event))
    }

    /// Applies a gallery filter; a no-op without project items.
    pub fn apply_filter(&mut self, token: FilterToken, now: Instant) {
        if let Some(gallery) = self.gallery.as_mut() {
            gallery.apply_filter(token, now);
        }
    }

    /// Shows a corner toast, replacing the current one.
    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>, now: Instant) -> u64 {
        self.notices.push(kind, message, now)
    }

    /// Per-frame maintenance: advances transitions and drops expired
    /// notices/banners.
    pub fn tick(&mut self, now: Instant) {
        if let Some(gallery) = self.gallery.as_mut() {
            gallery.tick(now);
        }
        if let Some(form) = self.form.as_mut() {
            form.sweep(now);
        }
        self.notices.sweep(now);
        self.scroll.tick(now);
    }

    /// Whether anything is mid-transition, for repaint scheduling.
    pub fn animating(&self, now: Instant) -> bool {
        self.gallery.as_ref().is_some_and(GalleryModel::animating)
            || self.notices.animating(now)
            || self.scroll.animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_anchors_disable_only_their_behaviors() {
        let now = Instant::now();
        let mut page = PageBehavior::new(false, Vec::new(), Vec::new(), now);

        assert!(page.menu.is_none());
        assert!(page.gallery.is_none());
        assert!(page.form.is_none());

        // Every operation degrades to a no-op rather than failing.
        assert_eq!(page.toggle_menu(), None);
        page.apply_filter(FilterToken::All, now);
        page.tick(now);

        // Notifications are independent of the optional anchors.
        page.notify(NoticeKind::Info, "still works", now);
        assert!(page.notices.current().is_some());
    }
}
