//! Applies worker events to the page model.
//!
//! Presentation of a delivery outcome depends on which strategy is driving
//! the form: the simulated backend surfaces a corner toast and the real
//! adapter surfaces the inline banner above the form. Both restore the
//! submit control; only success clears the fields.

use std::time::Instant;

use mailer::{FAILURE_MESSAGE, SUCCESS_MESSAGE};
use view_core::{NoticeKind, PageBehavior};

use crate::config::DeliveryMode;
use crate::controller::events::{describe_failure, UiEvent};

/// Follow-up work the UI shell performs after a reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Bring the freshly posted form banner into centered view.
    ScrollBannerIntoView,
}

pub fn apply_ui_event(
    page: &mut PageBehavior,
    status: &mut String,
    mode: DeliveryMode,
    event: UiEvent,
    now: Instant,
) -> Option<UiAction> {
    match event {
        UiEvent::Info(message) => {
            *status = message;
            None
        }
        UiEvent::WorkerFailed(message) => {
            *status = message;
            None
        }
        UiEvent::DeliverySucceeded(receipt) => {
            tracing::info!(status = receipt.status, text = %receipt.text, "delivery succeeded");
            let local = receipt.completed_at.with_timezone(&chrono::Local);
            *status = format!(
                "Delivery confirmed at {} ({} {})",
                local.format("%H:%M:%S"),
                receipt.status,
                receipt.text
            );
            if let Some(form) = page.form.as_mut() {
                form.complete();
                form.reset();
            }
            match mode {
                DeliveryMode::Simulated => {
                    page.notify(NoticeKind::Success, SUCCESS_MESSAGE, now);
                    None
                }
                DeliveryMode::EmailJs => {
                    if let Some(form) = page.form.as_mut() {
                        form.post_banner(NoticeKind::Success, SUCCESS_MESSAGE, now);
                        Some(UiAction::ScrollBannerIntoView)
                    } else {
                        None
                    }
                }
            }
        }
        UiEvent::DeliveryFailed(failure) => {
            *status = describe_failure(&failure);
            if let Some(form) = page.form.as_mut() {
                form.complete();
            }
            match mode {
                DeliveryMode::Simulated => {
                    page.notify(NoticeKind::Error, FAILURE_MESSAGE, now);
                    None
                }
                DeliveryMode::EmailJs => {
                    if let Some(form) = page.form.as_mut() {
                        form.post_banner(NoticeKind::Error, FAILURE_MESSAGE, now);
                        Some(UiAction::ScrollBannerIntoView)
                    } else {
                        None
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use shared::domain::FieldSpec;
    use shared::error::{DeliveryFailure, DeliveryFailureKind, DeliveryReceipt};

    use super::*;

    fn field(name: &str) -> FieldSpec {
        FieldSpec {
            name: name.to_string(),
            label: name.to_string(),
            required: true,
            multiline: false,
        }
    }

    fn pending_page(now: Instant) -> PageBehavior {
        let mut page = PageBehavior::new(
            false,
            Vec::new(),
            vec![field("firstName"), field("lastName"), field("email"), field("message")],
            now,
        );
        {
            let form = page.form.as_mut().expect("form");
            for (name, value) in [
                ("firstName", "Noa"),
                ("lastName", "Reyes"),
                ("email", "noa@works.dev"),
                ("message", "Hi"),
            ] {
                if let Some(f) = form.fields_mut().iter_mut().find(|f| f.spec.name == name) {
                    f.value = value.to_string();
                }
            }
            form.begin_submit(now).expect("pending");
        }
        page
    }

    fn receipt() -> DeliveryReceipt {
        DeliveryReceipt {
            status: 200,
            text: "OK".to_string(),
            completed_at: Utc::now(),
        }
    }

    #[test]
    fn simulated_success_clears_form_and_raises_toast() {
        let now = Instant::now();
        let mut page = pending_page(now);
        let mut status = String::new();

        let action = apply_ui_event(
            &mut page,
            &mut status,
            DeliveryMode::Simulated,
            UiEvent::DeliverySucceeded(receipt()),
            now,
        );

        assert_eq!(action, None);
        let form = page.form.as_ref().expect("form");
        assert!(!form.is_pending());
        assert!(form.fields().iter().all(|f| f.value.is_empty()));
        let toast = page.notices.current().expect("toast");
        assert_eq!(toast.kind, NoticeKind::Success);
        assert_eq!(toast.message, SUCCESS_MESSAGE);
        assert!(status.contains("200"));
    }

    #[test]
    fn adapter_success_resets_form_and_posts_inline_banner() {
        let now = Instant::now();
        let mut page = pending_page(now);
        let mut status = String::new();

        let action = apply_ui_event(
            &mut page,
            &mut status,
            DeliveryMode::EmailJs,
            UiEvent::DeliverySucceeded(receipt()),
            now,
        );

        assert_eq!(action, Some(UiAction::ScrollBannerIntoView));
        let form = page.form.as_ref().expect("form");
        assert!(form.fields().iter().all(|f| f.value.is_empty()));
        let banner = form.banner().expect("banner");
        assert_eq!(banner.kind, NoticeKind::Success);
        assert_eq!(banner.message, SUCCESS_MESSAGE);
        assert!(page.notices.current().is_none(), "no toast in adapter mode");
    }

    #[test]
    fn adapter_failure_keeps_fields_and_posts_persistent_error_banner() {
        let now = Instant::now();
        let mut page = pending_page(now);
        let mut status = String::new();

        let action = apply_ui_event(
            &mut page,
            &mut status,
            DeliveryMode::EmailJs,
            UiEvent::DeliveryFailed(DeliveryFailure::new(
                DeliveryFailureKind::Rejected,
                "quota exceeded",
            )),
            now,
        );

        assert_eq!(action, Some(UiAction::ScrollBannerIntoView));
        let form = page.form.as_ref().expect("form");
        assert!(!form.is_pending(), "submit control is restored");
        assert_eq!(
            form.field("email").expect("field").value,
            "noa@works.dev",
            "failure must not reset the form"
        );
        let banner = form.banner().expect("banner");
        assert_eq!(banner.kind, NoticeKind::Error);
        assert_eq!(banner.message, FAILURE_MESSAGE);
        assert!(status.contains("quota exceeded"));
    }

    #[test]
    fn info_events_only_touch_the_status_line() {
        let now = Instant::now();
        let mut page = pending_page(now);
        let mut status = String::new();

        apply_ui_event(
            &mut page,
            &mut status,
            DeliveryMode::Simulated,
            UiEvent::Info("Delivery worker ready".to_string()),
            now,
        );

        assert_eq!(status, "Delivery worker ready");
        assert!(page.form.as_ref().expect("form").is_pending());
    }
}
