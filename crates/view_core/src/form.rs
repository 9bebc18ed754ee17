//! Contact-form state: per-field validation, submit gating, and the inline
//! banner slot used by the delivery strategy.

use std::sync::LazyLock;
use std::time::Instant;

use regex::Regex;
use shared::domain::{ContactMessage, FieldSpec};

use crate::notify::NoticeKind;
use crate::TOAST_VISIBLE_FOR;

/// Anything before the `@`, anything between `@` and the final dot group,
/// anything after, none of it whitespace or a second `@`.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Outcome of validating a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValidation {
    Valid,
    Invalid(String),
}

impl FieldValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

#[derive(Debug, Clone)]
pub struct FieldState {
    pub spec: FieldSpec,
    pub value: String,
    error: Option<String>,
}

impl FieldState {
    fn new(spec: FieldSpec) -> Self {
        Self {
            spec,
            value: String::new(),
            error: None,
        }
    }

    /// The single error indicator for this field, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Submission progress. The success/failure outcome arrives as an event from
/// the delivery backend, so the form itself only tracks idle vs. pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Pending { since: Instant },
}

/// Inline banner rendered directly above the form. Success banners expire on
/// their own; error banners persist until dismissed or replaced.
#[derive(Debug, Clone)]
pub struct FormBanner {
    pub kind: NoticeKind,
    pub message: String,
    posted: Instant,
}

impl FormBanner {
    pub fn expired(&self, now: Instant) -> bool {
        self.kind == NoticeKind::Success
            && now.saturating_duration_since(self.posted) >= TOAST_VISIBLE_FOR
    }
}

#[derive(Debug, Clone)]
pub struct FormModel {
    fields: Vec<FieldState>,
    submit: SubmitPhase,
    banner: Option<FormBanner>,
}

impl FormModel {
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        Self {
            fields: specs.into_iter().map(FieldState::new).collect(),
            submit: SubmitPhase::Idle,
            banner: None,
        }
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [FieldState] {
        &mut self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|field| field.spec.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FieldState> {
        self.fields.iter_mut().find(|field| field.spec.name == name)
    }

    /// Focus-loss validation. The stored value is left as typed; validation
    /// works on the trimmed form.
    pub fn validate_field(&mut self, name: &str) -> FieldValidation {
        let Some(field) = self.field_mut(name) else {
            return FieldValidation::Valid;
        };
        let value = field.value.trim();
        field.error = None;

        let verdict = if field.spec.required && value.is_empty() {
            FieldValidation::Invalid(format!("{} is required", capitalized(&field.spec.name)))
        } else if field.spec.name == "email"
            && !value.is_empty()
            && !EMAIL_PATTERN.is_match(value)
        {
            FieldValidation::Invalid("Please enter a valid email address".to_string())
        } else {
            FieldValidation::Valid
        };

        if let FieldValidation::Invalid(reason) = &verdict {
            field.error = Some(reason.clone());
        }
        verdict
    }

    /// Edit-time rule: clear the field's error indicator without
    /// re-validating. The error only comes back on the next focus loss.
    pub fn clear_error(&mut self, name: &str) {
        if let Some(field) = self.field_mut(name) {
            field.error = None;
        }
    }

    /// Runs field validation over every required field. All of them are
    /// visited so each one carries its own indicator.
    pub fn validate_required(&mut self) -> bool {
        let names: Vec<String> = self
            .fields
            .iter()
            .filter(|field| field.spec.required)
            .map(|field| field.spec.name.clone())
            .collect();
        let mut all_valid = true;
        for name in names {
            if !self.validate_field(&name).is_valid() {
                all_valid = false;
            }
        }
        all_valid
    }

    /// Gate for submission: on success the form enters the pending state and
    /// yields the message to deliver; on failure nothing changes except the
    /// per-field indicators.
    pub fn begin_submit(&mut self, now: Instant) -> Option<ContactMessage> {
        if self.is_pending() || !self.validate_required() {
            return None;
        }
        self.submit = SubmitPhase::Pending { since: now };
        Some(self.message())
    }

    /// Assembles the outgoing message from the current field values.
    pub fn message(&self) -> ContactMessage {
        let value = |name: &str| {
            self.field(name)
                .map(|field| field.value.trim().to_string())
                .unwrap_or_default()
        };
        ContactMessage {
            first_name: value("firstName"),
            last_name: value("lastName"),
            email: value("email"),
            subject: value("subject"),
            message: value("message"),
        }
    }

    pub fn submit_phase(&self) -> SubmitPhase {
        self.submit
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.submit, SubmitPhase::Pending { .. })
    }

    /// Restores the submit control regardless of outcome.
    pub fn complete(&mut self) {
        self.submit = SubmitPhase::Idle;
    }

    /// Clears every value and indicator, leaving the field specs in place.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
        }
    }

    /// Replaces whatever banner is currently shown.
    pub fn post_banner(&mut self, kind: NoticeKind, message: impl Into<String>, now: Instant) {
        self.banner = Some(FormBanner {
            kind,
            message: message.into(),
            posted: now,
        });
    }

    pub fn banner(&self) -> Option<&FormBanner> {
        self.banner.as_ref()
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    /// Drops an expired success banner. Error banners never expire here.
    pub fn sweep(&mut self, now: Instant) {
        if self.banner.as_ref().is_some_and(|banner| banner.expired(now)) {
            self.banner = None;
        }
    }
}

fn capitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn specs() -> Vec<FieldSpec> {
        [
            ("firstName", "First name", true, false),
            ("lastName", "Last name", true, false),
            ("email", "Email", true, false),
            ("subject", "Subject", false, false),
            ("message", "Message", true, true),
        ]
        .into_iter()
        .map(|(name, label, required, multiline)| FieldSpec {
            name: name.to_string(),
            label: label.to_string(),
            required,
            multiline,
        })
        .collect()
    }

    fn filled_form() -> FormModel {
        let mut form = FormModel::new(specs());
        for (name, value) in [
            ("firstName", "Ada"),
            ("lastName", "Quill"),
            ("email", "ada@example.com"),
            ("message", "Hello there"),
        ] {
            form.field_mut(name).expect("field").value = value.to_string();
        }
        form
    }

    #[test]
    fn required_empty_field_reports_capitalized_name() {
        let mut form = FormModel::new(specs());
        let verdict = form.validate_field("firstName");
        assert_eq!(
            verdict,
            FieldValidation::Invalid("FirstName is required".to_string())
        );
        assert_eq!(form.field("firstName").unwrap().error(), Some("FirstName is required"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = FormModel::new(specs());
        form.field_mut("email").unwrap().value = "   ".to_string();
        assert!(!form.validate_field("email").is_valid());
    }

    #[test]
    fn email_pattern_accepts_and_rejects_per_contract() {
        let mut form = FormModel::new(specs());
        for (value, ok) in [("a@b.c", true), ("abc", false), ("a@b", false)] {
            form.field_mut("email").unwrap().value = value.to_string();
            assert_eq!(form.validate_field("email").is_valid(), ok, "case: {value}");
        }
        form.field_mut("email").unwrap().value = "a@b".to_string();
        form.validate_field("email");
        assert_eq!(
            form.field("email").unwrap().error(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn optional_field_accepts_empty_value() {
        let mut form = FormModel::new(specs());
        assert!(form.validate_field("subject").is_valid());
    }

    #[test]
    fn editing_clears_the_error_without_revalidating() {
        let mut form = FormModel::new(specs());
        form.validate_field("firstName");
        assert!(form.field("firstName").unwrap().error().is_some());

        form.clear_error("firstName");
        assert!(form.field("firstName").unwrap().error().is_none());
    }

    #[test]
    fn submit_with_missing_required_field_never_goes_pending() {
        let now = Instant::now();
        let mut form = filled_form();
        form.field_mut("message").unwrap().value.clear();

        assert!(form.begin_submit(now).is_none());
        assert!(!form.is_pending());
        assert!(form.field("message").unwrap().error().is_some());
        assert!(form.field("firstName").unwrap().error().is_none());
    }

    #[test]
    fn valid_submit_yields_trimmed_message_and_goes_pending() {
        let now = Instant::now();
        let mut form = filled_form();
        form.field_mut("subject").unwrap().value = "  Hi  ".to_string();

        let message = form.begin_submit(now).expect("submit accepted");
        assert!(form.is_pending());
        assert_eq!(message.subject, "Hi");
        assert_eq!(message.email, "ada@example.com");

        // A second submit while pending is ignored.
        assert!(form.begin_submit(now).is_none());
    }

    #[test]
    fn success_banner_expires_while_error_banner_persists() {
        let now = Instant::now();
        let mut form = filled_form();

        form.post_banner(NoticeKind::Success, "sent", now);
        form.sweep(now + Duration::from_millis(4999));
        assert!(form.banner().is_some());
        form.sweep(now + Duration::from_millis(5000));
        assert!(form.banner().is_none());

        form.post_banner(NoticeKind::Error, "failed", now);
        form.sweep(now + Duration::from_secs(3600));
        assert!(form.banner().is_some());
        form.dismiss_banner();
        assert!(form.banner().is_none());
    }

    #[test]
    fn new_banner_replaces_the_existing_one() {
        let now = Instant::now();
        let mut form = filled_form();
        form.post_banner(NoticeKind::Error, "first", now);
        form.post_banner(NoticeKind::Success, "second", now);
        assert_eq!(form.banner().unwrap().message, "second");
    }
}
