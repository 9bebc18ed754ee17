//! End-to-end behavior flows over the public `PageBehavior` surface.

use std::time::{Duration, Instant};

use shared::domain::{FieldSpec, FilterToken, ProjectSummary};
use view_core::{
    CardPhase, MenuEvent, NoticeKind, PageBehavior, FILTER_STAGE_DELAY, TOAST_VISIBLE_FOR,
    TRANSITION_DURATION,
};

fn sample_projects() -> Vec<ProjectSummary> {
    [
        ("Tidepool", Some("web")),
        ("Lanternfish", Some("design")),
        ("Quarry", Some("web")),
        ("Fieldnotes", None),
    ]
    .into_iter()
    .map(|(title, category)| ProjectSummary {
        title: title.to_string(),
        blurb: format!("{title} case study"),
        category: category.map(str::to_string),
    })
    .collect()
}

fn contact_fields() -> Vec<FieldSpec> {
    [
        ("firstName", true, false),
        ("lastName", true, false),
        ("email", true, false),
        ("subject", false, false),
        ("message", true, true),
    ]
    .into_iter()
    .map(|(name, required, multiline)| FieldSpec {
        name: name.to_string(),
        label: name.to_string(),
        required,
        multiline,
    })
    .collect()
}

fn page(now: Instant) -> PageBehavior {
    PageBehavior::new(true, sample_projects(), contact_fields(), now)
}

fn displayed_titles(page: &PageBehavior) -> Vec<String> {
    page.gallery
        .as_ref()
        .expect("gallery")
        .displayed()
        .map(|card| card.project.title.clone())
        .collect()
}

#[test]
fn filtering_settles_on_exactly_the_matching_projects() {
    let t0 = Instant::now();
    let mut page = page(t0);

    page.apply_filter(FilterToken::parse("web"), t0);
    let settled = t0 + FILTER_STAGE_DELAY + 2 * TRANSITION_DURATION;
    page.tick(t0 + TRANSITION_DURATION);
    page.tick(settled);

    assert_eq!(displayed_titles(&page), vec!["Tidepool", "Quarry"]);
    let gallery = page.gallery.as_ref().expect("gallery");
    assert!(gallery
        .displayed()
        .all(|card| matches!(card.phase(), CardPhase::Visible)));
    assert_eq!(gallery.active(), &FilterToken::parse("web"));

    // Back to the wildcard: every project returns, including the
    // uncategorized one.
    page.apply_filter(FilterToken::All, settled);
    page.tick(settled + TRANSITION_DURATION);
    page.tick(settled + 2 * TRANSITION_DURATION);
    assert_eq!(
        displayed_titles(&page),
        vec!["Tidepool", "Lanternfish", "Quarry", "Fieldnotes"]
    );
}

#[test]
fn menu_round_trip_and_close_only_events() {
    let t0 = Instant::now();
    let mut page = page(t0);
    assert!(!page.menu.as_ref().expect("menu").is_open());

    page.toggle_menu();
    assert!(page.menu.as_ref().expect("menu").expanded());

    page.toggle_menu();
    let menu_state = page.menu.as_ref().expect("menu");
    assert!(!menu_state.is_open());
    assert!(!menu_state.expanded());

    // Wide-viewport transition closes but never opens.
    page.menu_event(MenuEvent::ResizeWide);
    assert!(!page.menu.as_ref().expect("menu").is_open());
    page.toggle_menu();
    page.menu_event(MenuEvent::ResizeWide);
    assert!(!page.menu.as_ref().expect("menu").is_open());
}

#[test]
fn submit_is_refused_until_every_required_field_validates() {
    let t0 = Instant::now();
    let mut page = page(t0);
    let form = page.form.as_mut().expect("form");

    for (name, value) in [("firstName", "Noa"), ("lastName", "Reyes"), ("email", "noa@works.dev")] {
        if let Some(field) = form.fields_mut().iter_mut().find(|f| f.spec.name == name) {
            field.value = value.to_string();
        }
    }
    // "message" left empty: the submit must not enter the pending state.
    assert!(form.begin_submit(t0).is_none());
    assert!(!form.is_pending());
    assert!(form.field("message").expect("field").error().is_some());

    // A malformed email also blocks, even with everything else present.
    if let Some(field) = form.fields_mut().iter_mut().find(|f| f.spec.name == "message") {
        field.value = "Commission inquiry".to_string();
    }
    if let Some(field) = form.fields_mut().iter_mut().find(|f| f.spec.name == "email") {
        field.value = "noa@works".to_string();
    }
    assert!(form.begin_submit(t0).is_none());
    assert!(!form.is_pending());
}

#[test]
fn successful_submission_clears_form_and_raises_the_toast() {
    let t0 = Instant::now();
    let mut page = page(t0);
    let form = page.form.as_mut().expect("form");
    for (name, value) in [
        ("firstName", "Noa"),
        ("lastName", "Reyes"),
        ("email", "noa@works.dev"),
        ("message", "Commission inquiry"),
    ] {
        if let Some(field) = form.fields_mut().iter_mut().find(|f| f.spec.name == name) {
            field.value = value.to_string();
        }
    }

    let message = form.begin_submit(t0).expect("accepted");
    assert!(form.is_pending());
    assert_eq!(message.email, "noa@works.dev");

    // The delivery backend reports success after its fixed delay; the UI
    // reacts the same way regardless of which backend produced it.
    let done = t0 + Duration::from_millis(2000);
    let form = page.form.as_mut().expect("form");
    form.complete();
    form.reset();
    page.notify(
        NoticeKind::Success,
        "Thank you for your message! I will get back to you soon.",
        done,
    );

    let form = page.form.as_ref().expect("form");
    assert!(!form.is_pending());
    assert!(form.fields().iter().all(|field| field.value.is_empty()));
    let toast = page.notices.current().expect("toast");
    assert_eq!(toast.kind, NoticeKind::Success);

    // The toast leaves the page within its fixed lifetime.
    page.tick(done + TOAST_VISIBLE_FOR + TRANSITION_DURATION);
    assert!(page.notices.current().is_none());
}
