//! Page content: navigation, sections, projects, and contact-form fields.
//!
//! Content is data, not layout. Every piece is optional; whatever is absent
//! simply disables the behavior that depends on it (no nav entries means no
//! menu, no projects means no gallery, no fields means no form). The section
//! with id `work` hosts the project gallery and the one with id `contact`
//! hosts the form; without those sections both render after the page body.

use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use shared::domain::{FieldSpec, NavEntry, ProjectSummary, SectionSpec};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageContent {
    pub title: String,
    pub tagline: String,
    pub nav: Vec<NavEntry>,
    pub sections: Vec<SectionSpec>,
    pub projects: Vec<ProjectSummary>,
    pub contact_fields: Vec<FieldSpec>,
}

impl Default for PageContent {
    fn default() -> Self {
        let nav = [
            ("Home", "#home"),
            ("About", "#about"),
            ("Work", "#work"),
            ("Contact", "#contact"),
        ]
        .into_iter()
        .map(|(label, href)| NavEntry {
            label: label.to_string(),
            href: href.to_string(),
        })
        .collect();

        let sections = [
            (
                "home",
                "Noa Reyes",
                "Product designer and front-end developer. I build small, careful interfaces.",
            ),
            (
                "about",
                "About",
                "A decade of shipping design systems, marketing sites, and the occasional\ngame jam entry. Currently taking on freelance work.",
            ),
            (
                "work",
                "Selected work",
                "Filter by discipline, or browse everything.",
            ),
            (
                "contact",
                "Get in touch",
                "Tell me about your project and I will get back to you within a few days.",
            ),
        ]
        .into_iter()
        .map(|(id, heading, body)| SectionSpec {
            id: id.to_string(),
            heading: heading.to_string(),
            body: body.to_string(),
        })
        .collect();

        let projects = [
            ("Tidepool", "Booking flow redesign for a coastal tour operator.", Some("web")),
            ("Lanternfish", "Brand and packaging for a deep-sea coffee roaster.", Some("design")),
            ("Quarry", "Headless storefront with a custom CMS bridge.", Some("web")),
            ("Waymark", "Offline-first hiking companion app.", Some("mobile")),
            ("Inkwell", "Identity system for an independent press.", Some("design")),
            ("Fieldnotes", "Personal experiment in long-form note publishing.", None),
        ]
        .into_iter()
        .map(|(title, blurb, category)| ProjectSummary {
            title: title.to_string(),
            blurb: blurb.to_string(),
            category: category.map(str::to_string),
        })
        .collect();

        let contact_fields = [
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
        .collect();

        Self {
            title: "Folio Desk".to_string(),
            tagline: "Portfolio of Noa Reyes".to_string(),
            nav,
            sections,
            projects,
            contact_fields,
        }
    }
}

impl PageContent {
    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }
}

/// Loads content from a TOML file when a path is configured, otherwise the
/// built-in default. A configured-but-broken file is an error; silence is
/// only for absence.
pub fn load_content(path: Option<&Path>) -> anyhow::Result<PageContent> {
    let Some(path) = path else {
        return Ok(PageContent::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read content file '{}'", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse content file '{}'", path.display()))
}
