use serde::{Deserialize, Serialize};

/// Category filter selection for the project gallery.
///
/// `All` is the wildcard: it matches every project, including projects that
/// declare no category at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterToken {
    All,
    Category(String),
}

impl FilterToken {
    /// Parses a filter control's token. The literal `all` (any case) is the
    /// wildcard; anything else is an exact category label.
    pub fn parse(token: &str) -> Self {
        if token.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Category(token.to_string())
        }
    }

    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(label) => category == Some(label.as_str()),
        }
    }
}

impl Default for FilterToken {
    fn default() -> Self {
        Self::All
    }
}

/// One entry in the navigation menu. `href` uses same-page anchor syntax
/// (`#section-id`); anything else renders but does not scroll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub href: String,
}

/// A page section addressable by anchor links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionSpec {
    pub id: String,
    pub heading: String,
    #[serde(default)]
    pub body: String,
}

/// A portfolio project card. Projects without a category still match the
/// wildcard filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub title: String,
    #[serde(default)]
    pub blurb: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Declarative description of a contact-form field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub multiline: bool,
}

/// The message the contact form produces and the delivery adapter sends.
///
/// Field names mirror the delivery template's variables: `firstName`,
/// `lastName`, `email`, `subject`, `message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
