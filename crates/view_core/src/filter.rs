//! Project gallery filtering with timed enter/exit transitions.
//!
//! Cards move through explicit phases instead of mutating style properties:
//! a matching card is first `Staged` (laid out but fully transparent) for a
//! short hold, then `Entering` for the transition duration, then `Visible`.
//! A card that stops matching goes `Exiting` and is only taken out of layout
//! once the transition has run its course.

use std::time::Instant;

use shared::domain::{FilterToken, ProjectSummary};

use crate::{FILTER_STAGE_DELAY, TRANSITION_DURATION};

/// Vertical travel of the enter/exit slide, in logical pixels.
const SLIDE_DISTANCE: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardPhase {
    Hidden,
    /// Laid out at alpha 0; the transition has not been armed yet.
    Staged { since: Instant },
    Entering { since: Instant },
    Visible,
    Exiting { since: Instant },
}

/// What the renderer needs to draw a card: opacity and vertical offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisual {
    pub alpha: f32,
    pub y_offset: f32,
}

#[derive(Debug, Clone)]
pub struct ProjectCard {
    pub project: ProjectSummary,
    phase: CardPhase,
}

impl ProjectCard {
    fn new(project: ProjectSummary) -> Self {
        Self {
            project,
            phase: CardPhase::Visible,
        }
    }

    pub fn phase(&self) -> CardPhase {
        self.phase
    }

    /// Whether the card currently occupies layout space.
    pub fn is_displayed(&self) -> bool {
        self.phase != CardPhase::Hidden
    }

    /// Rendering parameters, or `None` while the card is out of layout.
    pub fn visual(&self, now: Instant) -> Option<CardVisual> {
        let progress = |since: Instant| {
            let elapsed = now.saturating_duration_since(since).as_secs_f32();
            (elapsed / TRANSITION_DURATION.as_secs_f32()).clamp(0.0, 1.0)
        };
        match self.phase {
            CardPhase::Hidden => None,
            CardPhase::Staged { .. } => Some(CardVisual {
                alpha: 0.0,
                y_offset: SLIDE_DISTANCE,
            }),
            CardPhase::Entering { since } => {
                let p = progress(since);
                Some(CardVisual {
                    alpha: p,
                    y_offset: SLIDE_DISTANCE * (1.0 - p),
                })
            }
            CardPhase::Visible => Some(CardVisual {
                alpha: 1.0,
                y_offset: 0.0,
            }),
            CardPhase::Exiting { since } => {
                let p = progress(since);
                Some(CardVisual {
                    alpha: 1.0 - p,
                    y_offset: -SLIDE_DISTANCE * p,
                })
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct GalleryModel {
    cards: Vec<ProjectCard>,
    active: FilterToken,
}

impl GalleryModel {
    pub fn new(projects: Vec<ProjectSummary>) -> Self {
        Self {
            cards: projects.into_iter().map(ProjectCard::new).collect(),
            active: FilterToken::All,
        }
    }

    /// The selection currently rendered as pressed. Exactly one control is
    /// active at any time.
    pub fn active(&self) -> &FilterToken {
        &self.active
    }

    pub fn cards(&self) -> &[ProjectCard] {
        &self.cards
    }

    /// Distinct category labels in first-seen order, for building the filter
    /// control row.
    pub fn categories(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for card in &self.cards {
            if let Some(category) = card.project.category.as_deref() {
                if !labels.contains(&category) {
                    labels.push(category);
                }
            }
        }
        labels
    }

    /// Applies a filter selection. Matching cards restage their enter
    /// transition even when already visible; non-matching cards begin their
    /// exit and stay in layout until it completes.
    pub fn apply_filter(&mut self, token: FilterToken, now: Instant) {
        tracing::debug!(?token, "gallery filter applied");
        for card in &mut self.cards {
            if token.matches(card.project.category.as_deref()) {
                card.phase = CardPhase::Staged { since: now };
            } else if card.is_displayed() {
                card.phase = CardPhase::Exiting { since: now };
            }
        }
        self.active = token;
    }

    /// Advances phase deadlines. Call once per frame.
    pub fn tick(&mut self, now: Instant) {
        for card in &mut self.cards {
            card.phase = match card.phase {
                CardPhase::Staged { since }
                    if now.saturating_duration_since(since) >= FILTER_STAGE_DELAY =>
                {
                    CardPhase::Entering { since: now }
                }
                CardPhase::Entering { since }
                    if now.saturating_duration_since(since) >= TRANSITION_DURATION =>
                {
                    CardPhase::Visible
                }
                CardPhase::Exiting { since }
                    if now.saturating_duration_since(since) >= TRANSITION_DURATION =>
                {
                    CardPhase::Hidden
                }
                phase => phase,
            };
        }
    }

    pub fn animating(&self) -> bool {
        self.cards.iter().any(|card| {
            matches!(
                card.phase,
                CardPhase::Staged { .. } | CardPhase::Entering { .. } | CardPhase::Exiting { .. }
            )
        })
    }

    pub fn displayed(&self) -> impl Iterator<Item = &ProjectCard> {
        self.cards.iter().filter(|card| card.is_displayed())
    }
}
