//! One-shot reveal-on-scroll animation state for content cards.

use std::collections::HashMap;
use std::time::Duration;

/// Element roles the reveal animation applies to.
pub const CARD_ROLES: &[&str] = &["card", "benefit-card"];

/// Transition duration between the two card styles.
pub const REVEAL_TRANSITION: Duration = Duration::from_millis(600);

/// Observer tuning: the fraction of a card that must intersect the
/// viewport, and a bottom margin in layout units (negative pulls the
/// trigger line up, so cards reveal before reaching the very edge).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    pub threshold: f32,
    pub bottom_margin: i32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: -100,
        }
    }
}

/// Presentation of a card in one of the two reveal states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    /// Vertical offset in layout units; hidden cards sit below their
    /// resting slot.
    pub offset_y: i32,
}

pub const HIDDEN_STYLE: RevealStyle = RevealStyle {
    opacity: 0.0,
    offset_y: 20,
};

pub const REVEALED_STYLE: RevealStyle = RevealStyle {
    opacity: 1.0,
    offset_y: 0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

impl RevealState {
    pub fn style(self) -> RevealStyle {
        match self {
            RevealState::Hidden => HIDDEN_STYLE,
            RevealState::Revealed => REVEALED_STYLE,
        }
    }
}

/// Shared observer for every card on the page.
///
/// Reveals are one-shot: once a card has been revealed, leaving the
/// viewport never hides it again.
#[derive(Debug)]
pub struct RevealObserver {
    config: RevealConfig,
    cards: HashMap<String, RevealState>,
}

impl RevealObserver {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            cards: HashMap::new(),
        }
    }

    pub fn config(&self) -> RevealConfig {
        self.config
    }

    /// Register a card, initialized hidden. Observing a card twice keeps
    /// its current state.
    pub fn observe(&mut self, id: impl Into<String>) {
        self.cards.entry(id.into()).or_insert(RevealState::Hidden);
    }

    /// Apply an intersection change. Returns true when this call
    /// revealed the card, the only transition there is. Ids that were
    /// never observed are ignored.
    pub fn on_intersection(&mut self, id: &str, intersecting: bool) -> bool {
        match self.cards.get_mut(id) {
            Some(state) if *state == RevealState::Hidden && intersecting => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn state(&self, id: &str) -> Option<RevealState> {
        self.cards.get(id).copied()
    }

    pub fn observed(&self) -> usize {
        self.cards.len()
    }
}
