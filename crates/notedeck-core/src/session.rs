//! Query session state machine.
//!
//! A [`SearchSession`] owns the query text, the current result list, the
//! keyboard selection and the panel's active flag. Every transition is
//! synchronous; the only externally visible effect besides state is a
//! [`NavigationTarget`] handed back to the caller.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::index::NoteIndex;
use crate::matcher;
use crate::model::NoteRecord;
use crate::navigation::NavigationTarget;

/// Coarse state derived from the session fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionState {
    /// Blank query, panel hidden
    Idle,
    /// Panel shown, nothing selected
    Typing,
    /// Panel shown with a keyboard selection
    Navigating,
    /// Panel hidden, previous query and results retained
    Dismissed,
}

/// Keys the session reacts to. Anything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    #[serde(other)]
    Other,
}

/// What the host should do after a key press
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Suppress the host's default handling of the key
    pub prevent_default: bool,
    /// Release focus held by the search input
    pub release_focus: bool,
    /// Scroll this row into view (nearest edge)
    pub reveal: Option<usize>,
    pub navigate: Option<NavigationTarget>,
}

pub struct SearchSession {
    index: Arc<NoteIndex>,
    query: String,
    /// Positions into `index`
    results: Vec<usize>,
    selected: Option<usize>,
    active: bool,
}

impl SearchSession {
    pub fn new(index: Arc<NoteIndex>) -> Self {
        Self {
            index,
            query: String::new(),
            results: Vec::new(),
            selected: None,
            active: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn result(&self, ordinal: usize) -> Option<&NoteRecord> {
        self.results.get(ordinal).and_then(|&pos| self.index.get(pos))
    }

    pub fn results(&self) -> impl Iterator<Item = &NoteRecord> + '_ {
        self.results.iter().filter_map(|&pos| self.index.get(pos))
    }

    pub fn state(&self) -> SessionState {
        match (self.active, self.selected) {
            (true, Some(_)) => SessionState::Navigating,
            (true, None) => SessionState::Typing,
            (false, _) if has_query(&self.query) => SessionState::Dismissed,
            (false, _) => SessionState::Idle,
        }
    }

    /// Replace the query and recompute results from scratch.
    pub fn input(&mut self, text: &str) {
        self.query = text.to_string();
        self.selected = None;

        if has_query(text) {
            self.results = matcher::match_positions(self.index.notes(), text);
            // Shown even when empty so the panel can say nothing matched
            self.active = true;
        } else {
            self.results.clear();
            self.active = false;
        }

        log::debug!(
            "Query {:?} -> {} results ({:?})",
            self.query,
            self.results.len(),
            self.state()
        );
    }

    /// Reopen the panel for a retained query without recomputing.
    pub fn focus(&mut self) {
        if has_query(&self.query) {
            self.active = true;
        }
    }

    /// Move the selection down, stopping at the last row.
    /// Returns the new selection when it is a row.
    pub fn arrow_down(&mut self) -> Option<usize> {
        if !self.active || self.results.is_empty() {
            return None;
        }
        let last = self.results.len() - 1;
        let next = match self.selected {
            None => 0,
            Some(i) => (i + 1).min(last),
        };
        self.selected = Some(next);
        self.selected
    }

    /// Move the selection up; moving above the first row clears it.
    pub fn arrow_up(&mut self) -> Option<usize> {
        if !self.active {
            return None;
        }
        self.selected = match self.selected {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
        self.selected
    }

    /// Resolve the keyboard selection, if any.
    pub fn confirm(&self) -> Option<NavigationTarget> {
        if !self.active {
            return None;
        }
        self.selected
            .and_then(|ordinal| self.result(ordinal))
            .map(NavigationTarget::for_note)
    }

    /// Hide the panel. Query and results are kept for a later `focus`.
    pub fn escape(&mut self) {
        self.active = false;
    }

    pub fn click_outside(&mut self) {
        self.active = false;
    }

    /// Resolve a row picked with the pointer, regardless of keyboard selection.
    pub fn select_by_pointer(&self, ordinal: usize) -> Option<NavigationTarget> {
        self.result(ordinal).map(NavigationTarget::for_note)
    }

    /// Apply a key press while honouring the active-panel rule: keys are
    /// only consumed when the panel is shown.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if !self.active {
            return KeyOutcome::default();
        }

        match key {
            Key::ArrowDown => KeyOutcome {
                prevent_default: true,
                reveal: self.arrow_down(),
                ..Default::default()
            },
            Key::ArrowUp => KeyOutcome {
                prevent_default: true,
                reveal: self.arrow_up(),
                ..Default::default()
            },
            Key::Enter => match self.confirm() {
                Some(target) => KeyOutcome {
                    prevent_default: true,
                    navigate: Some(target),
                    ..Default::default()
                },
                None => KeyOutcome::default(),
            },
            Key::Escape => {
                self.escape();
                KeyOutcome {
                    prevent_default: true,
                    release_focus: true,
                    ..Default::default()
                }
            }
            Key::Other => KeyOutcome::default(),
        }
    }
}

fn has_query(text: &str) -> bool {
    !text.trim().is_empty()
}
