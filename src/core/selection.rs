//! Alert selection state machine
//!
//! At most one alert is selected at a time. Clicking a row or marker
//! selects it; the next click replaces it. There is no transition back to
//! `Unselected` — the detail view simply stays hidden until the first
//! selection and persists for the rest of the session.

use crate::core::alert::Alert;
use serde::Serialize;

/// Selection state for the detail view
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SelectionState {
    /// No alert has ever been clicked
    #[default]
    Unselected,
    /// An alert is selected; only replaced, never cleared
    Selected(Alert),
}

impl SelectionState {
    /// Handle a row or marker click
    pub fn select(&mut self, alert: Alert) {
        *self = SelectionState::Selected(alert);
    }

    /// The selected alert, if any
    pub fn selected(&self) -> Option<&Alert> {
        match self {
            SelectionState::Unselected => None,
            SelectionState::Selected(alert) => Some(alert),
        }
    }

    /// Whether anything has been selected this session
    pub fn is_selected(&self) -> bool {
        matches!(self, SelectionState::Selected(_))
    }
}
