//! Symptom checker screen — state machine and view types.
//!
//! Owns the three pieces of screen state (draft text, selected severity,
//! recorded symptom list) and the operations the UI triggers on them,
//! plus the aggregate view struct serialised to the frontend after every
//! mutation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Symptom;

// ═══════════════════════════════════════════
// Constants — severity scale, duration placeholder
// ═══════════════════════════════════════════

pub const SEVERITY_MIN: u8 = 1;
pub const SEVERITY_MAX: u8 = 10;
pub const DEFAULT_SEVERITY: u8 = 5;

/// Duration entry is not built yet; every recorded symptom gets this value.
/// TODO: replace with a duration picker on the entry form.
pub const DEFAULT_DURATION: &str = "1-2 days";

// ═══════════════════════════════════════════
// View types — serialised to frontend
// ═══════════════════════════════════════════

/// One button on the 1–10 severity scale. Exactly one is active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverityOption {
    pub value: u8,
    pub active: bool,
}

/// A recorded symptom as shown in the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomCard {
    pub id: String,
    pub name: String,
    pub severity: u8,
    pub severity_display: String, // "8/10"
    pub duration: String,
    pub recorded_at: String,
}

impl From<&Symptom> for SymptomCard {
    fn from(symptom: &Symptom) -> Self {
        Self {
            id: symptom.id.to_string(),
            name: symptom.name.clone(),
            severity: symptom.severity,
            severity_display: format!("{}/{}", symptom.severity, SEVERITY_MAX),
            duration: symptom.duration.clone(),
            recorded_at: symptom.recorded_at.to_rfc3339(),
        }
    }
}

/// Screen snapshot — single fetch for all screen content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenView {
    pub draft_text: String,
    pub selected_severity: u8,
    pub severity_scale: Vec<SeverityOption>,
    pub symptoms: Vec<SymptomCard>,
    pub show_analyze: bool,
}

// ═══════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════

#[derive(Debug, thiserror::Error)]
pub enum CheckerError {
    #[error("Severity must be between {SEVERITY_MIN} and {SEVERITY_MAX}, got {0}")]
    SeverityOutOfRange(u8),
}

// ═══════════════════════════════════════════
// Screen state machine
// ═══════════════════════════════════════════

/// Local state of the symptom entry screen.
///
/// The symptom list is append-only: entries cannot be edited or removed
/// once recorded. Nothing here touches disk; the state lives as long as
/// the screen does.
#[derive(Debug)]
pub struct CheckerScreen {
    draft_text: String,
    selected_severity: u8,
    symptoms: Vec<Symptom>,
}

impl CheckerScreen {
    pub fn new() -> Self {
        Self {
            draft_text: String::new(),
            selected_severity: DEFAULT_SEVERITY,
            symptoms: Vec::new(),
        }
    }

    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    pub fn selected_severity(&self) -> u8 {
        self.selected_severity
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    /// Stores the in-progress input verbatim. Trimming happens only on add,
    /// never while the user is typing.
    pub fn update_draft_text(&mut self, text: String) {
        self.draft_text = text;
    }

    /// Selects a severity on the 1–10 scale.
    ///
    /// The shipped UI only offers the ten valid values; the range check
    /// guards the IPC boundary, which accepts arbitrary payloads.
    pub fn select_severity(&mut self, severity: u8) -> Result<(), CheckerError> {
        if !(SEVERITY_MIN..=SEVERITY_MAX).contains(&severity) {
            return Err(CheckerError::SeverityOutOfRange(severity));
        }
        self.selected_severity = severity;
        Ok(())
    }

    /// Records the current draft as a symptom.
    ///
    /// Empty or whitespace-only drafts are a silent no-op. On success the
    /// draft is cleared; the selected severity is kept, so the next entry
    /// defaults to the last-used value. Returns the new entry, if any.
    pub fn add_symptom(&mut self) -> Option<&Symptom> {
        let name = self.draft_text.trim();
        if name.is_empty() {
            return None;
        }

        let symptom = Symptom {
            id: Uuid::new_v4(),
            name: name.to_string(),
            severity: self.selected_severity,
            duration: DEFAULT_DURATION.to_string(),
            recorded_at: chrono::Utc::now(),
        };
        self.symptoms.push(symptom);
        self.draft_text.clear();
        self.symptoms.last()
    }

    /// Whether the Analyze affordance is shown.
    pub fn can_analyze(&self) -> bool {
        !self.symptoms.is_empty()
    }

    /// Analysis is not built yet; pressing the button does nothing.
    pub fn analyze(&self) {
        tracing::debug!(
            symptom_count = self.symptoms.len(),
            "Analyze pressed — analysis not implemented"
        );
    }

    /// Restores the screen to its initial state. Called when the screen
    /// unmounts — recorded symptoms do not outlive it.
    pub fn reset(&mut self) {
        self.draft_text.clear();
        self.selected_severity = DEFAULT_SEVERITY;
        self.symptoms.clear();
    }

    /// Builds the snapshot the frontend renders from.
    pub fn view(&self) -> ScreenView {
        ScreenView {
            draft_text: self.draft_text.clone(),
            selected_severity: self.selected_severity,
            severity_scale: (SEVERITY_MIN..=SEVERITY_MAX)
                .map(|value| SeverityOption {
                    value,
                    active: value == self.selected_severity,
                })
                .collect(),
            symptoms: self.symptoms.iter().map(SymptomCard::from).collect(),
            show_analyze: self.can_analyze(),
        }
    }
}

impl Default for CheckerScreen {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
