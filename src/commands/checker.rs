//! Symptom checker screen — Tauri IPC commands.
//!
//! Six commands:
//! - `get_screen`: snapshot fetch on mount
//! - `update_draft_text`: store the in-progress input verbatim
//! - `select_severity`: pick a value on the 1–10 scale
//! - `add_symptom`: record the trimmed draft (silent no-op when empty)
//! - `analyze_symptoms`: inert stub behind the Analyze button
//! - `reset_screen`: restore defaults when the screen unmounts
//!
//! Every mutating command returns the fresh `ScreenView` so the frontend
//! re-renders from a single snapshot.

use std::sync::Arc;

use tauri::State;

use crate::checker::ScreenView;
use crate::core_state::CoreState;

/// Returns the current screen snapshot.
#[tauri::command]
pub fn get_screen(state: State<'_, Arc<CoreState>>) -> Result<ScreenView, String> {
    let screen = state.read_screen().map_err(|e| e.to_string())?;
    Ok(screen.view())
}

/// Stores the draft text exactly as typed.
#[tauri::command]
pub fn update_draft_text(
    text: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<ScreenView, String> {
    let mut screen = state.write_screen().map_err(|e| e.to_string())?;
    screen.update_draft_text(text);
    Ok(screen.view())
}

/// Selects a severity. The UI only offers 1–10; anything else is an
/// invalid payload and is rejected.
#[tauri::command]
pub fn select_severity(
    severity: u8,
    state: State<'_, Arc<CoreState>>,
) -> Result<ScreenView, String> {
    let mut screen = state.write_screen().map_err(|e| e.to_string())?;
    screen.select_severity(severity).map_err(|e| e.to_string())?;
    Ok(screen.view())
}

/// Records the current draft. Empty/whitespace drafts change nothing.
#[tauri::command]
pub fn add_symptom(state: State<'_, Arc<CoreState>>) -> Result<ScreenView, String> {
    let mut screen = state.write_screen().map_err(|e| e.to_string())?;
    if let Some(symptom) = screen.add_symptom() {
        tracing::debug!(id = %symptom.id, severity = symptom.severity, "Symptom recorded");
    }
    Ok(screen.view())
}

/// Analyze stub — pressing the button has no observable effect.
#[tauri::command]
pub fn analyze_symptoms(state: State<'_, Arc<CoreState>>) -> Result<(), String> {
    let screen = state.read_screen().map_err(|e| e.to_string())?;
    screen.analyze();
    Ok(())
}

/// Clears the screen back to its initial state.
#[tauri::command]
pub fn reset_screen(state: State<'_, Arc<CoreState>>) -> Result<ScreenView, String> {
    let mut screen = state.write_screen().map_err(|e| e.to_string())?;
    screen.reset();
    Ok(screen.view())
}
