//! Shared application state.
//!
//! `CoreState` is the single state object managed by the Tauri builder
//! and handed to every IPC command. The screen state sits behind an
//! `RwLock` because command handlers borrow shared state; all mutation
//! is still driven by one webview, one event at a time.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::checker::{CheckerError, CheckerScreen};

/// Shared application state, wrapped in `Arc` at startup.
pub struct CoreState {
    screen: RwLock<CheckerScreen>,
}

impl CoreState {
    pub fn new() -> Self {
        Self {
            screen: RwLock::new(CheckerScreen::new()),
        }
    }

    /// Acquire a read lock on the screen state.
    pub fn read_screen(&self) -> Result<RwLockReadGuard<'_, CheckerScreen>, CoreError> {
        self.screen.read().map_err(|_| CoreError::LockPoisoned)
    }

    /// Acquire a write lock on the screen state.
    pub fn write_screen(&self) -> Result<RwLockWriteGuard<'_, CheckerScreen>, CoreError> {
        self.screen.write().map_err(|_| CoreError::LockPoisoned)
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════
// Error types
// ═══════════════════════════════════════════════════════════

/// Errors from CoreState operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
    #[error(transparent)]
    Checker(#[from] CheckerError),
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_fresh_screen() {
        let state = CoreState::new();
        let screen = state.read_screen().unwrap();
        assert_eq!(screen.draft_text(), "");
        assert!(screen.symptoms().is_empty());
    }

    #[test]
    fn write_then_read_sees_mutation() {
        let state = CoreState::new();
        {
            let mut screen = state.write_screen().unwrap();
            screen.update_draft_text("headache".into());
            screen.add_symptom();
        }
        let screen = state.read_screen().unwrap();
        assert_eq!(screen.symptoms().len(), 1);
    }

    #[test]
    fn concurrent_reads_do_not_block() {
        use std::sync::Arc;
        use std::thread;

        let state = Arc::new(CoreState::new());
        let mut handles = vec![];

        // Spawn 10 readers concurrently
        for _ in 0..10 {
            let state = Arc::clone(&state);
            handles.push(thread::spawn(move || {
                let screen = state.read_screen().unwrap();
                assert!(screen.symptoms().is_empty());
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn core_error_display() {
        let err = CoreError::LockPoisoned;
        assert_eq!(err.to_string(), "Internal lock error");

        let err = CoreError::Checker(CheckerError::SeverityOutOfRange(11));
        assert!(err.to_string().contains("11"));
    }
}
