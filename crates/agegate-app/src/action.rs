//! Application side-effects and intents.
//!
//! This module defines the [`GateAction`] enum, which represents
//! instructions produced by the [`crate::App`] state machine for the runtime
//! to execute.

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateAction {
    /// Render the UI.
    Render,

    /// Quit the session.
    Quit,

    /// Probe the persistence collaborator for an existing unlock record.
    CheckUnlock,

    /// Persist the submitted birthdate, best-effort.
    SaveUnlock {
        /// Formatted `DD/MM/YYYY` birthdate as validated.
        birthdate: String,
    },
}
