//! Application input events.
//!
//! This module defines [`GateEvent`], the inputs that drive the
//! [`crate::App`] state machine.
//!
//! Keyboard input does not appear here: keystrokes are translated by
//! [`crate::InputState`] into direct `App` API calls. Events cover system
//! ticks and the outcomes of the startup unlock probe, delivered by the
//! runtime on behalf of the persistence collaborator.

/// Events processed by the App state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    /// Periodic tick.
    Tick,

    /// Startup probe found an existing unlock record.
    UnlockFound,

    /// Startup probe found no record (or failed; failures are mapped here
    /// by the runtime and never surfaced to the visitor).
    UnlockMissing,
}
