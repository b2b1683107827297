//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the gate runtime from specific I/O
//! implementations. Each front-end implements the trait to provide
//! platform-specific input, rendering, and persistence access, while the
//! generic [`crate::Runtime`] handles all orchestration.

use std::future::Future;

use crate::{App, GateAction};

/// Abstracts I/O operations for the gate runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures
/// the same orchestration code runs in the production front-end and in
/// simulation.
///
/// # Implementations
///
/// - **Terminal**: crossterm events, ratatui rendering, JSON-file store
/// - **Simulation**: scripted keys and fixture probe outcomes
/// - **Web**: could use browser events and remote record storage
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Poll for the next input and translate it into actions.
    ///
    /// Keyboard input goes through the driver's [`crate::InputState`] so
    /// the entry buffer stays in formatted form.
    ///
    /// # Errors
    ///
    /// Returns an error only for unrecoverable platform failures; these end
    /// the session.
    fn poll_event(
        &mut self,
        app: &mut App,
    ) -> impl Future<Output = Result<Vec<GateAction>, Self::Error>> + Send;

    /// Probe for an existing unlock record.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store or transport fails. The
    /// runtime swallows it and proceeds as if no record was found.
    fn check_unlock(&mut self) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Persist the submitted birthdate.
    ///
    /// # Errors
    ///
    /// Returns an error if the save fails. The runtime treats the save as
    /// best-effort and never retries.
    fn save_unlock(
        &mut self,
        birthdate: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Render the gate state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Clean up resources on session end.
    fn stop(&mut self);
}
