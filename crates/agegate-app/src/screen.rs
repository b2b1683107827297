//! Observable gate state types.
//!
//! These structures are the "View Model" for the gate: the subset of state a
//! front-end needs to decide what to draw, without any of the persistence or
//! input mechanics behind it.

/// Which screen the session is on.
///
/// Exactly one screen is active at a time. `Content` is terminal: once
/// reached it is sticky for the remainder of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Initial screen requesting the birthdate.
    Gate,
    /// Shown after a successful submission, before the content.
    Interstitial,
    /// The unlocked content. Terminal for the session.
    Content,
}

/// Status of the startup existing-unlock probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockCheck {
    /// Probe not yet started.
    Pending,
    /// Probe in flight; the front-end shows a transient placeholder.
    Checking,
    /// Probe finished (found, missing, or failed-and-swallowed).
    Resolved,
}
