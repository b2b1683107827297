//! Gate state machine.
//!
//! This module defines the [`App`] state machine, which manages the
//! interactive state of the gate completely decoupled from I/O.
//!
//! This is a pure state machine: it consumes [`crate::GateEvent`] inputs and
//! API calls and produces [`crate::GateAction`] instructions for the runtime
//! to execute.
//!
//! # Responsibilities
//!
//! - Tracks the active [`Screen`] and enforces its transitions, including
//!   the stickiness of [`Screen::Content`].
//! - Tracks the startup unlock-probe status for the checking placeholder.
//! - Validates submitted birthdates and raises the transient rejection cue.

use agegate_core::is_valid;

use crate::{GateAction, GateEvent, Screen, UnlockCheck};

/// Gate state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Active screen.
    screen: Screen,
    /// Startup probe status.
    check: UnlockCheck,
    /// Rejection cue for the date field. Cleared by the next keystroke.
    input_rejected: bool,
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
    /// Upper bound for the birth-year range check, captured at construction.
    current_year: u16,
}

impl App {
    /// Create a new App validating against the given calendar year.
    pub fn new(current_year: u16) -> Self {
        Self {
            screen: Screen::Gate,
            check: UnlockCheck::Pending,
            input_rejected: false,
            status_message: None,
            current_year,
        }
    }

    /// Begin the startup existing-unlock probe.
    ///
    /// Emits a render of the checking placeholder followed by the probe
    /// request. Subsequent calls are no-ops.
    pub fn start(&mut self) -> Vec<GateAction> {
        if self.check != UnlockCheck::Pending {
            return vec![];
        }
        self.check = UnlockCheck::Checking;
        vec![GateAction::Render, GateAction::CheckUnlock]
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: GateEvent) -> Vec<GateAction> {
        match event {
            GateEvent::Tick => vec![],
            GateEvent::UnlockFound => {
                self.check = UnlockCheck::Resolved;
                self.screen = Screen::Content;
                self.input_rejected = false;
                self.status_message = None;
                vec![GateAction::Render]
            },
            GateEvent::UnlockMissing => {
                // Probe failures also land here: the gate is the fallback,
                // never an error screen.
                self.check = UnlockCheck::Resolved;
                vec![GateAction::Render]
            },
        }
    }

    /// Submit a date entry from the gate.
    ///
    /// A valid entry moves to the interstitial and requests a best-effort
    /// save; the transition does not wait for the save outcome. An empty or
    /// invalid entry raises the rejection cue and stays on the gate without
    /// touching persistence.
    pub fn submit(&mut self, raw: &str) -> Vec<GateAction> {
        if !self.gate_input_active() {
            return vec![];
        }

        let entry = raw.trim();
        if entry.is_empty() || !is_valid(entry, self.current_year) {
            self.input_rejected = true;
            self.status_message = Some("Enter a valid date as DD/MM/YYYY".into());
            return vec![GateAction::Render];
        }

        self.input_rejected = false;
        self.status_message = None;
        self.screen = Screen::Interstitial;
        vec![GateAction::SaveUnlock { birthdate: entry.to_owned() }, GateAction::Render]
    }

    /// Acknowledge the interstitial, revealing the content.
    pub fn acknowledge(&mut self) -> Vec<GateAction> {
        if self.screen != Screen::Interstitial {
            return vec![];
        }
        self.screen = Screen::Content;
        vec![GateAction::Render]
    }

    /// Quit the session.
    pub fn quit(&self) -> Vec<GateAction> {
        vec![GateAction::Quit]
    }

    /// Clear the rejection cue. Called on the next keystroke after a
    /// rejected submit.
    pub fn clear_rejection(&mut self) {
        self.input_rejected = false;
    }

    /// Whether the date field currently accepts input: the gate screen is
    /// active and the startup probe has resolved.
    pub fn gate_input_active(&self) -> bool {
        self.screen == Screen::Gate && self.check == UnlockCheck::Resolved
    }

    /// Active screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Startup probe status.
    pub fn unlock_check(&self) -> UnlockCheck {
        self.check
    }

    /// Whether the rejection cue is raised.
    pub fn input_rejected(&self) -> bool {
        self.input_rejected
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Calendar year the validator is bound to.
    pub fn current_year(&self) -> u16 {
        self.current_year
    }
}
