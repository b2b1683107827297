//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface as the terminal driver but for
//! deterministic testing: keys and events are scripted, the unlock probe
//! outcome is a fixture, and persistence calls are captured for assertion.

#![allow(clippy::disallowed_types, reason = "Synchronous locking operations only")]
#![allow(clippy::expect_used, reason = "A poisoned lock should abort the simulation")]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use agegate_app::{App, Driver, GateAction, GateEvent, InputState, KeyInput};

/// Error type for simulation driver.
#[derive(Debug, Clone)]
pub struct SimDriverError(pub String);

impl std::fmt::Display for SimDriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimDriverError: {}", self.0)
    }
}

impl std::error::Error for SimDriverError {}

/// Scripted outcome of the unlock probe.
#[derive(Debug, Clone)]
enum UnlockFixture {
    Missing,
    Found,
    Fails(String),
}

/// Shared state for script injection.
///
/// This allows injection and inspection from outside the runtime.
#[derive(Debug)]
struct SharedState {
    pending_keys: VecDeque<KeyInput>,
    pending_events: VecDeque<GateEvent>,
    unlock: UnlockFixture,
    save_fails: bool,
    saved: Vec<String>,
    render_count: usize,
    stopped: bool,
}

impl Default for SharedState {
    fn default() -> Self {
        Self {
            pending_keys: VecDeque::new(),
            pending_events: VecDeque::new(),
            unlock: UnlockFixture::Missing,
            save_fails: false,
            saved: Vec::new(),
            render_count: 0,
            stopped: false,
        }
    }
}

/// Simulation driver for deterministic testing.
///
/// Implements [`Driver`] so the same [`agegate_app::Runtime`] orchestration
/// code runs in both the production front-end and tests. When the script is
/// exhausted the driver quits the session, so `Runtime::run` terminates.
pub struct SimDriver {
    state: Arc<Mutex<SharedState>>,
    input: InputState,
}

/// Inspection handle onto a driver's shared state, usable after the driver
/// has been moved into a runtime.
#[derive(Clone)]
pub struct SimHandle {
    state: Arc<Mutex<SharedState>>,
}

impl Default for SimDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SimDriver {
    /// Create a driver whose probe reports no existing unlock.
    pub fn new() -> Self {
        Self { state: Arc::new(Mutex::new(SharedState::default())), input: InputState::new() }
    }

    /// Script the probe to find an existing unlock record.
    #[must_use]
    pub fn with_unlock_found(self) -> Self {
        self.state.lock().expect("Mutex poisoned").unlock = UnlockFixture::Found;
        self
    }

    /// Script the probe to fail with the given message.
    #[must_use]
    pub fn with_unlock_error(self, message: impl Into<String>) -> Self {
        self.state.lock().expect("Mutex poisoned").unlock = UnlockFixture::Fails(message.into());
        self
    }

    /// Script every save to fail.
    #[must_use]
    pub fn with_save_error(self) -> Self {
        self.state.lock().expect("Mutex poisoned").save_fails = true;
        self
    }

    /// Queue a key press.
    pub fn inject_key(&self, key: KeyInput) {
        self.state.lock().expect("Mutex poisoned").pending_keys.push_back(key);
    }

    /// Queue one key press per character, then optionally Enter.
    pub fn type_str(&self, text: &str, submit: bool) {
        let mut state = self.state.lock().expect("Mutex poisoned");
        state.pending_keys.extend(text.chars().map(KeyInput::Char));
        if submit {
            state.pending_keys.push_back(KeyInput::Enter);
        }
    }

    /// Queue a gate event.
    pub fn inject_event(&self, event: GateEvent) {
        self.state.lock().expect("Mutex poisoned").pending_events.push_back(event);
    }

    /// Inspection handle that stays usable after the driver is moved into a
    /// runtime.
    pub fn handle(&self) -> SimHandle {
        SimHandle { state: Arc::clone(&self.state) }
    }
}

impl SimHandle {
    /// Birthdates captured by `save_unlock`, in call order.
    pub fn saved(&self) -> Vec<String> {
        self.state.lock().expect("Mutex poisoned").saved.clone()
    }

    /// Number of renders performed.
    pub fn render_count(&self) -> usize {
        self.state.lock().expect("Mutex poisoned").render_count
    }

    /// Whether the driver was stopped.
    pub fn stopped(&self) -> bool {
        self.state.lock().expect("Mutex poisoned").stopped
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    async fn poll_event(&mut self, app: &mut App) -> Result<Vec<GateAction>, Self::Error> {
        let next_key = {
            let mut state = self.state.lock().expect("Mutex poisoned");
            match state.pending_keys.pop_front() {
                Some(key) => Some(key),
                None => {
                    if let Some(event) = state.pending_events.pop_front() {
                        drop(state);
                        return Ok(app.handle(event));
                    }
                    None
                },
            }
        };

        match next_key {
            Some(key) => Ok(self.input.handle_key(key, app)),
            // Script exhausted: end the session so Runtime::run returns.
            None => Ok(app.quit()),
        }
    }

    async fn check_unlock(&mut self) -> Result<bool, Self::Error> {
        let unlock = self.state.lock().expect("Mutex poisoned").unlock.clone();
        match unlock {
            UnlockFixture::Missing => Ok(false),
            UnlockFixture::Found => Ok(true),
            UnlockFixture::Fails(message) => Err(SimDriverError(message)),
        }
    }

    async fn save_unlock(&mut self, birthdate: &str) -> Result<(), Self::Error> {
        let mut state = self.state.lock().expect("Mutex poisoned");
        if state.save_fails {
            return Err(SimDriverError("save failed".into()));
        }
        state.saved.push(birthdate.to_owned());
        Ok(())
    }

    fn render(&mut self, _app: &App) -> Result<(), Self::Error> {
        self.state.lock().expect("Mutex poisoned").render_count += 1;
        Ok(())
    }

    fn stop(&mut self) {
        self.state.lock().expect("Mutex poisoned").stopped = true;
    }
}
