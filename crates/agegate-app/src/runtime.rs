//! Generic runtime for gate orchestration.
//!
//! The Runtime drives the session event loop, coordinating between:
//! - [`App`]: gate state machine
//! - [`Driver`]: platform-specific I/O and persistence access

use crate::{App, Driver, GateAction, GateEvent};

/// Generic runtime that orchestrates App and Driver.
///
/// Runs the startup unlock probe, then the input loop, executing the
/// actions the state machine produces. Collaborator failures (probe or
/// save) are logged and swallowed; the session only ends on `Quit` or an
/// unrecoverable driver error.
pub struct Runtime<D>
where
    D: Driver,
{
    driver: D,
    app: App,
}

impl<D> Runtime<D>
where
    D: Driver,
{
    /// Create a new runtime with the given driver and calendar year.
    pub fn new(driver: D, current_year: u16) -> Self {
        Self { driver, app: App::new(current_year) }
    }

    /// Run the session.
    ///
    /// 1. Starts the existing-unlock probe (rendering the checking
    ///    placeholder first, so a slow probe is visible as such).
    /// 2. Loops: polls the driver for input, executes the resulting
    ///    actions, and breaks on `Quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(&mut self) -> Result<(), D::Error> {
        let startup = self.app.start();
        if !self.process_actions(startup).await? {
            loop {
                let actions = self.driver.poll_event(&mut self.app).await?;
                if self.process_actions(actions).await? {
                    break;
                }
            }
        }

        self.driver.stop();
        Ok(())
    }

    /// Execute actions, feeding probe outcomes back into the App.
    ///
    /// Returns `true` if the session should end.
    async fn process_actions(&mut self, initial_actions: Vec<GateAction>) -> Result<bool, D::Error> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);

            for action in actions {
                match action {
                    GateAction::Render => self.driver.render(&self.app)?,
                    GateAction::Quit => return Ok(true),
                    GateAction::CheckUnlock => {
                        let found = match self.driver.check_unlock().await {
                            Ok(found) => found,
                            Err(e) => {
                                tracing::warn!("unlock probe failed, falling back to gate: {e}");
                                false
                            },
                        };
                        let event =
                            if found { GateEvent::UnlockFound } else { GateEvent::UnlockMissing };
                        pending_actions.extend(self.app.handle(event));
                    },
                    GateAction::SaveUnlock { birthdate } => {
                        // Best-effort, no retry: the screen transition has
                        // already happened.
                        if let Err(e) = self.driver.save_unlock(&birthdate).await {
                            tracing::warn!("unlock save failed: {e}");
                        }
                    },
                }
            }
        }

        Ok(false)
    }

    /// Get a reference to the App.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the App.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}
