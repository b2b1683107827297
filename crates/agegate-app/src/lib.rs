//! Application layer for the age gate.
//!
//! Pure state machine and generic runtime for the gate flow, enabling
//! deterministic simulation testing with the same code that runs in
//! production.
//!
//! # Components
//!
//! - [`App`]: gate state machine (screen flow, validation, rejection cue)
//! - [`InputState`]: date-field editing (formatted buffer, submit keys)
//! - [`Driver`]: trait for platform-specific I/O abstraction
//! - [`Runtime`]: generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod driver;
mod event;
mod input;
mod runtime;
mod screen;

pub use action::GateAction;
pub use app::App;
pub use driver::Driver;
pub use event::GateEvent;
pub use input::{InputState, KeyInput};
pub use runtime::Runtime;
pub use screen::{Screen, UnlockCheck};
