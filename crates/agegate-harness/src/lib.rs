//! Simulation harness for the age gate.
//!
//! Provides [`SimDriver`], a deterministic [`agegate_app::Driver`]
//! implementation driven by scripted input, so the same
//! [`agegate_app::Runtime`] orchestration code runs in production and in
//! tests.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod sim_driver;

pub use sim_driver::{SimDriver, SimDriverError, SimHandle};
