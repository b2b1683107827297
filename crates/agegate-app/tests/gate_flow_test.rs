//! Integration tests for the gate flow through the full runtime.
//!
//! # Oracle Pattern
//!
//! Each test scripts a visitor session into a [`SimDriver`], runs the real
//! [`Runtime`] to completion, and ends with oracle checks on the final
//! screen and on what actually reached the persistence collaborator.

use agegate_app::{GateEvent, KeyInput, Runtime, Screen, UnlockCheck};
use agegate_harness::{SimDriver, SimHandle};

const YEAR: u16 = 2026;

/// Run a scripted driver to completion, returning the runtime for state
/// oracles and the handle for persistence oracles.
async fn run_session(driver: SimDriver) -> (Runtime<SimDriver>, SimHandle) {
    let handle = driver.handle();
    let mut runtime = Runtime::new(driver, YEAR);
    runtime.run().await.expect("session should not error");
    (runtime, handle)
}

#[tokio::test]
async fn valid_submission_reaches_interstitial_and_persists_once() {
    let driver = SimDriver::new();
    driver.type_str("15062000", true);

    let (runtime, handle) = run_session(driver).await;

    assert_eq!(runtime.app().screen(), Screen::Interstitial);
    assert_eq!(handle.saved(), vec!["15/06/2000".to_owned()]);
    assert!(handle.stopped());
}

#[tokio::test]
async fn empty_submission_never_persists_and_stays_on_gate() {
    let driver = SimDriver::new();
    driver.inject_key(KeyInput::Enter);

    let (runtime, handle) = run_session(driver).await;

    assert_eq!(runtime.app().screen(), Screen::Gate);
    assert!(runtime.app().input_rejected());
    assert!(handle.saved().is_empty());
}

#[tokio::test]
async fn invalid_submission_never_persists() {
    let driver = SimDriver::new();
    // Types as "99/99/" - incomplete and out of range.
    driver.type_str("9999", true);

    let (runtime, handle) = run_session(driver).await;

    assert_eq!(runtime.app().screen(), Screen::Gate);
    assert!(runtime.app().input_rejected());
    assert!(handle.saved().is_empty());
}

#[tokio::test]
async fn acknowledge_reveals_content() {
    let driver = SimDriver::new();
    driver.type_str("15062000", true);
    driver.inject_key(KeyInput::Enter);

    let (runtime, handle) = run_session(driver).await;

    assert_eq!(runtime.app().screen(), Screen::Content);
    assert_eq!(handle.saved().len(), 1);
}

#[tokio::test]
async fn existing_unlock_short_circuits_to_content() {
    let driver = SimDriver::new().with_unlock_found();

    let (runtime, handle) = run_session(driver).await;

    // Content without any submission, acknowledgement, or save.
    assert_eq!(runtime.app().screen(), Screen::Content);
    assert_eq!(runtime.app().unlock_check(), UnlockCheck::Resolved);
    assert!(handle.saved().is_empty());
}

#[tokio::test]
async fn probe_failure_falls_back_to_gate() {
    let driver = SimDriver::new().with_unlock_error("record service down");

    let (runtime, handle) = run_session(driver).await;

    // Swallowed: the visitor sees the gate, not an error.
    assert_eq!(runtime.app().screen(), Screen::Gate);
    assert_eq!(runtime.app().unlock_check(), UnlockCheck::Resolved);
    assert!(handle.saved().is_empty());
}

#[tokio::test]
async fn save_failure_does_not_block_the_transition() {
    let driver = SimDriver::new().with_save_error();
    driver.type_str("15062000", true);
    driver.inject_key(KeyInput::Enter);

    let (runtime, handle) = run_session(driver).await;

    // Fire-and-forget: the session proceeds to content regardless.
    assert_eq!(runtime.app().screen(), Screen::Content);
    assert!(handle.saved().is_empty());
}

#[tokio::test]
async fn content_is_sticky_for_the_rest_of_the_session() {
    let driver = SimDriver::new();
    driver.type_str("15062000", true);
    driver.inject_key(KeyInput::Enter);
    // Anything after Content must not move the screen.
    driver.inject_event(GateEvent::UnlockMissing);
    driver.type_str("01011990", true);
    driver.inject_event(GateEvent::Tick);

    let (runtime, handle) = run_session(driver).await;

    assert_eq!(runtime.app().screen(), Screen::Content);
    // Only the original submission was persisted.
    assert_eq!(handle.saved(), vec!["15/06/2000".to_owned()]);
}

#[tokio::test]
async fn esc_ends_the_session_from_the_gate() {
    let driver = SimDriver::new();
    driver.inject_key(KeyInput::Esc);
    driver.type_str("15062000", true);

    let (runtime, handle) = run_session(driver).await;

    // Keys after Esc are never processed.
    assert_eq!(runtime.app().screen(), Screen::Gate);
    assert!(handle.saved().is_empty());
    assert!(handle.stopped());
}

#[tokio::test]
async fn checking_placeholder_renders_before_the_probe_resolves() {
    let driver = SimDriver::new();
    let handle = driver.handle();
    let mut runtime = Runtime::new(driver, YEAR);

    runtime.run().await.expect("session should not error");

    // At least: checking placeholder, probe resolution, quit path.
    assert!(handle.render_count() >= 2);
}
