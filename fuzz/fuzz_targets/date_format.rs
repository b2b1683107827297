//! Fuzz target for the date-entry formatter
//!
//! This fuzzer feeds arbitrary strings through the formatter to find:
//! - Panics on odd unicode or control characters
//! - Outputs that break the digit/separator invariants
//! - Inputs where the formatter is not idempotent
//!
//! The fuzzer should NEVER panic and the invariants should hold for every
//! possible input.

#![no_main]

use agegate_core::{MAX_DIGITS, format_input};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|raw: &str| {
    let out = format_input(raw);

    let digit_count = out.chars().filter(char::is_ascii_digit).count();
    assert!(digit_count <= MAX_DIGITS);
    assert!(out.chars().filter(|&c| c == '/').count() <= 2);
    assert!(out.chars().all(|c| c.is_ascii_digit() || c == '/'));

    // Idempotence: the formatter is a no-op on its own output
    assert_eq!(format_input(&out), out);
});
