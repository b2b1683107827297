//! Fuzz target for date validation
//!
//! This fuzzer tests validation with arbitrary entries and year bounds.
//! Validation has a plain-boolean contract: it must never panic, only
//! return false (or a typed error from `parse`) for invalid input.

#![no_main]

use agegate_core::{BirthDate, is_valid};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, u16)| {
    let (entry, year) = input;

    // Must never panic, whatever the entry or year bound
    let parsed = BirthDate::parse(entry, year);
    assert_eq!(parsed.is_ok(), is_valid(entry, year));
});
