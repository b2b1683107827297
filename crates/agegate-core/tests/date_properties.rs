//! Property-based tests for date entry formatting and validation.
//!
//! Tests verify that the formatter invariants hold for arbitrary input and
//! that validation never panics, whatever the field receives.

use agegate_core::{BirthDate, MAX_DIGITS, format_input, is_valid};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_format_output_invariants(raw in ".{0,64}") {
        let out = format_input(&raw);

        let digit_count = out.chars().filter(char::is_ascii_digit).count();
        let slash_count = out.chars().filter(|&c| c == '/').count();

        prop_assert!(digit_count <= MAX_DIGITS);
        prop_assert!(slash_count <= 2);
        prop_assert!(out.chars().all(|c| c.is_ascii_digit() || c == '/'));

        // Separator positions are fixed once enough digits exist.
        if digit_count >= 2 {
            prop_assert_eq!(out.as_bytes()[2], b'/');
        }
        if digit_count >= 4 {
            prop_assert_eq!(out.as_bytes()[5], b'/');
        }
    }

    #[test]
    fn prop_format_is_idempotent(raw in ".{0,64}") {
        let once = format_input(&raw);
        prop_assert_eq!(format_input(&once), once);
    }

    #[test]
    fn prop_validate_never_panics(entry in ".{0,32}", year in 1900u16..3000) {
        let _ = is_valid(&entry, year);
        let _ = BirthDate::parse(&entry, year);
    }

    #[test]
    fn prop_valid_entries_are_format_fixed_points(
        day in 1u8..=31,
        month in 1u8..=12,
        year in 1900u16..=2026,
    ) {
        let entry = format!("{day:02}/{month:02}/{year:04}");
        prop_assert!(is_valid(&entry, 2026));
        prop_assert_eq!(format_input(&entry), entry);
    }

    #[test]
    fn prop_parse_agrees_with_is_valid(entry in ".{0,16}", year in 1900u16..3000) {
        prop_assert_eq!(BirthDate::parse(&entry, year).is_ok(), is_valid(&entry, year));
    }
}
