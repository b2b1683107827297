//! Workspace root crate.
//!
//! Carries the cargo-husky git-hook installation; all functionality lives in
//! the `crates/` members.
