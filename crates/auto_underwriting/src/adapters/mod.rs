// Rust guideline compliant 2026-02-16

//! Adapters for the underwriting binary.
//!
//! Input sources that turn external data into `domain::Application` values.
//! Kept out of the library crates so they stay free of serialization concerns.

pub mod demo_applications;
pub mod json_input;
