//! Shared CLI infrastructure.
//!
//! The binary lives in `main.rs`; logging setup is exposed here so
//! integration tests can drive it with a custom writer.

pub mod logging;
