//! Common utilities for the Wren styling engine.
//!
//! This crate provides shared infrastructure used by the other Wren crates:
//! - **Warning System** - deduplicated diagnostics for unsupported input

pub mod warning;
