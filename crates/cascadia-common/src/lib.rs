//! Common utilities for the cascadia CSS engine.
//!
//! This crate provides shared infrastructure used by the engine crates:
//! - **Warning System** - deduplicated notices for unsupported features,
//!   emitted as `tracing` events

pub mod warning;
