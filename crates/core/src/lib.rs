//! Domain rules for the flowtrack compliance tracking backend.
//!
//! No I/O lives here: this crate defines the process status enumeration,
//! the progress rounding rule, shared type aliases, and domain errors.
//! The `flowtrack-db` and `flowtrack-api` crates build on top of it.

pub mod error;
pub mod process;
pub mod progress;
pub mod types;
