//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input, delegate to the corresponding repository in
//! `flowtrack_db`, and map errors via [`crate::error::AppError`].

pub mod dashboard;
pub mod process;
pub mod process_step;
