// src/config/mod.rs

//! Run configuration for qemu-wrapper.
//!
//! Responsibilities:
//! - Define the raw and validated option types (`model.rs`).
//! - Validate basic invariants like a non-empty command (`validate.rs`).
//!
//! There is no config file: options come from the command line only.

pub mod model;
pub mod validate;

pub use model::{Options, RawOptions, DEFAULT_PANIC_GRACE};
