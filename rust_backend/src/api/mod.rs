//! # API Module
//!
//! Sole entry point for the Python frontend. PyO3 types and functions stay
//! behind this boundary so internal models are free to change.
//!
//! - [`types`]: Python-facing DTOs with `#[pyclass]` derives (primitives only)
//! - [`conversions`]: conversion layer between internal models and DTOs
//! - [`registration`]: module registration called from `lib.rs`
//!
//! The `#[pyfunction]`s themselves live in [`crate::routes`], one module per page.

pub mod conversions;
pub mod registration;
pub mod types;

pub use registration::register_api_functions;
pub use types::*;
