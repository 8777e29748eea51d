//! Common utilities shared by the HTTP layer.
//!
//! This crate provides:
//! - Unified error handling with JSON error responses

pub mod error;

pub use error::{AppError, AppResult, OptionExt};
