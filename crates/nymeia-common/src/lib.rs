//! Common utilities for Nymeia.
//!
//! This crate provides foundational types used across all Nymeia crates:
//!
//! - [`BinaryReader`] - Zero-copy binary reading from byte slices
//! - [`Error`] / [`Result`] - Shared error types for binary parsing

mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::BinaryReader;
