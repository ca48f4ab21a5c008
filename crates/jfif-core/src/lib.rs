//! Core types and utilities for the JFIF header codec
//!
//! This crate provides the error type, layout constants and small value types
//! shared by the header, decoder and encoder crates.

pub mod consts;
pub mod error;
pub mod types;

pub use error::{JfifError, JfifResult};
pub use types::*;
