//! # rackforge-common
//!
//! Shared error type and structured-document loading used by the rackforge
//! crates and binary.

pub mod document;
pub mod error;

pub use document::{load_document, parse_document, DocumentFormat};
pub use error::{Error, Result};
