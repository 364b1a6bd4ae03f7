//! Loading JSON and YAML documents from disk.
//!
//! Rule sets, property sets and kickstart records all arrive as structured
//! documents. The format is picked from the file extension; anything that is
//! not `.yml`/`.yaml` is read as JSON.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Serialization format of a structured document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        match ext.as_deref() {
            Some("yml") | Some("yaml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

impl std::str::FromStr for DocumentFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(DocumentFormat::Json),
            "yml" | "yaml" => Ok(DocumentFormat::Yaml),
            other => Err(Error::unsupported_format(other)),
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Json => write!(f, "json"),
            DocumentFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Parse a document from text in the given format.
pub fn parse_document<T: DeserializeOwned>(text: &str, format: DocumentFormat) -> Result<T> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(text)?),
        DocumentFormat::Yaml => Ok(serde_yaml::from_str(text)?),
    }
}

/// Read and parse a document, choosing the format from the file extension.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = DocumentFormat::from_path(path);
    tracing::debug!("Loading {} document from {:?}", format, path);
    let text = std::fs::read_to_string(path)?;
    parse_document(&text, format)
}
