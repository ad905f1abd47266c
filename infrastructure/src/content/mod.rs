//! Content model sources
//!
//! A [`ContentModel`] reaches the use case either as a JSON document
//! produced by an external extractor or, with the `html` feature, extracted
//! here from raw markup by [`HtmlContentExtractor`].

#[cfg(feature = "html")]
mod html;

#[cfg(feature = "html")]
pub use html::HtmlContentExtractor;

use council_domain::ContentModel;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while obtaining a content model
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid content JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document has no extractable content")]
    Empty,
}

/// Parse a content model from a JSON string.
pub fn parse_content_json(json: &str) -> Result<ContentModel, ContentError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a content model JSON file.
pub fn load_content_json(path: impl AsRef<Path>) -> Result<ContentModel, ContentError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_content_json(&json)
}

/// Read a file as text, reporting the path on failure.
pub fn read_document(path: impl AsRef<Path>) -> Result<String, ContentError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })
}
