use std::fs;
use std::io;
use std::path::Path;

use log::info;
use serde_json::Value;

use super::builder::{LoadReport, build_world};
use super::error::{LoadError, ParseSource, Source};
use super::record::map_document;

/// Serialization format of a world document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// `.toml` files are read as TOML; everything else as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Public API: load a world from a document on disk.
///
/// The file is read in one go and closed before parsing starts, so no handle
/// outlives the call whichever way it fails.
pub fn load_game_data<P: AsRef<Path>>(path: P) -> Result<LoadReport, LoadError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(LoadError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "file path cannot be empty"),
        });
    }

    info!("loading game data from {}", path.display());
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    load_document(&contents, DocumentFormat::from_path(path), Source::file(path))
}

/// Public API: load a world from JSON text.
pub fn load_world_from_str(json: &str) -> Result<LoadReport, LoadError> {
    load_document(json, DocumentFormat::Json, Source::Inline)
}

/// Public API: load a world from TOML text (`playerStart` plus `[[items]]` and
/// `[[rooms]]` tables).
pub fn load_world_from_toml_str(toml_text: &str) -> Result<LoadReport, LoadError> {
    load_document(toml_text, DocumentFormat::Toml, Source::Inline)
}

fn load_document(
    text: &str,
    format: DocumentFormat,
    origin: Source,
) -> Result<LoadReport, LoadError> {
    let tree = match parse_document(text, format) {
        Ok(Some(tree)) => tree,
        Ok(None) => return Err(LoadError::EmptyDocument { origin }),
        Err(source) => return Err(LoadError::Parse { origin, source }),
    };

    let record = match map_document(tree) {
        Ok(record) => record,
        Err(source) => return Err(LoadError::Mapping { origin, source }),
    };

    build_world(record).map_err(|source| LoadError::Build { origin, source })
}

/// Decode text into an untyped tree. `Ok(None)` means the document was
/// well-formed but carried nothing: blank text or a bare `null`.
pub fn parse_document(text: &str, format: DocumentFormat) -> Result<Option<Value>, ParseSource> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    let tree: Value = match format {
        DocumentFormat::Json => serde_json::from_str(text)?,
        DocumentFormat::Toml => toml::from_str(text)?,
    };

    Ok(match tree {
        Value::Null => None,
        tree => Some(tree),
    })
}
