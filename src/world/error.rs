use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Where a document came from, carried by every load error so messages point
/// at the file the author has to fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Inline,
}

impl Source {
    pub fn file(path: &Path) -> Self {
        Source::File(path.to_path_buf())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Inline => f.write_str("<inline>"),
        }
    }
}

/// Build phase that rejected the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPhase {
    Shape,
    Items,
    Rooms,
    Links,
    Start,
}

impl fmt::Display for BuildPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BuildPhase::Shape => "top-level shape",
            BuildPhase::Items => "items",
            BuildPhase::Rooms => "rooms",
            BuildPhase::Links => "exits and room items",
            BuildPhase::Start => "player start",
        };
        f.write_str(label)
    }
}

/// Structural defects found while turning records into a [`World`](super::World).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("required field '{0}' is missing, null, or blank")]
    MissingField(&'static str),

    #[error("duplicate item name '{0}'")]
    DuplicateItem(String),

    #[error("duplicate room name '{0}'")]
    DuplicateRoom(String),

    #[error("room '{room}' has exit '{direction}' to unknown room '{destination}'")]
    BrokenExit {
        room: String,
        direction: String,
        destination: String,
    },

    #[error("room '{room}' lists item '{item}' which is not defined in the top-level items")]
    UnknownItemReference { room: String, item: String },

    #[error("player start room '{0}' does not exist")]
    UnknownStartRoom(String),
}

impl BuildError {
    pub fn phase(&self) -> BuildPhase {
        match self {
            BuildError::MissingField(_) => BuildPhase::Shape,
            BuildError::DuplicateItem(_) => BuildPhase::Items,
            BuildError::DuplicateRoom(_) => BuildPhase::Rooms,
            BuildError::BrokenExit { .. } | BuildError::UnknownItemReference { .. } => {
                BuildPhase::Links
            }
            BuildError::UnknownStartRoom(_) => BuildPhase::Start,
        }
    }
}

/// Decoder error behind a syntax failure, kept whole so callers can walk the
/// `source()` chain down to line and column.
#[derive(Debug, Error)]
pub enum ParseSource {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

/// Everything `load_game_data` and friends can fail with.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read game data file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid syntax in {origin}: {source}")]
    Parse {
        origin: Source,
        #[source]
        source: ParseSource,
    },

    #[error("game data in {origin} is empty")]
    EmptyDocument { origin: Source },

    #[error("game data in {origin} has the wrong shape: {source}")]
    Mapping {
        origin: Source,
        #[source]
        source: serde_json::Error,
    },

    #[error("game data in {origin} rejected while building {}: {source}", .source.phase())]
    Build {
        origin: Source,
        #[source]
        source: BuildError,
    },
}

impl LoadError {
    /// The builder error behind this failure, if the document got that far.
    pub fn build_error(&self) -> Option<&BuildError> {
        match self {
            LoadError::Build { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_error_message_names_phase_and_identifiers() {
        let err = LoadError::Build {
            origin: Source::File(PathBuf::from("worlds/cave.json")),
            source: BuildError::BrokenExit {
                room: "Hall".into(),
                direction: "north".into(),
                destination: "Attic".into(),
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("worlds/cave.json"));
        assert!(msg.contains("exits and room items"));
        assert!(msg.contains("'Hall'"));
        assert!(msg.contains("'north'"));
        assert!(msg.contains("'Attic'"));
    }
}
