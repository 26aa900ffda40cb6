use std::fmt;

/// Non-fatal findings collected while building a world. Blank identifiers are
/// skipped rather than rejected; these record what was skipped and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `items` was absent or null; the world has no items.
    NoItems,
    /// Entry `index` of `items` had no usable name.
    UnnamedItem { index: usize },
    /// Entry `index` of `rooms` had no usable name.
    UnnamedRoom { index: usize },
    /// An exit in `room` had a blank direction or destination.
    BlankExit { room: String, direction: String },
    /// Entry `index` of `room`'s item list was blank.
    BlankItemReference { room: String, index: usize },
    /// `room` lists `item` more than once. Each listing becomes its own
    /// reference to the same item.
    DuplicateItemReference { room: String, item: String },
    /// A later exit in `room` replaced an earlier one with the same direction.
    ExitOverwritten { room: String, direction: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NoItems => f.write_str("'items' array not found or null; no items loaded"),
            Diagnostic::UnnamedItem { index } => {
                write!(f, "skipping item #{index}: null or blank name")
            }
            Diagnostic::UnnamedRoom { index } => {
                write!(f, "skipping room #{index}: null or blank name")
            }
            Diagnostic::BlankExit { room, direction } => write!(
                f,
                "skipping exit '{direction}' in room '{room}': blank direction or destination"
            ),
            Diagnostic::BlankItemReference { room, index } => write!(
                f,
                "skipping item reference #{index} in room '{room}': null or blank name"
            ),
            Diagnostic::DuplicateItemReference { room, item } => {
                write!(f, "room '{room}' lists item '{item}' more than once")
            }
            Diagnostic::ExitOverwritten { room, direction } => write!(
                f,
                "room '{room}' defines exit '{direction}' more than once; keeping the last"
            ),
        }
    }
}

/// Collects diagnostics and mirrors each one to the `log` facade.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    pub(crate) fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
