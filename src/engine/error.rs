use thiserror::Error;

/// Why an engine action on a loaded world was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("room name cannot be blank")]
    BlankRoomName,

    #[error("no room named '{0}'")]
    UnknownRoom(String),

    #[error("there is no '{0}' anywhere in this world")]
    NoSuchItem(String),

    #[error("you don't see '{0}' here")]
    NotHere(String),

    #[error("you aren't carrying '{0}'")]
    NotCarried(String),

    #[error("you can't go '{0}' from here")]
    NoExit(String),
}
