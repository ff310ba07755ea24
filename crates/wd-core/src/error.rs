use crate::room::RoomId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building a world or a case file.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested room ID does not exist in the world.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// A room with the same name already exists.
    #[error("room already exists: \"{0}\"")]
    DuplicateRoom(String),

    /// One of the case file's sets has no members.
    #[error("case file has no {0}")]
    EmptyCategory(&'static str),
}
