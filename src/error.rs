//! Error Types

use thiserror::Error;

pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Debug, Error)]
pub enum TodoError {
    /// The task text was empty after trimming. The message is shown to the user as-is.
    #[error("Please enter a task.")]
    EmptyTask,

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A write was rejected by the backing storage (e.g. quota exceeded).
    #[error("failed to write `{key}` to storage: {reason}")]
    StorageWrite { key: String, reason: String },

    #[error("failed to encode `{key}`")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no todo ids left to assign")]
    IdsExhausted,

    #[error("todo store has been disposed")]
    StoreDisposed,
}
