use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid intensity: {0}")]
    InvalidIntensity(String),

    #[error("Unknown exercise: {0}")]
    InvalidExercise(String),

    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    #[error("Routine name already exists: {0}")]
    DuplicateRoutine(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Operation aborted")]
    Aborted,
}

impl AppError {
    /// Whether the menu loop can report this error and keep running.
    /// Store and I/O failures are fatal; everything else is recovered at
    /// the prompt boundary.
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::Database(_) | AppError::Pool(_) | AppError::Io(_)
            | AppError::Serialization(_) => false,
            AppError::InvalidInput(_)
            | AppError::InvalidIntensity(_)
            | AppError::InvalidExercise(_)
            | AppError::DuplicateUsername(_)
            | AppError::DuplicateRoutine(_)
            | AppError::NotFound(_)
            | AppError::Aborted => true,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
