use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date in {field}: '{value}'")]
    InvalidDate { field: &'static str, value: String },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Save slot {slot} already exists")]
    SlotExists { slot: u32 },

    #[error("Save slot {slot} not found")]
    SlotNotFound { slot: u32 },
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
