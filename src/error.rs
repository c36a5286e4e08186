use thiserror::Error;

/// Everything that can go wrong in the board core.
///
/// None of these are fatal to the embedding application: validation and
/// draw failures leave the store untouched, and persistence failures are
/// logged while the in-memory state stands.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("storage failure: {0}")]
    Persistence(#[from] rusqlite::Error),

    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("no eligible participants (slots must be filled and marked as paid)")]
    NoEligibleParticipants,
}

impl Error {
    pub fn invalid_format() -> Self {
        Error::Validation("invalid format".to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
