//! Domain-level error types.

use thiserror::Error;

/// Field validation failures, one per validated post field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("invalid title")]
    InvalidTitle,

    #[error("invalid content uri")]
    InvalidContentUri,

    #[error("invalid content hash")]
    InvalidContentHash,
}

impl FieldError {
    pub fn code(&self) -> u32 {
        match self {
            FieldError::InvalidTitle => 1102,
            FieldError::InvalidContentUri => 1103,
            FieldError::InvalidContentHash => 1104,
        }
    }
}

/// Address codec failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("empty address string")]
    Empty,

    #[error("address must start with prefix '{expected}'")]
    WrongPrefix { expected: String },

    #[error("address payload is not lowercase hex: {0}")]
    Encoding(String),

    #[error("address length {0} out of range")]
    Length(usize),
}

/// Keyed-store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Entity not found")]
    NotFound,

    #[error("Store backend failed: {0}")]
    Backend(String),

    #[error("Codec failed: {0}")]
    Codec(String),
}

/// Errors returned by the post lifecycle commands and queries.
#[derive(Debug, Error)]
pub enum PostError {
    #[error("invalid address: {0}")]
    InvalidIdentity(#[from] IdentityError),

    #[error(transparent)]
    Validation(#[from] FieldError),

    #[error("post {0} not found")]
    PostNotFound(u64),

    #[error("incorrect owner")]
    Unauthorized,

    #[error("persist failure: {0}")]
    PersistFailure(String),
}

impl PostError {
    /// Stable registered error code.
    pub fn code(&self) -> u32 {
        match self {
            PostError::InvalidIdentity(_) => 1100,
            PostError::PostNotFound(_) => 1101,
            PostError::Validation(field) => field.code(),
            PostError::Unauthorized => 1105,
            PostError::PersistFailure(_) => 1106,
        }
    }
}

impl From<StoreError> for PostError {
    fn from(err: StoreError) -> Self {
        PostError::PersistFailure(err.to_string())
    }
}

/// Genesis validation and import failures.
#[derive(Debug, Error)]
pub enum GenesisError {
    #[error("duplicated id for post: {0}")]
    DuplicateId(u64),

    #[error("post id {id} should be lower than the post count {count}")]
    IdOutOfRange { id: u64, count: u64 },

    #[error("invalid params: {0}")]
    InvalidParams(String),

    #[error("failed to persist genesis: {0}")]
    Persist(#[from] StoreError),
}
