//! CLI error type and its JSON rendering.

use postra_core::{GenesisError, IdentityError, PostError};
use postra_infra::SnapshotError;
use postra_shared::ErrorResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Post(#[from] PostError),

    #[error(transparent)]
    Genesis(#[from] GenesisError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("invalid address: {0}")]
    Identity(#[from] IdentityError),

    #[error("failed to render output: {0}")]
    Output(serde_json::Error),
}

impl CliError {
    pub fn to_response(&self) -> ErrorResponse {
        match self {
            CliError::Post(err) => ErrorResponse::from(err),
            CliError::Genesis(err) | CliError::Snapshot(SnapshotError::Genesis(err)) => {
                ErrorResponse::new(genesis_code(err), "Invalid Genesis")
                    .with_detail(err.to_string())
            }
            CliError::Snapshot(err) => {
                ErrorResponse::new(1106, "State File Error").with_detail(err.to_string())
            }
            CliError::Identity(err) => {
                ErrorResponse::new(1100, "Invalid Address").with_detail(err.to_string())
            }
            CliError::Output(err) => {
                ErrorResponse::new(1106, "Output Error").with_detail(err.to_string())
            }
        }
    }
}

fn genesis_code(err: &GenesisError) -> u32 {
    match err {
        GenesisError::Persist(_) => 1106,
        _ => 1107,
    }
}

pub type CliResult<T> = Result<T, CliError>;
