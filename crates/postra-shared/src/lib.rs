//! # Postra Shared
//!
//! Wire types shared by every front end: command responses, query
//! responses and the standard result envelope.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
