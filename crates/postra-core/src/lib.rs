//! # Postra Core
//!
//! The domain layer of the Postra post registry.
//! This crate contains the post lifecycle rules with zero infrastructure dependencies:
//! field validation, id sequencing, ownership checks and genesis consistency.

pub mod domain;
pub mod error;
pub mod genesis;
pub mod ports;
pub mod service;
pub mod store;
pub mod validation;

pub use domain::{GenesisState, Params, Post, PostEvent};
pub use error::{FieldError, GenesisError, IdentityError, PostError, StoreError};
pub use service::{CreatePost, DeletePost, PostService, UpdatePost};
