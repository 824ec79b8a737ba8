use serde::{Deserialize, Serialize};

use super::Post;
use crate::error::GenesisError;

/// Module parameters. There are no tunables yet; the type exists so genesis
/// files carry a stable `params` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {}

impl Params {
    pub fn validate(&self) -> Result<(), GenesisError> {
        Ok(())
    }
}

/// Bulk-loaded initial state: the post collection plus the declared count,
/// which becomes the sequence's next id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    #[serde(default)]
    pub params: Params,
    #[serde(default)]
    pub post_list: Vec<Post>,
    #[serde(default)]
    pub post_count: u64,
}
