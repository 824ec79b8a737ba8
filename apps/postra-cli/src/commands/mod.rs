//! Subcommands and their execution.

use std::path::PathBuf;

use clap::Subcommand;
use serde_json::Value;

use postra_core::genesis::{export_genesis, init_genesis};
use postra_core::ports::AddressCodec;
use postra_core::{CreatePost, DeletePost, UpdatePost};
use postra_infra::{InMemoryKvStore, SnapshotFile};
use postra_shared::ApiResponse;
use postra_shared::dto::{CreatePostResponse, ListPostsResponse, ParamsResponse, PostResponse};

use crate::error::{CliError, CliResult};
use crate::state::AppState;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create post
    CreatePost {
        title: String,
        content_uri: String,
        content_hash: String,
        /// Address of the signer
        #[arg(long)]
        from: String,
    },
    /// Update post
    UpdatePost {
        id: u64,
        title: String,
        content_uri: String,
        content_hash: String,
        #[arg(long)]
        from: String,
    },
    /// Delete post
    DeletePost {
        id: u64,
        #[arg(long)]
        from: String,
    },
    /// Gets a post by id
    #[command(alias = "show-post")]
    GetPost { id: u64 },
    /// List all post
    ListPost,
    /// Shows the parameters of the module
    Params,
    /// Replace the state file with a validated genesis file
    InitGenesis { file: PathBuf },
    /// Print the current state as a genesis document
    ExportGenesis,
    /// Check a genesis file without loading it
    ValidateGenesis { file: PathBuf },
    /// Encode a label as an address, for local testing
    Address { label: String },
}

impl Command {
    /// Whether a successful run changes the state file.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Command::CreatePost { .. } | Command::UpdatePost { .. } | Command::DeletePost { .. }
        )
    }
}

/// Run a command against loaded state, returning the JSON to print.
pub async fn execute(state: &AppState, command: Command) -> CliResult<Value> {
    match command {
        Command::CreatePost {
            title,
            content_uri,
            content_hash,
            from,
        } => {
            let id = state
                .service
                .create_post(CreatePost {
                    creator: from,
                    title,
                    content_uri,
                    content_hash,
                })
                .await?;
            to_json(ApiResponse::ok(CreatePostResponse { id }))
        }
        Command::UpdatePost {
            id,
            title,
            content_uri,
            content_hash,
            from,
        } => {
            state
                .service
                .update_post(UpdatePost {
                    actor: from,
                    id,
                    title,
                    content_uri,
                    content_hash,
                })
                .await?;
            to_json(ApiResponse::ok_with_message(id, "post updated"))
        }
        Command::DeletePost { id, from } => {
            state
                .service
                .delete_post(DeletePost { actor: from, id })
                .await?;
            to_json(ApiResponse::ok_with_message(id, "post deleted"))
        }
        Command::GetPost { id } => {
            let post = state.service.get_post(id).await?;
            to_json(ApiResponse::ok(PostResponse::from(post)))
        }
        Command::ListPost => {
            let posts = state.service.list_posts().await?;
            let post_count = state.service.post_count().await?;
            to_json(ApiResponse::ok(ListPostsResponse {
                posts: posts.into_iter().map(PostResponse::from).collect(),
                post_count,
            }))
        }
        Command::Params => {
            let params = state.service.params().await?;
            to_json(ApiResponse::ok(ParamsResponse { params }))
        }
        Command::InitGenesis { file } => {
            // Load into a scratch store so a bad file never touches the state file.
            let genesis = SnapshotFile::new(file).read_existing().await?;
            let scratch = InMemoryKvStore::new();
            init_genesis(&scratch, &genesis).await?;
            state.snapshot.save_from(&scratch).await?;
            to_json(ApiResponse::ok_with_message(
                genesis.post_list.len(),
                "genesis loaded",
            ))
        }
        Command::ExportGenesis => {
            let genesis = export_genesis(state.store.as_ref()).await?;
            to_json(genesis)
        }
        Command::ValidateGenesis { file } => {
            let genesis = SnapshotFile::new(file).read_existing().await?;
            genesis.validate()?;
            to_json(ApiResponse::ok_with_message(
                genesis.post_list.len(),
                "genesis is valid",
            ))
        }
        Command::Address { label } => {
            let address = state.codec.bytes_to_string(label.as_bytes())?;
            to_json(ApiResponse::ok(address))
        }
    }
}

fn to_json<T: serde::Serialize>(value: T) -> CliResult<Value> {
    serde_json::to_value(value).map_err(CliError::Output)
}
