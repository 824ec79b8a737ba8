//! Domain entities - the core business objects.

mod event;
mod genesis;
mod post;

pub use event::{Event, PostEvent};
pub use genesis::{GenesisState, Params};
pub use post::Post;
