//! Keyed-store collections: the id sequence, the post records, and the
//! write-buffering unit of work they run inside.

pub(crate) mod records;
pub(crate) mod sequence;
pub(crate) mod unit_of_work;

pub use records::RecordStore;
pub use sequence::IdentitySequence;
pub use unit_of_work::UnitOfWork;

/// Key holding the sequence's next id.
pub const POST_COUNT_KEY: &[u8] = b"post/count";

/// Prefix of every post record key; the id follows as 8 big-endian bytes.
pub const POST_VALUE_PREFIX: &[u8] = b"post/value/";

/// Key holding the JSON-encoded module params.
pub const PARAMS_KEY: &[u8] = b"params";
