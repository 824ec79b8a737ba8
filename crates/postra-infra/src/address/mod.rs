//! Address codecs.

mod hex;

pub use self::hex::{DEFAULT_PREFIX, HexAddressCodec};
