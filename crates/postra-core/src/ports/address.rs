use crate::error::IdentityError;

/// Address codec - decides whether an identity string is well formed.
pub trait AddressCodec: Send + Sync {
    /// Decode an address string into its raw bytes.
    fn string_to_bytes(&self, address: &str) -> Result<Vec<u8>, IdentityError>;

    /// Encode raw bytes as an address string.
    fn bytes_to_string(&self, bytes: &[u8]) -> Result<String, IdentityError>;
}
