//! Prefixed lowercase-hex address codec.
//!
//! Addresses look like `postra1` followed by the hex-encoded account bytes.
//! Only lowercase hex is accepted so each account has exactly one string
//! form, which keeps ownership checks a plain string comparison.

use postra_core::error::IdentityError;
use postra_core::ports::AddressCodec;

pub const DEFAULT_PREFIX: &str = "postra";

const SEPARATOR: char = '1';
const MAX_ADDRESS_BYTES: usize = 64;

#[derive(Debug, Clone)]
pub struct HexAddressCodec {
    prefix: String,
}

impl HexAddressCodec {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for HexAddressCodec {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl AddressCodec for HexAddressCodec {
    fn string_to_bytes(&self, address: &str) -> Result<Vec<u8>, IdentityError> {
        if address.is_empty() {
            return Err(IdentityError::Empty);
        }

        let payload = address
            .strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_prefix(SEPARATOR))
            .ok_or_else(|| IdentityError::WrongPrefix {
                expected: format!("{}{}", self.prefix, SEPARATOR),
            })?;

        if payload
            .chars()
            .any(|c| !c.is_ascii_digit() && !('a'..='f').contains(&c))
        {
            return Err(IdentityError::Encoding(payload.to_string()));
        }

        let bytes = hex::decode(payload).map_err(|e| IdentityError::Encoding(e.to_string()))?;
        if bytes.is_empty() || bytes.len() > MAX_ADDRESS_BYTES {
            return Err(IdentityError::Length(bytes.len()));
        }
        Ok(bytes)
    }

    fn bytes_to_string(&self, bytes: &[u8]) -> Result<String, IdentityError> {
        if bytes.is_empty() || bytes.len() > MAX_ADDRESS_BYTES {
            return Err(IdentityError::Length(bytes.len()));
        }
        Ok(format!("{}{}{}", self.prefix, SEPARATOR, hex::encode(bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_then_decode() {
        let codec = HexAddressCodec::default();
        let addr = codec.bytes_to_string(b"signerAddr__________________").unwrap();

        assert!(addr.starts_with("postra1"));
        assert_eq!(
            codec.string_to_bytes(&addr).unwrap(),
            b"signerAddr__________________"
        );
    }

    #[test]
    fn test_rejects_malformed() {
        let codec = HexAddressCodec::default();

        assert_eq!(codec.string_to_bytes(""), Err(IdentityError::Empty));
        assert!(matches!(
            codec.string_to_bytes("invalid"),
            Err(IdentityError::WrongPrefix { .. })
        ));
        assert!(matches!(
            codec.string_to_bytes("cosmos1abcd"),
            Err(IdentityError::WrongPrefix { .. })
        ));
        assert!(matches!(
            codec.string_to_bytes("postra1ABCD"),
            Err(IdentityError::Encoding(_))
        ));
        assert!(matches!(
            codec.string_to_bytes("postra1abc"),
            Err(IdentityError::Encoding(_))
        ));
        assert_eq!(codec.string_to_bytes("postra1"), Err(IdentityError::Length(0)));
    }

    #[test]
    fn test_custom_prefix() {
        let codec = HexAddressCodec::new("blog");
        let addr = codec.bytes_to_string(&[0xde, 0xad]).unwrap();
        assert_eq!(addr, "blog1dead");
        assert!(HexAddressCodec::default().string_to_bytes(&addr).is_err());
    }
}
