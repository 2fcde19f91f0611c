use crate::b64;
use crate::crypto;
use crate::error::*;

/// Bytes of entropy in a generated nonce.
const NONCE_BYTES: usize = 16;

/// Generate a fresh nonce: 128 bits from the cryptographer's secure random source, encoded as
/// url-safe base64 without padding.  The result never contains `"`, whitespace, or `=`.
pub fn generate() -> Result<String> {
    let mut bytes = [0u8; NONCE_BYTES];
    crypto::get_cryptographer().rand_bytes(&mut bytes)?;
    Ok(b64::url_safe(&bytes))
}
