//! `hawk-header` must depend on a cryptography library for HMAC-SHA256 and for secure random
//! bytes. By default it uses `ring`, and the `use_openssl` feature switches it to `openssl`.
//! Applications with other needs can provide their own [`Cryptographer`] and install it with
//! [`set_cryptographer`] before the first header is generated.
use failure::Fail;

pub(crate) mod holder;
pub(crate) use holder::get_cryptographer;
pub use holder::{set_boxed_cryptographer, set_cryptographer, SetCryptographerError};

#[cfg(feature = "use_ring")]
mod ring;

#[cfg(feature = "use_openssl")]
mod openssl;

#[cfg(feature = "use_ring")]
pub use self::ring::RingCryptographer;

#[cfg(feature = "use_openssl")]
pub use self::openssl::OpensslCryptographer;

#[derive(Debug, Fail)]
pub enum CryptoError {
    /// The backend failed to initialize an HMAC key, sign data, or produce random bytes.
    #[fail(display = "{}", _0)]
    Other(#[fail(cause)] failure::Error),
}

/// An HMAC-SHA256 key, ready to sign data.
pub trait HmacKey: Send + Sync {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

/// A source of the cryptographic primitives Hawk header generation needs.
pub trait Cryptographer: Send + Sync + 'static {
    /// Fill `output` with cryptographically secure random bytes.
    fn rand_bytes(&self, output: &mut [u8]) -> Result<(), CryptoError>;

    /// Initialize an HMAC-SHA256 key from raw key bytes.
    fn new_key(&self, key: &[u8]) -> Result<Box<dyn HmacKey>, CryptoError>;
}
