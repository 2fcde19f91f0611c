use super::{CryptoError, Cryptographer, HmacKey};
use failure::err_msg;
use ring::hmac;
use ring::rand::{SecureRandom, SystemRandom};

impl From<ring::error::Unspecified> for CryptoError {
    // Ring's errors are entirely opaque
    fn from(_: ring::error::Unspecified) -> Self {
        CryptoError::Other(err_msg("Unspecified ring error"))
    }
}

/// The default cryptographer, backed by `ring`.
#[derive(Debug)]
pub struct RingCryptographer;

struct RingHmacKey(hmac::Key);

impl HmacKey for RingHmacKey {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let tag = hmac::sign(&self.0, data);
        Ok(tag.as_ref().to_vec())
    }
}

impl Cryptographer for RingCryptographer {
    fn rand_bytes(&self, output: &mut [u8]) -> Result<(), CryptoError> {
        SystemRandom::new().fill(output)?;
        Ok(())
    }

    fn new_key(&self, key: &[u8]) -> Result<Box<dyn HmacKey>, CryptoError> {
        Ok(Box::new(RingHmacKey(hmac::Key::new(hmac::HMAC_SHA256, key))))
    }
}
