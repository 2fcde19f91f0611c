use super::Cryptographer;
use failure::Fail;
use log::debug;
use once_cell::sync::OnceCell;

// Filled by the first `set_cryptographer`, or by the feature-selected backend on first use.
static CRYPTOGRAPHER: OnceCell<&'static dyn Cryptographer> = OnceCell::new();

#[derive(Debug, Fail)]
#[fail(display = "A cryptographer is already installed")]
pub struct SetCryptographerError(());

/// Install a boxed cryptographer; see [`set_cryptographer`].
pub fn set_boxed_cryptographer(c: Box<dyn Cryptographer>) -> Result<(), SetCryptographerError> {
    set_cryptographer(Box::leak(c))
}

/// Install the cryptographer used for every MAC and generated nonce.
///
/// Only the first installation succeeds.  Generating a header installs the `ring` (or
/// `openssl`) backend if nothing was installed yet, so custom backends must be set up front.
pub fn set_cryptographer(c: &'static dyn Cryptographer) -> Result<(), SetCryptographerError> {
    CRYPTOGRAPHER.set(c).map_err(|_| SetCryptographerError(()))?;
    debug!("installed hawk cryptographer");
    Ok(())
}

pub(crate) fn get_cryptographer() -> &'static dyn Cryptographer {
    install_default();
    CRYPTOGRAPHER
        .get()
        .copied()
        .expect("no cryptographer installed and no backend feature enabled")
}

#[cfg(feature = "use_ring")]
#[inline]
fn install_default() {
    let _ = CRYPTOGRAPHER.set(&super::RingCryptographer);
}

#[cfg(all(feature = "use_openssl", not(feature = "use_ring")))]
#[inline]
fn install_default() {
    let _ = CRYPTOGRAPHER.set(&super::OpensslCryptographer);
}

#[cfg(not(any(feature = "use_openssl", feature = "use_ring")))]
#[inline]
fn install_default() {}
