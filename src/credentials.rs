use std::fmt;

/// Hawk credentials: an ID and a key associated with that ID.
///
/// The key is shared out-of-band with the server and is never transmitted; its UTF-8 bytes
/// are used directly as the HMAC-SHA256 key.  No validation of key strength is performed,
/// but note that passwords should *not* be used as keys.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    id: String,
    key: String,
}

impl Credentials {
    pub fn new<S, K>(id: S, key: K) -> Credentials
    where
        S: Into<String>,
        K: Into<String>,
    {
        Credentials {
            id: id.into(),
            key: key.into(),
        }
    }

    /// The identifier sent in cleartext in the `id` header attribute.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The shared secret.  It is only ever used as the HMAC key and is never transmitted.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("id", &self.id)
            .field("key", &"..")
            .finish()
    }
}
