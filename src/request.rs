use crate::credentials::Credentials;
use crate::error::*;
use crate::header::Header;
use crate::mac::{Mac, Normalized};
use crate::nonce;
use log::{trace, warn};
use std::borrow::Cow;
use std::time::{SystemTime, UNIX_EPOCH};
use url::Url;

/// Request represents a single HTTP request to be signed.
///
/// The structure is created using a RequestBuilder.  Most uses of this library will hold
/// several of the fields in this structure fixed.  Cloning the builder with these fields
/// applied is a convenient way to avoid repeating those fields.
///
/// The method, path, host, timestamp and nonce must be set before a header can be made; a
/// missing one is reported as `Error::MissingArgument`.  The port of the target URL plays no
/// part in the signature.
#[derive(Debug, Clone, Default)]
pub struct Request<'a> {
    method: Option<&'a str>,
    path: Option<&'a str>,
    query: Option<&'a str>,
    host: Option<&'a str>,
    port: Option<u16>,
    ts: Option<Cow<'a, str>>,
    nonce: Option<Cow<'a, str>>,
    ext: Option<&'a str>,
    payload: Option<&'a str>,
    payload_validation: bool,
    strict: bool,
}

impl<'a> Request<'a> {
    /// Create a new Header for this request.
    ///
    /// With payload validation enabled, the payload (or the empty string) is replaced by its
    /// MAC before signing, and that same value is carried in the header's `hash` attribute.
    pub fn make_header(&self, credentials: &Credentials) -> Result<Header> {
        let path = self.path.ok_or(Error::MissingArgument("url"))?;
        let host = self.host.ok_or(Error::MissingArgument("url"))?;
        let method = self.method.ok_or(Error::MissingArgument("method"))?;
        let ts = self.ts.as_deref().ok_or(Error::MissingArgument("ts"))?;
        let nonce = self.nonce.as_deref().ok_or(Error::MissingArgument("nonce"))?;
        let ext = self.ext.unwrap_or("");
        let payload = self.payload.unwrap_or("");

        if self.strict {
            check_component("id", credentials.id(), &['"', '\n'])?;
            check_component("ts", ts, &['"', '\n'])?;
            check_component("nonce", nonce, &['"', '\n'])?;
            check_component("ext", ext, &['"', '\n'])?;
            check_component("method", method, &['\n'])?;
            check_component("path", path, &['\n'])?;
            check_component("query", self.query.unwrap_or(""), &['\n'])?;
            check_component("host", host, &['\n'])?;
        }

        trace!(
            "signing {} {} on {} (payload validation: {})",
            method,
            path,
            host,
            self.payload_validation
        );

        let hash = if self.payload_validation {
            Some(Mac::compute(credentials, payload)?)
        } else {
            None
        };
        let hash_b64 = hash.as_ref().map(|h| h.to_string());

        let mac = Mac::for_request(
            credentials,
            &Normalized {
                ts,
                nonce,
                method,
                path,
                query: self.query,
                host,
                payload: hash_b64.as_deref().unwrap_or(payload),
                ext,
            },
        )?;

        Ok(Header {
            id: credentials.id().to_string(),
            ts: ts.to_string(),
            nonce: nonce.to_string(),
            hash,
            ext: ext.to_string(),
            mac,
        })
    }

    /// Create the complete `Authorization` header value for this request, including the
    /// `Hawk ` scheme prefix.
    pub fn make_authorization(&self, credentials: &Credentials) -> Result<String> {
        Ok(self.make_header(credentials)?.to_authorization())
    }

    /// The port of the target URL, if known.  It is never signed.
    pub fn port(&self) -> Option<u16> {
        self.port
    }
}

fn check_component(name: &'static str, value: &str, forbidden: &[char]) -> Result<()> {
    if value.contains(forbidden) {
        return Err(Error::InvalidComponent {
            name,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct RequestBuilder<'a>(Request<'a>);

impl<'a> RequestBuilder<'a> {
    /// Create a new, empty request builder.
    pub fn new() -> Self {
        RequestBuilder(Request::default())
    }

    /// Create a new request with the method, path, query, host and port taken from the given URL.
    pub fn from_url(method: &'a str, url: &'a Url) -> Result<Self> {
        RequestBuilder::new().method(method).url(url)
    }

    /// Set the request method.  It is uppercased when signing.
    pub fn method(mut self, method: &'a str) -> Self {
        self.0.method = Some(method);
        self
    }

    /// Set the URL path for the request, without any query.
    pub fn path(mut self, path: &'a str) -> Self {
        self.0.path = Some(path);
        self
    }

    /// Set the raw query string for the request, without the leading `?`.
    pub fn query(mut self, query: Option<&'a str>) -> Self {
        self.0.query = query;
        self
    }

    /// Set the URL hostname for the request.  This must not include the port.
    pub fn host(mut self, host: &'a str) -> Self {
        self.0.host = Some(host);
        self
    }

    /// Set the URL port for the request.  Hawk leaves the port out of the MAC, so this is
    /// informational only.
    pub fn port(mut self, port: Option<u16>) -> Self {
        self.0.port = port;
        self
    }

    /// Set the path, query, host and port for the request from a parsed URL.
    pub fn url(self, url: &'a Url) -> Result<Self> {
        let host = url
            .host_str()
            .ok_or_else(|| Error::InvalidUrl(format!("url {} has no host", url)))?;
        Ok(self
            .path(url.path())
            .query(url.query())
            .host(host)
            .port(url.port_or_known_default()))
    }

    /// Set the timestamp, as decimal seconds since the epoch.
    pub fn ts<S>(mut self, ts: S) -> Self
    where
        S: Into<Cow<'a, str>>,
    {
        self.0.ts = Some(ts.into());
        self
    }

    /// Set the timestamp to the current time.
    ///
    /// A system clock set before the epoch yields a timestamp of `0`, which servers will
    /// reject as stale.
    pub fn ts_now(self) -> Self {
        let secs = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs(),
            Err(_) => {
                warn!("system clock is before the unix epoch; using ts=0");
                0
            }
        };
        self.ts(secs.to_string())
    }

    pub fn nonce<S>(mut self, nonce: S) -> Self
    where
        S: Into<Cow<'a, str>>,
    {
        self.0.nonce = Some(nonce.into());
        self
    }

    /// Set the nonce to a freshly generated random value.
    pub fn generate_nonce(self) -> Result<Self> {
        Ok(self.nonce(nonce::generate()?))
    }

    /// Set the `ext` Hawk property for the request
    pub fn ext(mut self, ext: Option<&'a str>) -> Self {
        self.0.ext = ext;
        self
    }

    /// Set the request body.
    pub fn payload(mut self, payload: Option<&'a str>) -> Self {
        self.0.payload = payload;
        self
    }

    /// Enable payload validation, binding the payload's MAC into the header as `hash`.
    pub fn payload_validation(mut self, payload_validation: bool) -> Self {
        self.0.payload_validation = payload_validation;
        self
    }

    /// Reject header components that would corrupt the header line or the normalized string
    /// (`"` or newline in `id`, `ts`, `nonce`, `ext`; newline elsewhere) instead of signing
    /// them verbatim.
    pub fn strict(mut self, strict: bool) -> Self {
        self.0.strict = strict;
        self
    }

    /// Get the request from this builder
    pub fn request(self) -> Request<'a> {
        self.0
    }
}

/// Create a Hawk `Authorization` header value in one call.
///
/// Every argument may be absent; `path` and `host` (the URL), `method`, `ts`, `nonce` and
/// `credentials` are required and their absence is reported as `Error::MissingArgument`
/// before any cryptographic work.  Absent `query`, `ext` and `payload` are treated as
/// missing query and empty strings respectively, and payload validation defaults to off.
#[allow(clippy::too_many_arguments)]
pub fn create_authorization_header(
    path: Option<&str>,
    query: Option<&str>,
    host: Option<&str>,
    method: Option<&str>,
    ts: Option<&str>,
    nonce: Option<&str>,
    credentials: Option<&Credentials>,
    ext: Option<&str>,
    payload: Option<&str>,
    payload_validation: Option<bool>,
) -> Result<String> {
    let request = Request {
        method,
        path,
        query,
        host,
        ts: ts.map(Cow::Borrowed),
        nonce: nonce.map(Cow::Borrowed),
        port: None,
        ext,
        payload,
        payload_validation: payload_validation.unwrap_or(false),
        strict: false,
    };
    let credentials = credentials.ok_or(Error::MissingArgument("credentials"))?;
    request.make_authorization(credentials)
}
