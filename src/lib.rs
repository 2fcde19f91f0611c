//! The `hawk-header` crate generates HTTP `Authorization` headers for the [Hawk](https://github.com/hueniverse/hawk)
//! authentication scheme.
//!
//! Hawk signs a request with a key shared between client and server: the request's method,
//! path, query, host, timestamp, nonce, optional payload and optional `ext` data are joined
//! into a normalized string, and its HMAC-SHA256 is sent as the header's `mac`.  The key
//! itself never leaves the client.
//!
//! This crate is a stateless, one-shot header generator.  It does not verify headers, track
//! nonces, or store credentials.
//!
//! The port of the request URL is deliberately not signed, so that requests passing through
//! proxies or load balancers that change the port still verify.
//!
//! # Examples
//!
//! ## Building a header
//!
//! ```
//! use hawk_header::{Credentials, RequestBuilder};
//!
//! let credentials = Credentials::new("dh37fgj492je", "werxhqb98rpaxn39848xrunpaw3489ruxnpa98w4rxn");
//! let request = RequestBuilder::new()
//!     .method("GET")
//!     .host("example.com")
//!     .path("/resource/1")
//!     .query(Some("b=1&a=2"))
//!     .ts("1353832234")
//!     .nonce("j4h3g2")
//!     .request();
//!
//! let header = request.make_authorization(&credentials).unwrap();
//! assert_eq!(
//!     header,
//!     "Hawk id=\"dh37fgj492je\", ts=\"1353832234\", nonce=\"j4h3g2\", ext=\"\", \
//!      mac=\"Ko+ZPCkHzu6HThroPYK6fI/E3AXmWyhXVUQnhfhY54U=\""
//! );
//! ```
//!
//! ## Signing a request body from a URL
//!
//! With payload validation, the body's MAC is signed in place of the body and sent as `hash`.
//! A fresh timestamp and nonce can be filled in by the builder.
//!
//! ```
//! use hawk_header::{Credentials, RequestBuilder};
//! use url::Url;
//!
//! let credentials = Credentials::new("test-client", "no-secret");
//! let url = Url::parse("https://localhost:8000/resource?a=1").unwrap();
//! let header = RequestBuilder::from_url("POST", &url)
//!     .unwrap()
//!     .ts_now()
//!     .generate_nonce()
//!     .unwrap()
//!     .payload(Some("{\"some\": \"json\"}"))
//!     .payload_validation(true)
//!     .request()
//!     .make_header(&credentials)
//!     .unwrap();
//!
//! assert!(header.hash.is_some());
//! assert!(header.to_authorization().starts_with("Hawk id=\"test-client\", "));
//! ```
//!
//! ## Features
//!
//! By default the crate uses `ring` for HMAC-SHA256 and random nonces.  Enable `use_openssl`
//! (and disable default features) to use OpenSSL instead, or install a custom
//! [`crypto::Cryptographer`] with [`crypto::set_cryptographer`].

mod b64;
mod credentials;
pub mod crypto;
mod error;
mod header;
mod mac;
pub mod nonce;
mod request;

pub use crate::credentials::Credentials;
pub use crate::error::*;
pub use crate::header::Header;
pub use crate::mac::Mac;
pub use crate::request::{create_authorization_header, Request, RequestBuilder};
