use crate::b64;
use crate::credentials::Credentials;
use crate::crypto;
use crate::error::*;
use std::fmt;
use std::ops::Deref;

const HEADER_TAG: &str = "hawk.1.header";

/// A HMAC-SHA256 value, keyed by a credential's key.
///
/// Hawk uses this for both the `mac` attribute (computed over the normalized request string)
/// and, with payload validation, the `hash` attribute (computed over the raw payload).  Its
/// `Display` form is standard padded base64, exactly as it appears in a header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Mac(Vec<u8>);

impl Mac {
    /// Compute the MAC of `text` using the key in `credentials`.
    pub fn compute(credentials: &Credentials, text: &str) -> Result<Mac> {
        let key = crypto::get_cryptographer().new_key(credentials.key().as_bytes())?;
        Ok(Mac(key.sign(text.as_bytes())?))
    }

    pub(crate) fn for_request(credentials: &Credentials, fields: &Normalized) -> Result<Mac> {
        Mac::compute(credentials, &fields.to_string())
    }
}

impl From<Vec<u8>> for Mac {
    fn from(original: Vec<u8>) -> Self {
        Mac(original)
    }
}

impl Deref for Mac {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Mac {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Mac {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&b64::standard(&self.0))
    }
}

/// The request attributes covered by the header MAC.
///
/// Its `Display` form is the normalized string: each field on its own line, newline-terminated,
/// with no escaping.  The port is intentionally absent, since proxies and load balancers may
/// change it between client and server.
#[derive(Debug, Clone)]
pub(crate) struct Normalized<'a> {
    pub ts: &'a str,
    pub nonce: &'a str,
    pub method: &'a str,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub host: &'a str,
    pub payload: &'a str,
    pub ext: &'a str,
}

impl<'a> fmt::Display for Normalized<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", HEADER_TAG)?;
        writeln!(f, "{}", self.ts)?;
        writeln!(f, "{}", self.nonce)?;
        writeln!(f, "{}", self.method.to_uppercase())?;
        match self.query {
            Some(query) => writeln!(f, "{}?{}", self.path, query)?,
            None => writeln!(f, "{}", self.path)?,
        }
        writeln!(f, "{}", self.host)?;
        writeln!(f, "{}", self.payload)?;
        writeln!(f, "{}", self.ext)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn credentials() -> Credentials {
        Credentials::new("dh37fgj492je", "werxhqb98rpaxn39848xrunpaw3489ruxnpa98w4rxn")
    }

    fn fields<'a>() -> Normalized<'a> {
        Normalized {
            ts: "1353832234",
            nonce: "j4h3g2",
            method: "GET",
            path: "/resource/1",
            query: Some("b=1&a=2"),
            host: "example.com",
            payload: "",
            ext: "",
        }
    }

    #[test]
    fn test_normalized_string() {
        assert_eq!(
            fields().to_string(),
            "hawk.1.header\n1353832234\nj4h3g2\nGET\n/resource/1?b=1&a=2\nexample.com\n\n\n"
        );
    }

    #[test]
    fn test_normalized_string_without_query() {
        let n = Normalized {
            path: "/v1/x",
            query: None,
            ..fields()
        };
        assert_eq!(
            n.to_string(),
            "hawk.1.header\n1353832234\nj4h3g2\nGET\n/v1/x\nexample.com\n\n\n"
        );
    }

    #[test]
    fn test_normalized_string_with_query() {
        let n = Normalized {
            path: "/v1/x",
            query: Some("a=1"),
            ..fields()
        };
        assert!(n.to_string().contains("\n/v1/x?a=1\n"));
    }

    #[test]
    fn test_normalized_string_with_empty_query() {
        let n = Normalized {
            path: "/v1/x",
            query: Some(""),
            ..fields()
        };
        assert_eq!(
            n.to_string(),
            "hawk.1.header\n1353832234\nj4h3g2\nGET\n/v1/x?\nexample.com\n\n\n"
        );
    }

    #[test]
    fn test_normalized_string_uppercases_method() {
        let lower = Normalized {
            method: "get",
            ..fields()
        };
        assert_eq!(lower.to_string(), fields().to_string());
    }

    #[test]
    fn test_normalized_string_payload_and_ext() {
        let n = Normalized {
            method: "post",
            payload: "Thank you for flying Hawk",
            ext: "some-app-ext-data",
            ..fields()
        };
        assert_eq!(
            n.to_string(),
            "hawk.1.header\n1353832234\nj4h3g2\nPOST\n/resource/1?b=1&a=2\nexample.com\n\
             Thank you for flying Hawk\nsome-app-ext-data\n"
        );
    }

    #[test]
    fn test_compute() {
        let mac = Mac::compute(&credentials(), "Thank you for flying Hawk").unwrap();
        assert_eq!(
            mac.to_string(),
            "LOss2P+KdyL8JTZGW+Dm+BXK3gZTFWYehcO47I98oyo="
        );
        assert_eq!(mac.len(), 32);
    }

    #[test]
    fn test_compute_empty() {
        let mac = Mac::compute(&credentials(), "").unwrap();
        assert_eq!(
            mac.to_string(),
            "ERO9dvM2szlAGY/ORxVE32k9OhotZ/fgg5rSRFU9Rs8="
        );
    }

    #[test]
    fn test_for_request() {
        let mac = Mac::for_request(&credentials(), &fields()).unwrap();
        assert_eq!(
            mac.to_string(),
            "Ko+ZPCkHzu6HThroPYK6fI/E3AXmWyhXVUQnhfhY54U="
        );
    }

    #[test]
    fn test_empty_key() {
        let credentials = Credentials::new("me", "");
        let n = Normalized {
            ts: "1000",
            nonce: "nonny",
            method: "GET",
            path: "/foo",
            query: None,
            host: "example.com",
            payload: "",
            ext: "",
        };
        let mac = Mac::for_request(&credentials, &n).unwrap();
        assert_eq!(
            mac.to_string(),
            "5A/usvgUad8JB0R5N/L5fleGv5auHY/j32HNQJ2KiKE="
        );
    }
}
