use crate::mac::Mac;
use std::fmt;

/// Representation of a Hawk `Authorization` header value.
///
/// The `Display` form is the attribute list, without the `Hawk ` scheme prefix; use
/// [`Header::to_authorization`] for the complete header value.  Attribute values are rendered
/// verbatim, so `id`, `ts`, `nonce` and `ext` must not contain `"` unless the server expects
/// exactly that.
#[derive(Clone, PartialEq, Debug)]
pub struct Header {
    pub id: String,
    pub ts: String,
    pub nonce: String,
    pub hash: Option<Mac>,
    pub ext: String,
    pub mac: Mac,
}

impl Header {
    /// Format the header for use as the value of an `Authorization` HTTP header.
    pub fn to_authorization(&self) -> String {
        format!("Hawk {}", self)
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "id=\"{}\", ts=\"{}\", nonce=\"{}\", ",
            self.id, self.ts, self.nonce
        )?;
        if let Some(ref hash) = self.hash {
            write!(f, "hash=\"{}\", ", hash)?;
        }
        write!(f, "ext=\"{}\", mac=\"{}\"", self.ext, self.mac)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn header() -> Header {
        Header {
            id: "dh37fgj492je".to_string(),
            ts: "1353832234".to_string(),
            nonce: "j4h3g2".to_string(),
            hash: None,
            ext: String::new(),
            mac: vec![
                8, 35, 182, 149, 42, 111, 33, 192, 19, 22, 94, 43, 118, 176, 65, 69, 86, 4, 156,
                184, 85, 107, 249, 242, 172, 200, 66, 209, 57, 63, 38, 83,
            ]
            .into(),
        }
    }

    #[test]
    fn to_str_minimal() {
        assert_eq!(
            header().to_string(),
            "id=\"dh37fgj492je\", ts=\"1353832234\", nonce=\"j4h3g2\", ext=\"\", \
             mac=\"CCO2lSpvIcATFl4rdrBBRVYEnLhVa/nyrMhC0Tk/JlM=\""
        );
    }

    #[test]
    fn to_str_with_hash_and_ext() {
        let h = Header {
            hash: Some(vec![1, 2, 3, 4].into()),
            ext: "my-ext-value".to_string(),
            ..header()
        };
        assert_eq!(
            h.to_string(),
            "id=\"dh37fgj492je\", ts=\"1353832234\", nonce=\"j4h3g2\", hash=\"AQIDBA==\", \
             ext=\"my-ext-value\", mac=\"CCO2lSpvIcATFl4rdrBBRVYEnLhVa/nyrMhC0Tk/JlM=\""
        );
    }

    #[test]
    fn to_authorization_adds_scheme() {
        let auth = header().to_authorization();
        assert!(auth.starts_with("Hawk id=\"dh37fgj492je\", "));
        assert!(auth.ends_with("mac=\"CCO2lSpvIcATFl4rdrBBRVYEnLhVa/nyrMhC0Tk/JlM=\""));
    }
}
