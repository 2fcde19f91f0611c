// This binary installs its own cryptographer, which can only happen once per process, so it
// holds a single test.
use failure::err_msg;
use hawk_header::crypto::{set_cryptographer, CryptoError, Cryptographer, HmacKey};
use hawk_header::{nonce, Credentials, Error, RequestBuilder};

struct BrokenCryptographer;

impl Cryptographer for BrokenCryptographer {
    fn rand_bytes(&self, output: &mut [u8]) -> Result<(), CryptoError> {
        for b in output.iter_mut() {
            *b = 7;
        }
        Ok(())
    }

    fn new_key(&self, _key: &[u8]) -> Result<Box<dyn HmacKey>, CryptoError> {
        Err(CryptoError::Other(err_msg("key rejected")))
    }
}

#[test]
fn custom_cryptographer() {
    set_cryptographer(&BrokenCryptographer).unwrap();
    assert!(set_cryptographer(&BrokenCryptographer).is_err());

    assert_eq!(nonce::generate().unwrap(), "BwcHBwcHBwcHBwcHBwcHBw");

    let credentials = Credentials::new("me", "key");
    let result = RequestBuilder::new()
        .method("GET")
        .host("example.com")
        .path("/")
        .ts("1353832234")
        .nonce("j4h3g2")
        .request()
        .make_header(&credentials);
    match result {
        Err(Error::Crypto(e)) => assert_eq!(e.to_string(), "key rejected"),
        other => panic!("expected a crypto error, got {:?}", other),
    }

    // missing arguments are reported before any cryptography happens
    let result = RequestBuilder::new()
        .host("example.com")
        .path("/")
        .request()
        .make_header(&credentials);
    match result {
        Err(Error::MissingArgument(name)) => assert_eq!(name, "method"),
        other => panic!("expected a missing argument, got {:?}", other),
    }

    // ..and so are framing characters in strict mode
    let result = RequestBuilder::new()
        .method("GET")
        .host("example.com")
        .path("/")
        .ts("1353832234")
        .nonce("j4h3g2")
        .ext(Some("a\"b"))
        .strict(true)
        .request()
        .make_header(&credentials);
    match result {
        Err(Error::InvalidComponent { name, .. }) => assert_eq!(name, "ext"),
        other => panic!("expected an invalid component, got {:?}", other),
    }
}
