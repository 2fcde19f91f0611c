use crate::crypto::CryptoError;
use failure::Fail;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Fail, Debug)]
pub enum Error {
    #[fail(display = "`{}` is required to create a Hawk header", _0)]
    MissingArgument(&'static str),

    #[fail(display = "Invalid url: {}", _0)]
    InvalidUrl(String),

    #[fail(
        display = "Hawk header component `{}` contains a forbidden character: {:?}",
        name, value
    )]
    InvalidComponent { name: &'static str, value: String },

    #[fail(display = "{}", _0)]
    Crypto(#[fail(cause)] CryptoError),
}

impl From<CryptoError> for Error {
    fn from(e: CryptoError) -> Self {
        Error::Crypto(e)
    }
}
