//! This module contains basic base64 functionality as used in Hawk.

/// Encode with the standard alphabet, including padding. Used for `mac` and `hash`.
pub(crate) fn standard(input: &[u8]) -> String {
    base64::encode_config(input, base64::STANDARD)
}

/// Encode to a url-safe value with no padding. Used for generated nonces, which must stay
/// inside a quoted header attribute.
pub(crate) fn url_safe(input: &[u8]) -> String {
    base64::encode_config(input, base64::URL_SAFE_NO_PAD)
}
