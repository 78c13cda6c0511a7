use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// Form-urlencoded component percent-encode set
// Based on https://url.spec.whatwg.org/#urlencoded-serializing

/// Everything but ASCII alphanumerics, `-`, `_`, `.`, `~` is percent-encoded.
/// Space is excluded here because it serializes as `+`.
pub const FORM_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b' ');

/// Encode a query component (key or value) for serialization.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, FORM_SET)
        .to_string()
        .replace(' ', "+")
}

/// Decode a query component.
///
/// `+` decodes to space; invalid percent sequences pass through as literals,
/// and non-UTF-8 bytes are replaced rather than rejected.
pub fn decode_component(input: &str) -> String {
    let unplussed = input.replace('+', " ");
    percent_encoding::percent_decode_str(&unplussed)
        .decode_utf8_lossy()
        .into_owned()
}
