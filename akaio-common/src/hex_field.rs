//! Fixed-length hex field parsing.
//!
//! Every aka-io input is a hex string that must decode to an exact number of
//! bytes. Surrounding whitespace is ignored; anything else that is not a hex
//! digit, or a string of the wrong length, is rejected with an error that
//! names the field.

use crate::error::Error;

/// Decodes `input` as hex after checking it has exactly `expected_chars`
/// characters.
///
/// # Arguments
/// * `input` - Raw hex string, surrounding whitespace is trimmed
/// * `expected_chars` - Required number of hex characters
/// * `field` - Field name used in error messages (e.g. "K", "SQN")
///
/// # Example
/// ```
/// use akaio_common::decode_hex_field;
///
/// let amf = decode_hex_field(" b9b9 ", 4, "AMF").unwrap();
/// assert_eq!(amf, vec![0xb9, 0xb9]);
/// assert!(decode_hex_field("b9b", 4, "AMF").is_err());
/// ```
pub fn decode_hex_field(input: &str, expected_chars: usize, field: &str) -> Result<Vec<u8>, Error> {
    let trimmed = input.trim();
    let actual = trimmed.chars().count();
    if actual != expected_chars {
        return Err(Error::InvalidLength {
            field: field.to_string(),
            expected: expected_chars,
            actual,
        });
    }

    hex::decode(trimmed).map_err(|reason| Error::InvalidHex {
        field: field.to_string(),
        reason,
    })
}

/// Decodes a hex field into a fixed-size array of `N` bytes (`2 * N` hex
/// characters).
pub fn decode_hex_array<const N: usize>(input: &str, field: &str) -> Result<[u8; N], Error> {
    let bytes = decode_hex_field(input, N * 2, field)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Encodes bytes as an uppercase hex string.
#[inline]
pub fn encode_hex_upper(data: &[u8]) -> String {
    hex::encode_upper(data)
}
