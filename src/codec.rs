use std::fmt;

use crate::IdType;

// Crockford's Base32: digits and uppercase letters excluding I, L, O, U.
// A symbol's position in this string is its numeric value.
const ALPHABET: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Fixed prefix carried by every identifier.
pub const PREFIX: &str = "AUR";

/// Total identifier length in characters.
pub const ID_LENGTH: usize = 15;

// Width of the encoded timestamp in base-32 digits.
const TIMESTAMP_WIDTH: usize = 10;

/// Largest millisecond timestamp that fits in ten base-32 digits (2^50 - 1).
pub const MAX_TIMESTAMP: u64 = (1 << 50) - 1;

/// Error returned for encode, decode and validation failures.
#[derive(Debug, PartialEq)]
pub enum Error {
    ChecksumMismatch { received: char, expected: char },
    InvalidCharacter { received: char },
    InvalidFormat,
    InvalidLength { received: usize },
    InvalidPrefix { received: String },
    InvalidTypeTag { received: char },
    TimestampOverflow { received: u64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ChecksumMismatch { received, expected } => {
                write!(f, "Check digit was {}, expected {}", received, expected)
            }
            Error::InvalidCharacter { received } => {
                write!(f, "Character {} is not in the base-32 alphabet", received)
            }
            Error::InvalidFormat => {
                write!(f, "Timestamp contains characters outside the base-32 alphabet")
            }
            Error::InvalidLength { received } => {
                write!(f, "Length was {} characters", received)
            }
            Error::InvalidPrefix { received } => {
                write!(f, "Prefix was {}, expected {}", received, PREFIX)
            }
            Error::InvalidTypeTag { received } => {
                write!(f, "Unknown type tag: {}", received)
            }
            Error::TimestampOverflow { received } => {
                write!(f, "Timestamp {} does not fit in ten base-32 digits", received)
            }
        }
    }
}

impl std::error::Error for Error {}

fn alphabet_index(c: char) -> Option<u64> {
    // The alphabet is ASCII, so the byte position is the symbol value.
    ALPHABET.find(c).map(|i| i as u64)
}

fn alphabet_char(index: u64) -> char {
    ALPHABET.as_bytes()[index as usize] as char
}

/// Encodes a millisecond timestamp as exactly ten base-32 digits,
/// most significant digit first, zero-padded.
///
/// Timestamps above [`MAX_TIMESTAMP`] are rejected rather than truncated.
///
/// # Examples
///
/// ```
/// use auracle_id::encode_timestamp;
///
/// assert_eq!(encode_timestamp(0).unwrap(), "0000000000");
/// assert_eq!(encode_timestamp(1741561683653).unwrap(), "01JNYJMQP5");
/// ```
pub fn encode_timestamp(millis: u64) -> Result<String, Error> {
    if millis > MAX_TIMESTAMP {
        return Err(Error::TimestampOverflow { received: millis });
    }
    let mut remaining = millis;
    let mut digits = ['0'; TIMESTAMP_WIDTH];
    for slot in digits.iter_mut().rev() {
        *slot = alphabet_char(remaining % 32);
        remaining /= 32;
    }
    Ok(digits.iter().collect())
}

/// Decodes a ten-digit base-32 timestamp back to milliseconds.
///
/// # Examples
///
/// ```
/// use auracle_id::decode_timestamp;
///
/// assert_eq!(decode_timestamp("0000000000").unwrap(), 0);
/// assert_eq!(decode_timestamp("01JNYJMQP5").unwrap(), 1741561683653);
/// ```
pub fn decode_timestamp(encoded: &str) -> Result<u64, Error> {
    let length = encoded.chars().count();
    if length != TIMESTAMP_WIDTH {
        return Err(Error::InvalidLength { received: length });
    }
    let mut sum = 0u64;
    for c in encoded.chars() {
        let index = alphabet_index(c).ok_or(Error::InvalidCharacter { received: c })?;
        sum = sum * 32 + index;
    }
    Ok(sum)
}

/// Computes the mod-31 check digit over a string of alphabet characters.
///
/// The digit is the alphabet symbol at the sum of all symbol values modulo 31,
/// so `Z` (value 31) never appears as a check digit.
pub fn check_digit(payload: &str) -> Result<char, Error> {
    let mut total = 0u64;
    for c in payload.chars() {
        total += alphabet_index(c).ok_or(Error::InvalidCharacter { received: c })?;
    }
    Ok(alphabet_char(total % 31))
}

/// Builds the full identifier string for a type tag and timestamp.
pub(crate) fn assemble(id_type: IdType, millis: u64) -> Result<String, Error> {
    let encoded = encode_timestamp(millis)?;
    let mut payload = String::with_capacity(ID_LENGTH - PREFIX.len());
    payload.push(id_type.code());
    payload.push_str(&encoded);
    let check = check_digit(&payload)?;
    Ok(format!("{}{}{}", PREFIX, payload, check))
}

/// Validates an identifier string, reporting the first failed check.
///
/// Checks run cheapest first: length, prefix, type tag, check digit, and
/// finally alphabet membership of the timestamp digits. Each failure maps to
/// a distinct [`Error`] variant; a valid identifier yields `Ok(())`.
///
/// # Examples
///
/// ```
/// use auracle_id::{validate, Error};
///
/// assert!(validate("AURR01JNYJMQP5V").is_ok());
/// assert_eq!(
///     validate("AURR01JNYJMQP5A"),
///     Err(Error::ChecksumMismatch { received: 'A', expected: 'V' }),
/// );
/// ```
pub fn validate(value: &str) -> Result<(), Error> {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() != ID_LENGTH {
        return Err(Error::InvalidLength { received: chars.len() });
    }

    if !value.starts_with(PREFIX) {
        let received = chars[..PREFIX.len()].iter().collect();
        return Err(Error::InvalidPrefix { received });
    }

    let tag = chars[3];
    if IdType::from_code(tag).is_none() {
        return Err(Error::InvalidTypeTag { received: tag });
    }

    // Recompute the check digit over the tag and timestamp. The tag was
    // checked above, so a character failure here means the timestamp holds
    // something outside the alphabet.
    let payload: String = chars[3..14].iter().collect();
    let expected = check_digit(&payload).map_err(|_| Error::InvalidFormat)?;
    if chars[14] != expected {
        return Err(Error::ChecksumMismatch {
            received: chars[14],
            expected,
        });
    }

    if !chars[4..14].iter().all(|&c| ALPHABET.contains(c)) {
        return Err(Error::InvalidFormat);
    }

    Ok(())
}
