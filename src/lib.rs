//! `auracle-id` generates and validates short, sortable, typed identifiers
//! with a built-in check digit.
//!
//! An identifier is a fixed 15-character string, `PPPATTTTTTTTTTC`:
//!
//! - `PPP` — the literal prefix `AUR`;
//! - `A` — a single-character type tag from the closed [`IdType`] set;
//! - `TTTTTTTTTT` — a millisecond Unix timestamp in ten Crockford Base32
//!   digits, most significant first;
//! - `C` — a mod-31 check digit over the tag and timestamp, catching
//!   transcription and corruption errors.
//!
//! Timestamps come from a monotonic [`Generator`], so identifiers issued by
//! one process are unique and sort lexicographically in creation order even
//! when generated faster than once per millisecond. The encoding alphabet
//! omits the easily-confused I, L, O and U.
//!
//! # Usage
//!
//! ## The `Id` value type (recommended)
//!
//! [`Id`] wraps a validated identifier and exposes its derived views. It
//! serializes as a plain string with Serde and maps to Postgres `Text`
//! columns with Diesel.
//!
//! ```
//! use auracle_id::{Id, IdType};
//!
//! let id = Id::generate(IdType::Recording);
//! assert_eq!(id.as_str().len(), 15);
//! assert!(id.as_str().starts_with("AURR"));
//! assert_eq!(id.id_type(), IdType::Recording);
//!
//! // Existing strings are validated on construction.
//! let id = Id::new("AURR01JNYJMQP5V").unwrap();
//! assert_eq!(id.created_at().timestamp_millis(), 1741561683653);
//! ```
//!
//! ```
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Recording {
//!     pub id: auracle_id::Id,
//! }
//!
//! let obj = Recording {
//!     id: auracle_id::Id::new("AURR01JNYJMQP5V").unwrap(),
//! };
//! let obj_str = serde_json::to_string(&obj).unwrap();
//! assert_eq!(obj_str, "{\"id\":\"AURR01JNYJMQP5V\"}");
//! ```
//!
//! ## Low level API
//!
//! The codec pieces are available directly for callers that work with raw
//! strings.
//!
//! ```
//! use auracle_id::{decode_timestamp, encode_timestamp, validate};
//!
//! let encoded = encode_timestamp(1741561683653).unwrap();
//! assert_eq!(encoded, "01JNYJMQP5");
//! assert_eq!(decode_timestamp(&encoded).unwrap(), 1741561683653);
//! assert!(validate("AURR01JNYJMQP5V").is_ok());
//! ```

mod codec;
mod generator;
mod id;

pub use codec::{
    check_digit, decode_timestamp, encode_timestamp, validate, Error, ID_LENGTH, MAX_TIMESTAMP,
    PREFIX,
};
pub use generator::Generator;
pub use id::{decode_creation_time, Id, IdType};
