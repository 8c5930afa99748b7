//! # fixwire
//!
//! A fixed-layout, big-endian binary codec for records whose shape is
//! known at compile time.
//!
//! Given a value built from primitive numbers, bools, enums, fixed-size
//! arrays, tuples, [`FixedString`]s, and user-defined aggregates of these,
//! `fixwire` produces a deterministic byte encoding of exact,
//! statically-computable length, and reconstructs the value from such
//! bytes. There are no length prefixes, no framing, and no per-call
//! allocation on the offset-based paths — the encoded size is a property
//! of the type, not of the value.
//!
//! This makes it a fit for compact, portable, byte-exact records: network
//! message bodies, file records, anywhere both sides agree on the record
//! shape ahead of time and bounds-checked encoding matters more than
//! schema flexibility.
//!
//! # Example
//!
//! ```
//! use fixwire::{decode, encodable_enum, encodable_fields, encode, encoded_size, FixedString};
//!
//! encodable_enum! {
//!     #[derive(Default)]
//!     pub enum Team: u8 {
//!         #[default]
//!         Red = 0,
//!         Blue = 1,
//!     }
//! }
//!
//! #[derive(Debug, Default, PartialEq)]
//! pub struct Player {
//!     pub name: FixedString<12>,
//!     pub team: Team,
//!     pub score: i32,
//!     pub position: [f32; 2],
//! }
//!
//! encodable_fields!(Player {
//!     name: FixedString<12>,
//!     team: Team,
//!     score: i32,
//!     position: [f32; 2],
//! });
//!
//! // 12 + 1 + 4 + 8 bytes, known at compile time.
//! const PLAYER_WIRE: usize = encoded_size::<Player>();
//! assert_eq!(PLAYER_WIRE, 25);
//!
//! let player = Player {
//!     name: "ada".parse().unwrap(),
//!     team: Team::Blue,
//!     score: -3,
//!     position: [1.0, 2.5],
//! };
//!
//! let bytes = encode(&player);
//! assert_eq!(bytes.len(), PLAYER_WIRE);
//! let back: Player = decode(&bytes).unwrap();
//! assert_eq!(back, player);
//! ```
//!
//! # Modules
//!
//! - [`encoding`] — the [`Encodable`] contract, built-in impls, codec
//!   entry points, and `std::io` adapters
//! - [`types`] — [`FixedString`], the fixed-capacity NUL-padded string
//! - [`error`] — [`CodecError`]
//!
//! # Feature flags
//!
//! - `serde` — capacity-checked, string-shaped `Serialize`/`Deserialize`
//!   for [`FixedString`] (the wire format itself is never serde-based)

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod encoding;
pub mod error;
pub mod types;

// Re-export the full public surface at the root
pub use encoding::{
    decode, decode_from_reader, decode_into, encode, encode_into, encode_to_writer, encoded_size,
    Encodable,
};
pub use error::CodecError;
pub use types::FixedString;
