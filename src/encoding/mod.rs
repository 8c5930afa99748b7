//! The fixed-layout encode/decode engine.
//!
//! This module holds the codec core: the [`Encodable`] contract, the
//! built-in impls for scalars and fixed sequences, the declaration macros
//! for aggregates and enums, and the entry points that walk a value
//! against a byte buffer.
//!
//! # Wire format
//!
//! A record encodes as the concatenation of its big-endian fixed-width
//! fields in declaration order — no framing, no length prefixes, no
//! padding between fields beyond what a type defines internally (such as a
//! [`FixedString`](crate::FixedString)'s zero padding to its capacity).
//! The total length equals [`encoded_size::<T>()`](encoded_size) and is
//! not self-describing; the reader must know the expected type.
//!
//! # Entry points
//!
//! - [`encoded_size`] — static size of a type's encoding
//! - [`encode`] / [`encode_into`] — write path
//! - [`decode`] / [`decode_into`] — read path (strict and offset-based)
//! - [`encode_to_writer`] / [`decode_from_reader`] — `std::io` adapters

mod codec;
mod composite;
mod cursor;
mod enums;
mod record;
mod scalar;
mod stream;
mod traits;


pub use codec::{decode, decode_into, encode, encode_into, encoded_size};
pub use cursor::{Reader, Writer};
pub use stream::{decode_from_reader, encode_to_writer};
pub use traits::Encodable;
