//! The encodable-type contract.

use crate::error::CodecError;

use super::cursor::{Reader, Writer};

/// A type with a fixed-layout, statically sized wire encoding.
///
/// Implementations fall into four families, and every encodable type
/// belongs to exactly one of them:
///
/// - **scalars**: fixed-width integers, floats, and `bool`;
/// - **enumerations**: fieldless enums declared through
///   [`encodable_enum!`](crate::encodable_enum), encoded as their
///   underlying integer;
/// - **fixed sequences**: `[T; N]` arrays and tuples of encodable
///   elements;
/// - **aggregates**: structs whose participating fields are declared
///   through [`encodable_fields!`](crate::encodable_fields).
///
/// A type outside these families simply does not implement the trait, so
/// attempting to encode it is a compile error rather than a runtime one.
/// Classification is a pure property of the type: it never depends on a
/// value's runtime content, and `WIDTH` is the same every time it is read.
///
/// `usize` and `isize` are deliberately not encodable; their width varies
/// by platform, which a portable wire format cannot tolerate.
///
/// # Contract for hand-written impls
///
/// `write_to` must produce exactly `WIDTH` bytes and `read_from` must
/// consume exactly `WIDTH` bytes. The codec entry points validate buffer
/// bounds once against `WIDTH` before the walk begins, so an impl that
/// disagrees with its own `WIDTH` is a programmer error and panics. The
/// macros and built-in impls satisfy this by construction.
pub trait Encodable {
    /// Exact encoded size in bytes, computed from the type's shape alone.
    const WIDTH: usize;

    /// Writes the big-endian encoding of `self` at the writer's position.
    fn write_to(&self, writer: &mut Writer<'_>);

    /// Reassigns `self` from the bytes at the reader's position.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidDiscriminant`] when the bytes hold an
    /// integer that matches no variant of an enum field. Bounds violations
    /// are impossible here; they are rejected before the walk starts.
    fn read_from(&mut self, reader: &mut Reader<'_>) -> Result<(), CodecError>;
}
