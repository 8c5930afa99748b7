//! Codec entry points.
//!
//! Four operations cover the whole surface: sizing, the write path, and
//! the two read forms. Every call validates buffer bounds exactly once
//! against the type's static width, then walks the value depth-first,
//! left-to-right, in field and element declaration order; the walk itself
//! performs no further bounds checks and touches no byte outside
//! `[offset, offset + WIDTH)`.
//!
//! Failed calls leave the destination unspecified: the walk does not roll
//! back bytes (or fields) written before the failure point.

use crate::error::CodecError;

use super::cursor::{Reader, Writer};
use super::traits::Encodable;

/// The exact number of bytes `T` occupies on the wire.
///
/// A pure function of the type's shape, usable in const context; callers
/// rely on it to pre-size buffers.
///
/// # Example
///
/// ```
/// use fixwire::encoded_size;
///
/// assert_eq!(encoded_size::<(i32, u16)>(), 6);
/// const HEADER: usize = encoded_size::<[u32; 3]>();
/// assert_eq!(HEADER, 12);
/// ```
#[must_use]
pub const fn encoded_size<T: Encodable>() -> usize {
    T::WIDTH
}

/// Encodes `value` into a freshly allocated buffer of exactly
/// [`encoded_size::<T>()`](encoded_size) bytes.
///
/// Infallible: the buffer is sized from the type, so none of the
/// offset- or size-related failure modes can occur.
///
/// # Example
///
/// ```
/// use fixwire::encode;
///
/// assert_eq!(encode(&(-123i32, 23u16)), [0xFF, 0xFF, 0xFF, 0x85, 0x00, 0x17]);
/// ```
#[must_use]
pub fn encode<T: Encodable>(value: &T) -> Vec<u8> {
    let mut buf = vec![0u8; T::WIDTH];
    let mut writer = Writer::new(&mut buf, 0);
    value.write_to(&mut writer);
    debug_assert_eq!(writer.position(), T::WIDTH);
    buf
}

/// Encodes `value` into `buf` starting at `offset` and returns the ending
/// offset, `offset + encoded_size::<T>()`.
///
/// Exactly `encoded_size::<T>()` bytes are written; bytes outside that
/// span are untouched.
///
/// # Errors
///
/// - [`CodecError::OffsetOutOfRange`] if `offset > buf.len()`;
/// - [`CodecError::BufferTooSmall`] if fewer than `encoded_size::<T>()`
///   bytes remain past `offset`.
///
/// # Example
///
/// ```
/// use fixwire::encode_into;
///
/// let mut buf = [0u8; 8];
/// let end = encode_into(&0xABCDu16, &mut buf, 3).unwrap();
/// assert_eq!(end, 5);
/// assert_eq!(buf, [0, 0, 0, 0xAB, 0xCD, 0, 0, 0]);
/// ```
pub fn encode_into<T: Encodable>(
    value: &T,
    buf: &mut [u8],
    offset: usize,
) -> Result<usize, CodecError> {
    check_span(buf.len(), offset, T::WIDTH)?;
    let mut writer = Writer::new(buf, offset);
    value.write_to(&mut writer);
    debug_assert_eq!(writer.position(), offset + T::WIDTH);
    Ok(offset + T::WIDTH)
}

/// Strict whole-buffer decode: reconstructs a `T` from a buffer holding
/// exactly its encoding.
///
/// # Errors
///
/// - [`CodecError::SizeMismatch`] if `buf.len()` differs from
///   [`encoded_size::<T>()`](encoded_size);
/// - [`CodecError::InvalidDiscriminant`] if an enum field holds an
///   integer with no matching variant.
///
/// # Example
///
/// ```
/// use fixwire::{decode, CodecError};
///
/// let pair: (i32, u16) = decode(&[0xFF, 0xFF, 0xFF, 0x85, 0x00, 0x17]).unwrap();
/// assert_eq!(pair, (-123, 23));
///
/// assert_eq!(
///     decode::<u32>(&[0; 5]).unwrap_err(),
///     CodecError::SizeMismatch { expected: 4, actual: 5 },
/// );
/// ```
pub fn decode<T: Encodable + Default>(buf: &[u8]) -> Result<T, CodecError> {
    if buf.len() != T::WIDTH {
        return Err(CodecError::SizeMismatch { expected: T::WIDTH, actual: buf.len() });
    }
    let mut value = T::default();
    let mut reader = Reader::new(buf, 0);
    value.read_from(&mut reader)?;
    Ok(value)
}

/// Offset-based in-place decode: reassigns `value` from the bytes at
/// `[offset, offset + encoded_size::<T>())` and returns the ending offset.
///
/// Unlike [`decode`], only enough *remaining* bytes are required, so a
/// sub-record can be decoded out of a larger buffer. Fields a record does
/// not declare are left untouched.
///
/// # Errors
///
/// - [`CodecError::OffsetOutOfRange`] if `offset > buf.len()`;
/// - [`CodecError::BufferTooSmall`] if fewer than `encoded_size::<T>()`
///   bytes remain past `offset`;
/// - [`CodecError::InvalidDiscriminant`] if an enum field holds an
///   integer with no matching variant.
///
/// # Example
///
/// ```
/// use fixwire::decode_into;
///
/// let buf = [0xEE, 0x12, 0x34, 0xEE];
/// let mut value = 0u16;
/// let end = decode_into(&mut value, &buf, 1).unwrap();
/// assert_eq!((value, end), (0x1234, 3));
/// ```
pub fn decode_into<T: Encodable>(
    value: &mut T,
    buf: &[u8],
    offset: usize,
) -> Result<usize, CodecError> {
    check_span(buf.len(), offset, T::WIDTH)?;
    let mut reader = Reader::new(buf, offset);
    value.read_from(&mut reader)?;
    debug_assert_eq!(reader.position(), offset + T::WIDTH);
    Ok(offset + T::WIDTH)
}

/// Validates that `width` bytes fit in a `len`-byte buffer at `offset`.
fn check_span(len: usize, offset: usize, width: usize) -> Result<(), CodecError> {
    if offset > len {
        return Err(CodecError::OffsetOutOfRange { offset, len });
    }
    let available = len - offset;
    if available < width {
        return Err(CodecError::BufferTooSmall { required: width, available, offset });
    }
    Ok(())
}
