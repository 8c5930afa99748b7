//! Fixed-width adapters for `io::Write`/`io::Read` endpoints.
//!
//! Exactly [`encoded_size::<T>()`](crate::encoded_size) bytes cross the
//! boundary per call, so these compose records over files and sockets
//! without any framing beyond the types themselves. Codec-level decode
//! failures surface as [`io::ErrorKind::InvalidData`].

use std::io::{self, Read, Write};

use crate::error::CodecError;

use super::codec::encode;
use super::cursor::Reader as ByteReader;
use super::traits::Encodable;

/// Encodes `value` and writes its exact wire image to `writer`.
///
/// # Errors
///
/// Propagates any I/O error from the underlying writer.
///
/// # Example
///
/// ```
/// use fixwire::encode_to_writer;
///
/// let mut out = Vec::new();
/// encode_to_writer(&(1u16, 2u16), &mut out).unwrap();
/// assert_eq!(out, [0, 1, 0, 2]);
/// ```
pub fn encode_to_writer<T: Encodable>(value: &T, mut writer: impl Write) -> io::Result<()> {
    writer.write_all(&encode(value))
}

/// Reads exactly the wire image of a `T` from `reader` and decodes it.
///
/// # Errors
///
/// Propagates I/O errors from the underlying reader (including
/// [`io::ErrorKind::UnexpectedEof`] on a short read); a byte sequence the
/// type rejects, such as an unknown enum discriminant, is reported as
/// [`io::ErrorKind::InvalidData`] with the [`CodecError`] as source.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use fixwire::decode_from_reader;
///
/// let mut input = Cursor::new(vec![0, 1, 0, 2, 0xFF]);
/// let pair: (u16, u16) = decode_from_reader(&mut input).unwrap();
/// assert_eq!(pair, (1, 2));
/// // The trailing byte is still unread.
/// assert_eq!(input.position(), 4);
/// ```
pub fn decode_from_reader<T: Encodable + Default>(mut reader: impl Read) -> io::Result<T> {
    let mut buf = vec![0u8; T::WIDTH];
    reader.read_exact(&mut buf)?;
    let mut value = T::default();
    let mut byte_reader = ByteReader::new(&buf, 0);
    value
        .read_from(&mut byte_reader)
        .map_err(|err: CodecError| io::Error::new(io::ErrorKind::InvalidData, err))?;
    Ok(value)
}
