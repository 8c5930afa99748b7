//! Scalar leaf encodings: fixed-width integers, floats, and `bool`.
//!
//! Every scalar converts between native and big-endian byte order through
//! `to_be_bytes`/`from_be_bytes`; the conversion is a no-op for the
//! single-byte types. `bool` occupies one byte, written as `0` or `1`.

use crate::error::CodecError;

use super::cursor::{Reader, Writer};
use super::traits::Encodable;

macro_rules! impl_scalar {
    ($($ty:ty),+ $(,)?) => {$(
        impl Encodable for $ty {
            const WIDTH: usize = ::core::mem::size_of::<$ty>();

            fn write_to(&self, writer: &mut Writer<'_>) {
                writer.put(&self.to_be_bytes());
            }

            fn read_from(&mut self, reader: &mut Reader<'_>) -> Result<(), CodecError> {
                *self = <$ty>::from_be_bytes(reader.take());
                Ok(())
            }
        }
    )+};
}

impl_scalar!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, f32, f64);

/// `bool` encodes as a single byte, `0` for `false` and `1` for `true`.
///
/// On decode, any nonzero byte reads back as `true`; the wire is not
/// required to hold exactly `0` or `1`.
impl Encodable for bool {
    const WIDTH: usize = 1;

    fn write_to(&self, writer: &mut Writer<'_>) {
        writer.put(&[u8::from(*self)]);
    }

    fn read_from(&mut self, reader: &mut Reader<'_>) -> Result<(), CodecError> {
        let [byte] = reader.take::<1>();
        *self = byte != 0;
        Ok(())
    }
}
