//! Fixed-sequence encodings: arrays and tuples.
//!
//! A fixed sequence encodes as the concatenation of its elements in
//! declaration order, with no length prefix, separators, or trailing
//! framing; the element count is part of the type and known to both sides
//! of the wire.

use crate::error::CodecError;

use super::cursor::{Reader, Writer};
use super::traits::Encodable;

impl<T: Encodable, const N: usize> Encodable for [T; N] {
    const WIDTH: usize = T::WIDTH * N;

    fn write_to(&self, writer: &mut Writer<'_>) {
        for element in self {
            element.write_to(writer);
        }
    }

    fn read_from(&mut self, reader: &mut Reader<'_>) -> Result<(), CodecError> {
        for element in self.iter_mut() {
            element.read_from(reader)?;
        }
        Ok(())
    }
}

macro_rules! impl_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: Encodable),+> Encodable for ($($name,)+) {
            const WIDTH: usize = 0 $(+ $name::WIDTH)+;

            fn write_to(&self, writer: &mut Writer<'_>) {
                $(self.$idx.write_to(writer);)+
            }

            fn read_from(&mut self, reader: &mut Reader<'_>) -> Result<(), CodecError> {
                $(self.$idx.read_from(reader)?;)+
                Ok(())
            }
        }
    };
}

impl_tuple!(A: 0);
impl_tuple!(A: 0, B: 1);
impl_tuple!(A: 0, B: 1, C: 2);
impl_tuple!(A: 0, B: 1, C: 2, D: 3);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);
