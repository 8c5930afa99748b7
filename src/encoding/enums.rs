//! Enumeration encodings.
//!
//! A fieldless enum encodes as its underlying integer representation
//! through the same big-endian scalar path as any other integer, so its
//! wire width is the repr's width. Decoding matches the integer back to a
//! declared variant and rejects anything else with
//! [`CodecError::InvalidDiscriminant`](crate::CodecError::InvalidDiscriminant);
//! an enum value is never fabricated from an unknown discriminant.

/// Declares a fieldless `#[repr(int)]` enum together with its
/// [`Encodable`](crate::Encodable) impl.
///
/// The underlying representation is named after the enum (`enum Name: u8`)
/// and every variant carries an explicit discriminant, so the wire values
/// are visible at the declaration site. The macro derives `Debug`,
/// `Clone`, `Copy`, `PartialEq`, and `Eq`; further attributes (including
/// `#[derive(Default)]` with a `#[default]` variant, needed for strict
/// whole-buffer [`decode`](crate::decode)) pass through.
///
/// # Example
///
/// ```
/// use fixwire::{encodable_enum, decode, encode, CodecError};
///
/// encodable_enum! {
///     #[derive(Default)]
///     pub enum Opcode: u8 {
///         #[default]
///         Ping = 0,
///         Pong = 1,
///         Data = 2,
///     }
/// }
///
/// assert_eq!(encode(&Opcode::Data), [2]);
/// assert_eq!(decode::<Opcode>(&[1]).unwrap(), Opcode::Pong);
/// assert_eq!(
///     decode::<Opcode>(&[9]).unwrap_err(),
///     CodecError::InvalidDiscriminant { type_name: "Opcode", value: 9 },
/// );
/// ```
#[macro_export]
macro_rules! encodable_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ty {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[repr($repr)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value
            ),+
        }

        impl $crate::Encodable for $name {
            const WIDTH: usize = ::core::mem::size_of::<$repr>();

            fn write_to(&self, writer: &mut $crate::encoding::Writer<'_>) {
                <$repr as $crate::Encodable>::write_to(&(*self as $repr), writer);
            }

            fn read_from(
                &mut self,
                reader: &mut $crate::encoding::Reader<'_>,
            ) -> ::core::result::Result<(), $crate::CodecError> {
                let mut raw: $repr = 0;
                <$repr as $crate::Encodable>::read_from(&mut raw, reader)?;
                *self = match raw {
                    $(v if v == $value => Self::$variant,)+
                    other => {
                        return ::core::result::Result::Err(
                            $crate::CodecError::InvalidDiscriminant {
                                type_name: ::core::stringify!($name),
                                value: other as i128,
                            },
                        )
                    }
                };
                ::core::result::Result::Ok(())
            }
        }
    };
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::encoding::codec::{decode, encode, encoded_size};
    use crate::error::CodecError;

    encodable_enum! {
        #[derive(Default)]
        enum Compression: u8 {
            #[default]
            None = 0,
            Lz4 = 1,
            Zstd = 2,
        }
    }

    encodable_enum! {
        #[derive(Default)]
        enum StatusCode: u16 {
            #[default]
            Ok = 200,
            NotFound = 404,
            Teapot = 418,
        }
    }

    #[test]
    fn width_is_the_repr_width() {
        assert_eq!(encoded_size::<Compression>(), 1);
        assert_eq!(encoded_size::<StatusCode>(), 2);
    }

    #[test]
    fn encodes_as_underlying_integer() {
        assert_eq!(encode(&Compression::Zstd), vec![2]);
        assert_eq!(encode(&StatusCode::NotFound), vec![0x01, 0x94]);
    }

    #[test]
    fn round_trips_every_variant() {
        for status in [StatusCode::Ok, StatusCode::NotFound, StatusCode::Teapot] {
            let decoded: StatusCode = decode(&encode(&status)).unwrap();
            assert_eq!(decoded, status);
        }
    }

    #[test]
    fn unknown_discriminant_is_rejected() {
        let err = decode::<Compression>(&[3]).unwrap_err();
        assert_eq!(err, CodecError::InvalidDiscriminant { type_name: "Compression", value: 3 });

        let err = decode::<StatusCode>(&encode(&500u16)).unwrap_err();
        assert_eq!(err, CodecError::InvalidDiscriminant { type_name: "StatusCode", value: 500 });
    }
}
