//! Aggregate records: the field-declaration mechanism.
//!
//! A struct opts into the codec by declaring an explicit, ordered list of
//! participating fields with [`encodable_fields!`]. The declaration is the
//! only way a field enters the wire format: anything not listed is excluded
//! from size, encode, and decode, which lets a type keep derived or cached
//! members off the wire deliberately. There is no implicit
//! all-fields-of-the-struct mode.
//!
//! [`encodable_fields!`]: crate::encodable_fields

/// Declares the ordered list of fields a struct encodes, and generates its
/// [`Encodable`](crate::Encodable) impl.
///
/// Fields encode in the order they are listed, which also fixes the
/// record's size as the sum of the listed field widths. Each entry repeats
/// the field's type; the compiler rejects a mismatch with the struct
/// definition, so the list cannot drift out of sync.
///
/// The struct needs a `Default` impl to participate in strict whole-buffer
/// [`decode`](crate::decode); the offset-based
/// [`decode_into`](crate::decode_into) works without one and leaves
/// undeclared fields untouched.
///
/// # Example
///
/// ```
/// use fixwire::{encodable_fields, encode, encoded_size};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct PlayerState {
///     id: u32,
///     hp: u16,
///     alive: bool,
///     /// Rebuilt after load; never on the wire.
///     dirty: bool,
/// }
///
/// encodable_fields!(PlayerState {
///     id: u32,
///     hp: u16,
///     alive: bool,
/// });
///
/// assert_eq!(encoded_size::<PlayerState>(), 7);
/// let bytes = encode(&PlayerState { id: 1, hp: 80, alive: true, dirty: true });
/// assert_eq!(bytes, [0, 0, 0, 1, 0, 80, 1]);
/// ```
#[macro_export]
macro_rules! encodable_fields {
    ($ty:ty { $($field:ident : $fty:ty),+ $(,)? }) => {
        impl $crate::Encodable for $ty {
            const WIDTH: usize = 0 $(+ <$fty as $crate::Encodable>::WIDTH)+;

            fn write_to(&self, writer: &mut $crate::encoding::Writer<'_>) {
                $(<$fty as $crate::Encodable>::write_to(&self.$field, writer);)+
            }

            fn read_from(
                &mut self,
                reader: &mut $crate::encoding::Reader<'_>,
            ) -> ::core::result::Result<(), $crate::CodecError> {
                $(<$fty as $crate::Encodable>::read_from(&mut self.$field, reader)?;)+
                ::core::result::Result::Ok(())
            }
        }
    };
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::encoding::codec::{decode, decode_into, encode, encoded_size};

    #[derive(Debug, Default, PartialEq)]
    struct Telemetry {
        sequence: u64,
        samples: [i16; 4],
        flags: u8,
        // Session-local bookkeeping, never encoded.
        touched: bool,
    }

    encodable_fields!(Telemetry {
        sequence: u64,
        samples: [i16; 4],
        flags: u8,
    });

    #[test]
    fn width_sums_declared_fields_only() {
        assert_eq!(encoded_size::<Telemetry>(), 8 + 8 + 1);
    }

    #[test]
    fn declared_fields_round_trip() {
        let original = Telemetry {
            sequence: 99,
            samples: [-1, 0, 1, 300],
            flags: 0b1010_0101,
            touched: true,
        };
        let decoded: Telemetry = decode(&encode(&original)).unwrap();
        assert_eq!(decoded.sequence, original.sequence);
        assert_eq!(decoded.samples, original.samples);
        assert_eq!(decoded.flags, original.flags);
    }

    #[test]
    fn undeclared_fields_survive_in_place_decode() {
        let mut target = Telemetry { touched: true, ..Telemetry::default() };
        let wire = encode(&Telemetry { sequence: 7, ..Telemetry::default() });
        decode_into(&mut target, &wire, 0).unwrap();
        assert_eq!(target.sequence, 7);
        assert!(target.touched, "undeclared field must not be rewritten");
    }

    #[test]
    fn field_order_defines_the_wire_layout() {
        let wire = encode(&Telemetry { sequence: 1, samples: [2, 0, 0, 0], flags: 3, touched: false });
        assert_eq!(&wire[..8], &[0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(&wire[8..10], &[0, 2]);
        assert_eq!(wire[16], 3);
    }
}
