//! Integration tests for the wire format itself: byte-exact vectors,
//! offset arithmetic, and the failure payloads callers branch on.

use std::io::Cursor;

use fixwire::{
    decode, decode_from_reader, decode_into, encodable_enum, encode, encode_into, encode_to_writer,
    encoded_size, CodecError, FixedString,
};

// ============================================================================
// Byte-exact vectors
// ============================================================================

#[test]
fn signed_pair_encodes_big_endian_twos_complement() {
    let bytes = encode(&(-123i32, 23u16));
    assert_eq!(bytes, [0xFF, 0xFF, 0xFF, 0x85, 0x00, 0x17]);

    let decoded: (i32, u16) = decode(&bytes).unwrap();
    assert_eq!(decoded, (-123, 23));
}

#[test]
fn bool_wire_bytes() {
    assert_eq!(encode(&true), [0x01]);
    assert_eq!(encode(&false), [0x00]);
    assert!(decode::<bool>(&[0x01]).unwrap());
    assert!(!decode::<bool>(&[0x00]).unwrap());
    // Nonzero bytes normalize to true rather than failing.
    assert!(decode::<bool>(&[0xC3]).unwrap());
}

#[test]
fn multi_byte_scalars_are_most_significant_first() {
    assert_eq!(encode(&0x0102_0304_0506_0708u64), [1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(encode(&1.0f64), [0x3F, 0xF0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(encode(&-2.5f32), [0xC0, 0x20, 0x00, 0x00]);
}

#[test]
fn sequences_concatenate_without_framing() {
    // No length prefix, no separators: 3 * 2 bytes exactly.
    assert_eq!(encode(&[1u16, 2, 3]), [0, 1, 0, 2, 0, 3]);
    assert_eq!(encoded_size::<[u16; 3]>(), 6);
}

// ============================================================================
// Fixed-capacity strings on the wire
// ============================================================================

#[test]
fn fixed_string_pads_to_capacity_with_zeros() {
    let s: FixedString<8> = "wire".parse().unwrap();
    let bytes = encode(&s);
    assert_eq!(bytes.len(), 8);
    assert_eq!(&bytes[..4], b"wire");
    assert!(bytes[4..].iter().all(|&b| b == 0));
}

#[test]
fn fixed_string_capacity_boundary() {
    assert!(FixedString::<5>::try_from("exact").is_ok());
    assert_eq!(
        FixedString::<5>::try_from("toolong").unwrap_err(),
        CodecError::CapacityExceeded { capacity: 5, len: 7 },
    );
}

#[test]
fn fixed_string_encoded_size_is_content_independent() {
    let empty = FixedString::<32>::new();
    let text: FixedString<32> = "あいうえお蟹".parse().unwrap();
    assert_eq!(encode(&empty).len(), 32);
    assert_eq!(encode(&text).len(), 32);
    let back: FixedString<32> = decode(&encode(&text)).unwrap();
    assert_eq!(back.as_str().unwrap(), "あいうえお蟹");
}

// ============================================================================
// Offsets
// ============================================================================

#[test]
fn encode_decode_at_offset_inside_larger_buffer() {
    let mut buffer = vec![0u8; 20];
    let end = encode_into(&(-123i32, 23u16), &mut buffer, 12).unwrap();
    assert_eq!(end, 18);

    let mut actual = (0i32, 0u16);
    let end = decode_into(&mut actual, &buffer, 12).unwrap();
    assert_eq!(end, 18);
    assert_eq!(actual, (-123, 23));
}

#[test]
fn bytes_outside_the_span_are_untouched() {
    let mut buffer = vec![0x5Au8; 10];
    encode_into(&0xFFFFu16, &mut buffer, 4).unwrap();
    assert_eq!(buffer, [0x5A, 0x5A, 0x5A, 0x5A, 0xFF, 0xFF, 0x5A, 0x5A, 0x5A, 0x5A]);
}

#[test]
fn consecutive_offsets_pack_records_back_to_back() {
    let mut buffer = vec![0u8; encoded_size::<u32>() * 3];
    let mut offset = 0;
    for value in [1u32, 2, 3] {
        offset = encode_into(&value, &mut buffer, offset).unwrap();
    }
    assert_eq!(offset, buffer.len());
    assert_eq!(buffer, [0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3]);
}

// ============================================================================
// Failure payloads
// ============================================================================

#[test]
fn too_small_remainder_is_buffer_too_small() {
    let mut buffer = vec![0u8; 20];
    let err = encode_into(&(0i32, 0u16, false, 0u64), &mut buffer, 13).unwrap_err();
    assert_eq!(err, CodecError::BufferTooSmall { required: 15, available: 7, offset: 13 });

    let mut target = (0i32, 0u16, false, 0u64);
    let err = decode_into(&mut target, &buffer, 13).unwrap_err();
    assert_eq!(err, CodecError::BufferTooSmall { required: 15, available: 7, offset: 13 });
}

#[test]
fn offset_beyond_buffer_is_offset_out_of_range() {
    let mut buffer = vec![0u8; 8];
    let err = encode_into(&0u8, &mut buffer, 9).unwrap_err();
    assert_eq!(err, CodecError::OffsetOutOfRange { offset: 9, len: 8 });
}

#[test]
fn strict_decode_requires_exact_length() {
    let err = decode::<u64>(&[0u8; 9]).unwrap_err();
    assert_eq!(err, CodecError::SizeMismatch { expected: 8, actual: 9 });
    let err = decode::<u64>(&[]).unwrap_err();
    assert_eq!(err, CodecError::SizeMismatch { expected: 8, actual: 0 });
}

#[test]
fn errors_format_for_diagnostics() {
    let err = decode::<u64>(&[0u8; 3]).unwrap_err();
    assert_eq!(err.to_string(), "size mismatch: expected exactly 8 bytes, buffer holds 3");
}

// ============================================================================
// Enum discriminants
// ============================================================================

encodable_enum! {
    #[derive(Default)]
    pub enum Verdict: u8 {
        #[default]
        Accept = 1,
        Reject = 2,
    }
}

#[test]
fn enum_wire_value_is_the_declared_discriminant() {
    assert_eq!(encode(&Verdict::Reject), [2]);
    assert_eq!(decode::<Verdict>(&[1]).unwrap(), Verdict::Accept);
}

#[test]
fn undeclared_discriminant_is_a_decode_error() {
    assert_eq!(
        decode::<Verdict>(&[0]).unwrap_err(),
        CodecError::InvalidDiscriminant { type_name: "Verdict", value: 0 },
    );
}

// ============================================================================
// Stream adapters
// ============================================================================

#[test]
fn records_round_trip_through_io() {
    let mut stream = Vec::new();
    encode_to_writer(&(7u32, true), &mut stream).unwrap();
    encode_to_writer(&(8u32, false), &mut stream).unwrap();
    assert_eq!(stream.len(), 10);

    let mut input = Cursor::new(stream);
    assert_eq!(decode_from_reader::<(u32, bool)>(&mut input).unwrap(), (7, true));
    assert_eq!(decode_from_reader::<(u32, bool)>(&mut input).unwrap(), (8, false));
}
