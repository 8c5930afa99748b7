//! Error types for the codec.

use thiserror::Error;

/// Errors raised by encode, decode, and [`FixedString`] operations.
///
/// Every failure is a distinguishable kind carrying the numbers a caller
/// needs to diagnose it. All errors are reported synchronously to the
/// immediate caller; nothing is retried internally, since none of these
/// conditions are transient.
///
/// There is no runtime "not encodable" kind: a type without an
/// [`Encodable`] impl is rejected by the compiler at the call site.
///
/// [`FixedString`]: crate::FixedString
/// [`Encodable`]: crate::Encodable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Source content does not fit in a fixed-capacity container.
    #[error("capacity exceeded: content of {len} bytes does not fit in capacity {capacity}")]
    CapacityExceeded {
        /// The container's capacity in bytes.
        capacity: usize,
        /// The length of the rejected content.
        len: usize,
    },

    /// An index past the logical length of a fixed-capacity container.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The logical length of the container.
        len: usize,
    },

    /// The buffer has fewer remaining bytes than the value's static size.
    #[error("buffer too small: {required} bytes required at offset {offset}, {available} available")]
    BufferTooSmall {
        /// Bytes the value occupies on the wire.
        required: usize,
        /// Bytes remaining in the buffer past `offset`.
        available: usize,
        /// The starting offset of the attempted access.
        offset: usize,
    },

    /// A starting offset past the end of the buffer.
    #[error("offset {offset} out of range for buffer of {len} bytes")]
    OffsetOutOfRange {
        /// The rejected offset.
        offset: usize,
        /// The buffer's total length.
        len: usize,
    },

    /// A strict whole-buffer decode where the buffer length is not exactly
    /// the type's encoded size.
    #[error("size mismatch: expected exactly {expected} bytes, buffer holds {actual}")]
    SizeMismatch {
        /// The type's static encoded size.
        expected: usize,
        /// The buffer's actual length.
        actual: usize,
    },

    /// A decoded integer that matches no variant of the target enum.
    #[error("invalid discriminant {value} for enum `{type_name}`")]
    InvalidDiscriminant {
        /// Name of the enum being decoded.
        type_name: &'static str,
        /// The unmatched discriminant value.
        value: i128,
    },
}
