//! Fixed-capacity, NUL-padded strings.
//!
//! [`FixedString<N>`] holds up to `N` bytes of content and always occupies
//! exactly `N` bytes on the wire, padded with trailing zeros. It is the
//! leaf type for text inside fixed-layout records: two records containing
//! `"ab"` and `"abcdef"` in a `FixedString<16>` field have identical
//! layouts and sizes.
//!
//! # Logical content
//!
//! The *logical length* is the number of content bytes before the first
//! NUL; everything past it is padding. Comparison, ordering, hashing, and
//! indexed access all observe logical content only — `"ab"` stored in a
//! `FixedString<4>` equals `"ab"` stored in a `FixedString<4>` that was
//! decoded from a buffer with dirty padding.
//!
//! # Example
//!
//! ```
//! use fixwire::{encode, FixedString};
//!
//! let name: FixedString<8> = "ada".parse().unwrap();
//! assert_eq!(name.len(), 3);
//! assert_eq!(name.as_str().unwrap(), "ada");
//!
//! // Always exactly N bytes on the wire, regardless of content length.
//! assert_eq!(encode(&name), [b'a', b'd', b'a', 0, 0, 0, 0, 0]);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::encoding::{Encodable, Reader, Writer};
use crate::error::CodecError;

/// A string-like value with a compile-time-fixed encoded width of `N`
/// bytes: logical content first, zero padding after.
///
/// Invariant: every byte past the logical length is zero, on every
/// construction path. Constructors zero-fill, and wire decode re-zeroes
/// whatever padding the buffer carried, so the padded image is canonical
/// and the derived comparisons below observe logical content only.
///
/// Construction fails with [`CodecError::CapacityExceeded`] when the
/// content is longer than `N`; nothing is ever silently truncated. As in C
/// strings, a NUL byte inside the source terminates the content.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedString<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> FixedString<N> {
    /// Creates an empty string (all padding).
    #[must_use]
    pub const fn new() -> Self {
        Self { bytes: [0; N] }
    }

    /// Creates a string from raw content bytes.
    ///
    /// Content ends at the first NUL byte in `source`, if any; the
    /// remaining bytes are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::CapacityExceeded`] when the content is longer
    /// than `N` bytes.
    pub fn from_bytes(source: &[u8]) -> Result<Self, CodecError> {
        let content = match source.iter().position(|&b| b == 0) {
            Some(terminator) => &source[..terminator],
            None => source,
        };
        if content.len() > N {
            return Err(CodecError::CapacityExceeded { capacity: N, len: content.len() });
        }
        let mut bytes = [0u8; N];
        bytes[..content.len()].copy_from_slice(content);
        Ok(Self { bytes })
    }

    /// The logical length in bytes (`<= N`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.iter().position(|&b| b == 0).unwrap_or(N)
    }

    /// Whether the logical content is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.bytes.first(), None | Some(0))
    }

    /// The capacity `N` in bytes.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// The logical content, without padding.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// The full `N`-byte wire image: content followed by zero padding.
    #[must_use]
    pub const fn as_padded_bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    /// The logical content as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`std::str::Utf8Error`] when the content is
    /// not valid UTF-8 (possible after decoding arbitrary wire bytes).
    pub fn as_str(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(self.as_bytes())
    }

    /// The content byte at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::IndexOutOfRange`] when `index` is at or past
    /// the logical length.
    pub fn byte_at(&self, index: usize) -> Result<u8, CodecError> {
        let len = self.len();
        if index >= len {
            return Err(CodecError::IndexOutOfRange { index, len });
        }
        Ok(self.bytes[index])
    }
}

impl<const N: usize> Default for FixedString<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TryFrom<&str> for FixedString<N> {
    type Error = CodecError;

    fn try_from(source: &str) -> Result<Self, Self::Error> {
        Self::from_bytes(source.as_bytes())
    }
}

impl<const N: usize> FromStr for FixedString<N> {
    type Err = CodecError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(source.as_bytes())
    }
}

/// Conversion between capacities; fails when the content does not fit.
impl<const N: usize, const M: usize> TryFrom<&FixedString<M>> for FixedString<N> {
    type Error = CodecError;

    fn try_from(source: &FixedString<M>) -> Result<Self, Self::Error> {
        Self::from_bytes(source.as_bytes())
    }
}

impl<const N: usize> PartialEq<str> for FixedString<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<&str> for FixedString<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

/// Indexes into the logical content; panics past the logical length, like
/// slice indexing. Use [`FixedString::byte_at`] for a fallible lookup.
impl<const N: usize> std::ops::Index<usize> for FixedString<N> {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.bytes[..self.len()][index]
    }
}

impl<const N: usize> fmt::Display for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl<const N: usize> fmt::Debug for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedString<{N}>({:?})", String::from_utf8_lossy(self.as_bytes()))
    }
}

/// The wire image is the padded byte array itself: exactly `N` bytes,
/// byte-for-byte compatible with any capacity-`N` fixed-string encoding
/// (including a plain `[u8; N]` holding NUL-padded content).
impl<const N: usize> Encodable for FixedString<N> {
    const WIDTH: usize = N;

    fn write_to(&self, writer: &mut Writer<'_>) {
        writer.put(&self.bytes);
    }

    fn read_from(&mut self, reader: &mut Reader<'_>) -> Result<(), CodecError> {
        self.bytes = reader.take::<N>();
        // Wire padding is untrusted; restore the canonical all-zero form.
        let len = self.len();
        for byte in &mut self.bytes[len..] {
            *byte = 0;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::FixedString;

    impl<const N: usize> Serialize for FixedString<N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let s = self
                .as_str()
                .map_err(|_| S::Error::custom("fixed string holds non-UTF-8 content"))?;
            serializer.serialize_str(s)
        }
    }

    impl<'de, const N: usize> Deserialize<'de> for FixedString<N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            Self::from_bytes(s.as_bytes()).map_err(D::Error::custom)
        }
    }
}


#[cfg(all(test, feature = "serde"))]
#[allow(clippy::unwrap_used)]
mod serde_tests {
    use super::*;
    use crate::encoding::decode;

    #[test]
    fn json_round_trip() {
        let original: FixedString<8> = "hello".parse().unwrap();
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, "\"hello\"");
        let back: FixedString<8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn json_rejects_overlong_content() {
        let result: Result<FixedString<4>, _> = serde_json::from_str("\"abcde\"");
        assert!(result.is_err());
    }

    #[test]
    fn non_utf8_content_fails_to_serialize() {
        let s: FixedString<4> = decode(&[0xFF, 0xFE, 0, 0]).unwrap();
        assert!(serde_json::to_string(&s).is_err());
    }
}
