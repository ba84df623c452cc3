#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, ops, str};

/// Represents a Universally Unique IDentifier.
///
/// The sixteen bytes are stored in field order as specified by RFC 4122; equality,
/// ordering, and hashing all operate on that byte sequence.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Namespace for fully-qualified domain names (RFC 4122 Appendix C).
    pub const NAMESPACE_DNS: Self = Self([
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace for URLs (RFC 4122 Appendix C).
    pub const NAMESPACE_URL: Self = Self([
        0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace for ISO OIDs (RFC 4122 Appendix C).
    pub const NAMESPACE_OID: Self = Self([
        0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace for X.500 distinguished names (RFC 4122 Appendix C).
    pub const NAMESPACE_X500: Self = Self([
        0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns a mutable reference to the underlying byte array.
    ///
    /// Writing through the returned reference replaces the value in place; this is the
    /// supported path for bulk-copying a byte sequence into an existing identifier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::Uuid;
    ///
    /// let mut x = Uuid::NIL;
    /// x.as_bytes_mut().copy_from_slice(Uuid::MAX.as_bytes());
    /// assert_eq!(x, Uuid::MAX);
    /// ```
    pub fn as_bytes_mut(&mut self) -> &mut [u8; 16] {
        &mut self.0
    }

    /// Returns `true` if `self` is the nil UUID (all sixteen bytes zero).
    pub const fn is_nil(&self) -> bool {
        u128::from_be_bytes(self.0) == 0
    }

    /// Returns the layout family encoded in the top bits of octet 8.
    ///
    /// The field is recomputed from the stored bytes on every call; it is never cached.
    pub const fn variant(&self) -> Variant {
        let b = self.0[8];
        if b & 0x80 == 0x00 {
            Variant::Ncs
        } else if b & 0xc0 == 0x80 {
            Variant::Rfc4122
        } else if b & 0xe0 == 0xc0 {
            Variant::Microsoft
        } else {
            Variant::Reserved
        }
    }

    /// Returns the version encoded in the high nibble of octet 6, or `None` if the
    /// nibble matches no RFC 4122 version (as is the case for the nil UUID).
    pub const fn version(&self) -> Option<Version> {
        match self.0[6] >> 4 {
            0x1 => Some(Version::TimeBased),
            0x2 => Some(Version::DceSecurity),
            0x3 => Some(Version::NameBasedMd5),
            0x4 => Some(Version::RandomNumberBased),
            0x5 => Some(Version::NameBasedSha1),
            _ => None,
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// This method is primarily for `no_std` environments where heap-allocated string types are
    /// not readily available. Use the [`fmt::Display`] trait usually to get the 8-4-4-4-12
    /// canonical hexadecimal string representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::Uuid;
    ///
    /// let x = "47183823-2574-4bfd-b411-99ed177d3e43".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "47183823-2574-4bfd-b411-99ed177d3e43");
    /// assert_eq!(format!("{}", y), "47183823-2574-4bfd-b411-99ed177d3e43");
    /// # Ok::<(), uuid4122::ParseError>(())
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut buf_iter = buffer.iter_mut();
        for i in 0..16 {
            let e = self.0[i] as usize;
            *buf_iter.next().unwrap() = DIGITS[e >> 4];
            *buf_iter.next().unwrap() = DIGITS[e & 15];
            if i == 3 || i == 5 || i == 7 || i == 9 {
                *buf_iter.next().unwrap() = b'-';
            }
        }
        debug_assert!(buffer.is_ascii());
        UuidStr(buffer)
    }
}

/// The layout family of a UUID, indicated by the top bits of octet 8.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// Reserved for NCS backward compatibility (bit pattern `0xxx`).
    Ncs,

    /// The RFC 4122 layout produced by the generators in this crate (bit pattern `10xx`).
    Rfc4122,

    /// Reserved for Microsoft COM backward compatibility (bit pattern `110x`).
    Microsoft,

    /// Reserved for possible future definition (bit pattern `111x`).
    Reserved,
}

/// How a UUID's bits were generated, indicated by the high nibble of octet 6.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Version {
    /// The time-based version specified in RFC 4122.
    TimeBased = 1,

    /// The DCE Security version, with embedded POSIX UIDs.
    DceSecurity = 2,

    /// The name-based version specified in RFC 4122 that uses MD5 hashing.
    NameBasedMd5 = 3,

    /// The randomly or pseudo-randomly generated version specified in RFC 4122.
    RandomNumberBased = 4,

    /// The name-based version specified in RFC 4122 that uses SHA-1 hashing.
    NameBasedSha1 = 5,
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from a hyphenated hexadecimal string representation.
    ///
    /// The parser requires exactly 32 hexadecimal digits (case-insensitive) but does not
    /// validate where hyphens occur; they are skipped wherever they appear. Accordingly,
    /// `"4718-3823-2574-4bfd-b411-99ed177d3e43"` and the canonical
    /// `"47183823-2574-4bfd-b411-99ed177d3e43"` parse to the same value. Any other
    /// character fails the parse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::Uuid;
    ///
    /// let x = "47183823-2574-4bfd-b411-99ed177d3e43".parse::<Uuid>()?;
    /// let y = "4718-3823-2574-4bfd-b411-99ed177d3e43".parse::<Uuid>()?;
    /// assert_eq!(x, y);
    /// # Ok::<(), uuid4122::ParseError>(())
    /// ```
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let mut dst = [0u8; 16];
        let mut digits = 0;
        for (position, c) in src.chars().enumerate() {
            if c == '-' {
                continue;
            }
            let Some(digit) = c.to_digit(16) else {
                return Err(ParseError::new(ParseErrorKind::InvalidCharacter {
                    found: c,
                    position,
                }));
            };
            if digits == 32 {
                return Err(ParseError::new(ParseErrorKind::ExcessDigits { position }));
            }
            dst[digits / 2] = (dst[digits / 2] << 4) | digit as u8;
            digits += 1;
        }
        if digits < 32 {
            return Err(ParseError::new(ParseErrorKind::TooFewDigits { found: digits }));
        }
        Ok(Self(dst))
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = FromSliceError;

    /// Copies a slice of exactly sixteen bytes into a new UUID.
    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 16]>::try_from(src)
            .map(Self)
            .map_err(|_| FromSliceError { len: src.len() })
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

/// Concrete return type of [`Uuid::encode()`] containing the stack-allocated 8-4-4-4-12 string
/// representation.
struct UuidStr([u8; 36]);

impl ops::Deref for UuidStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        unsafe { str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for UuidStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

/// Error parsing an invalid string representation of UUID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    kind: ParseErrorKind,
}

impl ParseError {
    const fn new(kind: ParseErrorKind) -> Self {
        Self { kind }
    }

    /// Returns the reason the input was rejected.
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

/// The reason a UUID string representation failed to parse.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// A character that is neither a hexadecimal digit nor a hyphen.
    InvalidCharacter {
        /// The offending character.
        found: char,
        /// Its character position in the input.
        position: usize,
    },

    /// A 33rd hexadecimal digit where 32 complete the value.
    ExcessDigits {
        /// The character position of the excess digit.
        position: usize,
    },

    /// End of input before 32 hexadecimal digits were seen.
    TooFewDigits {
        /// The number of digits found.
        found: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::InvalidCharacter { found, position } => {
                write!(f, "invalid character {:?} at position {}", found, position)
            }
            ParseErrorKind::ExcessDigits { position } => {
                write!(f, "excess hexadecimal digit at position {}", position)
            }
            ParseErrorKind::TooFewDigits { found } => {
                write!(f, "expected 32 hexadecimal digits, found {}", found)
            }
        }
    }
}

/// Error converting a byte slice of the wrong length into a UUID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FromSliceError {
    len: usize,
}

impl FromSliceError {
    /// Returns the length of the rejected slice.
    pub const fn len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for FromSliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a 16-byte slice, found {} bytes", self.len)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{FromSliceError, ParseError, Uuid};

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }

    impl std::error::Error for ParseError {}

    impl std::error::Error for FromSliceError {}
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::try_from(value).map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{ParseErrorKind, Uuid, Variant, Version};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [([u8; 16], &'static str)] {
        &[
            ([0x00; 16], "00000000-0000-0000-0000-000000000000"),
            ([0xff; 16], "ffffffff-ffff-ffff-ffff-ffffffffffff"),
            (
                [
                    0x47, 0x18, 0x38, 0x23, 0x25, 0x74, 0x4b, 0xfd, 0xb4, 0x11, 0x99, 0xed, 0x17,
                    0x7d, 0x3e, 0x43,
                ],
                "47183823-2574-4bfd-b411-99ed177d3e43",
            ),
            (
                [
                    0x6f, 0xa4, 0x59, 0xea, 0xee, 0x8a, 0x3c, 0xa4, 0x89, 0x4e, 0xdb, 0x77, 0xe1,
                    0x60, 0x35, 0x5e,
                ],
                "6fa459ea-ee8a-3ca4-894e-db77e160355e",
            ),
            (
                [
                    0x88, 0x63, 0x13, 0xe1, 0x3b, 0x8a, 0x53, 0x72, 0x9b, 0x90, 0x0c, 0x9a, 0xee,
                    0x19, 0x9e, 0x5d,
                ],
                "886313e1-3b8a-5372-9b90-0c9aee199e5d",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (bytes, text) in prepare_cases() {
            let e = Uuid::from(*bytes);
            assert_eq!(Ok(e), text.parse());
            assert_eq!(Ok(e), text.to_uppercase().parse());
            assert_eq!(&e.encode() as &str, *text);
            #[cfg(feature = "std")]
            assert_eq!(&e.to_string(), text);
            #[cfg(feature = "std")]
            assert_eq!(&e.encode().to_string(), text);
            #[cfg(all(feature = "std", feature = "uuid"))]
            assert_eq!(&uuid::Uuid::from(e).to_string(), text);
        }
    }

    /// Parses hyphens wherever they occur
    #[test]
    fn parses_hyphens_wherever_they_occur() {
        let canonical = "47183823-2574-4bfd-b411-99ed177d3e43"
            .parse::<Uuid>()
            .unwrap();

        let cases = [
            "4718-3823-2574-4bfd-b411-99ed177d3e43",
            "4718382325744bfdb41199ed177d3e43",
            "-47183823-2574-4bfd-b411-99ed177d3e43",
            "47183823-2574-4bfd-b411-99ed177d3e43-",
            "4-7-1-8-3-8-2-3-2-5-7-4-4-b-f-d-b-4-1-1-9-9-e-d-1-7-7-d-3-e-4-3",
        ];

        for e in cases {
            assert_eq!(Ok(canonical), e.parse());
        }
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            ("", ParseErrorKind::TooFewDigits { found: 0 }),
            (
                " 47183823-2574-4bfd-b411-99ed177d3e43",
                ParseErrorKind::InvalidCharacter {
                    found: ' ',
                    position: 0,
                },
            ),
            (
                "47183823-2574-4bfd-b411-99ed177d3e43 ",
                ParseErrorKind::InvalidCharacter {
                    found: ' ',
                    position: 36,
                },
            ),
            (
                "47183823-2574-4bfd-b411-99ed177d3e4",
                ParseErrorKind::TooFewDigits { found: 31 },
            ),
            (
                "47183823-2574-4bfd-b411-99ed177d3e431",
                ParseErrorKind::ExcessDigits { position: 36 },
            ),
            (
                "{47183823-2574-4bfd-b411-99ed177d3e43}",
                ParseErrorKind::InvalidCharacter {
                    found: '{',
                    position: 0,
                },
            ),
            (
                "4718382g-2574-4bfd-b411-99ed177d3e43",
                ParseErrorKind::InvalidCharacter {
                    found: 'g',
                    position: 7,
                },
            ),
            (
                "47183823-2574-4bfd-b411_99ed177d3e43",
                ParseErrorKind::InvalidCharacter {
                    found: '_',
                    position: 23,
                },
            ),
        ];

        for (src, kind) in cases {
            assert_eq!(src.parse::<Uuid>().unwrap_err().kind(), kind);
        }
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );

        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
    }

    /// Defaults to the nil UUID
    #[test]
    fn defaults_to_the_nil_uuid() {
        let e = Uuid::default();
        assert!(e.is_nil());
        assert_eq!(e, Uuid::NIL);
        assert_eq!(e.version(), None);
        assert_eq!(&e.encode() as &str, "00000000-0000-0000-0000-000000000000");
        assert!(!Uuid::MAX.is_nil());
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (bytes, _) in prepare_cases() {
            let e = Uuid::from(*bytes);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(Uuid::try_from(e.as_bytes().as_slice()), Ok(e));
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(e.encode().to_uppercase().parse(), Ok(e));
            #[cfg(feature = "std")]
            assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
            #[cfg(feature = "std")]
            assert_eq!(Uuid::try_from(e.to_string().to_uppercase()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
        }
    }

    /// Rejects byte slices of the wrong length
    #[test]
    fn rejects_byte_slices_of_the_wrong_length() {
        let bytes = [0xabu8; 17];
        assert_eq!(Uuid::try_from(&bytes[..15]).unwrap_err().len(), 15);
        assert_eq!(Uuid::try_from(&bytes[..17]).unwrap_err().len(), 17);
        assert_eq!(Uuid::try_from(&[][..]).unwrap_err().len(), 0);
        assert!(Uuid::try_from(&bytes[..16]).is_ok());
    }

    /// Exposes bytes for iteration and bulk copy
    #[test]
    fn exposes_bytes_for_iteration_and_bulk_copy() {
        let (bytes, text) = &prepare_cases()[2];

        let e = Uuid::from(*bytes);
        for (x, y) in e.as_bytes().iter().zip(bytes) {
            assert_eq!(x, y);
        }

        let mut e = Uuid::NIL;
        assert!(e.is_nil());
        e.as_bytes_mut().copy_from_slice(bytes);
        assert!(!e.is_nil());
        assert_eq!(&e.encode() as &str, *text);
    }

    /// Exchanges values through mem::swap
    #[test]
    fn exchanges_values_through_mem_swap() {
        let mut x = Uuid::NIL;
        let mut y = "47183823-2574-4bfd-b411-99ed177d3e43"
            .parse::<Uuid>()
            .unwrap();

        core::mem::swap(&mut x, &mut y);
        assert!(!x.is_nil());
        assert!(y.is_nil());
    }

    /// Decodes the variant field of octet 8
    #[test]
    fn decodes_the_variant_field_of_octet_8() {
        let cases = [
            (0x00, Variant::Ncs),
            (0x7f, Variant::Ncs),
            (0x80, Variant::Rfc4122),
            (0xbf, Variant::Rfc4122),
            (0xc0, Variant::Microsoft),
            (0xdf, Variant::Microsoft),
            (0xe0, Variant::Reserved),
            (0xff, Variant::Reserved),
        ];

        for (b, variant) in cases {
            let mut bytes = [0u8; 16];
            bytes[8] = b;
            assert_eq!(Uuid::from(bytes).variant(), variant);
        }
    }

    /// Decodes the version field of octet 6
    #[test]
    fn decodes_the_version_field_of_octet_6() {
        let cases = [
            (0x00, None),
            (0x10, Some(Version::TimeBased)),
            (0x20, Some(Version::DceSecurity)),
            (0x30, Some(Version::NameBasedMd5)),
            (0x40, Some(Version::RandomNumberBased)),
            (0x50, Some(Version::NameBasedSha1)),
            (0x60, None),
            (0xf0, None),
        ];

        for (b, version) in cases {
            let mut bytes = [0u8; 16];
            bytes[6] = b | 0x0c;
            assert_eq!(Uuid::from(bytes).version(), version);
        }
    }

    /// Orders values by their byte sequence
    #[test]
    fn orders_values_by_their_byte_sequence() {
        for i in 0..16 {
            let mut lhs = [0x7fu8; 16];
            let mut rhs = [0x7fu8; 16];
            lhs[i] = 0x7e;
            rhs[i] = 0x80;

            assert!(Uuid::from(lhs) < Uuid::from(rhs));
            assert!(Uuid::from(lhs) < Uuid::from([0x7f; 16]));
            assert!(Uuid::from([0x7f; 16]) < Uuid::from(rhs));
        }

        assert!(Uuid::NIL < Uuid::MAX);
    }

    /// Works as a key of ordered and unordered containers
    #[cfg(feature = "std")]
    #[test]
    fn works_as_a_key_of_ordered_and_unordered_containers() {
        use std::collections::{BTreeSet, HashSet};

        let distinct: Vec<Uuid> = prepare_cases().iter().map(|(b, _)| Uuid::from(*b)).collect();

        let ordered: BTreeSet<Uuid> = distinct.iter().copied().collect();
        assert_eq!(ordered.len(), 5);
        assert!(ordered.contains(&Uuid::NIL));

        let unordered: HashSet<Uuid> = distinct.iter().copied().collect();
        assert_eq!(unordered.len(), 5);
        assert!(unordered.contains(&Uuid::NIL));

        // equal values collapse to one entry
        let duplicated: HashSet<Uuid> = distinct.iter().chain(distinct.iter()).copied().collect();
        assert_eq!(duplicated.len(), 5);
    }
}
