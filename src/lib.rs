//! A Rust implementation of RFC 4122 UUIDs
//!
//! ```rust
//! use uuid4122::{uuid4, uuid5, Uuid};
//!
//! // random-number-based (version 4)
//! let uuid = uuid4();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! // name-based (version 5)
//! let uuid = uuid5(Uuid::NAMESPACE_DNS, "example.org");
//! assert_eq!(uuid, uuid5(Uuid::NAMESPACE_DNS, "example.org"));
//!
//! // parsing and formatting
//! let uuid: Uuid = "47183823-2574-4bfd-b411-99ed177d3e43".parse()?;
//! assert_eq!(uuid.to_string(), "47183823-2574-4bfd-b411-99ed177d3e43");
//! # Ok::<(), uuid4122::ParseError>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122.html).
//!
//! # Field and bit layout
//!
//! A UUID is sixteen bytes laid out as follows:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |     time_hi_and_version       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |clk_seq_hi_res |  clk_seq_low  |           node (0-1)          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          node (2-5)                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Only two fields are interpreted uniformly across all UUIDs, and [`Uuid`] exposes
//! both as read-only views recomputed from the bytes:
//!
//! - The high nibble of octet 6 holds the [`Version`], i.e. how the bits were
//!   generated.
//! - The top bits of octet 8 hold the [`Variant`], i.e. the layout family; everything
//!   this crate generates uses the RFC 4122 family (`10xx`).
//!
//! Equality, ordering, and hashing operate on the sixteen bytes in stored order, so
//! [`Uuid`] works directly as a key of ordered and unordered containers.
//!
//! # Generators
//!
//! - [`uuid4()`] / [`V4Generator`]: random-number-based UUIDs from a thread-local or
//!   caller-supplied pseudo-random bit generator.
//! - [`uuid3()`] / [`uuid5()`] / [`NameGenerator`]: deterministic name-based UUIDs
//!   derived from a namespace UUID and a name by MD5 or SHA-1.
//! - [`system_uuid()`]: UUIDs obtained through the operating system's facility.
//!
//! # Crate features
//!
//! - `std` (enabled by default): integration with heap-allocated string types and
//!   `std::error::Error`. Without it the crate is `no_std`-compatible.
//! - `os_gen` (enabled by default; implies `std`): the [`uuid4()`] and
//!   [`system_uuid()`] entry points and the entropy-seeded
//!   [`V4Generator::from_entropy()`] constructor.
//! - `serde`: serialization as the canonical string for human-readable formats and as
//!   raw bytes for compact ones.
//! - `uuid`: conversions to and from the [`uuid`] crate's type.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{FromSliceError, ParseError, ParseErrorKind, Uuid, Variant, Version};

pub mod name;
#[doc(inline)]
pub use name::{uuid3, uuid5, NameGenerator, V3Generator, V5Generator};

pub mod v4;
#[doc(inline)]
pub use v4::V4Generator;

mod system;
#[cfg(feature = "os_gen")]
pub use system::{system_uuid, SystemError};

mod entry;
#[cfg(feature = "os_gen")]
pub use entry::uuid4;
