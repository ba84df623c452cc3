//! Name-based UUID generation (versions 3 and 5).
//!
//! A name-based UUID is a pure function of a namespace UUID, a name, and a digest
//! algorithm: hashing the namespace bytes followed by the name bytes and keeping the
//! first sixteen digest bytes, with the RFC 4122 variant and version fields stamped in.
//! The same inputs always derive the same UUID.
//!
//! ```rust
//! use uuid4122::{uuid5, Uuid, V5Generator};
//!
//! let g = V5Generator::new(Uuid::NAMESPACE_DNS);
//! assert_eq!(g.generate("python.org"), g.generate("python.org"));
//! assert_ne!(g.generate("python.org"), g.generate("rust-lang.org"));
//! assert_eq!(g.generate("python.org"), uuid5(Uuid::NAMESPACE_DNS, "python.org"));
//! ```

use core::marker::PhantomData;

use md5::{Digest, Md5};
use sha1::Sha1;

use crate::Uuid;

/// A digest algorithm that can drive name-based UUID generation.
///
/// This trait is sealed: RFC 4122 defines name-based generation only for [`Md5`]
/// (version 3) and [`Sha1`] (version 5).
pub trait NameHash: Digest + private::Sealed {
    /// The version bits stamped into the high nibble of octet 6.
    const VERSION_BITS: u8;
}

impl NameHash for Md5 {
    const VERSION_BITS: u8 = 0x30;
}

impl NameHash for Sha1 {
    const VERSION_BITS: u8 = 0x50;
}

mod private {
    pub trait Sealed {}

    impl Sealed for md5::Md5 {}
    impl Sealed for sha1::Sha1 {}
}

/// Represents a name-based UUID generator that derives identifiers from the namespace
/// UUID it owns and the names passed to it.
///
/// Use the [`V3Generator`] and [`V5Generator`] aliases to pick the digest algorithm.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct NameGenerator<D> {
    namespace: Uuid,
    hasher: PhantomData<D>,
}

/// A name-based generator using MD5 (UUID version 3).
pub type V3Generator = NameGenerator<Md5>;

/// A name-based generator using SHA-1 (UUID version 5).
pub type V5Generator = NameGenerator<Sha1>;

impl<D: NameHash> NameGenerator<D> {
    /// Creates a generator rooted at the given namespace UUID.
    pub const fn new(namespace: Uuid) -> Self {
        Self {
            namespace,
            hasher: PhantomData,
        }
    }

    /// Returns the namespace UUID this generator was configured with.
    pub const fn namespace(&self) -> Uuid {
        self.namespace
    }

    /// Derives a UUID from a name.
    ///
    /// Digests the namespace bytes followed by the name bytes, truncates the digest to
    /// sixteen bytes, and stamps the RFC 4122 variant and version fields. The result is
    /// deterministic: equal inputs always produce equal UUIDs.
    pub fn generate(&self, name: impl AsRef<[u8]>) -> Uuid {
        let mut hasher = D::new();
        hasher.update(self.namespace.as_bytes());
        hasher.update(name);
        let digest = hasher.finalize();

        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest[..16]);
        bytes[6] = (bytes[6] & 0x0f) | D::VERSION_BITS;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Uuid::from(bytes)
    }
}

/// Derives a version-3 (MD5) UUID from a namespace UUID and a name.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{uuid3, Uuid};
///
/// let e = uuid3(Uuid::NAMESPACE_DNS, "python.org");
/// assert_eq!(&e.encode() as &str, "6fa459ea-ee8a-3ca4-894e-db77e160355e");
/// ```
pub fn uuid3(namespace: Uuid, name: impl AsRef<[u8]>) -> Uuid {
    V3Generator::new(namespace).generate(name)
}

/// Derives a version-5 (SHA-1) UUID from a namespace UUID and a name.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{uuid5, Uuid};
///
/// let e = uuid5(Uuid::NAMESPACE_DNS, "python.org");
/// assert_eq!(&e.encode() as &str, "886313e1-3b8a-5372-9b90-0c9aee199e5d");
/// ```
pub fn uuid5(namespace: Uuid, name: impl AsRef<[u8]>) -> Uuid {
    V5Generator::new(namespace).generate(name)
}
