//! UUIDv4 generator and related types.

use crate::Uuid;
use rand::RngCore;

/// Represents a random-number-based (version 4) UUID generator that encapsulates a
/// pseudo-random bit generator.
///
/// The generator may exclusively own its bit generator or borrow one whose lifetime the
/// caller manages, because `&mut R` implements [`RngCore`] whenever `R` does. A single
/// instance requires `&mut self` per draw; share one across threads only behind external
/// synchronization, or give each thread its own instance.
///
/// # Examples
///
/// ```rust
/// use uuid4122::V4Generator;
///
/// let mut g = V4Generator::new(rand::rngs::OsRng);
/// println!("{}", g.generate());
///
/// // borrowing a caller-managed bit generator
/// let mut rng = rand::thread_rng();
/// let mut g = V4Generator::new(&mut rng);
/// println!("{}", g.generate());
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V4Generator<R> {
    /// Random number generator used by the generator.
    rng: R,
}

impl<R: RngCore> V4Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object.
    ///
    /// Draws 128 bits from the underlying bit generator as four 32-bit words, then
    /// stamps the RFC 4122 variant and version fields into octets 8 and 6. Generation
    /// never fails and is deterministic for a fixed bit generator state.
    pub fn generate(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        for chunk in bytes.chunks_exact_mut(4) {
            chunk.copy_from_slice(&self.rng.next_u32().to_le_bytes());
        }
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Uuid::from(bytes)
    }
}

#[cfg(feature = "os_gen")]
#[cfg_attr(docsrs, doc(cfg(feature = "os_gen")))]
impl V4Generator<rand_chacha::ChaCha12Rng> {
    /// Creates a generator that exclusively owns a ChaCha12 bit generator seeded from
    /// the operating system entropy source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::V4Generator;
    ///
    /// let mut g = V4Generator::from_entropy();
    /// let x = g.generate();
    /// let y = g.generate();
    /// assert_ne!(x, y);
    /// ```
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self::new(rand_chacha::ChaCha12Rng::from_entropy())
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv4 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uuid4122::V4Generator;
///
/// V4Generator::new(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<R: RngCore> Iterator for V4Generator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RngCore> core::iter::FusedIterator for V4Generator<R> {}
