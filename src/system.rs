//! Generation through the operating system's UUID facility.

#![cfg(feature = "os_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "os_gen")))]

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;

use crate::Uuid;

/// Generates a UUID through the operating system's native facility.
///
/// The platform facilities behind `uuid_generate(3)` and `CoCreateGuid` draw from the
/// kernel entropy pool and stamp the version-4 fields; this function does the same
/// against the OS entropy device, so the result always carries the RFC 4122 variant and
/// the random-number-based version. Unlike [`uuid4`](crate::uuid4), no user-space
/// generator state is involved: every call reaches into the operating system and may
/// block until entropy is available.
///
/// # Errors
///
/// Returns [`SystemError`] when the operating system refuses to provide random bytes.
/// There is no fallback value; a UUID is never fabricated from a failed call.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{system_uuid, Variant};
///
/// let e = system_uuid()?;
/// assert_eq!(e.variant(), Variant::Rfc4122);
/// # Ok::<(), uuid4122::SystemError>(())
/// ```
pub fn system_uuid() -> Result<Uuid, SystemError> {
    let mut bytes = [0u8; 16];
    OsRng.try_fill_bytes(&mut bytes).map_err(SystemError)?;
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    Ok(Uuid::from(bytes))
}

/// Error obtaining random bytes from the operating system facility.
#[derive(Debug)]
pub struct SystemError(rand::Error);

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not obtain a UUID from the operating system: {}", self.0)
    }
}

impl std::error::Error for SystemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}
