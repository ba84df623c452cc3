//! Default generator and entry point functions

#![cfg(feature = "os_gen")]

use crate::{Uuid, V4Generator};
use rand::rngs::ThreadRng;
use std::cell::RefCell;

thread_local! {
    static DEFAULT_GENERATOR: RefCell<V4Generator<ThreadRng>> = Default::default();
}

/// Generates a UUIDv4 object.
///
/// This function employs a thread-local generator. On Unix, it resets the generator
/// when the process ID changes (i.e. upon process forks) to prevent collisions across
/// processes.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid4122::uuid4();
/// println!("{uuid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = uuid4122::uuid4().to_string();
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "os_gen")))]
pub fn uuid4() -> Uuid {
    DEFAULT_GENERATOR.with(|g| {
        if unix_fork_safety::reseed_thread_rng_upon_pid_change() {
            g.replace(Default::default());
        }

        g.borrow_mut().generate()
    })
}

#[cfg(unix)]
mod unix_fork_safety {
    use std::{cell::Cell, process};

    thread_local! {
        static PID: Cell<u32> = Cell::new(process::id());
    }

    /// Reseeds ThreadRng immediately when the process ID changes (i.e. upon process forks),
    /// returning true if ThreadRng is reseeded or false otherwise.
    pub fn reseed_thread_rng_upon_pid_change() -> bool {
        PID.with(|last_pid| {
            let pid = process::id();
            if pid == last_pid.replace(pid) {
                false
            } else {
                // As of rand v0.8.5 and rand_chacha v0.3.1, up to 63 `u32` values have to be used
                // before reseeding after a fork. Note that the `rand::rngs::adapter::ReseedingRng`
                // doc is wrong as of rand v0.8.5 as it describes the rand_chacha v0.1 behavior.
                // See https://github.com/rust-random/rand/pull/1317
                let _: [[u32; 32]; 2] = rand::random();
                true
            }
        })
    }
}

#[cfg(not(unix))]
mod unix_fork_safety {
    pub const fn reseed_thread_rng_upon_pid_change() -> bool {
        false
    }
}
