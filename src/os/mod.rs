//! Operating system entropy layer
//!
//! This module provides access to the cryptographically secure random
//! number generator of the host operating system, behind the
//! [`RandomSource`](crate::rng::RandomSource) interface.
//!
//! Exactly one tier is authoritative per build and is selected at compile
//! time, from cheapest to most universally available:
//!
//! 1. `getrandom(2)` on Linux and Android ([`GetRandom`])
//! 2. `arc4random_buf(3)` on Apple platforms and the BSDs ([`Arc4Random`])
//! 3. `/dev/urandom`, then `/dev/random`, on any other Unix ([`DeviceFile`])
//! 4. the BCrypt RNG provider on Windows ([`BCrypt`]), or the legacy
//!    CryptoAPI provider with the `legacy-cryptoapi` feature ([`CryptoApi`])
//!
//! The `device-random` feature forces tier 3 on every Unix.
//!
//! A tier that fails reports an [`EntropyError`](crate::EntropyError); there is no runtime
//! fallback from one tier to the next.
//!
//! All tier types are public, so callers may also pick one explicitly.
//! [`SystemRandom`] names the one this build selects.

#[cfg(unix)]
use crate::error::EntropyError;

#[cfg(any(target_os = "linux", target_os = "android"))]
pub mod linux;

#[cfg(any(target_os = "linux", target_os = "android"))]
pub use linux::GetRandom;

#[cfg(any(
    target_vendor = "apple",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
))]
pub mod bsd;

#[cfg(any(
    target_vendor = "apple",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
))]
pub use bsd::Arc4Random;

#[cfg(unix)]
pub mod device;

#[cfg(unix)]
pub use device::DeviceFile;

#[cfg(windows)]
pub mod windows;

#[cfg(windows)]
pub use windows::{BCrypt, CryptoApi};

/// The entropy tier selected for this build.
#[cfg(all(
    any(target_os = "linux", target_os = "android"),
    not(feature = "device-random")
))]
pub type SystemRandom = GetRandom;

/// The entropy tier selected for this build.
#[cfg(all(
    any(
        target_vendor = "apple",
        target_os = "freebsd",
        target_os = "openbsd",
        target_os = "netbsd",
        target_os = "dragonfly"
    ),
    not(feature = "device-random")
))]
pub type SystemRandom = Arc4Random;

/// The entropy tier selected for this build.
#[cfg(all(
    unix,
    any(
        feature = "device-random",
        not(any(
            target_os = "linux",
            target_os = "android",
            target_vendor = "apple",
            target_os = "freebsd",
            target_os = "openbsd",
            target_os = "netbsd",
            target_os = "dragonfly"
        ))
    )
))]
pub type SystemRandom = DeviceFile;

/// The entropy tier selected for this build.
#[cfg(all(windows, not(feature = "legacy-cryptoapi")))]
pub type SystemRandom = BCrypt;

/// The entropy tier selected for this build.
#[cfg(all(windows, feature = "legacy-cryptoapi"))]
pub type SystemRandom = CryptoApi;

#[cfg(not(any(unix, windows)))]
compile_error!("unique-path has no entropy source for this target");


/// Classifies an `errno` reported by a Unix entropy tier.
///
/// `acquiring` is true while a source is being opened and false while
/// bytes are being generated or read.
#[cfg(unix)]
pub(crate) fn errno_error(op: &'static str, code: i32, acquiring: bool) -> EntropyError {
    match code {
        libc::ENOMEM | libc::EMFILE | libc::ENFILE => EntropyError::ResourceExhausted { op, code },
        libc::ENOSYS => EntropyError::SourceUnavailable { op, code },
        _ if acquiring => EntropyError::SourceUnavailable { op, code },
        _ => EntropyError::ReadFailed { op, code },
    }
}
