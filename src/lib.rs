//! Unpredictable path names from model paths
//!
//! This crate turns a *model* path such as `"/tmp/build-%%%%-%%%%"` into a
//! path whose placeholder characters (`%`) are replaced by random lowercase
//! hexadecimal digits drawn from the operating system's cryptographically
//! secure random number generator.
//!
//! Results are unpredictable and collide with negligible probability, which
//! makes them suitable as names for temporary or scratch files. The crate
//! produces a path value only: it never checks for existence, creates,
//! or resolves anything on the filesystem.
//!
//! # Module overview
//!
//! - `error`
//!   [`EntropyError`], the single error type. Each failure names the OS
//!   operation that failed and carries the raw OS error code.
//!
//! - `rng`
//!   The [`RandomSource`] trait implemented by every entropy tier, and the
//!   seam for injecting deterministic sources.
//!
//! - `os`
//!   Platform entropy tiers selected at compile time: `getrandom(2)`,
//!   `arc4random_buf(3)`, `/dev/urandom` and `/dev/random`, and the Windows
//!   BCrypt or CryptoAPI providers. [`SystemRandom`] names the tier this
//!   build uses. No tier ever falls back to a weaker source at runtime.
//!
//! - `unique`
//!   The placeholder substitution engine and the public path operations
//!   [`unique_path`], [`unique_path_with_error`] and [`Generator`].
//!
//! # Example
//!
//! ```no_run
//! let path = unique_path::unique_path("/tmp/scratch-%%%%-%%%%")?;
//! assert_eq!(path.as_os_str().len(), "/tmp/scratch-0000-0000".len());
//! # Ok::<(), unique_path::EntropyError>(())
//! ```
//!
//! # Features
//!
//! - `device-random`: read `/dev/urandom` on every Unix instead of the
//!   platform's preferred interface.
//! - `legacy-cryptoapi`: use CryptoAPI instead of BCrypt on Windows.

pub mod error;
pub mod os;
pub mod rng;
pub mod unique;

pub use error::{EntropyError, EntropyErrorKind};
pub use os::SystemRandom;
pub use rng::RandomSource;
pub use unique::{
    DEFAULT_MODEL, Generator, PLACEHOLDER, default_unique_path, fill_placeholders, unique_path,
    unique_path_with_error,
};
