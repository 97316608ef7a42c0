//! Unique path generation.
//!
//! A *model* path is copied and every placeholder character (`%`) in it is
//! replaced with a random lowercase hexadecimal digit. The module is split
//! into two layers:
//!
//! - [`core`](self::core)
//!   Public path operations: [`Generator`], [`unique_path`] and
//!   [`unique_path_with_error`]. These work on the native encoding of the
//!   path (bytes on Unix, UTF-16 code units on Windows) and never touch the
//!   filesystem.
//!
//! - `nibbles`
//!   The substitution engine. Randomness is drawn in 16-byte fills and
//!   consumed one 4-bit nibble per placeholder, low nibble first, so one OS
//!   call serves up to 32 placeholders.
//!
//! ## Design notes
//!
//! - `%` is 0x25, which is never a lead or trailing unit of any supported
//!   multi-byte encoding, so code units are compared directly.
//! - All state is local to one call. Nibbles left over in the last fill are
//!   discarded and never carried into a later call.
//! - A source failure aborts the whole call; no partially substituted path
//!   is ever returned.

pub mod core;
pub(crate) mod nibbles;

pub use self::core::{DEFAULT_MODEL, Generator, default_unique_path, unique_path, unique_path_with_error};
pub use self::nibbles::{PLACEHOLDER, fill_placeholders};
