//! Error type shared by every entropy tier and the path operations.

use std::io;

use thiserror::Error;

/// Failure to obtain random bytes from the operating system.
///
/// Every variant records the OS operation that failed and the raw error
/// code it reported (`errno` on Unix, a Win32 error code on Windows).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntropyError {
    /// No entropy primitive could be opened or acquired.
    #[error("{op}: entropy source unavailable (os error {code})")]
    SourceUnavailable { op: &'static str, code: i32 },

    /// An acquired source failed while generating bytes.
    #[error("{op}: reading entropy failed (os error {code})")]
    ReadFailed { op: &'static str, code: i32 },

    /// The OS ran out of memory or another resource while acquiring a handle.
    #[error("{op}: out of resources (os error {code})")]
    ResourceExhausted { op: &'static str, code: i32 },
}

/// Coarse classification of an [`EntropyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntropyErrorKind {
    SourceUnavailable,
    ReadFailed,
    ResourceExhausted,
}

impl EntropyError {
    /// Returns the variant without its payload.
    pub fn kind(&self) -> EntropyErrorKind {
        match self {
            Self::SourceUnavailable { .. } => EntropyErrorKind::SourceUnavailable,
            Self::ReadFailed { .. } => EntropyErrorKind::ReadFailed,
            Self::ResourceExhausted { .. } => EntropyErrorKind::ResourceExhausted,
        }
    }

    /// Name of the OS operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::SourceUnavailable { op, .. }
            | Self::ReadFailed { op, .. }
            | Self::ResourceExhausted { op, .. } => *op,
        }
    }

    /// Raw OS error code reported by the failing operation.
    pub fn raw_os_error(&self) -> i32 {
        match self {
            Self::SourceUnavailable { code, .. }
            | Self::ReadFailed { code, .. }
            | Self::ResourceExhausted { code, .. } => *code,
        }
    }
}

impl From<EntropyError> for io::Error {
    fn from(err: EntropyError) -> Self {
        let os = io::Error::from_raw_os_error(err.raw_os_error());
        io::Error::new(os.kind(), err)
    }
}
