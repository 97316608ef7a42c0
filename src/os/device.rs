//! Device-file entropy (generic Unix)
//!
//! Used where neither `getrandom(2)` nor `arc4random_buf(3)` is available,
//! or everywhere on Unix with the `device-random` feature. The device is
//! opened for a single fill and closed again when the `File` drops, on the
//! success path and on every error path.

use std::fs::File;
use std::io::{ErrorKind, Read};

use tracing::{debug, trace};

use crate::error::EntropyError;
use crate::os::errno_error;
use crate::rng::RandomSource;

/// Non-blocking device, tried first.
pub const URANDOM: &str = "/dev/urandom";

/// Blocking-quality device, tried when [`URANDOM`] cannot be opened.
pub const RANDOM: &str = "/dev/random";

/// Entropy read from `/dev/urandom`, or `/dev/random` as a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceFile {
    primary: &'static str,
    fallback: &'static str,
}

impl DeviceFile {
    /// Creates a source reading [`URANDOM`], falling back to [`RANDOM`].
    ///
    /// The device is opened on each fill, not here.
    pub fn new() -> Self {
        Self::with_paths(URANDOM, RANDOM)
    }

    /// Creates a source reading `primary`, falling back to `fallback` when
    /// `primary` cannot be opened.
    pub fn with_paths(primary: &'static str, fallback: &'static str) -> Self {
        Self { primary, fallback }
    }

    fn open(&self) -> Result<File, EntropyError> {
        match File::open(self.primary) {
            Ok(file) => Ok(file),
            Err(err) => {
                debug!(
                    error = %err,
                    "cannot open {}, falling back to {}",
                    self.primary,
                    self.fallback
                );

                File::open(self.fallback).map_err(|err| errno_error("open", os_code(&err), true))
            }
        }
    }
}

impl Default for DeviceFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for DeviceFile {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        let mut file = self.open()?;
        read_full(&mut file, buf)
    }
}

/// Reads from `reader` until `buf` is completely filled.
///
/// An interrupted read is retried and resumes at the offset already
/// written. End of file and any other error are fatal and reported as
/// [`EntropyError::ReadFailed`].
pub fn read_full<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<(), EntropyError> {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(EntropyError::ReadFailed {
                    op: "read",
                    code: libc::EIO,
                });
            }
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => {
                trace!(filled, "entropy read interrupted, retrying");
            }
            Err(err) => {
                return Err(EntropyError::ReadFailed {
                    op: "read",
                    code: os_code(&err),
                });
            }
        }
    }

    Ok(())
}

fn os_code(err: &std::io::Error) -> i32 {
    err.raw_os_error().unwrap_or(libc::EIO)
}
