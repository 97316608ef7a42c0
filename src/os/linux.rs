//! Operating system entropy (Linux, Android)
//!
//! On Linux, the `getrandom` system call provides direct access to the
//! kernel entropy pool without a file descriptor and without special
//! privileges. It is the preferred tier wherever it exists.
//!
//! Bionic only exports a `getrandom` wrapper from API level 28, so on
//! Android the system call is issued directly through `syscall(2)`. This
//! needs a 3.17+ kernel; older kernels report `ENOSYS`, which surfaces as
//! [`EntropyError::SourceUnavailable`]. Build with the `device-random`
//! feature to use `/dev/urandom` on such devices.

use libc::c_void;
use tracing::trace;

use crate::error::EntropyError;
use crate::os::errno_error;
use crate::rng::RandomSource;

/// Entropy from the Linux `getrandom(2)` system call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GetRandom;

impl GetRandom {
    /// Creates a source backed by `getrandom(2)`.
    ///
    /// Nothing is acquired up front; each fill goes straight to the kernel.
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "linux")]
fn getrandom(buf: &mut [u8]) -> isize {
    unsafe { libc::getrandom(buf.as_mut_ptr() as *mut c_void, buf.len(), 0) }
}

#[cfg(target_os = "android")]
fn getrandom(buf: &mut [u8]) -> isize {
    unsafe {
        libc::syscall(
            libc::SYS_getrandom,
            buf.as_mut_ptr() as *mut c_void,
            buf.len(),
            0u32,
        ) as isize
    }
}

impl RandomSource for GetRandom {
    /// Calls `getrandom` until the entire buffer is filled.
    ///
    /// Partial reads are handled transparently, resuming after the bytes
    /// already written. `EINTR` is retried; every other error is reported.
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        let mut filled = 0;

        while filled < buf.len() {
            let ret = getrandom(&mut buf[filled..]);

            if ret < 0 {
                let code = std::io::Error::last_os_error()
                    .raw_os_error()
                    .unwrap_or(libc::EIO);

                if code == libc::EINTR {
                    trace!(filled, "getrandom interrupted, retrying");
                    continue;
                }

                return Err(errno_error("getrandom", code, false));
            }

            filled += ret as usize;
        }

        Ok(())
    }
}
