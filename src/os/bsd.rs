use libc::{arc4random_buf, c_void};

use crate::error::EntropyError;
use crate::rng::RandomSource;

/// Entropy from the libc `arc4random_buf(3)` CSPRNG (Apple, BSD).
///
/// The call is non-blocking and cannot fail.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Arc4Random;

impl Arc4Random {
    /// Creates a source backed by `arc4random_buf(3)`.
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for Arc4Random {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        unsafe {
            arc4random_buf(buf.as_mut_ptr() as *mut c_void, buf.len());
        }

        Ok(())
    }
}
