use crate::error::EntropyError;

/// A provider of cryptographically strong random bytes.
///
/// Implementations must either fill the whole destination buffer or return
/// an error. Returning `Ok(())` with a partially written buffer is never
/// allowed, and a failing source must not silently degrade to a weaker one.
pub trait RandomSource {
    /// Fills `dest` entirely with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}
