//! Placeholder substitution engine.

use tracing::trace;

use crate::error::EntropyError;
use crate::rng::RandomSource;

/// Character replaced by one random hexadecimal digit.
pub const PLACEHOLDER: u8 = b'%';

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Size of one random fill in bytes.
const BUFFER_LEN: usize = 16;

/// Number of 4-bit nibbles in one fill.
const MAX_NIBBLES: usize = 2 * BUFFER_LEN;

/// Random buffer consumed one nibble at a time.
///
/// The cursor starts exhausted so the first request triggers a fill. Every
/// nibble of a fill is consumed, in order, before the next fill.
pub(crate) struct Nibbles {
    buf: [u8; BUFFER_LEN],
    used: usize,
}

impl Nibbles {
    pub(crate) fn new() -> Self {
        Self {
            buf: [0u8; BUFFER_LEN],
            used: MAX_NIBBLES,
        }
    }

    /// Returns the next random hexadecimal digit as ASCII.
    ///
    /// Even positions take the low nibble of a byte and odd positions the
    /// high nibble.
    pub(crate) fn next_hex<S>(&mut self, source: &mut S) -> Result<u8, EntropyError>
    where
        S: RandomSource + ?Sized,
    {
        if self.used == MAX_NIBBLES {
            source.fill_bytes(&mut self.buf)?;
            self.used = 0;
            trace!(len = BUFFER_LEN, "refilled nibble buffer");
        }

        let byte = self.buf[self.used / 2];
        let nibble = (byte >> (4 * (self.used & 1))) & 0x0f;
        self.used += 1;

        Ok(HEX[nibble as usize])
    }
}

impl Drop for Nibbles {
    fn drop(&mut self) {
        self.buf.fill(0);
    }
}

/// Replaces every [`PLACEHOLDER`] in `units` with a random hex digit.
///
/// `units` are the code units of a native string (`u8` on Unix, `u16` on
/// Windows); all other units are left untouched. Returns the number of
/// placeholders replaced. A template without placeholders never calls
/// `source`.
///
/// On error the contents of `units` are unspecified and must be discarded.
pub fn fill_placeholders<U, S>(units: &mut [U], source: &mut S) -> Result<usize, EntropyError>
where
    U: Copy + PartialEq + From<u8>,
    S: RandomSource + ?Sized,
{
    let placeholder = U::from(PLACEHOLDER);
    let mut nibbles = Nibbles::new();
    let mut replaced = 0;

    for unit in units.iter_mut() {
        if *unit == placeholder {
            *unit = U::from(nibbles.next_hex(&mut *source)?);
            replaced += 1;
        }
    }

    Ok(replaced)
}
