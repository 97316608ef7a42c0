//! Public unique-path operations.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::EntropyError;
use crate::os::SystemRandom;
use crate::rng::RandomSource;
use crate::unique::nibbles::fill_placeholders;

/// Model used by [`default_unique_path`]: 16 hex digits in four groups.
pub const DEFAULT_MODEL: &str = "%%%%-%%%%-%%%%-%%%%";

/// Generates unique paths from model paths using a [`RandomSource`].
///
/// A generator only holds its source. The random buffer is created afresh
/// for each call, so nothing drawn for one path is ever reused for another.
#[derive(Debug, Clone)]
pub struct Generator<S = SystemRandom> {
    source: S,
}

impl Generator<SystemRandom> {
    /// Creates a generator backed by the operating system entropy source.
    pub fn new() -> Self {
        Self::with_source(SystemRandom::default())
    }
}

impl Default for Generator<SystemRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RandomSource> Generator<S> {
    /// Creates a generator drawing randomness from `source`.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Returns `model` with every `%` replaced by a random hex digit.
    ///
    /// The output has the same length as the model and differs from it only
    /// at placeholder positions.
    pub fn generate<P: AsRef<Path>>(&mut self, model: P) -> Result<PathBuf, EntropyError> {
        let model = model.as_ref();

        substitute(model, &mut self.source).inspect_err(|err| {
            debug!(error = %err, model = %model.display(), "unique path generation failed");
        })
    }

    /// Like [`generate`](Self::generate), reporting failure through a slot.
    ///
    /// On failure the error is stored in `error` and an empty path is
    /// returned. On success `error` is cleared.
    pub fn generate_with_error<P: AsRef<Path>>(
        &mut self,
        model: P,
        error: &mut Option<EntropyError>,
    ) -> PathBuf {
        match self.generate(model) {
            Ok(path) => {
                *error = None;
                path
            }
            Err(err) => {
                *error = Some(err);
                PathBuf::new()
            }
        }
    }
}

/// Returns `model` with every `%` replaced by a random hex digit drawn from
/// the operating system.
///
/// ```no_run
/// let path = unique_path::unique_path("/tmp/build-%%%%-%%%%")?;
/// # Ok::<(), unique_path::EntropyError>(())
/// ```
pub fn unique_path<P: AsRef<Path>>(model: P) -> Result<PathBuf, EntropyError> {
    Generator::new().generate(model)
}

/// Slot-reporting form of [`unique_path`].
///
/// On failure the error is stored in `error` and an empty path is returned;
/// on success `error` is cleared.
pub fn unique_path_with_error<P: AsRef<Path>>(
    model: P,
    error: &mut Option<EntropyError>,
) -> PathBuf {
    Generator::new().generate_with_error(model, error)
}

/// [`unique_path`] applied to [`DEFAULT_MODEL`].
pub fn default_unique_path() -> Result<PathBuf, EntropyError> {
    unique_path(DEFAULT_MODEL)
}

#[cfg(unix)]
fn substitute<S>(model: &Path, source: &mut S) -> Result<PathBuf, EntropyError>
where
    S: RandomSource + ?Sized,
{
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let mut units = model.as_os_str().as_bytes().to_vec();
    fill_placeholders(&mut units, source)?;

    Ok(PathBuf::from(OsString::from_vec(units)))
}

#[cfg(windows)]
fn substitute<S>(model: &Path, source: &mut S) -> Result<PathBuf, EntropyError>
where
    S: RandomSource + ?Sized,
{
    use std::os::windows::ffi::{OsStrExt, OsStringExt};

    let mut units: Vec<u16> = model.as_os_str().encode_wide().collect();
    fill_placeholders(&mut units, source)?;

    Ok(PathBuf::from(OsString::from_wide(&units)))
}
