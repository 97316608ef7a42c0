//! Operating system entropy (Windows)
//!
//! Two providers are available. [`BCrypt`] opens the CNG RNG algorithm
//! provider and is the default; [`CryptoApi`] acquires a legacy CryptoAPI
//! context and is selected by the `legacy-cryptoapi` feature.
//!
//! Both acquire their handle for a single fill and release it through a
//! guard. The handle is always released before a failure is translated
//! and reported.

use std::ptr;

use tracing::debug;
use windows_sys::Win32::Foundation::{
    ERROR_INVALID_HANDLE, ERROR_INVALID_PARAMETER, ERROR_NOT_ENOUGH_MEMORY, ERROR_NOT_SUPPORTED,
    ERROR_OUTOFMEMORY, GetLastError, NTSTATUS, STATUS_INVALID_HANDLE, STATUS_INVALID_PARAMETER,
    STATUS_NO_MEMORY,
};
use windows_sys::Win32::Security::Cryptography::{
    BCRYPT_ALG_HANDLE, BCRYPT_RNG_ALGORITHM, BCryptCloseAlgorithmProvider, BCryptGenRandom,
    BCryptOpenAlgorithmProvider, CRYPT_SILENT, CRYPT_VERIFYCONTEXT, CryptAcquireContextW,
    CryptGenRandom, CryptReleaseContext, PROV_RSA_FULL,
};

use crate::error::EntropyError;
use crate::rng::RandomSource;

/// Largest request a single provider call accepts.
const MAX_CHUNK: usize = u32::MAX as usize;

/// Entropy from the CNG RNG algorithm provider.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BCrypt;

impl BCrypt {
    /// Creates a source backed by the CNG RNG algorithm provider.
    ///
    /// The provider is opened and closed on each fill, not here.
    pub fn new() -> Self {
        Self
    }
}

/// Open RNG algorithm provider, closed on drop.
struct AlgorithmHandle(BCRYPT_ALG_HANDLE);

impl AlgorithmHandle {
    fn open() -> Result<Self, EntropyError> {
        let mut handle: BCRYPT_ALG_HANDLE = ptr::null_mut();
        let status = unsafe {
            BCryptOpenAlgorithmProvider(&mut handle, BCRYPT_RNG_ALGORITHM, ptr::null(), 0)
        };

        if status != 0 {
            debug!(status, "BCryptOpenAlgorithmProvider failed");
            return Err(ntstatus_error("BCryptOpenAlgorithmProvider", status, true));
        }

        Ok(Self(handle))
    }
}

impl Drop for AlgorithmHandle {
    fn drop(&mut self) {
        unsafe {
            BCryptCloseAlgorithmProvider(self.0, 0);
        }
    }
}

impl RandomSource for BCrypt {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        let status = {
            let handle = AlgorithmHandle::open()?;
            let mut status = 0;

            for chunk in buf.chunks_mut(MAX_CHUNK) {
                status = unsafe {
                    BCryptGenRandom(handle.0, chunk.as_mut_ptr(), chunk.len() as u32, 0)
                };
                if status != 0 {
                    break;
                }
            }

            status
        };

        if status != 0 {
            debug!(status, "BCryptGenRandom failed");
            return Err(ntstatus_error("BCryptGenRandom", status, false));
        }

        Ok(())
    }
}

/// Maps an NTSTATUS onto the Win32 error code reported to callers.
fn translate_ntstatus(status: NTSTATUS) -> u32 {
    match status {
        STATUS_NO_MEMORY => ERROR_OUTOFMEMORY,
        STATUS_INVALID_HANDLE => ERROR_INVALID_HANDLE,
        STATUS_INVALID_PARAMETER => ERROR_INVALID_PARAMETER,
        _ => ERROR_NOT_SUPPORTED,
    }
}

fn ntstatus_error(op: &'static str, status: NTSTATUS, acquiring: bool) -> EntropyError {
    win32_error(op, translate_ntstatus(status), acquiring)
}

fn win32_error(op: &'static str, code: u32, acquiring: bool) -> EntropyError {
    let code_i32 = code as i32;

    match code {
        ERROR_OUTOFMEMORY | ERROR_NOT_ENOUGH_MEMORY => EntropyError::ResourceExhausted {
            op,
            code: code_i32,
        },
        _ if acquiring => EntropyError::SourceUnavailable { op, code: code_i32 },
        _ => EntropyError::ReadFailed { op, code: code_i32 },
    }
}

/// Entropy from a legacy CryptoAPI `PROV_RSA_FULL` provider.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CryptoApi;

impl CryptoApi {
    /// Creates a source backed by a verify-only CryptoAPI context.
    ///
    /// The context is acquired and released on each fill, not here.
    pub fn new() -> Self {
        Self
    }
}

/// Acquired CryptoAPI context, released on drop.
struct ProviderContext(usize);

impl ProviderContext {
    fn acquire() -> Result<Self, EntropyError> {
        let mut handle = 0usize;
        let ok = unsafe {
            CryptAcquireContextW(
                &mut handle,
                ptr::null(),
                ptr::null(),
                PROV_RSA_FULL,
                CRYPT_VERIFYCONTEXT | CRYPT_SILENT,
            )
        };

        if ok == 0 {
            let code = unsafe { GetLastError() };
            debug!(code, "CryptAcquireContextW failed");
            return Err(win32_error("CryptAcquireContextW", code, true));
        }

        Ok(Self(handle))
    }
}

impl Drop for ProviderContext {
    fn drop(&mut self) {
        unsafe {
            CryptReleaseContext(self.0, 0);
        }
    }
}

impl RandomSource for CryptoApi {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        // GetLastError must be read before the context is released.
        let failure = {
            let context = ProviderContext::acquire()?;
            let mut failure = None;

            for chunk in buf.chunks_mut(MAX_CHUNK) {
                let ok = unsafe { CryptGenRandom(context.0, chunk.len() as u32, chunk.as_mut_ptr()) };
                if ok == 0 {
                    failure = Some(unsafe { GetLastError() });
                    break;
                }
            }

            failure
        };

        if let Some(code) = failure {
            debug!(code, "CryptGenRandom failed");
            return Err(win32_error("CryptGenRandom", code, false));
        }

        Ok(())
    }
}
