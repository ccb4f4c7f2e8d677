//! libnetcdf loaded at runtime
//!
//! Symbols are resolved once at load time. Entry points the library does not
//! export (features left out of the build, or newer than the library) answer
//! with `NC_ENOTBUILT` instead of failing the load.

use crate::ffi::loader::{LibraryLoader, LoadError};
use crate::ops::Symbols;
use crate::status::Status;
use libloading::Library;
use std::ffi::{c_char, c_int, CStr};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Type-erased entry point; cast to its real signature at the call site
pub(crate) type RawSymbol = unsafe extern "C" fn();

type LibversFn = unsafe extern "C" fn() -> *const c_char;
type StrerrorFn = unsafe extern "C" fn(c_int) -> *const c_char;

/// Entry points without which the library is not usable
const REQUIRED: &[&str] = &["nc_open", "nc_create", "nc_close"];

/// The native netCDF library
///
/// Only constructed by the process-wide gateway, so every call into the
/// library goes through one lock.
pub struct Libnetcdf {
    pub(crate) symbols: Symbols,
    libvers: LibversFn,
    strerror: Option<StrerrorFn>,
    path: PathBuf,
    // Dropped last: the resolved pointers above point into it.
    _library: Library,
}

impl Libnetcdf {
    pub(crate) fn load(loader: &LibraryLoader, name: &str) -> Result<Self, LoadError> {
        let (library, path) = loader.open(name)?;
        let library_name = path.display().to_string();

        let libvers = lookup(&library, "nc_inq_libvers").ok_or_else(|| LoadError::SymbolNotFound {
            library: library_name.clone(),
            symbol: "nc_inq_libvers".to_string(),
        })?;
        // SAFETY: nc_inq_libvers is `const char *nc_inq_libvers(void)`.
        let libvers = unsafe { std::mem::transmute::<RawSymbol, LibversFn>(libvers) };
        // SAFETY: nc_strerror is `const char *nc_strerror(int)`.
        let strerror = lookup(&library, "nc_strerror")
            .map(|symbol| unsafe { std::mem::transmute::<RawSymbol, StrerrorFn>(symbol) });

        let symbols = Symbols::resolve(&library);
        let missing = symbols.missing();
        if let Some(symbol) = REQUIRED.iter().find(|s| missing.contains(*s)) {
            return Err(LoadError::SymbolNotFound {
                library: library_name,
                symbol: symbol.to_string(),
            });
        }

        let native = Self {
            symbols,
            libvers,
            strerror,
            path,
            _library: library,
        };

        info!(
            target: "ncgate::load",
            path = %native.path.display(),
            version = %native.libvers(),
            resolved = Symbols::LEN - missing.len(),
            total = Symbols::LEN,
            "loaded libnetcdf"
        );
        if !missing.is_empty() {
            debug!(target: "ncgate::load", ?missing, "entry points not exported; calls return NC_ENOTBUILT");
        }

        Ok(native)
    }

    /// Where the library was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn libvers(&self) -> String {
        // SAFETY: returns a pointer to a static string or null.
        let version = unsafe { (self.libvers)() };
        if version.is_null() {
            return String::new();
        }
        // SAFETY: non-null result is NUL-terminated and static.
        unsafe { CStr::from_ptr(version) }
            .to_string_lossy()
            .into_owned()
    }

    pub(crate) fn describe(&self, status: Status) -> String {
        let Some(strerror) = self.strerror else {
            return status.describe().to_string();
        };
        // SAFETY: returns a pointer to a static string for any code.
        let message = unsafe { strerror(status.code()) };
        if message.is_null() {
            return status.describe().to_string();
        }
        // SAFETY: non-null result is NUL-terminated and static.
        unsafe { CStr::from_ptr(message) }
            .to_string_lossy()
            .into_owned()
    }
}

impl std::fmt::Debug for Libnetcdf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Libnetcdf")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Resolve an entry point by its C name
pub(crate) fn lookup(library: &Library, name: &str) -> Option<RawSymbol> {
    // SAFETY: the pointer is only called after being cast to the signature
    // the operation table declares for `name`.
    unsafe { library.get::<RawSymbol>(name.as_bytes()) }
        .ok()
        .map(|symbol| *symbol)
}
