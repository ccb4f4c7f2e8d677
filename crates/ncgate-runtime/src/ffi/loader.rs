//! Dynamic library loading for the native collaborator
//!
//! Resolves libnetcdf by name or path using platform naming conventions
//! (`libnetcdf.so`, `libnetcdf.dylib`, `netcdf.dll`). Configured search paths
//! are tried first, then the platform's usual library directories, then the
//! system dynamic loader's own search.

use libloading::Library;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Library loading errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Library file not found in any search path
    #[error("library not found: {0}")]
    LibraryNotFound(String),

    /// Required entry point missing from the library
    #[error("symbol '{symbol}' not found in library '{library}'")]
    SymbolNotFound { library: String, symbol: String },

    /// The dynamic loader rejected the library
    #[error("failed to load library: {0}")]
    LoadFailed(String),
}

/// Resolves and opens the native library
#[derive(Debug, Clone)]
pub struct LibraryLoader {
    search_paths: Vec<PathBuf>,
}

impl LibraryLoader {
    /// Loader searching the platform default directories
    pub fn new() -> Self {
        Self {
            search_paths: Self::default_search_paths(),
        }
    }

    /// Loader searching `paths` before the platform defaults
    pub fn with_search_paths(paths: &[PathBuf]) -> Self {
        let mut loader = Self::new();
        for path in paths.iter().rev() {
            loader.add_search_path(path.clone());
        }
        loader
    }

    /// Get platform-specific default library search paths
    fn default_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        #[cfg(target_os = "linux")]
        {
            paths.push(PathBuf::from("/usr/lib"));
            paths.push(PathBuf::from("/usr/local/lib"));
            paths.push(PathBuf::from("/lib"));

            if cfg!(target_pointer_width = "64") {
                paths.push(PathBuf::from("/usr/lib64"));
                paths.push(PathBuf::from("/usr/lib/x86_64-linux-gnu"));
                paths.push(PathBuf::from("/usr/lib/aarch64-linux-gnu"));
            }
        }

        #[cfg(target_os = "macos")]
        {
            paths.push(PathBuf::from("/usr/local/lib"));
            paths.push(PathBuf::from("/opt/homebrew/lib"));
            paths.push(PathBuf::from("/opt/local/lib"));
        }

        #[cfg(target_os = "windows")]
        {
            if let Ok(prefix) = std::env::var("CONDA_PREFIX") {
                paths.push(PathBuf::from(prefix).join("Library").join("bin"));
            }
        }

        paths
    }

    /// Add a search path ahead of the existing ones
    pub fn add_search_path(&mut self, path: PathBuf) {
        self.search_paths.insert(0, path);
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Resolve a library name to a file in the search paths
    ///
    /// An existing absolute path is used as is. Otherwise each search path is
    /// tried with the platform prefix and extension, then with a versioned
    /// suffix (`libnetcdf.so.19`) on Unix.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let path = Path::new(name);
        if path.is_absolute() {
            return path.exists().then(|| path.to_path_buf());
        }

        let file_name = platform_file_name(name);
        for dir in &self.search_paths {
            let candidate = dir.join(&file_name);
            if candidate.exists() {
                return Some(candidate);
            }
            if cfg!(unix) {
                if let Some(versioned) = find_versioned(dir, &file_name) {
                    return Some(versioned);
                }
            }
        }

        None
    }

    /// Open the library, returning it together with the location it came from
    ///
    /// Falls back to the system loader (which honours `LD_LIBRARY_PATH`,
    /// `DYLD_LIBRARY_PATH` and `PATH`) when no search path contains it.
    pub fn open(&self, name: &str) -> Result<(Library, PathBuf), LoadError> {
        let path = match self.resolve(name) {
            Some(path) => path,
            None if Path::new(name).is_absolute() => {
                return Err(LoadError::LibraryNotFound(name.to_string()))
            }
            None => PathBuf::from(libloading::library_filename(name)),
        };

        debug!(target: "ncgate::load", path = %path.display(), "opening native library");

        // SAFETY: loading runs the library's initializers; libnetcdf has no
        // initialization requirements beyond being loaded once.
        let library = unsafe { Library::new(&path) }.map_err(|e| {
            if path.is_absolute() {
                LoadError::LoadFailed(format!("{}: {}", path.display(), e))
            } else {
                LoadError::LibraryNotFound(format!("{} ({})", name, e))
            }
        })?;

        Ok((library, path))
    }
}

impl Default for LibraryLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// `netcdf` -> `libnetcdf.so` / `libnetcdf.dylib` / `netcdf.dll`
fn platform_file_name(name: &str) -> String {
    if cfg!(target_os = "windows") {
        format!("{}.dll", name)
    } else if cfg!(target_os = "macos") {
        format!("lib{}.dylib", name)
    } else {
        format!("lib{}.so", name)
    }
}

/// Highest versioned variant of `file_name` in `dir` (`libnetcdf.so.19`)
fn find_versioned(dir: &Path, file_name: &str) -> Option<PathBuf> {
    let prefix = format!("{}.", file_name);
    std::fs::read_dir(dir)
        .ok()?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(&prefix))
        })
        .max()
}
