//! Native library binding
//!
//! - `loader`: locating and opening libnetcdf
//! - `libnetcdf`: the loaded library as a `NetcdfApi` collaborator
//! - `lower`: typed gateway arguments to C ABI values
//!
//! # Safety
//!
//! All raw symbol handling lives here. The rest of the crate only sees the
//! `NetcdfApi` trait.

pub mod libnetcdf;
pub mod loader;
pub mod lower;

pub use libnetcdf::Libnetcdf;
pub use loader::{LibraryLoader, LoadError};
pub use lower::{Element, Lower};
