//! libnetcdf constants used by callers of the gateway
//!
//! The gateway forwards these values untouched; they are collected here so
//! callers do not have to repeat magic numbers from `netcdf.h`.

use std::ffi::c_int;

/// Maximum length of a name, excluding the terminating NUL
pub const NC_MAX_NAME: usize = 256;

/// Length passed to `def_dim` for the unlimited dimension
pub const NC_UNLIMITED: usize = 0;

/// Raw variable id addressing global attributes
pub const NC_GLOBAL: c_int = -1;

// Open and create modes
pub const NC_NOWRITE: c_int = 0x0000;
pub const NC_WRITE: c_int = 0x0001;
pub const NC_CLOBBER: c_int = 0x0000;
pub const NC_NOCLOBBER: c_int = 0x0004;
pub const NC_DISKLESS: c_int = 0x0008;
pub const NC_SHARE: c_int = 0x0800;
pub const NC_CLASSIC_MODEL: c_int = 0x0100;
pub const NC_64BIT_OFFSET: c_int = 0x0200;
pub const NC_NETCDF4: c_int = 0x1000;

// On-disk formats reported by `inq_format`
pub const NC_FORMAT_CLASSIC: c_int = 1;
pub const NC_FORMAT_64BIT_OFFSET: c_int = 2;
pub const NC_FORMAT_NETCDF4: c_int = 3;
pub const NC_FORMAT_NETCDF4_CLASSIC: c_int = 4;
pub const NC_FORMAT_64BIT_DATA: c_int = 5;

// Fill modes
pub const NC_FILL: c_int = 0;
pub const NC_NOFILL: c_int = 0x100;

// Variable storage
pub const NC_CHUNKED: c_int = 0;
pub const NC_CONTIGUOUS: c_int = 1;

// Variable endianness
pub const NC_ENDIAN_NATIVE: c_int = 0;
pub const NC_ENDIAN_LITTLE: c_int = 1;
pub const NC_ENDIAN_BIG: c_int = 2;

// Classes of user-defined types
pub const NC_VLEN: c_int = 13;
pub const NC_OPAQUE: c_int = 14;
pub const NC_ENUM: c_int = 15;
pub const NC_COMPOUND: c_int = 16;
