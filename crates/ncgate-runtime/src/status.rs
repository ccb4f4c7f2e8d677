//! Native status codes
//!
//! Every libnetcdf entry point returns an `int` status: zero on success,
//! negative on failure. The gateway hands it back verbatim as [`Status`];
//! interpretation is left to the caller.

use std::ffi::c_int;
use std::fmt;
use thiserror::Error;

/// Status code returned by a native operation
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status(c_int);

impl Status {
    pub const NOERR: Status = Status(0);
    pub const EBADID: Status = Status(-33);
    pub const EINVAL: Status = Status(-36);
    pub const EPERM: Status = Status(-37);
    pub const ENOTINDEFINE: Status = Status(-38);
    pub const EINDEFINE: Status = Status(-39);
    pub const EINVALCOORDS: Status = Status(-40);
    pub const ENAMEINUSE: Status = Status(-42);
    pub const ENOTATT: Status = Status(-43);
    pub const EBADTYPE: Status = Status(-45);
    pub const EBADDIM: Status = Status(-46);
    pub const ENOTVAR: Status = Status(-49);
    pub const ENOTNC: Status = Status(-51);
    pub const ECHAR: Status = Status(-56);
    pub const EEDGE: Status = Status(-57);
    pub const ESTRIDE: Status = Status(-58);
    pub const ERANGE: Status = Status(-60);
    pub const ENOMEM: Status = Status(-61);
    pub const EHDFERR: Status = Status(-101);
    pub const EBADGRPID: Status = Status(-116);
    pub const EBADTYPID: Status = Status(-117);
    /// Operation not built into the loaded library (`NC_ENOTBUILT`)
    pub const NOT_BUILT: Status = Status(-128);

    pub const fn from_raw(code: c_int) -> Self {
        Status(code)
    }

    pub const fn code(self) -> c_int {
        self.0
    }

    pub const fn is_ok(self) -> bool {
        self.0 == 0
    }

    /// Symbolic name for the codes this crate knows about
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Status::NOERR => "NC_NOERR",
            Status::EBADID => "NC_EBADID",
            Status::EINVAL => "NC_EINVAL",
            Status::EPERM => "NC_EPERM",
            Status::ENOTINDEFINE => "NC_ENOTINDEFINE",
            Status::EINDEFINE => "NC_EINDEFINE",
            Status::EINVALCOORDS => "NC_EINVALCOORDS",
            Status::ENAMEINUSE => "NC_ENAMEINUSE",
            Status::ENOTATT => "NC_ENOTATT",
            Status::EBADTYPE => "NC_EBADTYPE",
            Status::EBADDIM => "NC_EBADDIM",
            Status::ENOTVAR => "NC_ENOTVAR",
            Status::ENOTNC => "NC_ENOTNC",
            Status::ECHAR => "NC_ECHAR",
            Status::EEDGE => "NC_EEDGE",
            Status::ESTRIDE => "NC_ESTRIDE",
            Status::ERANGE => "NC_ERANGE",
            Status::ENOMEM => "NC_ENOMEM",
            Status::EHDFERR => "NC_EHDFERR",
            Status::EBADGRPID => "NC_EBADGRPID",
            Status::EBADTYPID => "NC_EBADTYPID",
            Status::NOT_BUILT => "NC_ENOTBUILT",
            _ => return None,
        };
        Some(name)
    }

    /// Static description, used when `nc_strerror` is unavailable
    pub fn describe(self) -> &'static str {
        match self {
            Status::NOERR => "No error",
            Status::EBADID => "NetCDF: Not a valid ID",
            Status::EINVAL => "NetCDF: Invalid argument",
            Status::EPERM => "NetCDF: Write to read only",
            Status::ENOTINDEFINE => "NetCDF: Operation not allowed in data mode",
            Status::EINDEFINE => "NetCDF: Operation not allowed in define mode",
            Status::EINVALCOORDS => "NetCDF: Index exceeds dimension bound",
            Status::ENAMEINUSE => "NetCDF: String match to name in use",
            Status::ENOTATT => "NetCDF: Attribute not found",
            Status::EBADTYPE => "NetCDF: Not a valid data type or _FillValue type mismatch",
            Status::EBADDIM => "NetCDF: Invalid dimension ID or name",
            Status::ENOTVAR => "NetCDF: Variable not found",
            Status::ENOTNC => "NetCDF: Unknown file format",
            Status::ECHAR => "NetCDF: Attempt to convert between text & numbers",
            Status::EEDGE => "NetCDF: Start+count exceeds dimension bound",
            Status::ESTRIDE => "NetCDF: Illegal stride",
            Status::ERANGE => "NetCDF: Numeric conversion not representable",
            Status::ENOMEM => "NetCDF: Memory allocation (malloc) failure",
            Status::EHDFERR => "NetCDF: HDF error",
            Status::EBADGRPID => "NetCDF: Bad group ID",
            Status::EBADTYPID => "NetCDF: Bad type ID",
            Status::NOT_BUILT => "NetCDF: Attempt to use feature that was not turned on when netCDF was built.",
            Status(code) if code > 0 => "System error",
            _ => "Unknown Error",
        }
    }

    /// Convert to a `Result` for callers that want `?`
    pub fn into_result(self) -> Result<(), NcError> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(NcError(self))
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::NOERR
    }
}

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Status({}: {})", self.0, name),
            None => write!(f, "Status({})", self.0),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.describe(), self.0)
    }
}

impl From<Status> for c_int {
    fn from(status: Status) -> c_int {
        status.0
    }
}

/// Non-zero native status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("native operation failed: {0}")]
pub struct NcError(pub Status);

impl NcError {
    pub fn status(self) -> Status {
        self.0
    }
}
