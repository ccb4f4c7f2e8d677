//! ncgate runtime - serialized access to libnetcdf
//!
//! libnetcdf is not thread-safe. This crate puts every call into it behind
//! one process-wide lock and brackets each call with a monitor that reports
//! any overlap as a protocol violation:
//! - `gateway`: the serializing dispatcher
//! - `monitor`: the call bracketing state machine
//! - `ops`: the operation surface (one method per native entry point)
//! - `handle`, `buffer`, `status`: the types those operations take and return
//! - `ffi`: loading libnetcdf and lowering arguments to the C ABI
//! - `global`: the process-wide gateway over the real library
//!
//! ```no_run
//! use ncgate_config::GatewayConfig;
//! use ncgate_runtime::{global, Ncid};
//!
//! let gateway = global::init(&GatewayConfig::default())?;
//! let mut ncid = Ncid::default();
//! let status = gateway.open(c"data.nc", ncgate_runtime::consts::NC_NOWRITE, &mut ncid)?;
//! if status.is_ok() {
//!     gateway.close(ncid)?;
//! }
//! # Ok::<(), ncgate_runtime::GatewayError>(())
//! ```

/// ncgate runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
mod api;

pub mod buffer;
pub mod consts;
pub mod error;
pub mod ffi;
pub mod gateway;
pub mod global;
pub mod handle;
pub mod monitor;
pub mod ops;
pub mod report;
pub mod status;

pub use buffer::{Raw, RawMut, StrPtr, Vlen};
pub use error::{GatewayError, GatewayResult};
pub use ffi::{Libnetcdf, LoadError};
pub use gateway::{Gateway, GatewayStats};
pub use handle::{DimId, Handle, NameBuffer, Ncid, TypeId, VarId};
pub use monitor::{BracketMonitor, BracketState, ProtocolViolation, Transition};
pub use ops::NetcdfApi;
pub use report::{
    MemoryReporter, TracingReporter, ViolationPolicy, ViolationRecord, ViolationReporter,
};
pub use status::{NcError, Status};
