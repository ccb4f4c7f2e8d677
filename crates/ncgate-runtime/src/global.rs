//! The process-wide gateway over the real libnetcdf
//!
//! libnetcdf keeps global state, so the whole process must share one lock.
//! The only gateway over the real library is the one created here.

use crate::error::{GatewayError, GatewayResult};
use crate::ffi::{Libnetcdf, LibraryLoader};
use crate::gateway::Gateway;
use crate::ops::NetcdfApi;
use crate::status::Status;
use ncgate_config::GatewayConfig;
use once_cell::sync::OnceCell;
use tracing::{debug, info};

static GATEWAY: OnceCell<Gateway<Libnetcdf>> = OnceCell::new();

/// Load libnetcdf and create the process-wide gateway
///
/// The first successful call wins; later calls return the same gateway and
/// ignore their configuration. A failed call leaves the gateway
/// uninitialized so it can be retried.
pub fn init(config: &GatewayConfig) -> GatewayResult<&'static Gateway<Libnetcdf>> {
    GATEWAY.get_or_try_init(|| {
        config.validate()?;

        let loader = LibraryLoader::with_search_paths(config.search_paths());
        let native = Libnetcdf::load(&loader, config.library_name())?;
        let gateway = Gateway::new(native)
            .with_policy(config.violation_policy().into())
            .with_call_tracing(config.trace_calls());

        configure(&gateway, config)?;
        Ok(gateway)
    })
}

/// The process-wide gateway, if [`init`] succeeded
pub fn get() -> Option<&'static Gateway<Libnetcdf>> {
    GATEWAY.get()
}

/// Apply library-wide settings through the gateway
pub(crate) fn configure<L: NetcdfApi>(
    gateway: &Gateway<L>,
    config: &GatewayConfig,
) -> GatewayResult<()> {
    if let Some(cache) = config.chunk_cache {
        let status = gateway.set_chunk_cache(cache.size, cache.nelems, cache.preemption)?;
        if !status.is_ok() {
            return Err(GatewayError::Setup {
                op: "nc_set_chunk_cache",
                status,
            });
        }
        info!(
            target: "ncgate::config",
            size = cache.size,
            nelems = cache.nelems,
            preemption = cache.preemption,
            "chunk cache configured"
        );
    }

    if let Some(level) = config.log_level() {
        match gateway.set_log_level(level)? {
            Status::NOT_BUILT => {
                debug!(target: "ncgate::config", level, "native logging not built; log level ignored")
            }
            status if status.is_ok() => {
                debug!(target: "ncgate::config", level, "native log level set")
            }
            status => {
                return Err(GatewayError::Setup {
                    op: "nc_set_log_level",
                    status,
                })
            }
        }
    }

    Ok(())
}
