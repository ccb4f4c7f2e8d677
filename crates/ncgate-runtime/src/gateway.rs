//! Serializing dispatcher
//!
//! [`Gateway`] owns the native collaborator and is the only path into it.
//! Every operation goes through [`Gateway::invoke`]:
//!
//! 1. acquire the gateway lock (blocking, no timeout)
//! 2. `enter` the bracket monitor
//! 3. call the collaborator
//! 4. `exit` the bracket monitor with the call's result
//! 5. release the lock and hand the result back unchanged
//!
//! The lock is reentrant so that a thread calling back into the gateway from
//! inside a native call reaches the monitor instead of deadlocking. The
//! monitor then refuses the nested call with a [`ProtocolViolation`].

use crate::error::{GatewayError, GatewayResult};
use crate::monitor::{BracketMonitor, BracketState, ProtocolViolation};
use crate::ops::NetcdfApi;
use crate::report::{TracingReporter, ViolationPolicy, ViolationReporter};
use crate::status::Status;
use parking_lot::ReentrantMutex;
use std::cell::RefCell;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters kept by a gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GatewayStats {
    /// Native calls that completed with a clean exit
    pub calls: u64,
    /// Protocol violations reported
    pub violations: u64,
}

/// Serialized access to a native netCDF collaborator
pub struct Gateway<L> {
    native: L,
    bracket: ReentrantMutex<RefCell<BracketMonitor>>,
    reporter: Arc<dyn ViolationReporter>,
    policy: ViolationPolicy,
    trace_calls: bool,
    calls: AtomicU64,
    violations: AtomicU64,
}

impl<L: NetcdfApi> Gateway<L> {
    /// Wrap a collaborator; violations go to tracing and are returned as errors
    pub fn new(native: L) -> Self {
        Self {
            native,
            bracket: ReentrantMutex::new(RefCell::new(BracketMonitor::new())),
            reporter: Arc::new(TracingReporter),
            policy: ViolationPolicy::Report,
            trace_calls: false,
            calls: AtomicU64::new(0),
            violations: AtomicU64::new(0),
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn ViolationReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn with_policy(mut self, policy: ViolationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Emit a `trace` event on `ncgate::call` around every native call
    pub fn with_call_tracing(mut self, enabled: bool) -> Self {
        self.trace_calls = enabled;
        self
    }

    pub fn policy(&self) -> ViolationPolicy {
        self.policy
    }

    pub fn stats(&self) -> GatewayStats {
        GatewayStats {
            calls: self.calls.load(Ordering::Relaxed),
            violations: self.violations.load(Ordering::Relaxed),
        }
    }

    /// Current bracket state
    ///
    /// Blocks while another thread has a call in flight, so from outside a
    /// call this is always `Idle` unless the protocol was broken.
    pub fn bracket_state(&self) -> BracketState {
        let guard = self.bracket.lock();
        let state = guard.borrow().state();
        state
    }

    /// Library version string (`nc_inq_libvers`)
    pub fn inq_libvers(&self) -> GatewayResult<String> {
        self.invoke("nc_inq_libvers", |lib| lib.inq_libvers())
    }

    /// Library description of a status code (`nc_strerror`)
    pub fn strerror(&self, status: Status) -> GatewayResult<String> {
        self.invoke("nc_strerror", |lib| lib.strerror(status))
    }

    /// Run one native call under the lock, bracketed by the monitor
    pub(crate) fn invoke<R>(&self, op: &'static str, call: impl FnOnce(&L) -> R) -> GatewayResult<R> {
        let guard = self.bracket.lock();

        let entered = guard.borrow_mut().enter(op);
        if let Err(violation) = entered {
            return Err(self.raise(violation));
        }
        if self.trace_calls {
            tracing::trace!(target: "ncgate::call", op, "enter");
        }

        let pending = CallInFlight {
            gateway: self,
            op,
            armed: true,
        };
        let value = call(&self.native);
        pending.disarm();

        let exited = guard.borrow_mut().exit(op, value);
        match exited {
            Ok(value) => {
                self.calls.fetch_add(1, Ordering::Relaxed);
                if self.trace_calls {
                    tracing::trace!(target: "ncgate::call", op, "exit");
                }
                Ok(value)
            }
            Err(violation) => Err(self.raise(violation)),
        }
    }

    /// Report a violation and apply the policy
    fn raise(&self, violation: ProtocolViolation) -> GatewayError {
        self.record(&violation);
        if self.policy == ViolationPolicy::Abort {
            panic!("{}", violation);
        }
        GatewayError::Protocol(violation)
    }

    fn record(&self, violation: &ProtocolViolation) {
        self.violations.fetch_add(1, Ordering::Relaxed);
        self.reporter.report(violation);
    }
}

impl<L> fmt::Debug for Gateway<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("policy", &self.policy)
            .field("trace_calls", &self.trace_calls)
            .field("calls", &self.calls.load(Ordering::Relaxed))
            .field("violations", &self.violations.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Armed while the collaborator runs; fires only if the call unwinds
struct CallInFlight<'g, L: NetcdfApi> {
    gateway: &'g Gateway<L>,
    op: &'static str,
    armed: bool,
}

impl<L: NetcdfApi> CallInFlight<'_, L> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl<L: NetcdfApi> Drop for CallInFlight<'_, L> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        // Report only: panicking here would abort the process mid-unwind.
        let guard = self.gateway.bracket.lock();
        let abandoned = guard
            .try_borrow_mut()
            .map(|mut monitor| monitor.abandon(self.op));
        if let Ok(violation) = abandoned {
            self.gateway.record(&violation);
        }
    }
}
