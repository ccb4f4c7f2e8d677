//! Violation reporting
//!
//! Protocol violations are diagnostic: they are recorded through a
//! [`ViolationReporter`] and, depending on [`ViolationPolicy`], either
//! returned to the caller or escalated to a panic.

use crate::monitor::ProtocolViolation;
use ncgate_config::ViolationPolicySetting;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

/// Reported violation with timestamp
#[derive(Debug, Clone)]
pub struct ViolationRecord {
    /// Unix timestamp in milliseconds
    pub timestamp: u64,
    pub violation: ProtocolViolation,
}

impl ViolationRecord {
    pub fn new(violation: ProtocolViolation) -> Self {
        Self {
            timestamp: current_timestamp_ms(),
            violation,
        }
    }

    pub fn to_log_line(&self) -> String {
        format!(
            "[{}+{:03}ms] {}",
            self.timestamp / 1000,
            self.timestamp % 1000,
            self.violation
        )
    }
}

fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Sink for protocol violations
pub trait ViolationReporter: Send + Sync {
    /// Record a violation
    fn report(&self, violation: &ProtocolViolation);

    /// Violations recorded so far, for sinks that keep them
    fn records(&self) -> Vec<ViolationRecord> {
        Vec::new()
    }
}

/// Reporter that emits an error event on the `ncgate::bracket` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ViolationReporter for TracingReporter {
    fn report(&self, violation: &ProtocolViolation) {
        tracing::error!(
            target: "ncgate::bracket",
            op = violation.op,
            transition = %violation.transition,
            observed = %violation.observed,
            outstanding = ?violation.outstanding,
            "{}",
            violation
        );
    }
}

/// Reporter that keeps violations in memory and forwards them to tracing
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    records: Arc<Mutex<Vec<ViolationRecord>>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A reporter must keep working after a panic elsewhere poisoned the lock.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ViolationRecord>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ViolationReporter for MemoryReporter {
    fn report(&self, violation: &ProtocolViolation) {
        TracingReporter.report(violation);
        self.lock().push(ViolationRecord::new(violation.clone()));
    }

    fn records(&self) -> Vec<ViolationRecord> {
        self.lock().clone()
    }
}

/// What the gateway does after reporting a violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViolationPolicy {
    /// Return the violation to the caller
    #[default]
    Report,
    /// Panic
    Abort,
}

impl From<ViolationPolicySetting> for ViolationPolicy {
    fn from(setting: ViolationPolicySetting) -> Self {
        match setting {
            ViolationPolicySetting::Report => ViolationPolicy::Report,
            ViolationPolicySetting::Abort => ViolationPolicy::Abort,
        }
    }
}
