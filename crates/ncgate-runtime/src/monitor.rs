//! Call bracketing monitor
//!
//! Every native call is bracketed by `enter` and `exit`. Under correct
//! serialization the monitor alternates strictly between idle and in-flight;
//! observing anything else means two native calls overlapped, and that is
//! reported as a [`ProtocolViolation`]. The monitor never changes the value
//! a call produced: `exit` hands it back untouched.

use std::fmt;

/// Whether a native call is currently executing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BracketState {
    #[default]
    Idle,
    InFlight,
}

impl fmt::Display for BracketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketState::Idle => write!(f, "idle"),
            BracketState::InFlight => write!(f, "in-flight"),
        }
    }
}

/// Bracket edge at which a violation was observed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Enter,
    Exit,
    /// The native call panicked before its exit was recorded
    Unwind,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Enter => write!(f, "enter"),
            Transition::Exit => write!(f, "exit"),
            Transition::Unwind => write!(f, "unwind"),
        }
    }
}

/// Evidence that the serialization discipline was broken
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolViolation {
    /// Operation whose bracket edge failed
    pub op: &'static str,
    pub transition: Transition,
    /// State found when the edge was attempted
    pub observed: BracketState,
    /// Operation already in flight, if any
    pub outstanding: Option<&'static str>,
}

impl fmt::Display for ProtocolViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.transition, self.outstanding) {
            (Transition::Enter, Some(other)) => write!(
                f,
                "serial failure: {} entered while {} was still in flight",
                self.op, other
            ),
            (Transition::Exit, None) => {
                write!(f, "serial failure: {} exited with no call in flight", self.op)
            }
            (Transition::Exit, Some(other)) => write!(
                f,
                "serial failure: {} exited while {} was in flight",
                self.op, other
            ),
            (Transition::Unwind, _) => {
                write!(f, "serial failure: {} unwound before its exit", self.op)
            }
            (Transition::Enter, None) => write!(
                f,
                "serial failure: {} entered with monitor {}",
                self.op, self.observed
            ),
        }
    }
}

impl std::error::Error for ProtocolViolation {}

/// Tracks whether a native call is in flight
#[derive(Debug, Default)]
pub struct BracketMonitor {
    state: BracketState,
    current: Option<&'static str>,
}

impl BracketMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BracketState {
        self.state
    }

    /// Operation currently in flight
    pub fn current(&self) -> Option<&'static str> {
        self.current
    }

    /// Record the start of a native call
    ///
    /// Fails if another call is in flight; the monitor then stays in flight
    /// for the outstanding call.
    pub fn enter(&mut self, op: &'static str) -> Result<(), ProtocolViolation> {
        match self.state {
            BracketState::Idle => {
                self.state = BracketState::InFlight;
                self.current = Some(op);
                Ok(())
            }
            BracketState::InFlight => Err(ProtocolViolation {
                op,
                transition: Transition::Enter,
                observed: self.state,
                outstanding: self.current,
            }),
        }
    }

    /// Record the end of a native call, passing its result through
    ///
    /// Fails if no call is in flight or a different call is. The state is
    /// left as found so the inconsistency stays visible.
    pub fn exit<T>(&mut self, op: &'static str, value: T) -> Result<T, ProtocolViolation> {
        match (self.state, self.current) {
            (BracketState::InFlight, Some(current)) if current == op => {
                self.state = BracketState::Idle;
                self.current = None;
                Ok(value)
            }
            (observed, outstanding) => Err(ProtocolViolation {
                op,
                transition: Transition::Exit,
                observed,
                outstanding,
            }),
        }
    }

    /// Return to idle after `op` unwound without reaching its exit
    pub(crate) fn abandon(&mut self, op: &'static str) -> ProtocolViolation {
        let violation = ProtocolViolation {
            op,
            transition: Transition::Unwind,
            observed: self.state,
            outstanding: self.current,
        };
        self.state = BracketState::Idle;
        self.current = None;
        violation
    }
}
