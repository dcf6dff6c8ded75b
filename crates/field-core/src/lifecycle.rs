//! Mount/unmount bookkeeping for a front-end session whose setup awaits.
//!
//! Setup may suspend (GPU adapter and device requests), so a stop request
//! can arrive before the session exists. The slot remembers it and hands the
//! finished session straight back for teardown instead of installing it.

#[derive(Debug)]
enum Phase<T> {
    Idle,
    Starting { stop_requested: bool },
    Running(T),
}

/// What a stop request found.
#[derive(Debug, PartialEq, Eq)]
pub enum StopOutcome<T> {
    /// A running session, now removed; the caller tears it down.
    Teardown(T),
    /// Setup is still in flight; its session will be handed back by `finish`.
    Deferred,
    /// Nothing to stop.
    Idle,
}

#[derive(Debug)]
pub struct SessionSlot<T> {
    phase: Phase<T>,
}

impl<T> Default for SessionSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SessionSlot<T> {
    pub const fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Claim the slot before the first await. Returns `false` when a session
    /// is already starting or running.
    pub fn begin(&mut self) -> bool {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Starting {
                    stop_requested: false,
                };
                true
            }
            _ => false,
        }
    }

    /// Install a finished session. Hands it back when a stop arrived during
    /// setup (or the slot was never claimed); the caller must tear it down.
    pub fn finish(&mut self, session: T) -> Option<T> {
        match self.phase {
            Phase::Starting {
                stop_requested: false,
            } => {
                self.phase = Phase::Running(session);
                None
            }
            Phase::Starting {
                stop_requested: true,
            } => {
                self.phase = Phase::Idle;
                Some(session)
            }
            _ => {
                log::warn!("[session] finish without a matching begin");
                Some(session)
            }
        }
    }

    /// Release a claim whose setup failed.
    pub fn abort(&mut self) {
        if matches!(self.phase, Phase::Starting { .. }) {
            self.phase = Phase::Idle;
        }
    }

    pub fn request_stop(&mut self) -> StopOutcome<T> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Running(session) => StopOutcome::Teardown(session),
            Phase::Starting { .. } => {
                self.phase = Phase::Starting {
                    stop_requested: true,
                };
                StopOutcome::Deferred
            }
            Phase::Idle => StopOutcome::Idle,
        }
    }

    pub fn running(&self) -> Option<&T> {
        match &self.phase {
            Phase::Running(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_starting(&self) -> bool {
        matches!(self.phase, Phase::Starting { .. })
    }
}
