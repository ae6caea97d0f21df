use embassy_sync::{blocking_mutex::raw::RawMutex, signal::Signal};
use embassy_time::{with_timeout, Duration};

/// How a wait on the [`NotificationGate`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GateOutcome {
    Registered,
    TimedOut,
}

/// Single slot gate between the registration handler and the attach waiter.
///
/// A `signal()` given while nobody waits is kept until the next `wait()`.
/// Repeated signals collapse into one.
pub struct NotificationGate<M: RawMutex> {
    signal: Signal<M, ()>,
}

impl<M: RawMutex> NotificationGate<M> {
    pub const fn new() -> Self {
        Self {
            signal: Signal::new(),
        }
    }

    pub fn signal(&self) {
        self.signal.signal(());
    }

    /// Drop any pending signal.
    pub fn reset(&self) {
        self.signal.reset();
    }

    pub fn is_signaled(&self) -> bool {
        self.signal.signaled()
    }

    /// Wait for a signal, consuming it. Timing out is not an error.
    pub async fn wait(&self, timeout: Duration) -> GateOutcome {
        match with_timeout(timeout, self.signal.wait()).await {
            Ok(()) => GateOutcome::Registered,
            Err(_) => GateOutcome::TimedOut,
        }
    }
}

impl<M: RawMutex> Default for NotificationGate<M> {
    fn default() -> Self {
        Self::new()
    }
}
