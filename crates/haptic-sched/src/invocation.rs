// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Handle to one running pattern or continuous request.

use std::fmt;

use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Identifier of an invocation, unique per scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InvocationId(pub u64);

impl fmt::Display for InvocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "inv#{}", self.0)
    }
}

/// How an invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationOutcome {
    /// Every pulse was handed to the delivery context.
    Completed,
    /// Stopped before its last pulse fired.
    Cancelled,
    /// The delivery context was gone, so remaining pulses were dropped.
    Undelivered,
}

/// A running invocation. Dropping it leaves the pulses playing.
#[derive(Debug)]
pub struct Invocation {
    id: InvocationId,
    started: Instant,
    timer: JoinHandle<InvocationOutcome>,
}

impl Invocation {
    pub(crate) fn new(
        id: InvocationId,
        started: Instant,
        timer: JoinHandle<InvocationOutcome>,
    ) -> Self {
        Self { id, started, timer }
    }

    /// Identifier.
    pub fn id(&self) -> InvocationId {
        self.id
    }

    /// Instant every step offset is measured from.
    pub fn started_at(&self) -> Instant {
        self.started
    }

    /// True once the timer task has stopped, for whatever reason.
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    /// Stop any step that has not fired yet. Fired pulses stay fired.
    pub fn cancel(&self) {
        debug!(invocation = %self.id, "cancel requested");
        self.timer.abort();
    }

    /// Wait for the invocation to end.
    ///
    /// `Completed` means every pulse reached the delivery context; use
    /// [`crate::Scheduler::flush`] to wait for the sink itself.
    /// `Undelivered` means the context closed under the invocation.
    pub async fn wait(self) -> InvocationOutcome {
        match self.timer.await {
            Ok(outcome) => outcome,
            Err(err) if err.is_cancelled() => InvocationOutcome::Cancelled,
            Err(err) => {
                warn!(invocation = %self.id, ?err, "timer task failed");
                InvocationOutcome::Cancelled
            }
        }
    }
}
