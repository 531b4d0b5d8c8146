// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Output port for pulses, plus two stock sinks.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use haptic_patterns::PulseKind;
use tokio::time::Instant;
use tracing::info;

/// Delivery target for pulses (the platform haptic engine in production).
///
/// Only ever called from the scheduler's delivery context. Preparing or
/// pre-warming the hardware is the implementor's job, done once at
/// construction.
pub trait Sink: Send + Sync + 'static {
    /// Produce one pulse.
    fn emit(&self, pulse: PulseKind);

    /// Produce one pulse whose timer fired at `fired_at`.
    ///
    /// The delivery context calls this; `fired_at` is read on the timer's
    /// runtime, so it follows a paused test clock even when delivery runs on
    /// a plain OS thread.
    fn emit_fired(&self, pulse: PulseKind, fired_at: Instant) {
        let _ = fired_at;
        self.emit(pulse);
    }
}

impl<F> Sink for F
where
    F: Fn(PulseKind) + Send + Sync + 'static,
{
    fn emit(&self, pulse: PulseKind) {
        self(pulse);
    }
}

/// Logs every pulse with its offset from sink creation.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    origin: Instant,
}

impl TracingSink {
    /// Sink whose offsets count from now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for TracingSink {
    fn emit(&self, pulse: PulseKind) {
        let at_ms = self.origin.elapsed().as_millis() as u64;
        info!(%pulse, at_ms, "haptic pulse");
    }
}

/// Records every pulse with its timestamp. Clones share storage.
///
/// Pulses arriving through a scheduler carry the instant their timer fired;
/// direct `emit` calls are stamped with `Instant::now()`.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<(Instant, PulseKind)>>>,
}

impl RecordingSink {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far, in emission order.
    pub fn events(&self) -> Vec<(Instant, PulseKind)> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Emitted pulses without timestamps.
    pub fn pulses(&self) -> Vec<PulseKind> {
        self.events().into_iter().map(|(_, p)| p).collect()
    }

    /// Emitted pulses with their offset from `start`.
    pub fn offsets_from(&self, start: Instant) -> Vec<(Duration, PulseKind)> {
        self.events()
            .into_iter()
            .map(|(at, p)| (at.saturating_duration_since(start), p))
            .collect()
    }

    /// Number of pulses emitted.
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True when nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget recorded pulses.
    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Sink for RecordingSink {
    fn emit(&self, pulse: PulseKind) {
        self.emit_fired(pulse, Instant::now());
    }

    fn emit_fired(&self, pulse: PulseKind, fired_at: Instant) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((fired_at, pulse));
    }
}
