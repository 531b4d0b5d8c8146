// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pattern interpreter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use haptic_patterns::{
    lookup, ContinuousRequest, Feedback, Pattern, PatternId, PatternStep, PulseKind,
};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, instrument, warn};

use crate::delivery::DeliveryHandle;
use crate::{Invocation, InvocationId, InvocationOutcome, SchedulerConfig, Sink};

/// Plays patterns against a sink. Clones share the delivery context.
///
/// Must be created and used inside a tokio runtime.
#[derive(Clone)]
pub struct Scheduler {
    delivery: DeliveryHandle,
    config: SchedulerConfig,
    next_id: Arc<AtomicU64>,
}

impl Scheduler {
    /// Scheduler delivering to `sink` with the given settings.
    pub fn new<S: Sink>(sink: S, config: SchedulerConfig) -> Self {
        let delivery = DeliveryHandle::spawn(Arc::new(sink), config.delivery);
        debug!(?config, "scheduler started");
        Self {
            delivery,
            config,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Scheduler with default settings.
    pub fn with_sink<S: Sink>(sink: S) -> Self {
        Self::new(sink, SchedulerConfig::default())
    }

    /// Active settings.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    fn next_id(&self) -> InvocationId {
        InvocationId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Play a named pattern.
    #[instrument(skip(self))]
    pub fn trigger(&self, id: PatternId) -> Invocation {
        self.trigger_pattern(lookup(id))
    }

    /// Play an arbitrary pattern. Equal delays fire in declaration order.
    pub fn trigger_pattern(&self, pattern: Pattern) -> Invocation {
        let id = self.next_id();
        let started = Instant::now();
        let steps = pattern.firing_order();
        debug!(invocation = %id, steps = steps.len(), "pattern scheduled");
        let timer = tokio::spawn(run_steps(id, started, steps, self.delivery.clone()));
        Invocation::new(id, started, timer)
    }

    /// Fire a single pulse as soon as possible.
    pub fn trigger_pulse(&self, pulse: PulseKind) -> Invocation {
        self.trigger_pattern(Pattern::new(vec![PatternStep {
            delay: Duration::ZERO,
            pulse,
        }]))
    }

    /// Run a continuous impact train.
    ///
    /// Ticks every `continuous_period` starting now and stops at the first
    /// tick where elapsed time reaches `request.duration`.
    #[instrument(skip(self))]
    pub fn trigger_continuous(&self, request: ContinuousRequest) -> Invocation {
        let id = self.next_id();
        let started = Instant::now();
        let period = self.config.effective_period();
        debug!(invocation = %id, ?period, "continuous scheduled");
        let timer = tokio::spawn(run_continuous(
            id,
            started,
            request,
            period,
            self.delivery.clone(),
        ));
        Invocation::new(id, started, timer)
    }

    /// Play any [`Feedback`].
    pub fn play(&self, feedback: Feedback) -> Invocation {
        match feedback {
            Feedback::Pulse(pulse) => self.trigger_pulse(pulse),
            Feedback::Pattern(id) => self.trigger(id),
            Feedback::Continuous(request) => self.trigger_continuous(request),
        }
    }

    /// Wait until every pulse posted so far has reached the sink.
    pub async fn flush(&self) {
        self.delivery.flush().await;
    }
}

async fn run_steps(
    id: InvocationId,
    started: Instant,
    steps: Vec<PatternStep>,
    delivery: DeliveryHandle,
) -> InvocationOutcome {
    for step in steps {
        time::sleep_until(started + step.delay).await;
        if !delivery.post(id, step.pulse) {
            warn!(invocation = %id, "delivery closed, dropping remaining steps");
            return InvocationOutcome::Undelivered;
        }
    }
    debug!(invocation = %id, "pattern finished");
    InvocationOutcome::Completed
}

async fn run_continuous(
    id: InvocationId,
    started: Instant,
    request: ContinuousRequest,
    period: Duration,
    delivery: DeliveryHandle,
) -> InvocationOutcome {
    let pulse = request.pulse();
    let mut ticker = time::interval_at(started, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut ticks = 0_u64;
    loop {
        ticker.tick().await;
        if started.elapsed() >= request.duration {
            break;
        }
        if !delivery.post(id, pulse) {
            warn!(invocation = %id, "delivery closed, stopping continuous loop");
            return InvocationOutcome::Undelivered;
        }
        ticks += 1;
    }
    debug!(invocation = %id, ticks, "continuous finished");
    InvocationOutcome::Completed
}
