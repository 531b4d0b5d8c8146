// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scheduler settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tick period of the continuous pattern loop.
pub const DEFAULT_CONTINUOUS_PERIOD: Duration = Duration::from_millis(100);

/// Where the sink is driven from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    /// A tokio task on the current runtime.
    #[default]
    Task,
    /// A dedicated OS thread, for sinks bound to one thread.
    Thread,
}

/// Runtime knobs for a [`crate::Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Period between continuous-pattern ticks. Zero is raised to 1 ms.
    pub continuous_period: Duration,
    /// Delivery context flavour.
    pub delivery: DeliveryMode,
}

impl SchedulerConfig {
    /// Period actually used by the continuous loop.
    pub fn effective_period(&self) -> Duration {
        self.continuous_period.max(Duration::from_millis(1))
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            continuous_period: DEFAULT_CONTINUOUS_PERIOD,
            delivery: DeliveryMode::default(),
        }
    }
}
