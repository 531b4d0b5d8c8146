// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persisted scheduler preferences.

use std::time::Duration;

use haptic_sched::{DeliveryMode, SchedulerConfig, DEFAULT_CONTINUOUS_PERIOD};
use serde::{Deserialize, Serialize};

/// Config key the prefs are stored under.
pub const PREFS_KEY: &str = "haptic_prefs";

/// Saved preferences for a haptic front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HapticPrefs {
    /// Continuous-pattern tick period in milliseconds.
    pub continuous_period_ms: u64,
    /// Where the sink is driven from.
    pub delivery: DeliveryMode,
}

impl Default for HapticPrefs {
    fn default() -> Self {
        Self {
            continuous_period_ms: DEFAULT_CONTINUOUS_PERIOD.as_millis() as u64,
            delivery: DeliveryMode::default(),
        }
    }
}

impl HapticPrefs {
    /// Scheduler settings for these prefs. The period never drops below 1 ms.
    pub fn scheduler_config(&self) -> SchedulerConfig {
        SchedulerConfig {
            continuous_period: Duration::from_millis(self.continuous_period_ms.max(1)),
            delivery: self.delivery,
        }
    }
}
