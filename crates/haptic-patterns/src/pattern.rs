// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Timed step lists.

use std::borrow::Cow;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::PulseKind;

/// A pulse and its offset from the start of the invocation.
///
/// Offsets are absolute within a pattern; they do not accumulate step to step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternStep {
    /// Offset from invocation start.
    pub delay: Duration,
    /// Pulse fired at `delay`.
    pub pulse: PulseKind,
}

impl PatternStep {
    /// Step firing `pulse` at `delay_ms` milliseconds after start.
    pub const fn at_millis(delay_ms: u64, pulse: PulseKind) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            pulse,
        }
    }
}

/// Ordered list of steps. Table entries borrow static data; ad-hoc patterns own theirs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    steps: Cow<'static, [PatternStep]>,
}

impl Pattern {
    /// Pattern over a static step table.
    pub const fn from_static(steps: &'static [PatternStep]) -> Self {
        Self {
            steps: Cow::Borrowed(steps),
        }
    }

    /// Pattern owning its steps.
    pub fn new(steps: Vec<PatternStep>) -> Self {
        Self {
            steps: Cow::Owned(steps),
        }
    }

    /// Steps in declaration order.
    pub fn steps(&self) -> &[PatternStep] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the pattern fires nothing.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Offset of the last pulse (zero for an empty pattern).
    pub fn total_duration(&self) -> Duration {
        self.steps
            .iter()
            .map(|s| s.delay)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Steps sorted by delay; ties keep declaration order.
    pub fn firing_order(&self) -> Vec<PatternStep> {
        let mut ordered = self.steps.to_vec();
        ordered.sort_by_key(|s| s.delay);
        ordered
    }
}

impl From<Vec<PatternStep>> for Pattern {
    fn from(steps: Vec<PatternStep>) -> Self {
        Self::new(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn firing_order_is_stable_for_equal_delays() {
        let pattern = Pattern::new(vec![
            PatternStep::at_millis(100, PulseKind::Heavy),
            PatternStep::at_millis(0, PulseKind::Light),
            PatternStep::at_millis(100, PulseKind::Medium),
            PatternStep::at_millis(0, PulseKind::SelectionChange),
        ]);
        let pulses: Vec<_> = pattern.firing_order().iter().map(|s| s.pulse).collect();
        assert_eq!(
            pulses,
            vec![
                PulseKind::Light,
                PulseKind::SelectionChange,
                PulseKind::Heavy,
                PulseKind::Medium,
            ]
        );
        assert_eq!(pattern.total_duration(), Duration::from_millis(100));
    }

    #[test]
    fn empty_pattern_has_zero_duration() {
        let pattern = Pattern::new(Vec::new());
        assert!(pattern.is_empty());
        assert_eq!(pattern.total_duration(), Duration::ZERO);
    }
}
