// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Parameters of a continuous pulse train.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Intensity, PatternError, PulseKind};

/// Repeated impacts of one strength, bounded by a total duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContinuousRequest {
    /// Strength of every impact in the train.
    pub intensity: Intensity,
    /// No pulse fires at or after this offset.
    pub duration: Duration,
}

impl ContinuousRequest {
    /// Build a request from raw inputs.
    ///
    /// `intensity` is clamped into `[0, 1]`. A negative or non-finite
    /// `duration_secs`, or a NaN intensity, is rejected. Zero is legal and
    /// yields no pulses.
    pub fn new(intensity: f32, duration_secs: f64) -> Result<Self, PatternError> {
        let duration = Duration::try_from_secs_f64(duration_secs).map_err(|_| {
            PatternError::InvalidArgument(format!(
                "duration must be a non-negative number of seconds, got {duration_secs}"
            ))
        })?;
        Ok(Self {
            intensity: Intensity::try_new(intensity)?,
            duration,
        })
    }

    /// Build a request from an already-valid duration.
    pub fn from_duration(intensity: Intensity, duration: Duration) -> Self {
        Self {
            intensity,
            duration,
        }
    }

    /// Pulse emitted on every tick.
    pub fn pulse(&self) -> PulseKind {
        PulseKind::Impact(self.intensity)
    }

    /// Number of ticks a loop with `period` fires before `duration` elapses.
    ///
    /// Ticks fire at `0, period, 2·period, …` while the offset is strictly
    /// below `duration`.
    pub fn expected_ticks(&self, period: Duration) -> u64 {
        if self.duration.is_zero() || period.is_zero() {
            return 0;
        }
        let d = self.duration.as_nanos();
        let p = period.as_nanos();
        d.div_ceil(p) as u64
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn negative_duration_is_an_invalid_argument() {
        let err = ContinuousRequest::new(0.5, -0.1).unwrap_err();
        assert!(matches!(err, PatternError::InvalidArgument(_)));
        assert!(ContinuousRequest::new(0.5, f64::INFINITY).is_err());
        assert!(ContinuousRequest::new(0.5, f64::NAN).is_err());
        assert!(ContinuousRequest::new(f32::NAN, 1.0).is_err());
        assert!(ContinuousRequest::new(0.5, 1e300).is_err());
    }

    #[test]
    fn intensity_is_clamped_not_rejected() {
        let req = ContinuousRequest::new(1.5, 0.1).unwrap();
        assert_eq!(req.intensity.get(), 1.0);
        assert_eq!(req.pulse(), PulseKind::Impact(Intensity::MAX));
    }

    #[test]
    fn expected_ticks_counts_offsets_below_duration() {
        let period = Duration::from_millis(100);
        let ticks = |secs: f64| ContinuousRequest::new(1.0, secs).unwrap().expected_ticks(period);
        assert_eq!(ticks(0.0), 0);
        assert_eq!(ticks(0.05), 1);
        assert_eq!(ticks(0.3), 3);
        assert_eq!(ticks(0.35), 4);
    }
}
