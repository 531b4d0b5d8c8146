// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Single haptic pulses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PatternError;

/// Notification flavour of a pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotifyKind {
    /// Task completed.
    Success,
    /// Task failed.
    Error,
    /// Something needs attention.
    Warning,
}

/// Impact strength in `[0.0, 1.0]`.
///
/// Out-of-range inputs saturate to the nearest bound, matching how platform
/// impact generators treat them.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Intensity(f32);

impl Intensity {
    /// Weakest impact.
    pub const MIN: Self = Self(0.0);
    /// Strongest impact.
    pub const MAX: Self = Self(1.0);

    /// Clamp `value` into range. NaN maps to [`Intensity::MIN`].
    pub fn clamped(value: f32) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Clamp `value` into range, rejecting NaN.
    pub fn try_new(value: f32) -> Result<Self, PatternError> {
        if value.is_nan() {
            return Err(PatternError::InvalidArgument(
                "intensity must be a number".into(),
            ));
        }
        Ok(Self::clamped(value))
    }

    /// Raw value.
    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::MAX
    }
}

impl TryFrom<f32> for Intensity {
    type Error = PatternError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Intensity> for f32 {
    fn from(value: Intensity) -> Self {
        value.0
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// One discrete haptic event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PulseKind {
    /// Light impact.
    Light,
    /// Medium impact.
    Medium,
    /// Heavy impact.
    Heavy,
    /// Selection tick.
    SelectionChange,
    /// Notification pulse.
    Notify(NotifyKind),
    /// Impact with an explicit strength (continuous pattern).
    Impact(Intensity),
}

impl fmt::Display for PulseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Medium => f.write_str("medium"),
            Self::Heavy => f.write_str("heavy"),
            Self::SelectionChange => f.write_str("selection"),
            Self::Notify(NotifyKind::Success) => f.write_str("success"),
            Self::Notify(NotifyKind::Error) => f.write_str("error"),
            Self::Notify(NotifyKind::Warning) => f.write_str("warning"),
            Self::Impact(intensity) => write!(f, "impact({intensity})"),
        }
    }
}

impl FromStr for PulseKind {
    type Err = PatternError;

    /// Parses the single-shot names; `Impact` has no textual form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "medium" => Ok(Self::Medium),
            "heavy" => Ok(Self::Heavy),
            "selection" | "selectionChange" => Ok(Self::SelectionChange),
            "success" => Ok(Self::Notify(NotifyKind::Success)),
            "error" => Ok(Self::Notify(NotifyKind::Error)),
            "warning" => Ok(Self::Notify(NotifyKind::Warning)),
            other => Err(PatternError::UnknownPulse(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn intensity_saturates_at_bounds() {
        assert_eq!(Intensity::clamped(1.5).get(), 1.0);
        assert_eq!(Intensity::clamped(-0.2).get(), 0.0);
        assert_eq!(Intensity::clamped(0.4).get(), 0.4);
        assert_eq!(Intensity::clamped(f32::NAN), Intensity::MIN);
    }

    #[test]
    fn try_new_rejects_nan_only() {
        assert!(matches!(
            Intensity::try_new(f32::NAN),
            Err(PatternError::InvalidArgument(_))
        ));
        assert_eq!(Intensity::try_new(7.0).unwrap(), Intensity::MAX);
    }

    #[test]
    fn pulse_names_parse_back() {
        for name in [
            "light", "medium", "heavy", "selection", "success", "error", "warning",
        ] {
            let pulse: PulseKind = name.parse().unwrap();
            assert_eq!(pulse.to_string(), name);
        }
        assert_eq!(
            "buzz".parse::<PulseKind>(),
            Err(PatternError::UnknownPulse("buzz".into()))
        );
    }
}
