// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Static table of named feedback patterns.
//!
//! Every entry is a flat list of offsets from invocation start. `sosSignal`
//! is written out with its observed absolute offsets (three light, three
//! heavy starting at 0.4 s, three light starting at 1.0 s).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{NotifyKind, Pattern, PatternError, PatternStep, PulseKind};

/// Identifier of a named pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatternId {
    /// Two light taps.
    CustomLight,
    /// Light tap followed by a medium one.
    LightAndMedium,
    /// Heavy impact then a warning notification.
    HeavyAndWarning,
    /// Light, medium, heavy.
    Wave,
    /// Two medium beats.
    Heartbeat,
    /// Heavy impact released into a light one.
    TensionAndRelease,
    /// Two selection ticks.
    DoubleSelection,
    /// Warning then light then medium.
    ComplexFeedback,
    /// Rise and fall over five steps.
    ChainReaction,
    /// Light, medium, heavy.
    RippleEffect,
    /// Fast alternating heavy/light rumble.
    Earthquake,
    /// Three light taps with a pause before the last.
    Pulse,
    /// Heavy fading to light.
    Echo,
    /// Short-long-short groups.
    SosSignal,
}

impl PatternId {
    /// Every pattern id, in table order.
    pub const ALL: [Self; 14] = [
        Self::CustomLight,
        Self::LightAndMedium,
        Self::HeavyAndWarning,
        Self::Wave,
        Self::Heartbeat,
        Self::TensionAndRelease,
        Self::DoubleSelection,
        Self::ComplexFeedback,
        Self::ChainReaction,
        Self::RippleEffect,
        Self::Earthquake,
        Self::Pulse,
        Self::Echo,
        Self::SosSignal,
    ];

    /// Canonical camelCase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::CustomLight => "customLight",
            Self::LightAndMedium => "lightAndMedium",
            Self::HeavyAndWarning => "heavyAndWarning",
            Self::Wave => "wave",
            Self::Heartbeat => "heartbeat",
            Self::TensionAndRelease => "tensionAndRelease",
            Self::DoubleSelection => "doubleSelection",
            Self::ComplexFeedback => "complexFeedback",
            Self::ChainReaction => "chainReaction",
            Self::RippleEffect => "rippleEffect",
            Self::Earthquake => "earthquake",
            Self::Pulse => "pulse",
            Self::Echo => "echo",
            Self::SosSignal => "sosSignal",
        }
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternId {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| PatternError::UnknownPattern(s.to_owned()))
    }
}

const LIGHT: PulseKind = PulseKind::Light;
const MEDIUM: PulseKind = PulseKind::Medium;
const HEAVY: PulseKind = PulseKind::Heavy;
const SELECTION: PulseKind = PulseKind::SelectionChange;
const WARNING: PulseKind = PulseKind::Notify(NotifyKind::Warning);

const fn at(ms: u64, pulse: PulseKind) -> PatternStep {
    PatternStep::at_millis(ms, pulse)
}

static CUSTOM_LIGHT: [PatternStep; 2] = [at(0, LIGHT), at(100, LIGHT)];
static LIGHT_AND_MEDIUM: [PatternStep; 2] = [at(0, LIGHT), at(150, MEDIUM)];
static HEAVY_AND_WARNING: [PatternStep; 2] = [at(0, HEAVY), at(200, WARNING)];
static WAVE: [PatternStep; 3] = [at(0, LIGHT), at(100, MEDIUM), at(200, HEAVY)];
static HEARTBEAT: [PatternStep; 2] = [at(0, MEDIUM), at(150, MEDIUM)];
static TENSION_AND_RELEASE: [PatternStep; 2] = [at(0, HEAVY), at(250, LIGHT)];
static DOUBLE_SELECTION: [PatternStep; 2] = [at(0, SELECTION), at(100, SELECTION)];
static COMPLEX_FEEDBACK: [PatternStep; 3] = [at(0, WARNING), at(100, LIGHT), at(200, MEDIUM)];
static CHAIN_REACTION: [PatternStep; 5] = [
    at(0, LIGHT),
    at(100, MEDIUM),
    at(200, HEAVY),
    at(300, MEDIUM),
    at(400, LIGHT),
];
static RIPPLE_EFFECT: [PatternStep; 3] = [at(0, LIGHT), at(100, MEDIUM), at(200, HEAVY)];
static EARTHQUAKE: [PatternStep; 5] = [
    at(0, HEAVY),
    at(50, LIGHT),
    at(100, MEDIUM),
    at(150, LIGHT),
    at(200, HEAVY),
];
static PULSE: [PatternStep; 3] = [at(0, LIGHT), at(100, LIGHT), at(300, LIGHT)];
static ECHO: [PatternStep; 3] = [at(0, HEAVY), at(100, MEDIUM), at(200, LIGHT)];
static SOS_SIGNAL: [PatternStep; 9] = [
    at(0, LIGHT),
    at(100, LIGHT),
    at(200, LIGHT),
    at(400, HEAVY),
    at(550, HEAVY),
    at(700, HEAVY),
    at(1000, LIGHT),
    at(1100, LIGHT),
    at(1200, LIGHT),
];

/// Step list for `id`.
pub fn lookup(id: PatternId) -> Pattern {
    let steps: &'static [PatternStep] = match id {
        PatternId::CustomLight => &CUSTOM_LIGHT,
        PatternId::LightAndMedium => &LIGHT_AND_MEDIUM,
        PatternId::HeavyAndWarning => &HEAVY_AND_WARNING,
        PatternId::Wave => &WAVE,
        PatternId::Heartbeat => &HEARTBEAT,
        PatternId::TensionAndRelease => &TENSION_AND_RELEASE,
        PatternId::DoubleSelection => &DOUBLE_SELECTION,
        PatternId::ComplexFeedback => &COMPLEX_FEEDBACK,
        PatternId::ChainReaction => &CHAIN_REACTION,
        PatternId::RippleEffect => &RIPPLE_EFFECT,
        PatternId::Earthquake => &EARTHQUAKE,
        PatternId::Pulse => &PULSE,
        PatternId::Echo => &ECHO,
        PatternId::SosSignal => &SOS_SIGNAL,
    };
    Pattern::from_static(steps)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for id in PatternId::ALL {
            assert_eq!(id.to_string().parse::<PatternId>().unwrap(), id);
        }
        assert!(matches!(
            "morse".parse::<PatternId>(),
            Err(PatternError::UnknownPattern(name)) if name == "morse"
        ));
    }

    #[test]
    fn every_table_entry_starts_at_zero_and_is_sorted() {
        for id in PatternId::ALL {
            let pattern = lookup(id);
            assert!(!pattern.is_empty(), "{id} has no steps");
            assert_eq!(pattern.steps()[0].delay.as_millis(), 0, "{id}");
            assert!(
                pattern.steps().windows(2).all(|w| w[0].delay <= w[1].delay),
                "{id} is not in firing order"
            );
        }
    }
}
