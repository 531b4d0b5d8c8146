// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pattern table contents, entry by entry.
#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use haptic_patterns::{lookup, NotifyKind, Pattern, PatternId, PulseKind};

const L: PulseKind = PulseKind::Light;
const M: PulseKind = PulseKind::Medium;
const H: PulseKind = PulseKind::Heavy;
const S: PulseKind = PulseKind::SelectionChange;
const W: PulseKind = PulseKind::Notify(NotifyKind::Warning);

fn table(pattern: &Pattern) -> Vec<(u128, PulseKind)> {
    pattern
        .steps()
        .iter()
        .map(|s| (s.delay.as_millis(), s.pulse))
        .collect()
}

fn expected(id: PatternId) -> Vec<(u128, PulseKind)> {
    match id {
        PatternId::CustomLight => vec![(0, L), (100, L)],
        PatternId::LightAndMedium => vec![(0, L), (150, M)],
        PatternId::HeavyAndWarning => vec![(0, H), (200, W)],
        PatternId::Wave | PatternId::RippleEffect => vec![(0, L), (100, M), (200, H)],
        PatternId::Heartbeat => vec![(0, M), (150, M)],
        PatternId::TensionAndRelease => vec![(0, H), (250, L)],
        PatternId::DoubleSelection => vec![(0, S), (100, S)],
        PatternId::ComplexFeedback => vec![(0, W), (100, L), (200, M)],
        PatternId::ChainReaction => vec![(0, L), (100, M), (200, H), (300, M), (400, L)],
        PatternId::Earthquake => vec![(0, H), (50, L), (100, M), (150, L), (200, H)],
        PatternId::Pulse => vec![(0, L), (100, L), (300, L)],
        PatternId::Echo => vec![(0, H), (100, M), (200, L)],
        PatternId::SosSignal => vec![
            (0, L),
            (100, L),
            (200, L),
            (400, H),
            (550, H),
            (700, H),
            (1000, L),
            (1100, L),
            (1200, L),
        ],
    }
}

#[test]
fn every_pattern_matches_its_declared_steps() {
    for id in PatternId::ALL {
        assert_eq!(table(&lookup(id)), expected(id), "pattern {id}");
    }
}

#[test]
fn lookup_is_pure() {
    for id in PatternId::ALL {
        assert_eq!(lookup(id), lookup(id));
    }
}

#[test]
fn sos_signal_spans_one_point_two_seconds() {
    let sos = lookup(PatternId::SosSignal);
    assert_eq!(sos.len(), 9);
    assert_eq!(sos.total_duration().as_millis(), 1200);
}

#[test]
fn pattern_ids_serialize_as_camel_case_names() {
    let json = serde_json::to_string(&PatternId::SosSignal).unwrap();
    assert_eq!(json, "\"sosSignal\"");
    let back: PatternId = serde_json::from_str("\"tensionAndRelease\"").unwrap();
    assert_eq!(back, PatternId::TensionAndRelease);
}
