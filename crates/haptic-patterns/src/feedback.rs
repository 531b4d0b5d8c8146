// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Caller-facing feedback selector.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ContinuousRequest, PatternId, PulseKind};

/// Something a caller can ask to play.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Feedback {
    /// One immediate pulse.
    Pulse(PulseKind),
    /// A named pattern from the table.
    Pattern(PatternId),
    /// A continuous impact train.
    Continuous(ContinuousRequest),
}

impl From<PulseKind> for Feedback {
    fn from(pulse: PulseKind) -> Self {
        Self::Pulse(pulse)
    }
}

impl From<PatternId> for Feedback {
    fn from(id: PatternId) -> Self {
        Self::Pattern(id)
    }
}

impl From<ContinuousRequest> for Feedback {
    fn from(request: ContinuousRequest) -> Self {
        Self::Continuous(request)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pulse(pulse) => write!(f, "pulse:{pulse}"),
            Self::Pattern(id) => write!(f, "pattern:{id}"),
            Self::Continuous(req) => write!(
                f,
                "continuous:{}@{}ms",
                req.intensity,
                req.duration.as_millis()
            ),
        }
    }
}
