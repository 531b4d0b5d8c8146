// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Haptic Patterns
//!
//! Pulse model and the declarative pattern table used by `haptic-sched`:
//! - [`PulseKind`] and [`Intensity`] describe a single haptic event
//! - [`lookup`] maps every [`PatternId`] to its fixed step list
//! - [`ContinuousRequest`] validates the parameters of a continuous pulse train
//! - [`Feedback`] is the caller-facing "what to play" value

mod continuous;
mod error;
mod feedback;
mod pattern;
mod pulse;
mod table;

pub use continuous::ContinuousRequest;
pub use error::PatternError;
pub use feedback::Feedback;
pub use pattern::{Pattern, PatternStep};
pub use pulse::{Intensity, NotifyKind, PulseKind};
pub use table::{lookup, PatternId};
