// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type shared by the pattern model.

use thiserror::Error;

/// Errors raised while building or parsing pattern inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A request parameter is outside its legal domain (negative duration, NaN intensity).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// No pattern is registered under this name.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
    /// No pulse kind is known by this name.
    #[error("unknown pulse: {0}")]
    UnknownPulse(String),
}
