// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Haptic Scheduler
//!
//! Plays [`haptic_patterns`] patterns against a [`Sink`]:
//! - each invocation owns one timer task that fires its steps at
//!   `start + delay`
//! - continuous requests run a fixed-period loop on their own task
//! - every pulse is posted to a single delivery context, which is the only
//!   place `Sink::emit` is called

mod config;
mod delivery;
mod invocation;
mod scheduler;
mod sink;

pub use config::{DeliveryMode, SchedulerConfig, DEFAULT_CONTINUOUS_PERIOD};
pub use invocation::{Invocation, InvocationId, InvocationOutcome};
pub use scheduler::Scheduler;
pub use sink::{RecordingSink, Sink, TracingSink};
