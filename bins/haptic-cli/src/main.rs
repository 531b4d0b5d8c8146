// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Haptic CLI
//!
//! Plays feedback patterns into a logging sink so timings can be inspected
//! without hardware.
#![allow(clippy::print_stdout)]

use anyhow::{Context, Result};
use clap::Parser;
use haptic_app_core::config::ConfigService;
use haptic_app_core::config_port::ConfigPort;
use haptic_app_core::prefs::{HapticPrefs, PREFS_KEY};
use haptic_config_fs::FsConfigStore;
use haptic_patterns::{lookup, ContinuousRequest, Feedback, PatternId, PulseKind};
use haptic_sched::{DeliveryMode, Invocation, Scheduler, TracingSink};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play haptic feedback patterns into a logging sink")]
struct Args {
    /// Command to execute
    #[command(subcommand)]
    cmd: Command,

    /// Continuous-pattern tick period in milliseconds (overrides the prefs file)
    #[arg(long, global = true)]
    period_ms: Option<u64>,

    /// Where pulses are delivered from (overrides the prefs file)
    #[arg(long, global = true, value_enum)]
    delivery: Option<DeliveryArg>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum DeliveryArg {
    Task,
    Thread,
}

impl From<DeliveryArg> for DeliveryMode {
    fn from(arg: DeliveryArg) -> Self {
        match arg {
            DeliveryArg::Task => Self::Task,
            DeliveryArg::Thread => Self::Thread,
        }
    }
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// List every named pattern
    List,
    /// Print the steps of one pattern
    Show {
        /// Pattern name (e.g. `sosSignal`)
        pattern: PatternId,
    },
    /// Play a named pattern
    Play {
        /// Pattern name (e.g. `heartbeat`)
        pattern: PatternId,
        /// Number of overlapping invocations to start at once
        #[arg(long, default_value_t = 1)]
        times: usize,
    },
    /// Fire a single pulse
    Pulse {
        /// light, medium, heavy, selection, success, error or warning
        kind: PulseKind,
    },
    /// Run a continuous impact train
    Continuous {
        /// Impact strength, clamped into [0, 1]
        #[arg(long, default_value_t = 1.0)]
        intensity: f32,
        /// Total duration in seconds
        #[arg(long, allow_hyphen_values = true)]
        duration: f64,
    },
    /// Show the effective preferences and the file they are read from
    Prefs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    // Prefs file (best-effort)
    let config = match FsConfigStore::new() {
        Ok(store) => Some(ConfigService::new(store)),
        Err(err) => {
            warn!(%err, "config store unavailable, using defaults");
            None
        }
    };
    let mut prefs = match config.as_ref().map(ConfigPort::load_prefs) {
        Some(Ok(Some(prefs))) => prefs,
        Some(Err(err)) => {
            warn!(%err, "ignoring unreadable prefs");
            HapticPrefs::default()
        }
        Some(Ok(None)) | None => HapticPrefs::default(),
    };
    if let Some(ms) = args.period_ms {
        prefs.continuous_period_ms = ms;
    }
    if let Some(delivery) = args.delivery {
        prefs.delivery = delivery.into();
    }

    match args.cmd {
        Command::List => {
            for id in PatternId::ALL {
                let pattern = lookup(id);
                println!(
                    "{:<18} {} steps, {} ms",
                    id.name(),
                    pattern.len(),
                    pattern.total_duration().as_millis()
                );
            }
        }
        Command::Show { pattern } => {
            for step in lookup(pattern).steps() {
                println!("{:>6} ms  {}", step.delay.as_millis(), step.pulse);
            }
        }
        Command::Play { pattern, times } => {
            play(&prefs, vec![Feedback::Pattern(pattern); times.max(1)]).await;
        }
        Command::Pulse { kind } => {
            play(&prefs, vec![Feedback::Pulse(kind)]).await;
        }
        Command::Continuous {
            intensity,
            duration,
        } => {
            let request = ContinuousRequest::new(intensity, duration)
                .context("invalid continuous request")?;
            play(&prefs, vec![Feedback::Continuous(request)]).await;
        }
        Command::Prefs => {
            if let Some(cfg) = &config {
                info!(file = %cfg.store().file_for(PREFS_KEY).display(), "prefs file");
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&prefs).context("encode prefs")?
            );
        }
    }

    Ok(())
}

async fn play(prefs: &HapticPrefs, feedback: Vec<Feedback>) {
    let scheduler = Scheduler::new(TracingSink::new(), prefs.scheduler_config());
    let invocations: Vec<Invocation> = feedback
        .into_iter()
        .map(|f| {
            info!(feedback = %f, "trigger");
            scheduler.play(f)
        })
        .collect();
    for invocation in invocations {
        let id = invocation.id();
        let outcome = invocation.wait().await;
        info!(invocation = %id, ?outcome, "invocation ended");
    }
    scheduler.flush().await;
}
