// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Single delivery context that owns the sink.
//!
//! Timer tasks never touch the sink directly; they post envelopes here and
//! the context emits them in posting order.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use haptic_patterns::PulseKind;
use tokio::sync::{mpsc, oneshot};
use tokio::time::Instant;
use tracing::{debug, trace, warn};

use crate::{DeliveryMode, InvocationId, Sink};

enum Envelope {
    Pulse {
        invocation: InvocationId,
        pulse: PulseKind,
        fired_at: Instant,
    },
    Flush(oneshot::Sender<()>),
}

/// Posting side of the delivery context. Cheap to clone.
#[derive(Clone)]
pub(crate) struct DeliveryHandle {
    tx: mpsc::UnboundedSender<Envelope>,
}

impl DeliveryHandle {
    /// Start a delivery context for `sink`.
    ///
    /// Thread mode falls back to a task when the OS refuses a new thread.
    pub(crate) fn spawn(sink: Arc<dyn Sink>, mode: DeliveryMode) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        match mode {
            DeliveryMode::Task => spawn_task(sink, rx),
            DeliveryMode::Thread => {
                let thread_sink = Arc::clone(&sink);
                let (handoff_tx, handoff_rx) = std::sync::mpsc::channel();
                let spawned = thread::Builder::new()
                    .name("haptic-delivery".into())
                    .spawn(move || {
                        if let Ok(mut rx) = handoff_rx.recv() {
                            run_blocking(thread_sink.as_ref(), &mut rx);
                        }
                    });
                match spawned {
                    Ok(_) => {
                        // Receiver is only moved once the thread exists.
                        let _ = handoff_tx.send(rx);
                    }
                    Err(err) => {
                        warn!(?err, "delivery thread unavailable, using a task");
                        spawn_task(sink, rx);
                    }
                }
            }
        }
        Self { tx }
    }

    /// Post a pulse stamped with the current instant. Returns `false` once
    /// the context is gone.
    pub(crate) fn post(&self, invocation: InvocationId, pulse: PulseKind) -> bool {
        let fired_at = Instant::now();
        self.tx
            .send(Envelope::Pulse {
                invocation,
                pulse,
                fired_at,
            })
            .is_ok()
    }

    /// Handle whose context has already gone away.
    #[cfg(test)]
    pub(crate) fn closed() -> Self {
        let (tx, _) = mpsc::unbounded_channel();
        Self { tx }
    }

    /// Wait until everything posted before this call has been emitted.
    pub(crate) async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(Envelope::Flush(done_tx)).is_err() {
            return;
        }
        let _ = done_rx.await;
    }
}

fn spawn_task(sink: Arc<dyn Sink>, mut rx: mpsc::UnboundedReceiver<Envelope>) {
    tokio::spawn(async move {
        while let Some(envelope) = rx.recv().await {
            dispatch(sink.as_ref(), envelope);
        }
        debug!("delivery task closed");
    });
}

fn run_blocking(sink: &dyn Sink, rx: &mut mpsc::UnboundedReceiver<Envelope>) {
    while let Some(envelope) = rx.blocking_recv() {
        dispatch(sink, envelope);
    }
    debug!("delivery thread closed");
}

fn dispatch(sink: &dyn Sink, envelope: Envelope) {
    match envelope {
        Envelope::Pulse {
            invocation,
            pulse,
            fired_at,
        } => {
            trace!(%invocation, %pulse, "emit");
            // A panicking sink loses this pulse, not the context.
            let emitted = panic::catch_unwind(AssertUnwindSafe(|| {
                sink.emit_fired(pulse, fired_at);
            }));
            if emitted.is_err() {
                warn!(%invocation, %pulse, "sink panicked, pulse dropped");
            }
        }
        Envelope::Flush(done) => {
            let _ = done.send(());
        }
    }
}
