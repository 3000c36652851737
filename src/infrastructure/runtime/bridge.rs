//! Runtime bridge - connects the sync TUI thread with the async Tokio runtime
//!
//! The TUI thread sends [`RuntimeCommand`]s over a channel and drains
//! [`RuntimeEvent`]s once per frame. All network reads happen on the worker
//! side; UI-visible state is only ever mutated on the TUI thread when it
//! applies the events.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tokio::runtime::Runtime;

use crate::domain::{ApplicationRecord, InternshipPosting};
use crate::infrastructure::identity::IdentityProvider;
use crate::infrastructure::runtime::worker::run_async_worker;
use crate::infrastructure::store::DocumentStore;

/// Commands sent from the TUI to the async worker
#[derive(Debug, Clone)]
pub enum RuntimeCommand {
    /// Re-issue both store reads
    Refresh,
    /// Best-effort sign-out with the identity service
    SignOut,
    /// Shutdown the worker
    Shutdown,
}

/// Events sent from the async worker to the TUI
#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    /// Active postings fetched, newest first
    PostingsLoaded(Vec<InternshipPosting>),
    /// The current user's applications fetched, newest first
    ApplicationsLoaded(Vec<ApplicationRecord>),
    /// Sign-out attempt finished (success or logged failure)
    SignedOut,
    /// A store read failed; prior lists stay untouched
    Error { message: String },
}

/// Bridge between the sync TUI thread and the async Tokio runtime
pub struct RuntimeBridge {
    cmd_tx: Sender<RuntimeCommand>,
    evt_rx: Receiver<RuntimeEvent>,
}

impl RuntimeBridge {
    /// Spawn the worker thread with its own Tokio runtime. The store and
    /// identity provider are injected so tests can substitute doubles.
    pub fn new(
        store: Box<dyn DocumentStore>,
        identity: Box<dyn IdentityProvider>,
        user_id: String,
    ) -> anyhow::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<RuntimeCommand>();
        let (evt_tx, evt_rx) = mpsc::channel::<RuntimeEvent>();

        thread::spawn(move || {
            let rt = match Runtime::new() {
                Ok(rt) => rt,
                Err(err) => {
                    let _ = evt_tx.send(RuntimeEvent::Error {
                        message: format!("Failed to create Tokio runtime: {err:#}"),
                    });
                    return;
                }
            };
            rt.block_on(async {
                if let Err(err) =
                    run_async_worker(store, identity, user_id, cmd_rx, evt_tx.clone()).await
                {
                    let _ = evt_tx.send(RuntimeEvent::Error {
                        message: format!("Worker exited: {err:#}"),
                    });
                }
            });
        });

        Ok(Self { cmd_tx, evt_rx })
    }

    /// Send a command to the async worker
    pub fn send(&self, cmd: RuntimeCommand) -> anyhow::Result<()> {
        self.cmd_tx
            .send(cmd)
            .map_err(|_| anyhow::anyhow!("Worker channel closed"))
    }

    /// Poll for events (non-blocking)
    pub fn poll_events(&self) -> Vec<RuntimeEvent> {
        let mut events = Vec::new();
        while let Ok(evt) = self.evt_rx.try_recv() {
            events.push(evt);
        }
        events
    }

    /// Try to receive a single event (non-blocking)
    pub fn try_recv(&self) -> Option<RuntimeEvent> {
        self.evt_rx.try_recv().ok()
    }
}

impl Drop for RuntimeBridge {
    fn drop(&mut self) {
        // Try to send shutdown command
        let _ = self.cmd_tx.send(RuntimeCommand::Shutdown);
    }
}
