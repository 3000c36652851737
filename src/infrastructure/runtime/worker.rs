//! Async worker - runs in the Tokio runtime and handles store/identity calls
//!
//! The worker issues the two reads as soon as it starts (identity is
//! available at construction) and then reacts to commands. The postings
//! and applications reads are independent: they run concurrently, either
//! can fail on its own, and a failure only produces a logged error event,
//! never a retry.

use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use anyhow::Result;
use tokio::time::interval;

use crate::infrastructure::identity::IdentityProvider;
use crate::infrastructure::runtime::bridge::{RuntimeCommand, RuntimeEvent};
use crate::infrastructure::store::DocumentStore;

/// Run the async worker loop
pub async fn run_async_worker(
    store: Box<dyn DocumentStore>,
    identity: Box<dyn IdentityProvider>,
    user_id: String,
    cmd_rx: Receiver<RuntimeCommand>,
    evt_tx: Sender<RuntimeEvent>,
) -> Result<()> {
    tracing::info!(endpoint = %store.endpoint_name(), user = %user_id, "worker started");

    // Initial snapshot once identity is available
    load_snapshot(store.as_ref(), &user_id, &evt_tx).await;

    let mut poll_interval = interval(Duration::from_millis(200));

    loop {
        // Process commands (non-blocking)
        while let Ok(cmd) = cmd_rx.try_recv() {
            match cmd {
                RuntimeCommand::Shutdown => {
                    tracing::info!("worker shutting down");
                    return Ok(());
                }

                RuntimeCommand::Refresh => {
                    load_snapshot(store.as_ref(), &user_id, &evt_tx).await;
                }

                RuntimeCommand::SignOut => {
                    // Best effort only. The UI has already navigated away;
                    // a failure is logged and never surfaced.
                    if let Err(err) = identity.sign_out().await {
                        tracing::warn!(error = %err, "sign-out failed");
                    } else {
                        tracing::info!("signed out");
                    }
                    let _ = evt_tx.send(RuntimeEvent::SignedOut);
                }
            }
        }

        poll_interval.tick().await;
    }
}

/// Issue both reads concurrently and report each outcome independently.
/// A failed read sends an error event only; the UI keeps whatever list it
/// already had.
async fn load_snapshot(
    store: &dyn DocumentStore,
    user_id: &str,
    evt_tx: &Sender<RuntimeEvent>,
) {
    let (postings, applications) =
        futures::join!(store.fetch_postings(), store.fetch_applications(user_id));

    match postings {
        Ok(postings) => {
            tracing::info!(count = postings.len(), "postings loaded");
            let _ = evt_tx.send(RuntimeEvent::PostingsLoaded(postings));
        }
        Err(err) => {
            tracing::warn!(error = %err, "posting fetch failed");
            let _ = evt_tx.send(RuntimeEvent::Error {
                message: format!("Failed to load internships: {err}"),
            });
        }
    }

    match applications {
        Ok(applications) => {
            tracing::info!(count = applications.len(), "applications loaded");
            let _ = evt_tx.send(RuntimeEvent::ApplicationsLoaded(applications));
        }
        Err(err) => {
            tracing::warn!(error = %err, "application fetch failed");
            let _ = evt_tx.send(RuntimeEvent::Error {
                message: format!("Failed to load applications: {err}"),
            });
        }
    }
}
