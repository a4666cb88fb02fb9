//! The shared location-keyed note relay behind `RouteChat`.
//!
//! Every active bidirectional call posts into one process-wide
//! [`ChatRelay`]. Locking is fine-grained: the outer map lock is held only
//! long enough to find or create a location's history, and each history has
//! its own lock so traffic at unrelated locations never serializes.
//! Histories are append-only and live for the process lifetime.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_stream::{Stream, StreamExt};
use tonic::Status;
use waymark_tonic_core::proto::{Point, RouteNote};

type History = Arc<Mutex<Vec<RouteNote>>>;

/// Location-keyed note histories shared by all concurrent `RouteChat` calls.
#[derive(Debug, Default)]
pub struct ChatRelay {
    histories: Mutex<HashMap<Point, History>>,
}

impl ChatRelay {
    /// The history handle for `location`, created exactly once even under
    /// concurrent first arrivals (the map entry is the atomicity point).
    fn history(&self, location: Point) -> History {
        let mut histories = self.histories.lock();
        Arc::clone(histories.entry(location).or_default())
    }

    /// Appends `note` to its location's history and returns a snapshot of
    /// the notes that preceded it, in insertion order.
    ///
    /// Snapshot and append happen under the same per-location lock, so
    /// appends to one location are serialized and a sender never finds its
    /// own note in the snapshot it is handed back.
    pub fn post(&self, note: RouteNote) -> Vec<RouteNote> {
        let history = self.history(note.location.unwrap_or_default());
        let mut notes = history.lock();
        let snapshot = notes.clone();
        notes.push(note);
        snapshot
    }
}

/// Per-call relay loop for one `RouteChat` stream.
///
/// Each inbound note is answered with the prior history for its location,
/// then published. When the client closes its side, dropping `resp_tx`
/// closes the outbound stream with no further responses. Cancellation is
/// logged and affects only this call; the relay stays valid for everyone
/// else.
pub async fn relay_notes<S>(
    relay: Arc<ChatRelay>,
    mut inbound: S,
    resp_tx: mpsc::Sender<Result<RouteNote, Status>>,
) where
    S: Stream<Item = Result<RouteNote, Status>> + Unpin,
{
    while let Some(note) = inbound.next().await {
        match note {
            Ok(note) => {
                for prev in relay.post(note) {
                    if resp_tx.send(Ok(prev)).await.is_err() {
                        // Client stopped reading; nothing more to deliver.
                        return;
                    }
                }
            }
            Err(status) => {
                tracing::warn!("RouteChat cancelled: {status}");
                return;
            }
        }
    }
}
