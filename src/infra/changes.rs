use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{debug, warn};

const DEFAULT_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeOp {
    Insert,
    Update,
}

/// A committed row mutation, published after the owning transaction commits.
#[derive(Debug, Clone, Serialize)]
pub struct RowChange {
    pub table: &'static str,
    pub row_id: String,
    pub op: ChangeOp,
}

/// In-process change feed for live availability refresh. Best-effort pub/sub:
/// subscribers that lag are skipped forward and degrade to manual refresh,
/// correctness never depends on delivery.
#[derive(Clone)]
pub struct ChangeFeed {
    sender: broadcast::Sender<RowChange>,
}

impl ChangeFeed {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn publish(&self, table: &'static str, row_id: &str, op: ChangeOp) {
        let change = RowChange {
            table,
            row_id: row_id.to_string(),
            op,
        };
        match self.sender.send(change) {
            Ok(count) => debug!(table, row_id, subscribers = count, "row change published"),
            // No subscribers connected; nothing to deliver.
            Err(_) => debug!(table, row_id, "row change published (no subscribers)"),
        }
    }

    pub fn subscribe(&self) -> ChangeSubscriber {
        ChangeSubscriber {
            receiver: self.sender.subscribe(),
        }
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ChangeSubscriber {
    receiver: broadcast::Receiver<RowChange>,
}

impl ChangeSubscriber {
    /// Next change, or `None` once the feed shuts down. Lagged receivers skip
    /// the missed events and keep going.
    pub async fn recv(&mut self) -> Option<RowChange> {
        loop {
            match self.receiver.recv().await {
                Ok(change) => return Some(change),
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    warn!(missed, "change subscriber lagged, events dropped");
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
