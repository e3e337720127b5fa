// Generation history storage
//
// Bounded, most-recent-first log of past generations, persisted as one JSON
// array under a single store key. The log is rewritten wholesale on every
// mutation, including clear.

use crate::db::KeyValueStore;
use crate::error::{AppError, Result};
use crate::song::{HistoryItem, HistorySummary};
use tracing::{info, warn};

pub const HISTORY_KEY: &str = "zexly-lyric-history";
pub const MAX_HISTORY: usize = 50;

pub struct HistoryStore<S: KeyValueStore> {
    store: S,
    items: Vec<HistoryItem>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Read the persisted log once.
    ///
    /// Malformed content is logged, removed from the store and replaced by an
    /// empty history; it never fails startup.
    pub fn load(store: S) -> Result<Self> {
        let items = match store.get(HISTORY_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<HistoryItem>>(&raw) {
                Ok(mut items) => {
                    items.truncate(MAX_HISTORY);
                    items
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse stored history, discarding it");
                    store.remove(HISTORY_KEY)?;
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        info!(count = items.len(), "History loaded");
        Ok(HistoryStore { store, items })
    }

    /// Prepend an item, keep the newest `MAX_HISTORY`, persist.
    ///
    /// In-memory state only changes once the store write succeeded.
    pub fn append(&mut self, item: HistoryItem) -> Result<()> {
        let mut next = Vec::with_capacity(MAX_HISTORY);
        next.push(item);
        next.extend(self.items.iter().take(MAX_HISTORY - 1).cloned());
        self.replace(next)
    }

    /// Drop every item and persist the empty log.
    pub fn clear(&mut self) -> Result<()> {
        self.replace(Vec::new())
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Result<&HistoryItem> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| AppError::HistoryItemNotFound(id.to_string()))
    }

    pub fn summaries(&self) -> Vec<HistorySummary> {
        self.items.iter().map(HistoryItem::summary).collect()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn replace(&mut self, next: Vec<HistoryItem>) -> Result<()> {
        let json = serde_json::to_string(&next)?;
        self.store.set(HISTORY_KEY, &json)?;
        self.items = next;
        Ok(())
    }
}
