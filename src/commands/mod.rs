// Command modules
//
// Plain functions over the shared AppState. The HTTP routes are thin
// wrappers around these.

pub mod form;
pub mod generate;
pub mod history;
pub mod settings;

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::history::HistoryStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub type SharedDb = Arc<Mutex<Database>>;

/// Application state shared by all requests
pub struct AppState {
    pub db: SharedDb,
    pub history: Mutex<HistoryStore<SharedDb>>,
    /// Set while a generation request is outstanding
    pub generating: AtomicBool,
    /// Gemini endpoint base URL
    pub gemini_base_url: String,
}

impl AppState {
    /// Build state around an opened, migrated database and load history from it.
    pub fn new(db: Database, gemini_base_url: impl Into<String>) -> Result<Self> {
        let db = Arc::new(Mutex::new(db));
        let history = HistoryStore::load(db.clone())?;
        Ok(AppState {
            db,
            history: Mutex::new(history),
            generating: AtomicBool::new(false),
            gemini_base_url: gemini_base_url.into(),
        })
    }

    /// Mark a generation as in flight. Fails with `Busy` if one already is.
    pub fn begin_generation(&self) -> Result<InFlight<'_>> {
        self.generating
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AppError::Busy)?;
        Ok(InFlight {
            flag: &self.generating,
        })
    }

    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::Acquire)
    }
}

/// Clears the in-flight flag when dropped.
pub struct InFlight<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    let db = Database::new_in_memory().unwrap();
    db.run_migrations().unwrap();
    AppState::new(db, "http://127.0.0.1:9").unwrap()
}
