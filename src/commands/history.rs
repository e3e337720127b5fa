// History commands: list, load one entry, clear

use super::AppState;
use crate::error::Result;
use crate::song::{HistoryItem, HistorySummary};

/// Summaries for the history browser, most recent first.
pub fn list_history(state: &AppState) -> Result<Vec<HistorySummary>> {
    Ok(state.history.lock()?.summaries())
}

/// Full entry, so the front end can restore the form and result.
pub fn get_history_item(state: &AppState, id: &str) -> Result<HistoryItem> {
    Ok(state.history.lock()?.get(id)?.clone())
}

pub fn clear_history(state: &AppState) -> Result<()> {
    state.history.lock()?.clear()
}

pub fn history_count(state: &AppState) -> Result<usize> {
    Ok(state.history.lock()?.len())
}
