use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Item;
use crate::store::{StorageBackend, TaskStore};

pub fn run<B: StorageBackend>(store: &TaskStore<B>) -> Result<CmdResult> {
    let cleared: Vec<Item> = store.all().into_iter().filter(|item| item.done).collect();

    store.clear_completed()?;

    let mut result = CmdResult::default();
    if cleared.is_empty() {
        result.add_message(CmdMessage::info("No completed tasks to clear."));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Cleared {} completed task(s)",
            cleared.len()
        )));
        result.affected_items = cleared;
    }
    Ok(result)
}
