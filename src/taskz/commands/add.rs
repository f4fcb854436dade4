use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Priority;
use crate::store::{StorageBackend, TaskStore};

pub fn run<B: StorageBackend>(
    store: &TaskStore<B>,
    title: &str,
    notes: &str,
    priority: Priority,
    due: &str,
) -> Result<CmdResult> {
    store.add(title, notes, priority, due)?;

    let mut result = CmdResult::default();
    // The new item is always last in creation order
    if let Some(item) = store.all().pop() {
        result.add_message(CmdMessage::success(format!(
            "Task added ({}): {}",
            item.id, item.title
        )));
        result.affected_items.push(item);
    }
    Ok(result)
}
