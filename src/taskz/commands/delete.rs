use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{StorageBackend, TaskStore};

pub fn run<B: StorageBackend>(store: &TaskStore<B>, ids: &[u64]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        let existing = store.all().into_iter().find(|item| item.id == id);
        store.delete(id)?;
        match existing {
            Some(item) => {
                result.add_message(CmdMessage::success(format!(
                    "Task deleted ({}): {}",
                    item.id, item.title
                )));
                result.affected_items.push(item);
            }
            None => result.add_message(CmdMessage::info(format!("No task with id {}", id))),
        }
    }

    Ok(result)
}
