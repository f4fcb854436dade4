use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{StorageBackend, TaskStore};

pub fn run<B: StorageBackend>(store: &TaskStore<B>, ids: &[u64]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        store.toggle(id)?;
        match store.all().into_iter().find(|item| item.id == id) {
            Some(item) => {
                let verb = if item.done { "done" } else { "reopened" };
                result.add_message(CmdMessage::success(format!(
                    "Task {} ({}): {}",
                    verb, item.id, item.title
                )));
                result.affected_items.push(item);
            }
            // Unknown ids are not an error, just nothing to do
            None => result.add_message(CmdMessage::info(format!("No task with id {}", id))),
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Priority;
    use crate::store::memory::MemBackend;

    fn store() -> TaskStore<MemBackend> {
        let store = TaskStore::new(MemBackend::new());
        store.load().unwrap();
        store
    }

    #[test]
    fn toggles_each_listed_id() {
        let store = store();
        store.add("A", "", Priority::Medium, "").unwrap();
        store.add("B", "", Priority::Medium, "").unwrap();

        let result = run(&store, &[1, 2]).unwrap();

        assert_eq!(result.affected_items.len(), 2);
        assert!(store.all().iter().all(|item| item.done));
    }

    #[test]
    fn missing_id_reports_info_not_error() {
        let store = store();
        store.add("A", "", Priority::Medium, "").unwrap();

        let result = run(&store, &[7]).unwrap();

        assert!(result.affected_items.is_empty());
        assert!(matches!(result.messages[0].level, MessageLevel::Info));
        assert!(result.messages[0].content.contains("7"));
    }
}
