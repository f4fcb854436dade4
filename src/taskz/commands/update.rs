use crate::commands::{CmdMessage, CmdResult, ItemUpdate};
use crate::error::Result;
use crate::store::{StorageBackend, TaskStore};

pub fn run<B: StorageBackend>(store: &TaskStore<B>, update: &ItemUpdate) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let current = store.all().into_iter().find(|item| item.id == update.id);
    let current = match current {
        Some(item) => item,
        None => {
            result.add_message(CmdMessage::info(format!("No task with id {}", update.id)));
            return Ok(result);
        }
    };

    // Fields the caller left out keep their current value; the store itself
    // treats an empty title as "keep the old one".
    let title = update.title.clone().unwrap_or_default();
    let notes = update.notes.clone().unwrap_or(current.notes);
    let priority = update.priority.unwrap_or(current.priority);
    let due = update.due.clone().unwrap_or(current.due);

    store.update(update.id, &title, &notes, priority, &due)?;

    if let Some(item) = store.all().into_iter().find(|item| item.id == update.id) {
        result.add_message(CmdMessage::success(format!(
            "Task updated ({}): {}",
            item.id, item.title
        )));
        result.affected_items.push(item);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use crate::store::memory::MemBackend;

    fn store() -> TaskStore<MemBackend> {
        let store = TaskStore::new(MemBackend::new());
        store.load().unwrap();
        store
    }

    #[test]
    fn updates_given_fields_only() {
        let store = store();
        store
            .add("Original", "old notes", Priority::Low, "monday")
            .unwrap();

        let update = ItemUpdate {
            id: 1,
            notes: Some("new notes".to_string()),
            ..ItemUpdate::default()
        };
        run(&store, &update).unwrap();

        let item = &store.all()[0];
        assert_eq!(item.title, "Original");
        assert_eq!(item.notes, "new notes");
        assert_eq!(item.priority, Priority::Low);
        assert_eq!(item.due, "monday");
    }

    #[test]
    fn renames_when_title_given() {
        let store = store();
        store.add("Original", "", Priority::Medium, "").unwrap();

        let update = ItemUpdate {
            id: 1,
            title: Some("Renamed".to_string()),
            ..ItemUpdate::default()
        };
        let result = run(&store, &update).unwrap();

        assert_eq!(store.all()[0].title, "Renamed");
        assert!(result.messages[0].content.contains("Renamed"));
    }

    #[test]
    fn missing_id_reports_info() {
        let store = store();
        let update = ItemUpdate {
            id: 5,
            title: Some("Ghost".to_string()),
            ..ItemUpdate::default()
        };
        let result = run(&store, &update).unwrap();

        assert!(result.affected_items.is_empty());
        assert!(result.messages[0].content.contains("5"));
    }
}
