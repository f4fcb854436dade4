use super::StorageBackend;
use crate::error::{Result, TaskzError};
use crate::model::Item;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// In-memory storage for testing and development.
/// Does NOT persist data beyond the process.
#[derive(Default)]
pub struct MemBackend {
    document: Mutex<Option<Vec<Item>>>,
    fail_writes: AtomicBool,
    write_count: AtomicUsize,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing document, as if a previous process had written it.
    pub fn with_document(items: Vec<Item>) -> Self {
        Self {
            document: Mutex::new(Some(items)),
            ..Self::default()
        }
    }

    /// Make every subsequent write fail, to exercise persist-failure paths.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.write_count.load(Ordering::SeqCst)
    }

    /// Copy of the current document, if any write has landed.
    pub fn document(&self) -> Option<Vec<Item>> {
        self.document.lock().clone()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self) -> Result<Option<Vec<Item>>> {
        Ok(self.document.lock().clone())
    }

    fn write(&self, items: &[Item]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(TaskzError::Store("Write rejected by backend".to_string()));
        }
        *self.document.lock() = Some(items.to_vec());
        self.write_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Priority;
    use crate::store::TaskStore;

    pub struct StoreFixture {
        pub store: TaskStore<MemBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            let store = TaskStore::new(MemBackend::new());
            store.load().unwrap();
            Self { store }
        }

        pub fn with_items(self, count: usize) -> Self {
            for i in 0..count {
                let title = format!("Test Task {}", i + 1);
                let notes = format!("Notes for task {}", i + 1);
                self.store
                    .add(&title, &notes, Priority::Medium, "")
                    .unwrap();
            }
            self
        }

        pub fn with_item(self, title: &str) -> Self {
            self.store.add(title, "Some notes", Priority::Medium, "").unwrap();
            self
        }

        pub fn with_done_item(self, title: &str) -> Self {
            self.store.add(title, "", Priority::Medium, "").unwrap();
            let id = self.store.all().last().map(|item| item.id).unwrap();
            self.store.toggle(id).unwrap();
            self
        }
    }
}
