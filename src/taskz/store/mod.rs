//! # Storage Layer
//!
//! The task list lives in memory as one ordered collection and on disk as one
//! JSON document. [`TaskStore`] owns both sides and keeps them identical after
//! every successful mutation.
//!
//! ## Design Rationale
//!
//! Persistence is abstracted behind [`StorageBackend`] to:
//! - Enable **testing** with `MemBackend` (no filesystem needed)
//! - Allow **future backends** without changing store logic
//!
//! ## Implementations
//!
//! - [`fs::FsBackend`]: Production file-based storage
//!   - The whole collection in one pretty-printed `tasks.json`
//!   - Writes land in a temp file first, then rename over the document
//!
//! - [`memory::MemBackend`]: In-memory storage for testing
//!   - No persistence
//!   - Can be primed with a document or told to fail writes
//!
//! ## Locking
//!
//! A single mutex guards the collection, the id counter, and the disk write
//! for the full body of every operation. Store calls never interleave: a
//! reader cannot observe a half-applied mutation, and concurrent `add` calls
//! cannot hand out the same id. Throughput is bounded to one persistence
//! round-trip at a time, which is the intended tradeoff for a single-process,
//! single-file store.

use crate::error::{Result, TaskzError};
use crate::model::{Item, Priority};
use chrono::Utc;
use parking_lot::Mutex;

pub mod fs;
pub mod memory;

/// Abstract interface for the persisted task document.
///
/// The store rewrites the entire collection on every mutation; backends only
/// need whole-document reads and writes.
pub trait StorageBackend {
    /// Read the whole document. `None` means no document exists yet, which is
    /// a valid empty-store state.
    fn read(&self) -> Result<Option<Vec<Item>>>;

    /// Replace the whole document.
    fn write(&self, items: &[Item]) -> Result<()>;
}

#[derive(Default)]
struct State {
    items: Vec<Item>,
    next_id: u64,
}

/// Exclusive owner of the task collection and its on-disk document.
///
/// All operations take `&self`; mutual exclusion is internal. Items keep
/// creation order and no operation reorders them.
pub struct TaskStore<B: StorageBackend> {
    backend: B,
    state: Mutex<State>,
}

impl<B: StorageBackend> TaskStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: Mutex::new(State::default()),
        }
    }

    /// Replace the in-memory collection with the persisted document.
    ///
    /// A missing document yields an empty collection with the id counter at
    /// zero. The counter is set to the highest persisted id so later inserts
    /// never collide with ids handed out before this process started.
    pub fn load(&self) -> Result<()> {
        let items = self.backend.read()?.unwrap_or_default();
        let next_id = items.iter().map(|item| item.id).max().unwrap_or(0);
        let mut state = self.state.lock();
        state.items = items;
        state.next_id = next_id;
        Ok(())
    }

    /// Snapshot of the collection in creation order.
    ///
    /// The caller owns the copy; mutating it never touches store state.
    pub fn all(&self) -> Vec<Item> {
        self.state.lock().items.clone()
    }

    /// Create an item. The title must be non-empty after trimming.
    pub fn add(&self, title: &str, notes: &str, priority: Priority, due: &str) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskzError::Validation("Title cannot be empty".to_string()));
        }

        let mut state = self.state.lock();
        state.next_id += 1;
        let item = Item::new(
            state.next_id,
            title.to_string(),
            notes.trim().to_string(),
            priority,
            due.trim().to_string(),
        );
        state.items.push(item);
        // The append lands in memory before the write; a failed write surfaces
        // the error and leaves memory ahead of disk.
        self.backend.write(&state.items)
    }

    /// Flip completion for the item with `id`. A missing id is a successful
    /// no-op and nothing is written.
    pub fn toggle(&self, id: u64) -> Result<()> {
        let mut state = self.state.lock();
        let item = match state.items.iter_mut().find(|item| item.id == id) {
            Some(item) => item,
            None => return Ok(()),
        };
        item.done = !item.done;
        item.updated_at = Utc::now();
        self.backend.write(&state.items)
    }

    /// Rewrite the fields of the item with `id`. A missing id is a successful
    /// no-op. An empty trimmed `title` keeps the existing title; `notes`,
    /// `priority`, and `due` are always replaced.
    pub fn update(
        &self,
        id: u64,
        title: &str,
        notes: &str,
        priority: Priority,
        due: &str,
    ) -> Result<()> {
        let mut state = self.state.lock();
        let item = match state.items.iter_mut().find(|item| item.id == id) {
            Some(item) => item,
            None => return Ok(()),
        };
        let title = title.trim();
        if !title.is_empty() {
            item.title = title.to_string();
        }
        item.notes = notes.trim().to_string();
        item.priority = priority;
        item.due = due.trim().to_string();
        item.updated_at = Utc::now();
        self.backend.write(&state.items)
    }

    /// Remove the item with `id` if present. The document is rewritten whether
    /// or not a removal occurred.
    pub fn delete(&self, id: u64) -> Result<()> {
        let mut state = self.state.lock();
        state.items.retain(|item| item.id != id);
        self.backend.write(&state.items)
    }

    /// Remove every completed item, keeping the relative order of the rest.
    pub fn clear_completed(&self) -> Result<()> {
        let mut state = self.state.lock();
        state.items.retain(|item| !item.done);
        self.backend.write(&state.items)
    }
}


#[cfg(test)]
impl<B: StorageBackend> TaskStore<B> {
    fn backend(&self) -> &B {
        &self.backend
    }
}
