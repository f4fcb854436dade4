//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single entry
//! point for every taskz operation, regardless of the UI driving it.
//!
//! The facade dispatches to command functions and returns structured
//! `CmdResult` values. It performs no business logic, no I/O formatting, and
//! no printing. `TaskzApi<B: StorageBackend>` is generic over the storage
//! backend: production wires it to `FsBackend`, tests to `MemBackend`.
//!
//! Every method takes `&self`; the store serializes access internally, so one
//! api value can be shared across request handlers.

use crate::commands;
use crate::error::Result;
use crate::model::Priority;
use crate::store::{StorageBackend, TaskStore};
use std::path::PathBuf;

/// The main API facade for taskz operations.
///
/// Constructed once at startup, handed to the request layer, dropped at
/// shutdown. Every mutation persists before returning, so there is nothing
/// left to flush on teardown.
pub struct TaskzApi<B: StorageBackend> {
    store: TaskStore<B>,
    config_dir: PathBuf,
}

impl<B: StorageBackend> TaskzApi<B> {
    pub fn new(store: TaskStore<B>, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    /// Prime the store from the persisted document.
    pub fn load(&self) -> Result<()> {
        self.store.load()
    }

    pub fn add_task(
        &self,
        title: &str,
        notes: &str,
        priority: Priority,
        due: &str,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&self.store, title, notes, priority, due)
    }

    pub fn list_tasks(&self, filter: commands::list::ListFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn toggle_tasks(&self, ids: &[u64]) -> Result<commands::CmdResult> {
        commands::toggle::run(&self.store, ids)
    }

    pub fn update_task(&self, update: &commands::ItemUpdate) -> Result<commands::CmdResult> {
        commands::update::run(&self.store, update)
    }

    pub fn delete_tasks(&self, ids: &[u64]) -> Result<commands::CmdResult> {
        commands::delete::run(&self.store, ids)
    }

    pub fn clear_completed(&self) -> Result<commands::CmdResult> {
        commands::clear::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::{ListFilter, StatusFilter};
pub use crate::commands::{CmdMessage, CmdResult, ItemUpdate, MessageLevel};
