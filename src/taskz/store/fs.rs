use super::StorageBackend;
use crate::error::{Result, TaskzError};
use crate::model::Item;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed document storage.
///
/// The entire collection is one pretty-printed JSON array so the data file
/// stays inspectable with a pager. Writes go to a temp file in the same
/// directory and are renamed over the document.
pub struct FsBackend {
    data_file: PathBuf,
}

impl FsBackend {
    pub fn new(data_file: PathBuf) -> Self {
        Self { data_file }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(dir) = self.data_file.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(TaskzError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_file(&self) -> PathBuf {
        let name = self
            .data_file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("tasks.json");
        // Same directory as the document so the rename stays on one filesystem
        self.data_file
            .with_file_name(format!(".{}-{}.tmp", name, std::process::id()))
    }
}

impl StorageBackend for FsBackend {
    fn read(&self) -> Result<Option<Vec<Item>>> {
        if !self.data_file.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.data_file).map_err(TaskzError::Io)?;
        let items: Vec<Item> = serde_json::from_str(&content).map_err(TaskzError::Serialization)?;
        Ok(Some(items))
    }

    fn write(&self, items: &[Item]) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(items).map_err(TaskzError::Serialization)?;

        let tmp_file = self.tmp_file();
        fs::write(&tmp_file, content).map_err(TaskzError::Io)?;
        fs::rename(&tmp_file, &self.data_file).map_err(TaskzError::Io)?;
        Ok(())
    }
}
