use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Item;
use crate::store::{StorageBackend, TaskStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Open,
    Done,
}

#[derive(Debug, Clone)]
pub struct ListFilter {
    pub status: StatusFilter,
    pub search_term: Option<String>,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            search_term: None,
        }
    }
}

pub fn run<B: StorageBackend>(store: &TaskStore<B>, filter: ListFilter) -> Result<CmdResult> {
    let mut items: Vec<Item> = store
        .all()
        .into_iter()
        .filter(|item| match filter.status {
            StatusFilter::All => true,
            StatusFilter::Open => !item.done,
            StatusFilter::Done => item.done,
        })
        .collect();

    if let Some(term) = &filter.search_term {
        let term = term.to_lowercase();
        items.retain(|item| {
            item.title.to_lowercase().contains(&term) || item.notes.to_lowercase().contains(&term)
        });
    }

    Ok(CmdResult::default().with_listed_items(items))
}
