use std::fs;
use std::sync::Arc;
use std::thread;
use taskz::error::TaskzError;
use taskz::model::Priority;
use taskz::store::fs::FsBackend;
use taskz::store::TaskStore;
use tempfile::TempDir;

fn setup() -> (TempDir, TaskStore<FsBackend>) {
    let dir = TempDir::new().unwrap();
    let store = TaskStore::new(FsBackend::new(dir.path().join("tasks.json")));
    store.load().unwrap();
    (dir, store)
}

#[test]
fn test_missing_file_is_a_valid_empty_store() {
    let (dir, store) = setup();

    assert!(store.all().is_empty());
    // Loading alone never creates the document
    assert!(!dir.path().join("tasks.json").exists());

    store.add("First", "", Priority::Medium, "").unwrap();
    assert_eq!(store.all()[0].id, 1);
}

#[test]
fn test_reload_matches_memory_after_each_mutation() {
    let (dir, store) = setup();
    let reload = |d: &TempDir| {
        let fresh = TaskStore::new(FsBackend::new(d.path().join("tasks.json")));
        fresh.load().unwrap();
        fresh.all()
    };

    store.add("One", "first", Priority::Low, "monday").unwrap();
    assert_eq!(reload(&dir), store.all());

    store.add("Two", "", Priority::High, "").unwrap();
    assert_eq!(reload(&dir), store.all());

    store.toggle(1).unwrap();
    assert_eq!(reload(&dir), store.all());

    store.update(2, "Two renamed", "n", Priority::Medium, "d").unwrap();
    assert_eq!(reload(&dir), store.all());

    store.delete(1).unwrap();
    assert_eq!(reload(&dir), store.all());

    store.clear_completed().unwrap();
    assert_eq!(reload(&dir), store.all());
}

#[test]
fn test_document_is_a_pretty_printed_array() {
    let (dir, store) = setup();
    store.add("Buy milk", "2 liters", Priority::Low, "friday").unwrap();

    let on_disk = fs::read_to_string(dir.path().join("tasks.json")).unwrap();
    assert!(on_disk.starts_with("[\n"));
    assert!(on_disk.contains("\"title\": \"Buy milk\""));
    assert!(on_disk.contains("\"priority\": \"low\""));
    assert!(on_disk.contains("\"done\": false"));

    // No temp files left behind by the write
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_toggle_of_unknown_id_leaves_document_untouched() {
    let (dir, store) = setup();
    store.add("Task", "", Priority::Medium, "").unwrap();

    let before = fs::read(dir.path().join("tasks.json")).unwrap();
    store.toggle(99).unwrap();
    let after = fs::read(dir.path().join("tasks.json")).unwrap();

    assert_eq!(before, after);
}

#[test]
fn test_delete_of_unknown_id_rewrites_equivalent_document() {
    let (dir, store) = setup();
    store.add("Task", "", Priority::Medium, "").unwrap();

    let before = fs::read_to_string(dir.path().join("tasks.json")).unwrap();
    store.delete(99).unwrap();
    let after = fs::read_to_string(dir.path().join("tasks.json")).unwrap();

    assert_eq!(before, after);
    assert_eq!(store.all().len(), 1);
}

#[test]
fn test_corrupt_document_fails_to_load() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tasks.json"), "not a task list").unwrap();

    let store = TaskStore::new(FsBackend::new(dir.path().join("tasks.json")));
    let err = store.load().unwrap_err();
    assert!(matches!(err, TaskzError::Serialization(_)));
}

#[test]
fn test_id_sequence_resumes_past_persisted_maximum() {
    let dir = TempDir::new().unwrap();
    {
        let store = TaskStore::new(FsBackend::new(dir.path().join("tasks.json")));
        store.load().unwrap();
        store.add("A", "", Priority::Medium, "").unwrap();
        store.add("B", "", Priority::Medium, "").unwrap();
    }

    let store = TaskStore::new(FsBackend::new(dir.path().join("tasks.json")));
    store.load().unwrap();
    store.add("C", "", Priority::Medium, "").unwrap();

    let ids: Vec<u64> = store.all().iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_concurrent_adds_lose_nothing() {
    const THREADS: u64 = 8;
    const PER_THREAD: u64 = 5;

    let dir = TempDir::new().unwrap();
    let store = Arc::new(TaskStore::new(FsBackend::new(dir.path().join("tasks.json"))));
    store.load().unwrap();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    let title = format!("Task {}-{}", t, i);
                    store.add(&title, "", Priority::Medium, "").unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let items = store.all();
    assert_eq!(items.len(), (THREADS * PER_THREAD) as usize);

    let mut ids: Vec<u64> = items.iter().map(|item| item.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), (THREADS * PER_THREAD) as usize);

    // The document agrees with memory once the dust settles
    let fresh = TaskStore::new(FsBackend::new(dir.path().join("tasks.json")));
    fresh.load().unwrap();
    assert_eq!(fresh.all(), items);
}

#[test]
fn test_basic_lifecycle_round_trip() {
    let (dir, store) = setup();

    store.add("Buy milk", "", Priority::Low, "2024-01-01").unwrap();
    let items = store.all();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 1);
    assert!(!items[0].done);

    store.toggle(1).unwrap();
    assert!(store.all()[0].done);

    store.delete(1).unwrap();
    assert!(store.all().is_empty());

    let fresh = TaskStore::new(FsBackend::new(dir.path().join("tasks.json")));
    fresh.load().unwrap();
    assert!(fresh.all().is_empty());
}
