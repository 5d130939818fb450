use chrono::{TimeZone, Utc};
use speculate2::speculate;
use tempfile::TempDir;

use tracklet::models::{Task, TaskStatus};
use tracklet::store::TaskStore;

fn sample_task(id: u64, name: &str, status: TaskStatus) -> Task {
    let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    Task {
        id,
        name: name.to_string(),
        description: format!("{name} description"),
        status,
        created_at: created,
        updated_at: created,
    }
}

speculate! {
    before {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("tasks.json");
    }

    describe "open" {
        it "creates the file with an empty array when absent" {
            assert!(!path.exists());

            TaskStore::open(path.clone()).expect("Failed to open store");

            let contents = std::fs::read_to_string(&path).expect("Failed to read");
            assert_eq!(contents, "[]");
        }

        it "creates missing parent directories" {
            let nested = dir.path().join("a/b/tasks.json");
            let store = TaskStore::open(nested.clone()).expect("Failed to open store");

            assert!(nested.exists());
            assert!(store.load().is_empty());
        }

        it "leaves an existing file untouched" {
            std::fs::write(&path, "[{\"bogus\": true}]").expect("Failed to write");

            TaskStore::open(path.clone()).expect("Failed to open store");

            let contents = std::fs::read_to_string(&path).expect("Failed to read");
            assert_eq!(contents, "[{\"bogus\": true}]");
        }
    }

    describe "load" {
        it "returns an empty list for a fresh store" {
            let store = TaskStore::open(path).expect("Failed to open store");
            assert!(store.load().is_empty());
        }

        it "returns an empty list for an empty file" {
            let store = TaskStore::open(path.clone()).expect("Failed to open store");
            std::fs::write(&path, "").expect("Failed to truncate");

            assert!(store.load().is_empty());
        }

        it "returns an empty list for an unparseable file" {
            let store = TaskStore::open(path.clone()).expect("Failed to open store");
            std::fs::write(&path, "not json at all {{{").expect("Failed to write");

            assert!(store.load().is_empty());
        }

        it "returns an empty list when the file disappears" {
            let store = TaskStore::open(path.clone()).expect("Failed to open store");
            std::fs::remove_file(&path).expect("Failed to remove");

            assert!(store.load().is_empty());
        }
    }

    describe "save" {
        it "round-trips the collection losslessly" {
            let store = TaskStore::open(path).expect("Failed to open store");
            let tasks = vec![
                sample_task(1, "A", TaskStatus::Todo),
                sample_task(2, "B", TaskStatus::InProgress),
                sample_task(3, "C", TaskStatus::Done),
            ];

            store.save(&tasks).expect("Failed to save");

            assert_eq!(store.load(), tasks);
        }

        it "preserves insertion order across reloads" {
            let store = TaskStore::open(path).expect("Failed to open store");
            let tasks = vec![
                sample_task(3, "C", TaskStatus::Todo),
                sample_task(1, "A", TaskStatus::Todo),
                sample_task(2, "B", TaskStatus::Todo),
            ];

            store.save(&tasks).expect("Failed to save");

            let ids: Vec<u64> = store.load().iter().map(|t| t.id).collect();
            assert_eq!(ids, vec![3, 1, 2]);
        }

        it "writes camelCase keys and kebab-case statuses" {
            let store = TaskStore::open(path.clone()).expect("Failed to open store");
            store.save(&[sample_task(1, "A", TaskStatus::InProgress)]).expect("Failed to save");

            let raw = std::fs::read_to_string(&path).expect("Failed to read");
            assert!(raw.contains("\"createdAt\""));
            assert!(raw.contains("\"updatedAt\""));
            assert!(raw.contains("\"in-progress\""));
            assert!(!raw.contains("created_at"));
        }

        it "pretty-prints with two-space indentation" {
            let store = TaskStore::open(path.clone()).expect("Failed to open store");
            store.save(&[sample_task(1, "A", TaskStatus::Todo)]).expect("Failed to save");

            let raw = std::fs::read_to_string(&path).expect("Failed to read");
            assert!(raw.contains("\n  {"));
            assert!(raw.contains("\n    \"id\": 1"));
        }

        it "overwrites the previous contents entirely" {
            let store = TaskStore::open(path).expect("Failed to open store");
            store.save(&[
                sample_task(1, "A", TaskStatus::Todo),
                sample_task(2, "B", TaskStatus::Todo),
            ]).expect("Failed to save");

            store.save(&[sample_task(1, "A", TaskStatus::Todo)]).expect("Failed to save");

            assert_eq!(store.load().len(), 1);
        }

        it "recovers the exact timestamps it wrote" {
            let store = TaskStore::open(path).expect("Failed to open store");
            let task = sample_task(1, "A", TaskStatus::Todo);

            store.save(std::slice::from_ref(&task)).expect("Failed to save");

            let loaded = store.load();
            assert_eq!(loaded[0].created_at, task.created_at);
            assert_eq!(loaded[0].updated_at, task.updated_at);
        }
    }
}
