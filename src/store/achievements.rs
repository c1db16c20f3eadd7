use anyhow::Result;

use crate::store::json_store::KeyValueStore;
use crate::store::schema::{ACHIEVEMENTS_BACKUP_KEY, ACHIEVEMENTS_KEY, AchievementRecord};

/// Append-only log of persisted milestones on top of a key/value store.
pub struct AchievementStore<S> {
    backend: S,
}

impl<S: KeyValueStore> AchievementStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Records in insertion order. Missing, unreadable or malformed data
    /// reads as an empty log.
    pub fn load(&self) -> Vec<AchievementRecord> {
        let raw = match self.backend.get(ACHIEVEMENTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                log::warn!("could not read achievements, starting empty: {err:#}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                log::warn!("stored achievements are corrupt, treating as empty: {err}");
                Vec::new()
            }
        }
    }

    /// Append `record` and rewrite the whole log.
    ///
    /// A failed read aborts the write so existing records are never replaced.
    /// Text that is stored but does not parse is copied to
    /// [`ACHIEVEMENTS_BACKUP_KEY`] before a fresh log is started.
    pub fn append(&self, record: AchievementRecord) -> Result<()> {
        let mut records = match self.backend.get(ACHIEVEMENTS_KEY)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<AchievementRecord>>(&raw) {
                Ok(records) => records,
                Err(err) => {
                    self.backend.set(ACHIEVEMENTS_BACKUP_KEY, &raw)?;
                    log::warn!(
                        "stored achievements are corrupt ({err}), moved to {ACHIEVEMENTS_BACKUP_KEY:?}"
                    );
                    Vec::new()
                }
            },
        };
        records.push(record);
        let json = serde_json::to_string_pretty(&records)?;
        self.backend.set(ACHIEVEMENTS_KEY, &json)
    }

    /// Highest milestone on record, 0 for an empty log.
    pub fn max_milestone(&self) -> u32 {
        self.load()
            .iter()
            .map(|r| r.milestone)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::problem::Mode;
    use crate::session::state::Theme;
    use crate::store::json_store::{JsonStore, MemoryStore};
    use anyhow::anyhow;
    use std::cell::Cell;
    use tempfile::TempDir;

    /// Memory backend whose reads can be made to fail.
    struct FailingReads {
        inner: MemoryStore,
        fail_next_get: Cell<bool>,
    }

    impl KeyValueStore for FailingReads {
        fn get(&self, key: &str) -> Result<Option<String>> {
            if self.fail_next_get.replace(false) {
                return Err(anyhow!("disk unavailable"));
            }
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.inner.set(key, value)
        }
    }

    fn record(milestone: u32, timestamp: i64) -> AchievementRecord {
        AchievementRecord {
            date: "10/16/2026".to_string(),
            mode: Mode::Division,
            theme: Theme::Squirtle,
            milestone,
            timestamp,
        }
    }

    #[test]
    fn test_empty_store() {
        let store = AchievementStore::new(MemoryStore::new());
        assert!(store.load().is_empty());
        assert_eq!(store.max_milestone(), 0);
    }

    #[test]
    fn test_append_then_load_keeps_insertion_order() {
        let store = AchievementStore::new(MemoryStore::new());
        store.append(record(50, 200)).unwrap();
        store.append(record(100, 100)).unwrap();
        let loaded = store.load();
        assert_eq!(loaded, vec![record(50, 200), record(100, 100)]);
    }

    #[test]
    fn test_max_milestone() {
        let store = AchievementStore::new(MemoryStore::new());
        store.append(record(50, 1)).unwrap();
        store.append(record(100, 2)).unwrap();
        assert_eq!(store.max_milestone(), 100);
    }

    #[test]
    fn test_corrupt_data_reads_as_empty() {
        let backend = MemoryStore::new();
        backend.set(ACHIEVEMENTS_KEY, "{not json").unwrap();
        let store = AchievementStore::new(&backend);
        assert!(store.load().is_empty());
        assert_eq!(store.max_milestone(), 0);

        // Appending over corrupt data starts a fresh log and keeps the old text.
        store.append(record(50, 1)).unwrap();
        assert_eq!(store.load(), vec![record(50, 1)]);
        assert_eq!(
            backend.get(ACHIEVEMENTS_BACKUP_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn test_append_after_read_error_keeps_log() {
        let backend = FailingReads {
            inner: MemoryStore::new(),
            fail_next_get: Cell::new(false),
        };
        let store = AchievementStore::new(&backend);
        store.append(record(50, 1)).unwrap();
        store.append(record(100, 2)).unwrap();

        backend.fail_next_get.set(true);
        assert!(store.append(record(150, 3)).is_err());
        assert_eq!(store.load(), vec![record(50, 1), record(100, 2)]);

        store.append(record(150, 3)).unwrap();
        assert_eq!(store.load().len(), 3);
        assert_eq!(store.max_milestone(), 150);
        assert!(backend.get(ACHIEVEMENTS_BACKUP_KEY).unwrap().is_none());
    }

    #[test]
    fn test_wrong_shape_reads_as_empty() {
        let backend = MemoryStore::new();
        backend.set(ACHIEVEMENTS_KEY, r#"{"milestone": 50}"#).unwrap();
        assert!(AchievementStore::new(&backend).load().is_empty());
    }

    #[test]
    fn test_persists_across_store_instances() {
        let dir = TempDir::new().unwrap();
        {
            let store =
                AchievementStore::new(JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap());
            store.append(record(50, 1)).unwrap();
            store.append(record(100, 2)).unwrap();
        }
        let reopened =
            AchievementStore::new(JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap());
        assert_eq!(reopened.load().len(), 2);
        assert_eq!(reopened.max_milestone(), 100);
    }
}
