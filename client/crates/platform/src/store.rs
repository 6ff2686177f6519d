//! Persisted Session Store
//!
//! Durable key-value storage for session identity fields. Survives restarts,
//! scoped to this client installation. Reads and writes are atomic from the
//! perspective of a single client; there is no cross-process coordination.
//!
//! Writes never fail from the caller's perspective: a store that cannot be
//! flushed keeps serving the in-memory values and logs the failure.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Fixed keys the session identity is persisted under.
///
/// The key spelling matches the backend's field names, so values round-trip
/// between identity responses and the store without renaming.
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const USER_ID: &str = "userId";
    pub const ROLE: &str = "role";
    pub const JOB_SEEKER_ID: &str = "jobSeekerId";
    pub const EMPLOYER_ID: &str = "employerId";
    pub const EMAIL: &str = "email";

    /// Every key the session uses; `clear_all` removes exactly these and
    /// anything else present.
    pub const ALL: [&str; 6] = [TOKEN, USER_ID, ROLE, JOB_SEEKER_ID, EMPLOYER_ID, EMAIL];
}

/// Durable key-value store for session fields
///
/// * `read` returns the last written value, or `None` if never written
///   or cleared.
/// * `write` overwrites unconditionally.
/// * `clear_all` removes every key; a subsequent `read` on any key
///   returns `None`.
pub trait SessionStore: Send + Sync {
    /// Read the last written value for `key`
    fn read(&self, key: &str) -> Option<String>;

    /// Overwrite the value for `key`
    fn write(&self, key: &str, value: &str);

    /// Remove a single key
    fn remove(&self, key: &str);

    /// Remove every key
    fn clear_all(&self);
}

/// In-memory store for tests and ephemeral runs
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store, convenient in tests
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl SessionStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().expect("store lock poisoned").get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("store lock poisoned")
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().expect("store lock poisoned").remove(key);
    }

    fn clear_all(&self) {
        self.entries.lock().expect("store lock poisoned").clear();
    }
}

/// File-backed store: one JSON object per installation
///
/// The whole map is rewritten on every mutation via a temp file + rename,
/// so a crash mid-write leaves either the old or the new file, never a
/// torn one. A missing or unreadable file is treated as an empty store.
pub struct FileSessionStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileSessionStore {
    /// Open the store at `path`, loading any previously persisted values
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path);
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    /// Default store location: `<config dir>/careercrafter/session.json`,
    /// falling back to the current directory when no config dir exists.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("careercrafter")
            .join("session.json")
    }

    fn load(path: &Path) -> BTreeMap<String, String> {
        let Ok(raw) = fs::read_to_string(path) else {
            return BTreeMap::new();
        };
        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Session store corrupt, starting empty");
                BTreeMap::new()
            }
        }
    }

    fn flush(&self, entries: &BTreeMap<String, String>) {
        let result = (|| -> std::io::Result<()> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(entries)
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            let tmp = self.path.with_extension("json.tmp");
            fs::write(&tmp, json)?;
            fs::rename(&tmp, &self.path)?;
            Ok(())
        })();

        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to flush session store");
        }
    }
}

impl SessionStore for FileSessionStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().expect("store lock poisoned").get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        if entries.remove(key).is_some() {
            self.flush(&entries);
        }
    }

    fn clear_all(&self) {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        entries.clear();
        self.flush(&entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_read_write() {
        let store = MemoryStore::new();
        assert_eq!(store.read(keys::TOKEN), None);

        store.write(keys::TOKEN, "t1");
        assert_eq!(store.read(keys::TOKEN), Some("t1".to_string()));

        store.write(keys::TOKEN, "t2");
        assert_eq!(store.read(keys::TOKEN), Some("t2".to_string()));
    }

    #[test]
    fn test_memory_store_clear_all() {
        let store = MemoryStore::with_entries([(keys::TOKEN, "t1"), (keys::ROLE, "JOBSEEKER")]);
        store.clear_all();
        for key in keys::ALL {
            assert_eq!(store.read(key), None);
        }
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileSessionStore::open(&path);
        store.write(keys::TOKEN, "t1");
        store.write(keys::USER_ID, "42");
        drop(store);

        // A fresh open sees what the previous instance persisted
        let store = FileSessionStore::open(&path);
        assert_eq!(store.read(keys::TOKEN), Some("t1".to_string()));
        assert_eq!(store.read(keys::USER_ID), Some("42".to_string()));
    }

    #[test]
    fn test_file_store_clear_all_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileSessionStore::open(&path);
        store.write(keys::TOKEN, "t1");
        store.clear_all();
        drop(store);

        let store = FileSessionStore::open(&path);
        assert_eq!(store.read(keys::TOKEN), None);
    }

    #[test]
    fn test_file_store_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let store = FileSessionStore::open(&path);
        assert_eq!(store.read(keys::TOKEN), None);

        // And it recovers on the next write
        store.write(keys::TOKEN, "t1");
        assert_eq!(store.read(keys::TOKEN), Some("t1".to_string()));
    }

    #[test]
    fn test_remove_single_key() {
        let store = MemoryStore::with_entries([(keys::JOB_SEEKER_ID, "7")]);
        store.remove(keys::JOB_SEEKER_ID);
        assert_eq!(store.read(keys::JOB_SEEKER_ID), None);
    }
}
