//! JSON file storage implementation.
//!
//! Keeps the whole tracker document in a single human-readable JSON file.
//! Keys stay in insertion order and non-ASCII text is written verbatim.

use std::path::{Path, PathBuf};

use paceboard_core::{SeedProvider, TrackerState};
use serde::Serialize;
use tokio::fs;
use tracing::{debug, info, warn};

use super::{LoadSource, Result, Storage, StorageError};

/// Single-file JSON storage backend.
pub struct JsonStorage {
    path: PathBuf,
    seed: Box<dyn SeedProvider>,
}

impl JsonStorage {
    /// Create storage for the document at `path`. Nothing is touched on
    /// disk until the first load or save.
    pub fn new(path: impl AsRef<Path>, seed: impl SeedProvider + 'static) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            seed: Box::new(seed),
        }
    }

    /// Location of the document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write(&self, state: &TrackerState) -> Result<()> {
        let bytes = encode(state)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| self.write_error(source))?;
        }
        fs::write(&self.path, bytes)
            .await
            .map_err(|source| self.write_error(source))?;

        debug!(path = %self.path.display(), users = state.users.len(), history = state.history.len(), "saved tracker document");
        Ok(())
    }

    fn write_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait::async_trait]
impl Storage for JsonStorage {
    async fn load_with_source(&self) -> Result<(TrackerState, LoadSource)> {
        match read_state(&self.path).await {
            Ok(Some(state)) => Ok((state, LoadSource::Stored)),
            Ok(None) => {
                let state = self.seed.seed();
                self.write(&state).await?;
                info!(path = %self.path.display(), "no tracker document found, wrote seed");
                Ok((state, LoadSource::Seeded))
            }
            Err(e) => {
                warn!(error = %e, "falling back to seed, leaving document untouched");
                Ok((self.seed.seed(), LoadSource::Fallback))
            }
        }
    }

    async fn save(&mut self, state: &TrackerState) -> Result<()> {
        self.write(state).await
    }
}

/// Serialize with a four-space indent.
///
/// serde_json writes NaN and infinities as `null`, which would not load
/// back, so such a state is refused before anything is written.
fn encode(state: &TrackerState) -> Result<Vec<u8>> {
    for (user, goals) in &state.users {
        for (goal, values) in &goals.goals {
            if !values.target.is_finite() || !values.current.is_finite() {
                return Err(StorageError::NonFinite {
                    user: user.clone(),
                    goal: goal.clone(),
                });
            }
        }
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    state.serialize(&mut ser)?;
    Ok(buf)
}

async fn read_state(path: &Path) -> Result<Option<TrackerState>> {
    let json = match fs::read_to_string(path).await {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&json)
        .map(Some)
        .map_err(|source| StorageError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use paceboard_core::{DefaultSeed, Goal, HistoryEntry, User};

    fn doc_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("data.json")
    }

    #[tokio::test]
    async fn test_missing_document_is_seeded_and_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = doc_path(&dir);
        let storage = JsonStorage::new(&path, DefaultSeed);

        let (state, source) = storage.load_with_source().await.unwrap();
        assert_eq!(source, LoadSource::Seeded);
        assert_eq!(state, DefaultSeed.seed());
        assert!(path.exists());

        let (again, source) = storage.load_with_source().await.unwrap();
        assert_eq!(source, LoadSource::Stored);
        assert_eq!(again, state);
    }

    #[tokio::test]
    async fn test_corrupt_document_falls_back_without_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = doc_path(&dir);
        std::fs::write(&path, "{ \"users\": { not json").unwrap();

        let storage = JsonStorage::new(&path, DefaultSeed);
        let (state, source) = storage.load_with_source().await.unwrap();

        assert_eq!(source, LoadSource::Fallback);
        assert_eq!(state, DefaultSeed.seed());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ \"users\": { not json");
    }

    #[tokio::test]
    async fn test_wrong_shape_counts_as_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = doc_path(&dir);
        std::fs::write(&path, r#"{"users": [1, 2, 3]}"#).unwrap();

        let storage = JsonStorage::new(&path, DefaultSeed);
        let (_, source) = storage.load_with_source().await.unwrap();
        assert_eq!(source, LoadSource::Fallback);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"users": [1, 2, 3]}"#);
    }

    #[tokio::test]
    async fn test_unreadable_document_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be cannot be read as text.
        let path = doc_path(&dir);
        std::fs::create_dir(&path).unwrap();

        let storage = JsonStorage::new(&path, DefaultSeed);
        let (state, source) = storage.load_with_source().await.unwrap();
        assert_eq!(source, LoadSource::Fallback);
        assert_eq!(state, DefaultSeed.seed());
        assert!(path.is_dir());
    }

    #[tokio::test]
    async fn test_save_to_unwritable_target_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = doc_path(&dir);
        std::fs::create_dir(&path).unwrap();

        let mut storage = JsonStorage::new(&path, DefaultSeed);
        let err = storage.save(&DefaultSeed.seed()).await.unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_missing_document_with_unwritable_target_fails() {
        let dir = tempfile::tempdir().unwrap();
        // Reading a missing path with a trailing slash reports NotFound,
        // while creating it as a file fails.
        let path = PathBuf::from(format!("{}/data.json/", dir.path().display()));

        let storage = JsonStorage::new(&path, DefaultSeed);
        let err = storage.load_with_source().await.unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert!(!dir.path().join("data.json").exists());
    }

    #[tokio::test]
    async fn test_non_finite_values_are_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = doc_path(&dir);
        let mut storage = JsonStorage::new(&path, DefaultSeed);

        let state = storage.load().await.unwrap();
        let before = std::fs::read(&path).unwrap();

        let mut broken = state.clone();
        broken.goal_mut("Angel", "Soundbank Presets").unwrap().current = f64::INFINITY;
        let err = storage.save(&broken).await.unwrap_err();
        assert!(matches!(err, StorageError::NonFinite { ref user, .. } if user == "Angel"));

        let mut broken = state.clone();
        broken.goal_mut("Robert", "Libros").unwrap().target = f64::NAN;
        assert!(storage.save(&broken).await.is_err());

        assert_eq!(std::fs::read(&path).unwrap(), before);
        assert_eq!(storage.load_with_source().await.unwrap(), (state, LoadSource::Stored));
    }

    #[tokio::test]
    async fn test_save_load_round_trip_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let path = doc_path(&dir);
        let mut storage = JsonStorage::new(&path, DefaultSeed);

        let mut state = storage.load().await.unwrap();
        state.goal_mut("Robert", "Facturación").unwrap().increment(500.0);
        state.goal_mut("Jesus", "Python Scripts").unwrap().increment(0.5);
        let time = NaiveDate::from_ymd_opt(2026, 2, 14)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        state.history.push(HistoryEntry::new(time, "Robert", "Added 500 USD to 'Facturación'"));
        storage.save(&state).await.unwrap();
        let first_bytes = std::fs::read(&path).unwrap();

        let loaded = storage.load().await.unwrap();
        assert_eq!(loaded, state);

        storage.save(&loaded).await.unwrap();
        assert_eq!(storage.load().await.unwrap(), loaded);
        assert_eq!(std::fs::read(&path).unwrap(), first_bytes);
    }

    #[tokio::test]
    async fn test_non_ascii_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = doc_path(&dir);
        let mut storage = JsonStorage::new(&path, DefaultSeed);

        let state = TrackerState::new().with_user(
            "José",
            User::new().with_goal("Días sin azúcar", Goal::new("Días sin azúcar", 30.0, "Días").unwrap()),
        );
        storage.save(&state).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("José"));
        assert!(raw.contains("Días sin azúcar"));
        assert!(!raw.contains("\\u"));
        assert_eq!(storage.load().await.unwrap(), state);
    }

    #[tokio::test]
    async fn test_document_is_indented_and_ordered() {
        let dir = tempfile::tempdir().unwrap();
        let path = doc_path(&dir);
        let storage = JsonStorage::new(&path, DefaultSeed);
        storage.load().await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("{\n    \"users\""));

        let robert = raw.find("\"Robert\"").unwrap();
        let angel = raw.find("\"Angel\"").unwrap();
        assert!(robert < angel);
    }

    #[tokio::test]
    async fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("data.json");
        let mut storage = JsonStorage::new(&path, DefaultSeed);

        storage.save(&TrackerState::new()).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_custom_seed_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let seed = TrackerState::new().with_user("Solo", User::new());
        let storage = JsonStorage::new(doc_path(&dir), seed.clone());

        assert_eq!(storage.load().await.unwrap(), seed);
    }
}
