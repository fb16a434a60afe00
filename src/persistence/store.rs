//! Storage backends for the calculator form.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};

use super::state::{CalculatorState, PersistedState};

/// Somewhere the calculator form can be saved between sessions.
pub trait StateStore: Send + Sync {
    /// Loads the saved form, or `None` if nothing has been saved.
    fn load(&self) -> EngineResult<Option<CalculatorState>>;

    /// Saves the form, replacing anything saved before.
    fn save(&self, state: &CalculatorState) -> EngineResult<()>;

    /// Removes the saved form. Clearing an empty store is not an error.
    fn clear(&self) -> EngineResult<()>;
}

/// Stores the form as a JSON file.
///
/// Writes go to a sibling temporary file which is then renamed over the
/// target, so a crash mid-write leaves the previous save intact.
///
/// # Example
///
/// ```no_run
/// use wage_calculator::persistence::{CalculatorState, JsonFileStore, StateStore};
///
/// let store = JsonFileStore::new("data/calculator-state.json");
/// store.save(&CalculatorState::default())?;
/// assert!(store.load()?.is_some());
/// # Ok::<(), wage_calculator::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, err: impl std::fmt::Display) -> EngineError {
        EngineError::StateIo {
            path: self.path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> EngineResult<Option<CalculatorState>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(err)),
        };

        let stored: PersistedState =
            serde_json::from_str(&content).map_err(|e| EngineError::StateParse {
                message: e.to_string(),
            })?;

        info!(path = %self.path.display(), "Loaded saved calculator state");
        Ok(Some(stored.into_state()))
    }

    fn save(&self, state: &CalculatorState) -> EngineResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(&state.to_persisted()).map_err(|e| {
            EngineError::StateParse {
                message: e.to_string(),
            }
        })?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, json).map_err(|e| self.io_error(e))?;
        if let Err(err) = fs::rename(&temp_path, &self.path) {
            warn!(path = %temp_path.display(), error = %err, "Failed to move state into place");
            let _ = fs::remove_file(&temp_path);
            return Err(self.io_error(err));
        }

        info!(path = %self.path.display(), "Saved calculator state");
        Ok(())
    }

    fn clear(&self) -> EngineResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "Cleared saved calculator state");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.io_error(err)),
        }
    }
}

/// Keeps the form in memory, in its persisted shape.
///
/// Used for tests and for running the server without a state file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Mutex<Option<PersistedState>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> EngineResult<Option<CalculatorState>> {
        let saved = self.saved.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(saved.clone().map(PersistedState::into_state))
    }

    fn save(&self, state: &CalculatorState) -> EngineResult<()> {
        let mut saved = self.saved.lock().unwrap_or_else(PoisonError::into_inner);
        *saved = Some(state.to_persisted());
        Ok(())
    }

    fn clear(&self) -> EngineResult<()> {
        let mut saved = self.saved.lock().unwrap_or_else(PoisonError::into_inner);
        *saved = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Location, ShiftEntry, ShiftUpdate};
    use chrono::NaiveTime;

    fn sample_state() -> CalculatorState {
        let mut state = CalculatorState::default();
        state.schedule.toggle_day(Day::Saturday, true);
        state
            .schedule
            .update_shift(
                Day::Saturday,
                0,
                ShiftUpdate::StartTime(NaiveTime::from_hms_opt(22, 0, 0)),
            )
            .unwrap();
        state
            .schedule
            .update_shift(
                Day::Saturday,
                0,
                ShiftUpdate::EndTime(NaiveTime::from_hms_opt(6, 0, 0)),
            )
            .unwrap();
        state.rates.weekend_rate = "27.5".to_string();
        state.details.employee_name = "Alex".to_string();
        state
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("state.json"));

        assert!(store.load().unwrap().is_none());

        let state = sample_state();
        store.save(&state).unwrap();

        assert!(store.path().exists());
        assert!(!store.temp_path().exists());
        assert_eq!(store.load().unwrap(), Some(state));
    }

    #[test]
    fn test_file_store_overwrites_previous_save() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("state.json"));

        store.save(&sample_state()).unwrap();
        store.save(&CalculatorState::default()).unwrap();

        assert_eq!(store.load().unwrap(), Some(CalculatorState::default()));
    }

    #[test]
    fn test_file_store_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("state.json"));

        store.save(&sample_state()).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());

        // Clearing twice is fine.
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_backfills_older_saves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(
            &path,
            r#"{"Monday": {"shifts": [{"startTime": "09:00", "endTime": "17:00", "location": "Gosford"}]}}"#,
        )
        .unwrap();

        let state = JsonFileStore::new(&path).load().unwrap().unwrap();
        let monday = state.schedule.day(Day::Monday);
        assert!(monday.enabled);
        assert_eq!(monday.shifts.len(), 1);
        assert_eq!(monday.shifts[0].location, Location::Gosford);
        assert_eq!(state.schedule.day(Day::Tuesday).shifts, vec![ShiftEntry::default()]);
    }

    #[test]
    fn test_file_store_corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();

        match JsonFileStore::new(&path).load() {
            Err(EngineError::StateParse { message }) => assert!(!message.is_empty()),
            other => panic!("Expected StateParse error, got {:?}", other),
        }
    }

    #[test]
    fn test_file_store_unreadable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be read as a file.
        match JsonFileStore::new(dir.path()).load() {
            Err(EngineError::StateIo { path, .. }) => {
                assert_eq!(path, dir.path().display().to_string());
            }
            other => panic!("Expected StateIo error, got {:?}", other),
        }
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        let state = sample_state();
        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), Some(state));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
