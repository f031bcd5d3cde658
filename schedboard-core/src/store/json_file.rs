//! JSON-file snapshot storage for calendar events.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{SchedboardError, SchedboardResult};
use crate::event::CalendarEvent;
use crate::store::EventStorage;

/// One JSON file holding the full event-list snapshot, read once at startup
/// and overwritten on every mutation.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStorage { path: path.into() }
    }

    /// Default snapshot location under the platform data directory.
    pub fn default_path() -> SchedboardResult<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| SchedboardError::Config("Could not determine data directory".into()))?;
        Ok(data_dir.join("schedboard").join("events.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventStorage for JsonFileStorage {
    fn load(&self) -> SchedboardResult<Option<Vec<CalendarEvent>>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // A snapshot that no longer parses is treated the same as a missing
        // one: the caller reseeds and the next write replaces it.
        Ok(serde_json::from_str(&content).ok())
    }

    fn save(&self, events: &[CalendarEvent]) -> SchedboardResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(events)
            .map_err(|e| SchedboardError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Importance;

    fn make_event(id: &str) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            title: "Exam".to_string(),
            date: "2024-02-10T09:00".to_string(),
            end: Some("2024-02-10T10:00".to_string()),
            description: "Room B12".to_string(),
            importance: Importance::High,
        }
    }

    #[test]
    fn test_missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("events.json"));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_snapshot_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, "{not json").unwrap();

        let storage = JsonFileStorage::new(path);
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested").join("events.json"));

        let events = vec![make_event("a"), make_event("b")];
        storage.save(&events).unwrap();

        assert_eq!(storage.load().unwrap(), Some(events));
    }
}
