//! Editable, persisted calendar-event store.

mod json_file;
mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

use uuid::Uuid;

use crate::error::SchedboardResult;
use crate::event::{seed_events, CalendarEvent, Importance};

/// Durable key-value slot holding the full serialized event list.
///
/// `load` returns `None` when no usable snapshot exists (missing or
/// malformed); the store then falls back to the seed list. `save` overwrites
/// the snapshot with the full list.
pub trait EventStorage {
    fn load(&self) -> SchedboardResult<Option<Vec<CalendarEvent>>>;
    fn save(&self, events: &[CalendarEvent]) -> SchedboardResult<()>;
}

/// Form input for an add or edit: the clicked calendar date plus the dialog
/// fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    pub title: String,
    /// The clicked calendar date (ISO date, no time).
    pub date: String,
    /// Optional start time (`HH:MM`).
    pub time: Option<String>,
    /// Optional end time (`HH:MM`).
    pub end_time: Option<String>,
    pub description: String,
    pub importance: Importance,
}

impl EventDraft {
    /// The clicked date combined with the start time, or date-only when no
    /// time was given.
    fn start(&self) -> String {
        match self.time.as_deref().filter(|t| !t.is_empty()) {
            Some(time) => format!("{}T{}", self.date, time),
            None => self.date.clone(),
        }
    }

    /// The clicked date combined with the end time, or `None` when no end
    /// time was given.
    fn end(&self) -> Option<String> {
        self.end_time
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(|time| format!("{}T{}", self.date, time))
    }

    fn is_blank(&self) -> bool {
        self.title.trim().is_empty()
    }
}

/// The editable calendar-event list, written through to storage on every
/// mutation.
pub struct EventStore<S: EventStorage> {
    storage: S,
    events: Vec<CalendarEvent>,
}

impl<S: EventStorage> EventStore<S> {
    /// Open the store, restoring the persisted snapshot or seeding a fresh
    /// list when none is usable.
    pub fn open(storage: S) -> SchedboardResult<Self> {
        let events = storage.load()?.unwrap_or_else(seed_events);
        Ok(EventStore { storage, events })
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Add a new event from a draft, assigning it a fresh id. Drafts with a
    /// blank title are silently discarded. Returns the new id, if any.
    pub fn add(&mut self, draft: &EventDraft) -> SchedboardResult<Option<String>> {
        if draft.is_blank() {
            return Ok(None);
        }

        let event = CalendarEvent {
            id: Uuid::new_v4().to_string(),
            title: draft.title.clone(),
            date: draft.start(),
            end: draft.end(),
            description: draft.description.clone(),
            importance: draft.importance,
        };
        let id = event.id.clone();

        self.events.push(event);
        self.storage.save(&self.events)?;
        Ok(Some(id))
    }

    /// Replace the fields of the event with the given id from a draft. The
    /// id itself never changes. Blank titles are silently discarded and an
    /// unknown id is a no-op (the edit flow still closes on the caller's
    /// side). Returns whether an event was updated.
    pub fn update(&mut self, id: &str, draft: &EventDraft) -> SchedboardResult<bool> {
        if draft.is_blank() {
            return Ok(false);
        }

        let Some(event) = self.events.iter_mut().find(|event| event.id == id) else {
            return Ok(false);
        };

        event.title = draft.title.clone();
        event.date = draft.start();
        event.end = draft.end();
        event.description = draft.description.clone();
        event.importance = draft.importance;

        self.storage.save(&self.events)?;
        Ok(true)
    }

    /// Remove the event with the given id, if present.
    pub fn remove(&mut self, id: &str) -> SchedboardResult<()> {
        self.events.retain(|event| event.id != id);
        self.storage.save(&self.events)?;
        Ok(())
    }
}
