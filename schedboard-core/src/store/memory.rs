//! In-memory snapshot storage.
//!
//! Substitutable for the JSON-file storage in ephemeral sessions and tests;
//! also exposes what was written for asserting write-through behavior.

use std::cell::{Cell, RefCell};

use crate::error::SchedboardResult;
use crate::event::CalendarEvent;
use crate::store::EventStorage;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    snapshot: RefCell<Option<Vec<CalendarEvent>>>,
    saves: Cell<usize>,
}

impl MemoryStorage {
    /// Storage pre-loaded with a snapshot.
    pub fn with_events(events: Vec<CalendarEvent>) -> Self {
        MemoryStorage {
            snapshot: RefCell::new(Some(events)),
            saves: Cell::new(0),
        }
    }

    /// The last snapshot written, if any.
    pub fn snapshot(&self) -> Option<Vec<CalendarEvent>> {
        self.snapshot.borrow().clone()
    }

    /// How many times `save` has been called.
    pub fn saves(&self) -> usize {
        self.saves.get()
    }
}

impl EventStorage for MemoryStorage {
    fn load(&self) -> SchedboardResult<Option<Vec<CalendarEvent>>> {
        Ok(self.snapshot.borrow().clone())
    }

    fn save(&self, events: &[CalendarEvent]) -> SchedboardResult<()> {
        *self.snapshot.borrow_mut() = Some(events.to_vec());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
