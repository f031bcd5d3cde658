//! Core types for the schedboard ecosystem.
//!
//! This crate provides the data model shared by schedboard surfaces:
//! - `event` and `store` for the user-maintained calendar-event list
//! - `schedule` for externally-sourced schedule rows and their projections
//! - `inventory` for the merchandise and stationery item tables
//! - `view` for the view-state machine driving the interactive surface

pub mod error;
pub mod event;
pub mod inventory;
pub mod schedule;
pub mod store;
pub mod view;

pub use error::{SchedboardError, SchedboardResult};
pub use event::{CalendarEvent, Importance};
pub use inventory::{
    stock_status, InventoryItem, InventoryStorage, InventoryStore, ItemDraft,
    JsonInventoryStorage, Section, StockStatus,
};
pub use schedule::{columns, project, ProjectedEvent, Role, ScheduleRecord};
pub use store::{EventDraft, EventStorage, EventStore, JsonFileStorage, MemoryStorage};
pub use view::{events_in_month, Action, CalendarView, Tab, ViewMode, ViewState};
