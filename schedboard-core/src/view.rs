//! View-state machine for the schedule and calendar pages.
//!
//! The state here is purely client-local and never persisted. User
//! interactions arrive as tagged [`Action`]s and are applied to the
//! `(ViewState, EventStore)` pair by [`dispatch`], independent of any
//! particular UI runtime.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::SchedboardResult;
use crate::event::CalendarEvent;
use crate::schedule::Role;
use crate::store::{EventDraft, EventStorage, EventStore};

/// Which page tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Schedule,
}

/// Tabular vs. calendar rendering of the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Tabular,
    Calendar,
}

/// Granularity of the calendar rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarView {
    Month,
    Week,
    Year,
}

/// The add/edit dialog, opened by clicking a date cell or an event.
#[derive(Debug, Clone, PartialEq)]
pub struct Dialog {
    /// `Some` when editing an existing event, `None` when adding.
    pub editing_id: Option<String>,
    pub draft: EventDraft,
}

/// Read-only detail panel for a clicked schedule event, dismissed by an
/// explicit close action.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedEvent {
    pub title: String,
    pub date: String,
}

/// Client-local view state. Only `selected_year` carries across view
/// changes; nothing here touches the underlying event data.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub active_tab: Tab,
    pub view_mode: ViewMode,
    pub calendar_view: CalendarView,
    /// 0-based month, set only when month view was reached by drilling down
    /// from year view.
    pub focused_month: Option<u32>,
    pub selected_year: i32,
    pub dialog: Option<Dialog>,
    pub selected: Option<SelectedEvent>,
}

impl ViewState {
    /// Initial state for a session: instructors land on the tabular
    /// schedule, everyone else on the month calendar.
    pub fn initial(role: Role) -> Self {
        let (active_tab, view_mode) = match role {
            Role::Instructor => (Tab::Schedule, ViewMode::Tabular),
            _ => (Tab::Overview, ViewMode::Calendar),
        };

        ViewState {
            active_tab,
            view_mode,
            calendar_view: CalendarView::Month,
            focused_month: None,
            selected_year: Local::now().year(),
            dialog: None,
            selected: None,
        }
    }

    /// First day of the month the calendar should initially display:
    /// `(selected_year, focused_month)`, defaulting to January when no month
    /// is focused.
    pub fn initial_date(&self) -> NaiveDate {
        let month0 = self.focused_month.unwrap_or(0);
        NaiveDate::from_ymd_opt(self.selected_year, month0 + 1, 1)
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

/// A user interaction, applied by [`dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A date cell was clicked: open the add dialog for that date.
    DateClicked { date: String },
    /// A stored event was clicked: open the edit dialog pre-filled from it.
    EventClicked { id: String },
    /// A projected schedule event was clicked: show the detail panel.
    ScheduleEventClicked { title: String, date: String },
    /// The dialog's confirm button: add or update from the current draft.
    AddOrUpdateRequested,
    /// The dialog's delete button.
    DeleteRequested,
    /// Tabular/calendar toggle.
    ViewChanged(ViewMode),
    /// Month/week/year toggle.
    CalendarViewChanged(CalendarView),
    /// A month cell in year view was selected (0-based month).
    MonthSelected(u32),
    /// Back from a drilled-down month view to year view.
    BackToYear,
    /// The year input changed; `None` (unparsable input) resets to the
    /// current year.
    YearChanged(Option<i32>),
    /// Dismiss the detail panel.
    ClosePanel,
}

/// Apply a user interaction to the view state and event store.
///
/// View transitions never touch the event data; only the dialog confirm and
/// delete actions mutate the store. Confirming with a blank title leaves the
/// dialog open (the title is an input-level requirement); confirming an edit
/// whose id is gone still closes it.
pub fn dispatch<S: EventStorage>(
    state: &mut ViewState,
    store: &mut EventStore<S>,
    action: Action,
) -> SchedboardResult<()> {
    match action {
        Action::DateClicked { date } => {
            state.dialog = Some(Dialog {
                editing_id: None,
                draft: EventDraft {
                    date,
                    ..EventDraft::default()
                },
            });
        }
        Action::EventClicked { id } => {
            if let Some(event) = store.get(&id) {
                state.dialog = Some(Dialog {
                    editing_id: Some(id),
                    draft: draft_from(event),
                });
            }
        }
        Action::ScheduleEventClicked { title, date } => {
            state.selected = Some(SelectedEvent { title, date });
        }
        Action::AddOrUpdateRequested => {
            let blank = state
                .dialog
                .as_ref()
                .is_some_and(|dialog| dialog.draft.title.trim().is_empty());

            // A blank submit is discarded and the dialog stays open
            if !blank {
                if let Some(dialog) = state.dialog.take() {
                    match &dialog.editing_id {
                        Some(id) => {
                            store.update(id, &dialog.draft)?;
                        }
                        None => {
                            store.add(&dialog.draft)?;
                        }
                    }
                }
            }
        }
        Action::DeleteRequested => {
            if let Some(dialog) = state.dialog.take() {
                if let Some(id) = dialog.editing_id {
                    store.remove(&id)?;
                }
            }
        }
        Action::ViewChanged(mode) => state.view_mode = mode,
        Action::CalendarViewChanged(view) => state.calendar_view = view,
        Action::MonthSelected(month) => {
            state.focused_month = Some(month.min(11));
            state.calendar_view = CalendarView::Month;
        }
        Action::BackToYear => {
            state.focused_month = None;
            state.calendar_view = CalendarView::Year;
        }
        Action::YearChanged(year) => {
            state.selected_year = year.unwrap_or_else(|| Local::now().year());
        }
        Action::ClosePanel => state.selected = None,
    }

    Ok(())
}

/// Pre-fill an edit draft from an existing event, the way the edit dialog
/// populates its fields (date split at `T`, times truncated to `HH:MM`).
fn draft_from(event: &CalendarEvent) -> EventDraft {
    EventDraft {
        title: event.title.clone(),
        date: event.date_part().to_string(),
        time: event.start_time().map(str::to_string),
        end_time: event.end_time().map(str::to_string),
        description: event.description.clone(),
        importance: event.importance,
    }
}

/// Events whose date falls in the given `(year, 0-based month)` cell of the
/// year view. Dates that fail to parse are never assigned to a cell.
pub fn events_in_month(events: &[CalendarEvent], year: i32, month0: u32) -> Vec<&CalendarEvent> {
    events
        .iter()
        .filter(|event| {
            event
                .date_naive()
                .map(|date| date.year() == year && date.month0() == month0)
                .unwrap_or(false)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Importance;
    use crate::store::MemoryStorage;

    fn make_event(id: &str, title: &str, date: &str) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            title: title.to_string(),
            date: date.to_string(),
            end: None,
            description: String::new(),
            importance: Importance::Medium,
        }
    }

    fn seeded_store() -> EventStore<MemoryStorage> {
        let storage = MemoryStorage::with_events(vec![make_event(
            "1",
            "Events Handling",
            "2024-01-01",
        )]);
        EventStore::open(storage).unwrap()
    }

    #[test]
    fn test_initial_state_per_role() {
        let instructor = ViewState::initial(Role::Instructor);
        assert_eq!(instructor.active_tab, Tab::Schedule);
        assert_eq!(instructor.view_mode, ViewMode::Tabular);

        let admin = ViewState::initial(Role::Admin);
        assert_eq!(admin.active_tab, Tab::Overview);
        assert_eq!(admin.view_mode, ViewMode::Calendar);
        assert_eq!(admin.calendar_view, CalendarView::Month);
        assert_eq!(admin.focused_month, None);
        assert_eq!(admin.selected_year, Local::now().year());
    }

    #[test]
    fn test_view_toggle_does_not_touch_events() {
        let mut state = ViewState::initial(Role::Instructor);
        let mut store = seeded_store();
        let before = store.events().to_vec();

        dispatch(&mut state, &mut store, Action::ViewChanged(ViewMode::Calendar)).unwrap();
        dispatch(&mut state, &mut store, Action::ViewChanged(ViewMode::Tabular)).unwrap();

        assert_eq!(state.view_mode, ViewMode::Tabular);
        assert_eq!(store.events(), before.as_slice());
        assert_eq!(store.storage().saves(), 0);
    }

    #[test]
    fn test_year_to_month_drill_down() {
        let mut state = ViewState::initial(Role::Admin);
        let mut store = seeded_store();

        dispatch(&mut state, &mut store, Action::CalendarViewChanged(CalendarView::Year)).unwrap();
        dispatch(&mut state, &mut store, Action::YearChanged(Some(2024))).unwrap();
        dispatch(&mut state, &mut store, Action::MonthSelected(1)).unwrap();

        assert_eq!(state.calendar_view, CalendarView::Month);
        assert_eq!(state.focused_month, Some(1));
        assert_eq!(
            state.initial_date(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
    }

    #[test]
    fn test_back_to_year_clears_focused_month() {
        let mut state = ViewState::initial(Role::Admin);
        let mut store = seeded_store();

        dispatch(&mut state, &mut store, Action::MonthSelected(5)).unwrap();
        dispatch(&mut state, &mut store, Action::BackToYear).unwrap();

        assert_eq!(state.calendar_view, CalendarView::Year);
        assert_eq!(state.focused_month, None);
    }

    #[test]
    fn test_unparsable_year_resets_to_current() {
        let mut state = ViewState::initial(Role::Admin);
        let mut store = seeded_store();

        dispatch(&mut state, &mut store, Action::YearChanged(Some(1999))).unwrap();
        dispatch(&mut state, &mut store, Action::YearChanged(None)).unwrap();

        assert_eq!(state.selected_year, Local::now().year());
    }

    #[test]
    fn test_date_click_then_confirm_adds_event() {
        let mut state = ViewState::initial(Role::Admin);
        let mut store = seeded_store();

        dispatch(
            &mut state,
            &mut store,
            Action::DateClicked { date: "2024-02-10".to_string() },
        )
        .unwrap();

        let dialog = state.dialog.as_mut().unwrap();
        assert_eq!(dialog.editing_id, None);
        dialog.draft.title = "Exam".to_string();
        dialog.draft.time = Some("09:00".to_string());

        dispatch(&mut state, &mut store, Action::AddOrUpdateRequested).unwrap();

        assert_eq!(state.dialog, None);
        assert_eq!(store.events().len(), 2);
        assert_eq!(store.events()[1].date, "2024-02-10T09:00");
    }

    #[test]
    fn test_event_click_prefills_edit_dialog() {
        let mut state = ViewState::initial(Role::Admin);
        let storage = MemoryStorage::with_events(vec![CalendarEvent {
            id: "1".to_string(),
            title: "Exam".to_string(),
            date: "2024-02-10T09:00".to_string(),
            end: Some("2024-02-10T10:00".to_string()),
            description: "Room B12".to_string(),
            importance: Importance::High,
        }]);
        let mut store = EventStore::open(storage).unwrap();

        dispatch(&mut state, &mut store, Action::EventClicked { id: "1".to_string() }).unwrap();

        let dialog = state.dialog.as_ref().unwrap();
        assert_eq!(dialog.editing_id.as_deref(), Some("1"));
        assert_eq!(dialog.draft.date, "2024-02-10");
        assert_eq!(dialog.draft.time.as_deref(), Some("09:00"));
        assert_eq!(dialog.draft.end_time.as_deref(), Some("10:00"));
        assert_eq!(dialog.draft.importance, Importance::High);
    }

    #[test]
    fn test_blank_title_confirm_keeps_dialog_open_without_mutating() {
        let mut state = ViewState::initial(Role::Admin);
        let mut store = seeded_store();
        let before = store.events().to_vec();

        dispatch(
            &mut state,
            &mut store,
            Action::DateClicked { date: "2024-02-10".to_string() },
        )
        .unwrap();
        dispatch(&mut state, &mut store, Action::AddOrUpdateRequested).unwrap();

        // The submit is discarded but the dialog does not close
        assert!(state.dialog.is_some());
        assert_eq!(store.events(), before.as_slice());
        assert_eq!(store.storage().saves(), 0);

        // Filling in a title lets the same dialog go through
        state.dialog.as_mut().unwrap().draft.title = "Exam".to_string();
        dispatch(&mut state, &mut store, Action::AddOrUpdateRequested).unwrap();
        assert_eq!(state.dialog, None);
        assert_eq!(store.events().len(), 2);
    }

    #[test]
    fn test_delete_from_edit_dialog_removes_event() {
        let mut state = ViewState::initial(Role::Admin);
        let mut store = seeded_store();

        dispatch(&mut state, &mut store, Action::EventClicked { id: "1".to_string() }).unwrap();
        dispatch(&mut state, &mut store, Action::DeleteRequested).unwrap();

        assert_eq!(state.dialog, None);
        assert!(store.events().is_empty());
    }

    #[test]
    fn test_detail_panel_open_and_close() {
        let mut state = ViewState::initial(Role::Instructor);
        let mut store = seeded_store();

        dispatch(
            &mut state,
            &mut store,
            Action::ScheduleEventClicked {
                title: "Algebra 09:00 - 10:00".to_string(),
                date: "2024-02-10T09:00:00".to_string(),
            },
        )
        .unwrap();
        assert!(state.selected.is_some());

        dispatch(&mut state, &mut store, Action::ClosePanel).unwrap();
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_year_view_cell_filter() {
        let events = vec![
            make_event("1", "Events Handling", "2024-01-01"),
            CalendarEvent {
                id: "2".to_string(),
                title: "Exam".to_string(),
                date: "2024-02-10T09:00".to_string(),
                end: Some("2024-02-10T10:00".to_string()),
                description: String::new(),
                importance: Importance::High,
            },
        ];

        let february = events_in_month(&events, 2024, 1);
        assert_eq!(february.len(), 1);
        assert_eq!(february[0].title, "Exam");

        assert!(events_in_month(&events, 2023, 1).is_empty());
        assert!(events_in_month(&events, 2024, 5).is_empty());
    }

    #[test]
    fn test_unparsable_dates_never_match_a_cell() {
        let events = vec![make_event("1", "Odd", "soon")];
        for month0 in 0..12 {
            assert!(events_in_month(&events, 2024, month0).is_empty());
        }
    }
}
