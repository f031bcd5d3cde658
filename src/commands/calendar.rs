//! Render calendar events in month, week or year view.

use anyhow::{bail, Result};
use schedboard_core::view::dispatch;
use schedboard_core::{Action, CalendarView, Role, ViewMode, ViewState};

use crate::config::Config;
use crate::render;

pub fn run(view: String, year: Option<i32>, month: Option<u32>) -> Result<()> {
    let config = Config::load()?;
    let mut store = super::open_store(&config)?;

    let mut state = ViewState::initial(Role::from_code(config.role.unwrap_or(2)));

    // Mirror the page's transitions instead of constructing the final state
    // directly, so drill-downs behave exactly like clicking through.
    dispatch(&mut state, &mut store, Action::ViewChanged(ViewMode::Calendar))?;
    dispatch(
        &mut state,
        &mut store,
        Action::CalendarViewChanged(parse_view(&view)?),
    )?;

    if let Some(year) = year {
        dispatch(&mut state, &mut store, Action::YearChanged(Some(year)))?;
    }

    if let Some(month) = month {
        if !(1..=12).contains(&month) {
            bail!("Month must be between 1 and 12");
        }
        dispatch(&mut state, &mut store, Action::MonthSelected(month - 1))?;
    }

    match state.calendar_view {
        CalendarView::Month => render::print_month(
            state.initial_date(),
            store.events(),
            state.focused_month.is_some(),
        ),
        CalendarView::Week => render::print_week(state.initial_date(), store.events()),
        CalendarView::Year => render::print_year(state.selected_year, store.events()),
    }

    Ok(())
}

fn parse_view(value: &str) -> Result<CalendarView> {
    match value {
        "month" => Ok(CalendarView::Month),
        "week" => Ok(CalendarView::Week),
        "year" => Ok(CalendarView::Year),
        other => bail!("Unknown view '{}'. Use month, week or year", other),
    }
}
