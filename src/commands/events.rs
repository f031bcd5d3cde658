//! List calendar events, grouped by day.

use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;
use schedboard_core::CalendarEvent;

use crate::config::Config;
use crate::render::Render;

pub fn run() -> Result<()> {
    let config = Config::load()?;
    let store = super::open_store(&config)?;

    let mut events: Vec<&CalendarEvent> = store.events().iter().collect();
    events.sort_by(|a, b| a.date.cmp(&b.date));

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    let mut current_date: Option<String> = None;

    for event in events {
        let date = event.date_part().to_string();

        if current_date.as_ref() != Some(&date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", date_label(event).bold());
            current_date = Some(date);
        }

        println!("  {}", event.render());
    }

    Ok(())
}

/// Human-readable day label (e.g. "Today", "Tomorrow", "Wed Feb 25"); dates
/// that don't parse are shown as-is.
fn date_label(event: &CalendarEvent) -> String {
    let Some(date) = event.date_naive() else {
        return event.date_part().to_string();
    };

    let today = Local::now().date_naive();
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}
