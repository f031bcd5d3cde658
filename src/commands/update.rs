//! Update an existing calendar event.

use anyhow::Result;
use owo_colors::OwoColorize;
use schedboard_core::EventDraft;

use crate::config::Config;

pub fn run(
    id: String,
    title: String,
    date: Option<String>,
    time: Option<String>,
    end_time: Option<String>,
    description: Option<String>,
    importance: Option<String>,
) -> Result<()> {
    let config = Config::load()?;
    let mut store = super::open_store(&config)?;

    let Some(existing) = store.get(&id).cloned() else {
        println!("{}", format!("No event with id {}", id).dimmed());
        return Ok(());
    };

    // Unspecified fields keep their current values, like an edit dialog
    // pre-filled from the event.
    let draft = EventDraft {
        title,
        date: date.unwrap_or_else(|| existing.date_part().to_string()),
        time: time.or_else(|| existing.start_time().map(str::to_string)),
        end_time: end_time.or_else(|| existing.end_time().map(str::to_string)),
        description: description.unwrap_or(existing.description),
        importance: match importance {
            Some(value) => super::parse_importance(&value)?,
            None => existing.importance,
        },
    };

    if store.update(&id, &draft)? {
        println!("{} {}", "Updated".yellow(), draft.title.bold());
    }

    Ok(())
}
