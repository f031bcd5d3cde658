//! Add a calendar event.

use anyhow::Result;
use owo_colors::OwoColorize;
use schedboard_core::EventDraft;

use crate::config::Config;

pub fn run(
    date: String,
    title: String,
    time: Option<String>,
    end_time: Option<String>,
    description: Option<String>,
    importance: String,
) -> Result<()> {
    let config = Config::load()?;
    let mut store = super::open_store(&config)?;

    let draft = EventDraft {
        title,
        date,
        time,
        end_time,
        description: description.unwrap_or_default(),
        importance: super::parse_importance(&importance)?,
    };

    // Blank titles are dropped without feedback, like an empty dialog submit.
    if let Some(id) = store.add(&draft)? {
        println!(
            "{} {} {}",
            "Created".green(),
            draft.title.bold(),
            format!("({})", id).dimmed()
        );
    }

    Ok(())
}
