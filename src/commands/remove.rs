//! Remove a calendar event.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::Config;

pub fn run(id: String) -> Result<()> {
    let config = Config::load()?;
    let mut store = super::open_store(&config)?;

    let removed = store.get(&id).map(|event| event.title.clone());
    store.remove(&id)?;

    match removed {
        Some(title) => println!("{} {}", "Removed".red(), title.bold()),
        None => println!("{}", format!("No event with id {}", id).dimmed()),
    }

    Ok(())
}
