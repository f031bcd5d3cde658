pub mod add;
pub mod calendar;
pub mod events;
pub mod inventory;
pub mod remove;
pub mod schedule;
pub mod update;

use anyhow::{bail, Context, Result};
use schedboard_core::{EventStore, Importance, JsonFileStorage};

use crate::config::Config;

/// Open the event store at the configured (or default) snapshot path.
pub fn open_store(config: &Config) -> Result<EventStore<JsonFileStorage>> {
    let path = match &config.events_path {
        Some(path) => path.clone(),
        None => JsonFileStorage::default_path()?,
    };

    EventStore::open(JsonFileStorage::new(path)).context("Failed to open event store")
}

pub fn parse_importance(value: &str) -> Result<Importance> {
    match value {
        "low" => Ok(Importance::Low),
        "medium" => Ok(Importance::Medium),
        "high" => Ok(Importance::High),
        other => bail!("Unknown importance '{}'. Use low, medium or high", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_importance() {
        assert_eq!(parse_importance("low").unwrap(), Importance::Low);
        assert_eq!(parse_importance("medium").unwrap(), Importance::Medium);
        assert_eq!(parse_importance("high").unwrap(), Importance::High);
        assert!(parse_importance("urgent").is_err());
    }
}
