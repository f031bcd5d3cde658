//! Fetch and show the remote schedule.

use anyhow::{bail, Result};
use owo_colors::OwoColorize;
use schedboard_core::{columns, project, Role, ScheduleRecord};
use serde_json::Value;

use crate::client;
use crate::config::Config;
use crate::render::{self, Render};

pub async fn run(view: String, endpoint: Option<String>, role_code: Option<u8>) -> Result<()> {
    let config = Config::load()?;
    let role = Role::from_code(role_code.or(config.role).unwrap_or(2));

    match role {
        Role::Admin => run_counts(&config).await,
        Role::Instructor => {
            let Some(endpoint) = endpoint.or(config.schedule_endpoint) else {
                bail!(
                    "No schedule endpoint configured.\n\n\
                    Set schedule_endpoint in config.toml or pass --endpoint"
                );
            };

            let records = client::fetch_schedule(&endpoint, role).await;

            match view.as_str() {
                "tabular" => run_tabular(&records),
                "calendar" => run_calendar(&records),
                other => bail!("Unknown view '{}'. Use tabular or calendar", other),
            }
        }
        Role::Other(code) => {
            println!("{}", format!("No schedule view for role {}", code).dimmed());
            Ok(())
        }
    }
}

fn run_tabular(records: &[ScheduleRecord]) -> Result<()> {
    println!("{}", "My Schedule".bold());

    render::print_table(&columns(records), records);
    if records.is_empty() {
        println!("{}", "No data to display".dimmed());
    }

    Ok(())
}

fn run_calendar(records: &[ScheduleRecord]) -> Result<()> {
    println!("{}", "My Schedule - Calendar View".bold());

    let events = project(records);
    if events.is_empty() {
        println!("{}", "No data to display".dimmed());
        return Ok(());
    }

    for event in &events {
        println!("  {}", event.render());
    }

    Ok(())
}

async fn run_counts(config: &Config) -> Result<()> {
    let Some(endpoint) = &config.count_endpoint else {
        bail!("No count endpoint configured. Set count_endpoint in config.toml");
    };

    println!("{}", "Overview".bold());

    match client::fetch_counts(endpoint).await {
        Some(Value::Object(counts)) => {
            for (label, value) in counts {
                println!("  {:<20} {}", label, value);
            }
        }
        _ => println!("{}", "No data to display".dimmed()),
    }

    Ok(())
}
