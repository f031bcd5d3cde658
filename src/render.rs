//! Terminal rendering for schedboard types.
//!
//! Extension traits and helpers that add colored output using owo_colors.
//! Event importance maps onto terminal colors the same way the web views map
//! it onto block colors: low is green, medium yellow, high red.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use owo_colors::OwoColorize;
use schedboard_core::{
    events_in_month, CalendarEvent, Importance, InventoryItem, ProjectedEvent, ScheduleRecord,
    Section, StockStatus,
};
use serde_json::Value;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Importance {
    fn render(&self) -> String {
        match self {
            Importance::Low => "low".green().to_string(),
            Importance::Medium => "medium".yellow().to_string(),
            Importance::High => "high".red().to_string(),
        }
    }
}

impl Render for CalendarEvent {
    fn render(&self) -> String {
        let time = match (self.start_time(), self.end_time()) {
            (Some(start), Some(end)) => format!("{} - {}", start, end),
            (Some(start), None) => format!("{:>13}", start),
            _ => format!("{:>13}", "all-day"),
        };

        format!(
            "{} {} [{}] {}",
            time.dimmed(),
            self.title,
            self.importance.render(),
            format!("({})", self.id).dimmed()
        )
    }
}

impl Render for StockStatus {
    fn render(&self) -> String {
        match self {
            StockStatus::OutOfStock => self.label().red().to_string(),
            StockStatus::LowStock => self.label().yellow().to_string(),
            StockStatus::InStock => self.label().green().to_string(),
        }
    }
}

impl Render for ProjectedEvent {
    fn render(&self) -> String {
        format!("{}  {}", self.start.dimmed(), self.display_title)
    }
}

/// Print the schedule as a plain table. Column widths fit the widest cell;
/// the caller handles the empty-list indicator.
pub fn print_table(columns: &[String], records: &[ScheduleRecord]) {
    if columns.is_empty() {
        return;
    }

    let widths: Vec<usize> = columns
        .iter()
        .map(|col| {
            records
                .iter()
                .map(|record| cell_text(record.0.get(col)).len())
                .max()
                .unwrap_or(0)
                .max(col.len())
        })
        .collect();

    let header = columns
        .iter()
        .zip(&widths)
        .map(|(col, width)| format!("{:<width$}", col, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header.bold());

    for record in records {
        let row = columns
            .iter()
            .zip(&widths)
            .map(|(col, width)| format!("{:<width$}", cell_text(record.0.get(col)), width = *width))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", row);
    }
}

/// Print one inventory table: item, section-specific category column, stock,
/// price and the derived stock status.
pub fn print_inventory(section: Section, items: &[InventoryItem]) {
    if items.is_empty() {
        println!("{}", "No items".dimmed());
        return;
    }

    let item_w = items
        .iter()
        .map(|item| item.item.len())
        .max()
        .unwrap_or(0)
        .max("Item".len());
    let category_w = items
        .iter()
        .map(|item| item.category.len())
        .max()
        .unwrap_or(0)
        .max(section.category_label().len());

    println!(
        "{}",
        format!(
            "{:<item_w$}  {:<category_w$}  {:>5}  {:>8}  Status",
            "Item",
            section.category_label(),
            "Stock",
            "Price",
        )
        .bold()
    );

    for item in items {
        println!(
            "{:<item_w$}  {:<category_w$}  {:>5}  {:>8}  {} {}",
            item.item,
            item.category,
            item.stock,
            format!("${:.2}", item.price),
            item.status().render(),
            format!("({})", item.id).dimmed(),
        );
    }
}

/// Table-cell text for a scalar value: strings unquoted, missing and null
/// cells empty.
fn cell_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Print a month grid starting at `first_day` (always the 1st). Day numbers
/// carrying events are colored by their highest importance; the events
/// themselves are listed below the grid.
pub fn print_month(first_day: NaiveDate, events: &[CalendarEvent], drilled_down: bool) {
    let year = first_day.year();
    let month0 = first_day.month0();

    println!("{}", format!("{} {}", month_name(month0), year).bold());
    if drilled_down {
        println!("{}", "(focused from year view; use --view year to go back)".dimmed());
    }
    println!("{}", "Su Mo Tu We Th Fr Sa".dimmed());

    let month_events = events_in_month(events, year, month0);

    let mut line = String::new();
    for _ in 0..first_day.weekday().num_days_from_sunday() {
        line.push_str("   ");
    }

    let mut day = first_day;
    while day.month0() == month0 {
        line.push_str(&day_cell(day, &month_events));
        line.push(' ');

        if day.weekday() == Weekday::Sat {
            println!("{}", line.trim_end());
            line.clear();
        }

        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    if !line.trim().is_empty() {
        println!("{}", line.trim_end());
    }

    if !month_events.is_empty() {
        println!();
        for event in month_events {
            println!("  {}", event.render());
        }
    }
}

fn day_cell(day: NaiveDate, month_events: &[&CalendarEvent]) -> String {
    let cell = format!("{:>2}", day.day());

    let highest = month_events
        .iter()
        .filter(|event| event.date_naive() == Some(day))
        .map(|event| event.importance)
        .max();

    match highest {
        Some(Importance::High) => cell.red().to_string(),
        Some(Importance::Medium) => cell.yellow().to_string(),
        Some(Importance::Low) => cell.green().to_string(),
        None => cell,
    }
}

/// Print the week containing `date`, one day per section, Sunday first.
pub fn print_week(date: NaiveDate, events: &[CalendarEvent]) {
    let sunday = date - Duration::days(date.weekday().num_days_from_sunday() as i64);

    for offset in 0..7 {
        let day = sunday + Duration::days(offset);
        if offset > 0 {
            println!();
        }
        println!("{}", day.format("%a %b %-d").to_string().bold());

        let day_events: Vec<&CalendarEvent> = events
            .iter()
            .filter(|event| event.date_naive() == Some(day))
            .collect();

        if day_events.is_empty() {
            println!("  {}", "-".dimmed());
        }
        for event in day_events {
            println!("  {}", event.render());
        }
    }
}

/// Print the year overview: one cell per month with its event count and
/// events, matching the year-view month-cell filter.
pub fn print_year(year: i32, events: &[CalendarEvent]) {
    println!("{}", year.bold());

    for month0 in 0..12 {
        let cell = events_in_month(events, year, month0);
        let count = format!("({} {})", cell.len(), pluralize("event", cell.len()));
        println!("{:<10} {}", month_name(month0), count.dimmed());

        for event in cell {
            println!("  {}", event.render());
        }
    }
}

fn month_name(month0: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    NAMES[(month0 as usize).min(11)]
}

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 {
        word
    } else {
        match word {
            "event" => "events",
            _ => word,
        }
    }
}
