mod client;
mod commands;
mod config;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "schedboard")]
#[command(about = "Browse your schedule and manage calendar events from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List calendar events, grouped by day
    Events,
    /// Add a calendar event on a date
    Add {
        /// Date the event falls on (YYYY-MM-DD)
        date: String,

        /// Event title
        #[arg(short, long)]
        title: String,

        /// Start time (HH:MM)
        #[arg(long)]
        time: Option<String>,

        /// End time (HH:MM)
        #[arg(long)]
        end_time: Option<String>,

        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,

        /// low, medium or high
        #[arg(short, long, default_value = "medium")]
        importance: String,
    },
    /// Update an existing calendar event
    Update {
        /// Id of the event to update
        id: String,

        /// New event title
        #[arg(short, long)]
        title: String,

        /// New date (YYYY-MM-DD); defaults to the event's current date
        #[arg(long)]
        date: Option<String>,

        /// New start time (HH:MM)
        #[arg(long)]
        time: Option<String>,

        /// New end time (HH:MM)
        #[arg(long)]
        end_time: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// low, medium or high
        #[arg(short, long)]
        importance: Option<String>,
    },
    /// Remove a calendar event
    Remove {
        /// Id of the event to remove
        id: String,
    },
    /// Fetch and show the remote schedule for the configured role
    Schedule {
        /// tabular or calendar
        #[arg(long, default_value = "tabular")]
        view: String,

        /// Override the configured schedule endpoint
        #[arg(long)]
        endpoint: Option<String>,

        /// Override the configured role code (1 = admin, 2 = instructor)
        #[arg(long)]
        role: Option<u8>,
    },
    /// Manage the merchandise and stationery inventory
    Inventory {
        #[command(subcommand)]
        command: InventoryCommands,
    },
    /// Render your calendar events (month, week or year view)
    Calendar {
        /// month, week or year
        #[arg(long, default_value = "month")]
        view: String,

        /// Year to display (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Drill into a month (1-12), like selecting a cell in year view
        #[arg(long)]
        month: Option<u32>,
    },
}

#[derive(Subcommand)]
enum InventoryCommands {
    /// List the items in a section with their stock status
    List {
        /// merchandise or stationery
        #[arg(default_value = "merchandise")]
        section: String,
    },
    /// Add an item to a section
    Add {
        /// merchandise or stationery
        section: String,

        /// Item name
        #[arg(short, long)]
        item: String,

        /// Category (merchandise) or type (stationery)
        #[arg(short, long)]
        category: String,

        /// Units in stock
        #[arg(short, long)]
        stock: u32,

        /// Unit price
        #[arg(short, long)]
        price: f64,
    },
    /// Update an existing item
    Update {
        /// merchandise or stationery
        section: String,

        /// Id of the item to update
        id: String,

        /// New item name; defaults to the current one
        #[arg(long)]
        item: Option<String>,

        /// New category or type
        #[arg(long)]
        category: Option<String>,

        /// New stock level
        #[arg(long)]
        stock: Option<u32>,

        /// New unit price
        #[arg(long)]
        price: Option<f64>,
    },
    /// Remove an item from a section
    Remove {
        /// merchandise or stationery
        section: String,

        /// Id of the item to remove
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Events => commands::events::run(),
        Commands::Add {
            date,
            title,
            time,
            end_time,
            description,
            importance,
        } => commands::add::run(date, title, time, end_time, description, importance),
        Commands::Update {
            id,
            title,
            date,
            time,
            end_time,
            description,
            importance,
        } => commands::update::run(id, title, date, time, end_time, description, importance),
        Commands::Remove { id } => commands::remove::run(id),
        Commands::Schedule { view, endpoint, role } => {
            commands::schedule::run(view, endpoint, role).await
        }
        Commands::Inventory { command } => match command {
            InventoryCommands::List { section } => commands::inventory::list(section),
            InventoryCommands::Add {
                section,
                item,
                category,
                stock,
                price,
            } => commands::inventory::add(section, item, category, stock, price),
            InventoryCommands::Update {
                section,
                id,
                item,
                category,
                stock,
                price,
            } => commands::inventory::update(section, id, item, category, stock, price),
            InventoryCommands::Remove { section, id } => commands::inventory::remove(section, id),
        },
        Commands::Calendar { view, year, month } => commands::calendar::run(view, year, month),
    }
}
