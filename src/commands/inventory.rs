//! Manage the merchandise and stationery item tables.

use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;
use schedboard_core::{InventoryStore, ItemDraft, JsonInventoryStorage, Section};

use crate::config::Config;
use crate::render::print_inventory;

/// Open the inventory store at the configured (or default) snapshot path.
fn open_store(config: &Config) -> Result<InventoryStore<JsonInventoryStorage>> {
    let path = match &config.inventory_path {
        Some(path) => path.clone(),
        None => JsonInventoryStorage::default_path()?,
    };

    InventoryStore::open(JsonInventoryStorage::new(path)).context("Failed to open inventory store")
}

fn parse_section(value: &str) -> Result<Section> {
    match value {
        "merchandise" => Ok(Section::Merchandise),
        "stationery" => Ok(Section::Stationery),
        other => bail!("Unknown section '{}'. Use merchandise or stationery", other),
    }
}

pub fn list(section: String) -> Result<()> {
    let section = parse_section(&section)?;
    let config = Config::load()?;
    let store = open_store(&config)?;

    print_inventory(section, store.items(section));
    Ok(())
}

pub fn add(section: String, item: String, category: String, stock: u32, price: f64) -> Result<()> {
    let section = parse_section(&section)?;
    let config = Config::load()?;
    let mut store = open_store(&config)?;

    let draft = ItemDraft {
        item,
        category,
        stock,
        price,
    };
    store.add(section, &draft)?;
    println!("{} {}", "Added".green(), draft.item.bold());

    Ok(())
}

pub fn update(
    section: String,
    id: String,
    item: Option<String>,
    category: Option<String>,
    stock: Option<u32>,
    price: Option<f64>,
) -> Result<()> {
    let section = parse_section(&section)?;
    let config = Config::load()?;
    let mut store = open_store(&config)?;

    let Some(existing) = store.get(section, &id).cloned() else {
        println!("{}", format!("No item with id {}", id).dimmed());
        return Ok(());
    };

    // Unspecified fields keep their current values, like an edit dialog
    // pre-filled from the item.
    let draft = ItemDraft {
        item: item.unwrap_or(existing.item),
        category: category.unwrap_or(existing.category),
        stock: stock.unwrap_or(existing.stock),
        price: price.unwrap_or(existing.price),
    };

    if store.update(section, &id, &draft)? {
        println!("{} {}", "Updated".yellow(), draft.item.bold());
    }

    Ok(())
}

pub fn remove(section: String, id: String) -> Result<()> {
    let section = parse_section(&section)?;
    let config = Config::load()?;
    let mut store = open_store(&config)?;

    let removed = store.get(section, &id).map(|item| item.item.clone());
    store.remove(section, &id)?;

    match removed {
        Some(name) => println!("{} {}", "Removed".red(), name.bold()),
        None => println!("{}", format!("No item with id {}", id).dimmed()),
    }

    Ok(())
}
