//! Inventory item tables (merchandise and stationery).
//!
//! A second CRUD domain alongside the calendar events: two item tables with
//! numeric stock and price columns and a derived stock-status
//! classification, persisted with the same write-through snapshot pattern
//! as the event store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{SchedboardError, SchedboardResult};

/// Which inventory table an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Merchandise,
    Stationery,
}

impl Section {
    /// Header for the section-specific second column.
    pub fn category_label(&self) -> &'static str {
        match self {
            Section::Merchandise => "Category",
            Section::Stationery => "Type",
        }
    }
}

/// Derived stock classification, driving display color only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }
}

/// Stock above zero but below this threshold counts as low.
const LOW_STOCK_THRESHOLD: u32 = 50;

/// Classify a stock level: zero is out of stock, anything below the
/// threshold is low, everything else is in stock.
pub fn stock_status(stock: u32) -> StockStatus {
    if stock == 0 {
        StockStatus::OutOfStock
    } else if stock < LOW_STOCK_THRESHOLD {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

/// An item row in one of the inventory tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub item: String,
    /// Merchandise category or stationery type.
    pub category: String,
    pub stock: u32,
    pub price: f64,
}

impl InventoryItem {
    pub fn status(&self) -> StockStatus {
        stock_status(self.stock)
    }
}

/// The full inventory snapshot: both tables, persisted as one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub merchandise: Vec<InventoryItem>,
    pub stationery: Vec<InventoryItem>,
}

/// The rows every fresh inventory starts out with.
pub fn seed_inventory() -> Inventory {
    Inventory {
        merchandise: vec![
            seed_item("1", "T-Shirt", "Clothing", 120, 15.0),
            seed_item("2", "Mug", "Accessories", 80, 8.0),
            seed_item("3", "Cap", "Clothing", 20, 12.0),
        ],
        stationery: vec![
            seed_item("1", "Notebook", "Paper", 200, 3.0),
            seed_item("2", "Pen", "Writing", 500, 1.0),
            seed_item("3", "Eraser", "Accessories", 10, 0.5),
        ],
    }
}

fn seed_item(id: &str, item: &str, category: &str, stock: u32, price: f64) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        item: item.to_string(),
        category: category.to_string(),
        stock,
        price,
    }
}

/// Durable slot holding the full inventory snapshot.
///
/// Same contract as the event storage: `load` returns `None` when no usable
/// snapshot exists and the store falls back to the seed rows; `save`
/// overwrites the snapshot.
pub trait InventoryStorage {
    fn load(&self) -> SchedboardResult<Option<Inventory>>;
    fn save(&self, inventory: &Inventory) -> SchedboardResult<()>;
}

/// Form input for an inventory add or edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub item: String,
    pub category: String,
    pub stock: u32,
    pub price: f64,
}

/// Both editable item tables, written through to storage on every mutation.
pub struct InventoryStore<S: InventoryStorage> {
    storage: S,
    inventory: Inventory,
}

impl<S: InventoryStorage> InventoryStore<S> {
    /// Open the store, restoring the persisted snapshot or seeding fresh
    /// tables when none is usable.
    pub fn open(storage: S) -> SchedboardResult<Self> {
        let inventory = storage.load()?.unwrap_or_else(seed_inventory);
        Ok(InventoryStore { storage, inventory })
    }

    pub fn items(&self, section: Section) -> &[InventoryItem] {
        match section {
            Section::Merchandise => &self.inventory.merchandise,
            Section::Stationery => &self.inventory.stationery,
        }
    }

    pub fn get(&self, section: Section, id: &str) -> Option<&InventoryItem> {
        self.items(section).iter().find(|item| item.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn items_mut(&mut self, section: Section) -> &mut Vec<InventoryItem> {
        match section {
            Section::Merchandise => &mut self.inventory.merchandise,
            Section::Stationery => &mut self.inventory.stationery,
        }
    }

    /// Add a new row to a section, assigning it a fresh id.
    pub fn add(&mut self, section: Section, draft: &ItemDraft) -> SchedboardResult<String> {
        let row = InventoryItem {
            id: Uuid::new_v4().to_string(),
            item: draft.item.clone(),
            category: draft.category.clone(),
            stock: draft.stock,
            price: draft.price,
        };
        let id = row.id.clone();

        self.items_mut(section).push(row);
        self.storage.save(&self.inventory)?;
        Ok(id)
    }

    /// Replace the fields of the row with the given id. The id itself never
    /// changes and an unknown id is a no-op. Returns whether a row changed.
    pub fn update(
        &mut self,
        section: Section,
        id: &str,
        draft: &ItemDraft,
    ) -> SchedboardResult<bool> {
        let Some(row) = self.items_mut(section).iter_mut().find(|item| item.id == id) else {
            return Ok(false);
        };

        row.item = draft.item.clone();
        row.category = draft.category.clone();
        row.stock = draft.stock;
        row.price = draft.price;

        self.storage.save(&self.inventory)?;
        Ok(true)
    }

    /// Remove the row with the given id, if present.
    pub fn remove(&mut self, section: Section, id: &str) -> SchedboardResult<()> {
        self.items_mut(section).retain(|item| item.id != id);
        self.storage.save(&self.inventory)?;
        Ok(())
    }
}

/// One JSON file holding the full inventory snapshot.
pub struct JsonInventoryStorage {
    path: PathBuf,
}

impl JsonInventoryStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonInventoryStorage { path: path.into() }
    }

    /// Default snapshot location under the platform data directory.
    pub fn default_path() -> SchedboardResult<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| SchedboardError::Config("Could not determine data directory".into()))?;
        Ok(data_dir.join("schedboard").join("inventory.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InventoryStorage for JsonInventoryStorage {
    fn load(&self) -> SchedboardResult<Option<Inventory>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // Malformed snapshots reseed, same as the event store
        Ok(serde_json::from_str(&content).ok())
    }

    fn save(&self, inventory: &Inventory) -> SchedboardResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(inventory)
            .map_err(|e| SchedboardError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct MemoryInventoryStorage {
        snapshot: RefCell<Option<Inventory>>,
        saves: Cell<usize>,
    }

    impl MemoryInventoryStorage {
        fn snapshot(&self) -> Option<Inventory> {
            self.snapshot.borrow().clone()
        }

        fn saves(&self) -> usize {
            self.saves.get()
        }
    }

    impl InventoryStorage for MemoryInventoryStorage {
        fn load(&self) -> SchedboardResult<Option<Inventory>> {
            Ok(self.snapshot.borrow().clone())
        }

        fn save(&self, inventory: &Inventory) -> SchedboardResult<()> {
            *self.snapshot.borrow_mut() = Some(inventory.clone());
            self.saves.set(self.saves.get() + 1);
            Ok(())
        }
    }

    fn fresh_store() -> InventoryStore<MemoryInventoryStorage> {
        InventoryStore::open(MemoryInventoryStorage::default()).unwrap()
    }

    #[test]
    fn test_stock_status_thresholds() {
        assert_eq!(stock_status(0), StockStatus::OutOfStock);
        assert_eq!(stock_status(1), StockStatus::LowStock);
        assert_eq!(stock_status(49), StockStatus::LowStock);
        assert_eq!(stock_status(50), StockStatus::InStock);
        assert_eq!(stock_status(500), StockStatus::InStock);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(StockStatus::OutOfStock.label(), "Out of Stock");
        assert_eq!(StockStatus::LowStock.label(), "Low Stock");
        assert_eq!(StockStatus::InStock.label(), "In Stock");
    }

    #[test]
    fn test_open_seeds_both_tables() {
        let store = fresh_store();

        let merchandise = store.items(Section::Merchandise);
        assert_eq!(merchandise.len(), 3);
        assert_eq!(merchandise[0].item, "T-Shirt");
        assert_eq!(merchandise[0].status(), StockStatus::InStock);
        assert_eq!(merchandise[2].item, "Cap");
        assert_eq!(merchandise[2].status(), StockStatus::LowStock);

        let stationery = store.items(Section::Stationery);
        assert_eq!(stationery.len(), 3);
        assert_eq!(stationery[1].item, "Pen");
        assert_eq!(stationery[1].price, 1.0);
    }

    #[test]
    fn test_add_appends_to_the_targeted_section_only() {
        let mut store = fresh_store();

        let id = store
            .add(
                Section::Merchandise,
                &ItemDraft {
                    item: "Hoodie".to_string(),
                    category: "Clothing".to_string(),
                    stock: 0,
                    price: 35.0,
                },
            )
            .unwrap();

        assert_eq!(store.items(Section::Merchandise).len(), 4);
        assert_eq!(store.items(Section::Stationery).len(), 3);

        let row = store.get(Section::Merchandise, &id).unwrap();
        assert_eq!(row.item, "Hoodie");
        assert_eq!(row.status(), StockStatus::OutOfStock);
    }

    #[test]
    fn test_update_replaces_fields_in_place() {
        let mut store = fresh_store();

        let draft = ItemDraft {
            item: "Eraser".to_string(),
            category: "Accessories".to_string(),
            stock: 60,
            price: 0.5,
        };
        assert!(store.update(Section::Stationery, "3", &draft).unwrap());

        let row = store.get(Section::Stationery, "3").unwrap();
        assert_eq!(row.id, "3");
        assert_eq!(row.stock, 60);
        assert_eq!(row.status(), StockStatus::InStock);
        // The other rows and the other table are untouched
        assert_eq!(store.items(Section::Stationery)[0].item, "Notebook");
        assert_eq!(store.items(Section::Merchandise).len(), 3);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = fresh_store();
        let before = store.items(Section::Merchandise).to_vec();

        let draft = ItemDraft {
            item: "Ghost".to_string(),
            ..ItemDraft::default()
        };
        assert!(!store.update(Section::Merchandise, "missing", &draft).unwrap());
        assert_eq!(store.items(Section::Merchandise), before.as_slice());
        assert_eq!(store.storage().saves(), 0);
    }

    #[test]
    fn test_remove_filters_the_row_out() {
        let mut store = fresh_store();

        store.remove(Section::Merchandise, "2").unwrap();

        let items = store.items(Section::Merchandise);
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.item != "Mug"));
    }

    #[test]
    fn test_every_mutation_writes_through() {
        let mut store = fresh_store();

        let id = store
            .add(
                Section::Stationery,
                &ItemDraft {
                    item: "Ruler".to_string(),
                    category: "Drawing".to_string(),
                    stock: 30,
                    price: 2.0,
                },
            )
            .unwrap();
        assert_eq!(store.storage().saves(), 1);

        let draft = ItemDraft {
            item: "Ruler".to_string(),
            category: "Drawing".to_string(),
            stock: 25,
            price: 2.0,
        };
        store.update(Section::Stationery, &id, &draft).unwrap();
        assert_eq!(store.storage().saves(), 2);

        store.remove(Section::Stationery, &id).unwrap();
        assert_eq!(store.storage().saves(), 3);

        let snapshot = store.storage().snapshot().unwrap();
        assert_eq!(snapshot.stationery, store.items(Section::Stationery));
    }

    #[test]
    fn test_json_snapshot_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonInventoryStorage::new(dir.path().join("inventory.json"));

        let inventory = seed_inventory();
        storage.save(&inventory).unwrap();
        assert_eq!(storage.load().unwrap(), Some(inventory));
    }

    #[test]
    fn test_missing_or_corrupt_json_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();

        let storage = JsonInventoryStorage::new(dir.path().join("inventory.json"));
        assert!(storage.load().unwrap().is_none());

        std::fs::write(storage.path(), "{not json").unwrap();
        assert!(storage.load().unwrap().is_none());
    }
}
