//! SQLite-backed inventory store.
//! Used by: handlers::inventory, handlers::database, health, state.

use std::sync::Mutex;
use std::time::Instant;

use rusqlite::{Connection, OptionalExtension};
use serde::Serialize;

use crate::error::{lock_err, Result};

// Deliberately absent from the schema; fault-injection queries target it.
const MISSING_TABLE: &str = "inventory_archive";

const SEED: &[(&str, i64)] = &[("widget", 12), ("gadget", 4), ("sprocket", 31)];

pub struct InventoryStore {
    conn: Mutex<Connection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
}

impl InventoryStore {
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS inventory (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                quantity INTEGER NOT NULL
            )",
        )?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.seed()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::open(":memory:")
    }

    fn seed(&self) -> Result<()> {
        let conn = self.conn.lock().map_err(lock_err("inventory"))?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM inventory", [], |row| row.get(0))?;
        if count > 0 {
            return Ok(());
        }
        for (name, quantity) in SEED {
            conn.execute(
                "INSERT INTO inventory (name, quantity) VALUES (?1, ?2)",
                (name, quantity),
            )?;
        }
        tracing::info!(rows = SEED.len(), "seeded inventory");
        Ok(())
    }

    pub fn list(&self) -> Result<Vec<InventoryItem>> {
        let conn = self.conn.lock().map_err(lock_err("inventory"))?;
        let mut stmt = conn.prepare("SELECT id, name, quantity FROM inventory ORDER BY id")?;
        let items = stmt
            .query_map([], |row| {
                Ok(InventoryItem {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    quantity: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(items)
    }

    pub fn get(&self, id: i64) -> Result<Option<InventoryItem>> {
        let conn = self.conn.lock().map_err(lock_err("inventory"))?;
        let item = conn
            .query_row(
                "SELECT id, name, quantity FROM inventory WHERE id = ?1",
                [id],
                |row| {
                    Ok(InventoryItem {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        quantity: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(item)
    }

    /// Issues a query against a table that does not exist. Always fails.
    pub fn invalid_query(&self) -> Result<()> {
        let conn = self.conn.lock().map_err(lock_err("inventory"))?;
        let sql = format!("SELECT id FROM {} LIMIT 1", MISSING_TABLE);
        conn.query_row(&sql, [], |row| row.get::<_, i64>(0))?;
        Ok(())
    }

    /// Round-trips `SELECT 1` and returns the elapsed time in microseconds.
    pub fn ping(&self) -> Result<u64> {
        let start = Instant::now();
        let conn = self.conn.lock().map_err(lock_err("inventory"))?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX))
    }
}
