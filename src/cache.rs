use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;

pub struct CacheDb {
    conn: Connection,
}

impl CacheDb {
    pub fn new() -> Result<Self> {
        let cache_dir = Self::get_cache_dir();
        std::fs::create_dir_all(&cache_dir)
            .with_context(|| format!("Failed to create cache dir {}", cache_dir.display()))?;

        Self::open(&cache_dir.join("cache.db"))
    }

    /// Open (or create) a cache database at `db_path`
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open cache {}", db_path.display()))?;

        Self::from_connection(conn)
    }

    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let mut cache = CacheDb { conn };
        cache.init_schema()?;
        Ok(cache)
    }

    fn get_cache_dir() -> PathBuf {
        match dirs::cache_dir() {
            Some(cache_dir) => cache_dir.join("leasefilter"),
            None => crate::utils::get_cache_fallback_path(),
        }
    }

    fn init_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS scroll_positions (
                route_key TEXT PRIMARY KEY,
                offset INTEGER NOT NULL
            ) WITHOUT ROWID;

            CREATE TABLE IF NOT EXISTS catalog_snapshot (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                body TEXT NOT NULL,
                fetched_at TEXT NOT NULL
            );
            ",
        )?;

        Ok(())
    }

    // Scroll positions
    pub fn get_scroll_position(&self, route_key: &str) -> Result<Option<usize>> {
        let offset: Option<i64> = self
            .conn
            .query_row(
                "SELECT offset FROM scroll_positions WHERE route_key = ?1",
                params![route_key],
                |row| row.get(0),
            )
            .optional()?;

        Ok(offset.map(|o| o.max(0) as usize))
    }

    pub fn save_scroll_positions(&self, entries: &[(String, usize)]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO scroll_positions (route_key, offset) VALUES (?1, ?2)",
            )?;
            for (route_key, offset) in entries {
                stmt.execute(params![route_key, *offset as i64])?;
            }
        }
        tx.commit()?;

        Ok(())
    }

    // Catalog snapshot
    pub fn save_catalog(&self, catalog: &Catalog, fetched_at: DateTime<Utc>) -> Result<()> {
        let body = serde_json::to_string(catalog)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO catalog_snapshot (id, body, fetched_at) VALUES (1, ?1, ?2)",
            params![body, fetched_at.to_rfc3339()],
        )?;

        Ok(())
    }

    /// Last saved catalog and its fetch time. A corrupt snapshot reads as none.
    pub fn get_catalog(&self) -> Result<Option<(Catalog, DateTime<Utc>)>> {
        let row: Option<(String, String)> = self
            .conn
            .query_row(
                "SELECT body, fetched_at FROM catalog_snapshot WHERE id = 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        let Some((body, fetched_at)) = row else {
            return Ok(None);
        };

        let catalog = match serde_json::from_str::<Catalog>(&body) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!("Discarding unreadable catalog snapshot: {}", e);
                return Ok(None);
            }
        };
        let fetched_at = match DateTime::parse_from_rfc3339(&fetched_at) {
            Ok(ts) => ts.with_timezone(&Utc),
            Err(e) => {
                tracing::warn!("Discarding catalog snapshot with bad timestamp: {}", e);
                return Ok(None);
            }
        };

        Ok(Some((catalog, fetched_at)))
    }
}
