use crate::error::Result;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Row, Sqlite};
use std::path::Path;
use std::time::Duration;

/// Cached star counts are re-fetched after this many days.
const FRESHNESS_DAYS: i64 = 7;

/// Persisted record for one repository key.
///
/// A non-200 status means the repository answered with an error when it was
/// last fetched (renamed, deleted, rate-limited); `stars` is absent then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub stars: Option<i64>,
    pub fetched_at: DateTime<Utc>,
    pub status: u16,
}

/// Durable star-count cache backed by a local SQLite file.
///
/// A single pooled connection serializes interleaved reads and writes from
/// the concurrent fetch tasks; every write is one atomic upsert.
pub struct StarCache {
    pool: Pool<Sqlite>,
}

impl StarCache {
    /// Open the cache database, creating the file and schema if absent.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let opts = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opts)
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS star_cache \
             (repo TEXT PRIMARY KEY, stars INTEGER, timestamp DATETIME NOT NULL, status INTEGER NOT NULL)",
        )
        .execute(&pool)
        .await?;

        Ok(StarCache { pool })
    }

    /// Return the cached entry for a key, or `None` when the key is absent
    /// or its entry has aged past the freshness window.
    pub async fn lookup(&self, key: &str) -> Result<Option<CacheEntry>> {
        let row = sqlx::query("SELECT stars, timestamp, status FROM star_cache WHERE repo = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let fetched_at: DateTime<Utc> = row.try_get("timestamp")?;
        if !is_fresh(fetched_at, Utc::now()) {
            return Ok(None);
        }

        let stars: Option<i64> = row.try_get("stars")?;
        let status: i64 = row.try_get("status")?;

        Ok(Some(CacheEntry {
            stars,
            fetched_at,
            status: status as u16,
        }))
    }

    /// Upsert the entry for a key, stamping the current time. Any prior
    /// entry is replaced; no history is retained.
    pub async fn store(&self, key: &str, stars: Option<i64>, status: u16) -> Result<()> {
        sqlx::query(
            "INSERT OR REPLACE INTO star_cache (repo, stars, timestamp, status) VALUES (?, ?, ?, ?)",
        )
        .bind(key)
        .bind(stars)
        .bind(Utc::now())
        .bind(i64::from(status))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Access to the underlying pool, used by tests to inspect raw rows.
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

/// Whether an entry fetched at `fetched_at` is still usable at `now`.
pub fn is_fresh(fetched_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(fetched_at) < chrono::Duration::days(FRESHNESS_DAYS)
}
