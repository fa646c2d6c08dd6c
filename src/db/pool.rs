use crate::db::schema::{SEED_ITEMS, SQLITE_INIT};
use crate::error::EcopointsError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::info;

/// Opens the SQLite pool, applies the schema, and seeds the item catalog
/// if it is empty. Foreign keys are enabled so the junction table's
/// referential integrity is store-enforced.
pub async fn connect(database_url: &str) -> Result<SqlitePool, EcopointsError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5))
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;

    apply_schema(&pool).await?;
    let seeded = seed_items(&pool).await?;

    info!(seeded, "database initialized");
    Ok(pool)
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), EcopointsError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}

/// Inserts the seed catalog when `items` is empty. Returns the number of
/// rows inserted (zero on an already-seeded database).
async fn seed_items(pool: &SqlitePool) -> Result<u64, EcopointsError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(0);
    }

    let mut inserted = 0;
    for (title, image) in SEED_ITEMS {
        sqlx::query("INSERT INTO items (title, image) VALUES (?, ?)")
            .bind(title)
            .bind(image)
            .execute(pool)
            .await?;
        inserted += 1;
    }
    Ok(inserted)
}
