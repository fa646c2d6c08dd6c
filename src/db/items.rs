use crate::db::models::ItemRow;
use crate::error::EcopointsError;
use sqlx::SqlitePool;

/// Full item catalog, ordered by id. No filtering or pagination.
pub async fn list_items(pool: &SqlitePool) -> Result<Vec<ItemRow>, EcopointsError> {
    let rows = sqlx::query_as::<_, ItemRow>(
        r"
    SELECT id, title, image
    FROM items
    ORDER BY id
    ",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
