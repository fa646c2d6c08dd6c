use crate::db::models::{ItemRow, NewPoint, PointRow};
use crate::error::EcopointsError;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Asset reference stored for every new point. Clients never supply
/// imagery; this is the default-asset policy, not a fallback.
pub const DEFAULT_POINT_IMAGE: &str = "collect-point.jpg";

/// Filtered point search: one store-level query joining `points` to
/// `point_items`, restricted to the requested item set and exact `city`/`uf`
/// match, projecting distinct points.
///
/// The join is a membership test ("does this point accept at least one of
/// the requested items"), so DISTINCT is load-bearing: a point accepting
/// several of the requested items must appear once.
///
/// `city`/`uf` matching is case- and accent-sensitive on purpose; stored
/// casing is whatever registration received, and no canonicalization against
/// an external geography source happens here.
pub async fn search_points(
    pool: &SqlitePool,
    uf: &str,
    city: &str,
    item_ids: &[i64],
) -> Result<Vec<PointRow>, EcopointsError> {
    if item_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
        "SELECT DISTINCT points.id, points.image, points.name, points.email, \
         points.whatsapp, points.latitude, points.longitude, points.city, points.uf \
         FROM points \
         JOIN point_items ON points.id = point_items.point_id \
         WHERE point_items.item_id IN (",
    );
    let mut ids = qb.separated(", ");
    for id in item_ids {
        ids.push_bind(id);
    }
    ids.push_unseparated(")");
    qb.push(" AND points.city = ").push_bind(city);
    qb.push(" AND points.uf = ").push_bind(uf);

    let rows = qb.build_query_as::<PointRow>().fetch_all(pool).await?;
    Ok(rows)
}

/// Point lookup by id. `None` when absent; the handler maps that to 404.
pub async fn get_point(pool: &SqlitePool, id: i64) -> Result<Option<PointRow>, EcopointsError> {
    let row = sqlx::query_as::<_, PointRow>(
        r"
    SELECT id, image, name, email, whatsapp, latitude, longitude, city, uf
    FROM points
    WHERE id = ?
    ",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Items accepted by a point, joined through the junction. A point with no
/// linked items yields an empty list, not an error.
pub async fn list_point_items(
    pool: &SqlitePool,
    point_id: i64,
) -> Result<Vec<ItemRow>, EcopointsError> {
    let rows = sqlx::query_as::<_, ItemRow>(
        r"
    SELECT items.id, items.title, items.image
    FROM items
    JOIN point_items ON point_items.item_id = items.id
    WHERE point_items.point_id = ?
    ORDER BY items.id
    ",
    )
    .bind(point_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Registers a point and its item links as a single atomic unit.
///
/// Protocol: begin transaction, insert the point row (placeholder image),
/// bulk-insert one junction row per requested item, commit. Any failure
/// (unknown item id tripping the foreign key, disconnect, constraint
/// violation) rolls the whole transaction back; no partial point is ever
/// observable. Returns the stored row including the generated id.
pub async fn create_point(
    pool: &SqlitePool,
    new: &NewPoint,
    item_ids: &[i64],
) -> Result<PointRow, EcopointsError> {
    let mut tx = pool.begin().await.map_err(EcopointsError::WriteFailed)?;

    let point = sqlx::query_as::<_, PointRow>(
        r"
    INSERT INTO points (image, name, email, whatsapp, latitude, longitude, city, uf)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
    RETURNING id, image, name, email, whatsapp, latitude, longitude, city, uf
    ",
    )
    .bind(DEFAULT_POINT_IMAGE)
    .bind(&new.name)
    .bind(&new.email)
    .bind(&new.whatsapp)
    .bind(new.latitude)
    .bind(new.longitude)
    .bind(&new.city)
    .bind(&new.uf)
    .fetch_one(&mut *tx)
    .await
    .map_err(EcopointsError::WriteFailed)?;

    // Having at least one item is the caller's responsibility, not a data
    // layer rule; an empty list creates a point with no links.
    if !item_ids.is_empty() {
        let mut qb: QueryBuilder<Sqlite> =
            QueryBuilder::new("INSERT INTO point_items (point_id, item_id) ");
        qb.push_values(item_ids, |mut row, item_id| {
            row.push_bind(point.id).push_bind(item_id);
        });
        qb.build()
            .execute(&mut *tx)
            .await
            .map_err(EcopointsError::WriteFailed)?;
    }

    tx.commit().await.map_err(EcopointsError::WriteFailed)?;
    Ok(point)
}
