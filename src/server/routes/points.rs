use crate::config::AssetsConfig;
use crate::db::{self, NewPoint, PointRow};
use crate::error::EcopointsError;
use crate::server::router::AppState;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/points",
            get(search_points_handler).post(create_point_handler),
        )
        .route("/points/{id}", get(show_point_handler))
}

/// Point as served over the wire: full row with the asset reference
/// expanded into `image_url`.
#[derive(Debug, Serialize)]
pub struct PointPayload {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
    pub image_url: String,
}

impl PointPayload {
    pub fn from_row(row: PointRow, assets: &AssetsConfig) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            whatsapp: row.whatsapp,
            latitude: row.latitude,
            longitude: row.longitude,
            city: row.city,
            uf: row.uf,
            image_url: assets.resolve(&row.image),
        }
    }
}

/// Detail response: the point plus the titles of the items it accepts.
#[derive(Debug, Serialize)]
pub struct PointDetailPayload {
    #[serde(flatten)]
    pub point: PointPayload,
    pub items: Vec<ItemTitle>,
}

#[derive(Debug, Serialize)]
pub struct ItemTitle {
    pub title: String,
}

/// Create response echoes the stored row; `image` stays a bare reference
/// here because the row was just persisted that way.
#[derive(Debug, Serialize)]
pub struct CreatedPointPayload {
    pub id: i64,
    pub image: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub uf: String,
    #[serde(default)]
    pub city: String,
    /// Comma-separated item ids, e.g. `items=1,2`.
    #[serde(default)]
    pub items: String,
}

#[derive(Debug, Deserialize)]
pub struct PointInput {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
    pub items: Vec<i64>,
}

/// Parses the comma-separated item filter, dropping entries that are not
/// integers. A malformed entry matches nothing rather than erroring, so an
/// all-malformed (or empty) filter degrades to "no results".
fn parse_item_filter(raw: &str) -> Vec<i64> {
    raw.split(',')
        .filter_map(|part| part.trim().parse::<i64>().ok())
        .collect()
}

pub(super) async fn search_points_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<PointPayload>>, EcopointsError> {
    let item_ids = parse_item_filter(&params.items);
    debug!(uf = %params.uf, city = %params.city, ?item_ids, "point search");

    let rows = db::search_points(&state.pool, &params.uf, &params.city, &item_ids).await?;
    let payload = rows
        .into_iter()
        .map(|row| PointPayload::from_row(row, &state.assets))
        .collect();
    Ok(Json(payload))
}

pub(super) async fn show_point_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PointDetailPayload>, EcopointsError> {
    let point = db::get_point(&state.pool, id)
        .await?
        .ok_or(EcopointsError::PointNotFound)?;

    // Second read, not a join: a point with zero linked items still comes
    // back, with an empty items list.
    let items = db::list_point_items(&state.pool, id).await?;

    Ok(Json(PointDetailPayload {
        point: PointPayload::from_row(point, &state.assets),
        items: items
            .into_iter()
            .map(|item| ItemTitle { title: item.title })
            .collect(),
    }))
}

pub(super) async fn create_point_handler(
    State(state): State<AppState>,
    Json(input): Json<PointInput>,
) -> Result<Json<CreatedPointPayload>, EcopointsError> {
    let new = NewPoint {
        name: input.name,
        email: input.email,
        whatsapp: input.whatsapp,
        latitude: input.latitude,
        longitude: input.longitude,
        city: input.city,
        uf: input.uf,
    };

    let point = db::create_point(&state.pool, &new, &input.items).await?;
    debug!(id = point.id, linked_items = input.items.len(), "point registered");

    Ok(Json(CreatedPointPayload {
        id: point.id,
        image: point.image,
        name: point.name,
        email: point.email,
        whatsapp: point.whatsapp,
        latitude: point.latitude,
        longitude: point.longitude,
        city: point.city,
        uf: point.uf,
    }))
}
