use crate::config::AssetsConfig;
use crate::db::{self, ItemRow};
use crate::error::EcopointsError;
use crate::server::router::AppState;

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

pub fn router() -> Router<AppState> {
    Router::new().route("/items", get(list_items_handler))
}

/// Item as served over the wire: the stored asset reference is expanded
/// into a fully-qualified `image_url`.
#[derive(Debug, Serialize)]
pub struct ItemPayload {
    pub id: i64,
    pub title: String,
    pub image_url: String,
}

impl ItemPayload {
    pub fn from_row(row: ItemRow, assets: &AssetsConfig) -> Self {
        Self {
            id: row.id,
            title: row.title,
            image_url: assets.resolve(&row.image),
        }
    }
}

pub(super) async fn list_items_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItemPayload>>, EcopointsError> {
    let rows = db::list_items(&state.pool).await?;
    let payload = rows
        .into_iter()
        .map(|row| ItemPayload::from_row(row, &state.assets))
        .collect();
    Ok(Json(payload))
}
