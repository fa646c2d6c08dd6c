use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A recyclable-item category. Seeded at startup, read-only through the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct ItemRow {
    pub id: i64,
    pub title: String,
    /// Bare asset reference (e.g. `lampadas.svg`), not a URL.
    pub image: String,
}

/// A registered collection point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct PointRow {
    pub id: i64,
    /// Bare asset reference; always the placeholder at creation.
    pub image: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
}

/// Input for the point registration transaction. `image` is not accepted
/// from clients; the store applies the default-asset policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPoint {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
}
