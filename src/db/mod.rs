//! Database module: models, schema, and store operations.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL and the item seed catalog (SQLite-first)
//! - `pool.rs`: pool construction, schema apply, seeding
//! - `items.rs` / `points.rs`: stateless query and write operations over an
//!   injected pool

pub mod items;
pub mod models;
pub mod points;
pub mod pool;
pub mod schema;

pub use items::list_items;
pub use models::{ItemRow, NewPoint, PointRow};
pub use points::{DEFAULT_POINT_IMAGE, create_point, get_point, list_point_items, search_points};
pub use pool::connect;
pub use schema::{SEED_ITEMS, SQLITE_INIT};
