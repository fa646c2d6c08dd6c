//! SQL DDL for initializing the database schema.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema includes:
/// - `items` table (recyclable-item categories, seeded at startup)
/// - `points` table (registered collection points)
/// - `point_items` junction ("this point accepts this item category")
pub const SQLITE_INIT: &str = r"
-- ---------------------------------------------------------------------------
-- Recyclable-item categories (read-only through the API)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    image TEXT NOT NULL -- bare asset reference, resolved at serialization
);

-- ---------------------------------------------------------------------------
-- Collection points (created via POST /points, never updated or deleted)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS points (
    id INTEGER PRIMARY KEY NOT NULL,
    image TEXT NOT NULL, -- bare asset reference, resolved at serialization
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    whatsapp TEXT NOT NULL,
    latitude REAL NOT NULL,
    longitude REAL NOT NULL,
    city TEXT NOT NULL,
    uf TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_points_city_uf ON points(city, uf);

-- ---------------------------------------------------------------------------
-- Junction: a point accepts an item category. Rows are created atomically
-- with their owning point and never independently mutated.
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS point_items (
    id INTEGER PRIMARY KEY NOT NULL,
    point_id INTEGER NOT NULL REFERENCES points(id),
    item_id INTEGER NOT NULL REFERENCES items(id)
);

CREATE INDEX IF NOT EXISTS idx_point_items_point_id ON point_items(point_id);
CREATE INDEX IF NOT EXISTS idx_point_items_item_id ON point_items(item_id);
";

/// Seed catalog applied once, when the `items` table is empty. Titles and
/// asset references match the deployed category set.
pub const SEED_ITEMS: &[(&str, &str)] = &[
    ("Lâmpadas", "lampadas.svg"),
    ("Pilhas e Baterias", "baterias.svg"),
    ("Papéis e Papelão", "papeis-papelao.svg"),
    ("Resíduos Eletrônicos", "eletronicos.svg"),
    ("Resíduos Orgânicos", "organicos.svg"),
    ("Óleo de Cozinha", "oleo.svg"),
];
