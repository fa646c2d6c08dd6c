use serde::{Deserialize, Serialize};
use url::Url;

/// Static-asset resolution settings.
///
/// Both `items.image` and `points.image` store bare asset references
/// (e.g. `lampadas.svg`); they become absolute URLs only at serialization
/// time, by concatenating the configured base URL. The base URL is
/// deployment configuration, not part of the data model.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetsConfig {
    /// Base URL the asset references are resolved against. Must end with a
    /// trailing slash. TOML: `assets.base_url`.
    /// Default: `http://localhost:3333/uploads/`.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
}

impl AssetsConfig {
    /// Expands a stored asset reference into a fully-qualified URL.
    pub fn resolve(&self, image: &str) -> String {
        format!("{}{image}", self.base_url)
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse("http://localhost:3333/uploads/").expect("default asset base url is valid")
}
