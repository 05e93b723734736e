use crate::schema_loader::CatalogSchema;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;

/// Schema marker every catalog document must carry.
pub const CATALOG_SCHEMA_VERSION: &str = "widget_catalog_v1";

/// Catalog bundled with the binary.
const BUILTIN_CATALOG_JSON: &str = include_str!("../../catalogs/flutter_widgets.json");

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Directory segment naming a category (`basics`, `layout`, ...).
pub struct CategoryKey(pub String);

impl CategoryKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One documented widget and its upstream API reference.
pub struct CatalogEntry {
    pub name: String,
    pub url: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// File stem of the entry's page: the lowercased name.
    pub fn file_stem(&self) -> String {
        self.name.to_lowercase()
    }

    /// File name of the entry's page inside its category directory.
    pub fn file_name(&self) -> String {
        format!("{}.md", self.file_stem())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub key: CategoryKey,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "widgets", default)]
    pub items: Vec<CatalogEntry>,
}

impl Category {
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        items: Vec<CatalogEntry>,
    ) -> Self {
        Self {
            key: CategoryKey(key.into()),
            display_name: display_name.into(),
            items,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A whole catalog document. Category order is the generation order.
pub struct WidgetCatalog {
    pub schema_version: String,
    pub categories: Vec<Category>,
}

impl WidgetCatalog {
    /// Build an in-memory catalog at the current schema version.
    pub fn from_categories(categories: Vec<Category>) -> Self {
        Self {
            schema_version: CATALOG_SCHEMA_VERSION.to_string(),
            categories,
        }
    }

    /// Total number of entries across all categories.
    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

/// Read a catalog file, check it against the bundled JSON schema and decode it.
pub fn load_catalog_from_path(path: &Path) -> Result<WidgetCatalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    parse_catalog(&raw).with_context(|| format!("parsing catalog {}", path.display()))
}

/// Decode the catalog compiled into the binary.
pub fn builtin_catalog() -> Result<WidgetCatalog> {
    parse_catalog(BUILTIN_CATALOG_JSON).context("parsing builtin catalog")
}

fn parse_catalog(raw: &str) -> Result<WidgetCatalog> {
    let value: Value = serde_json::from_str(raw).context("catalog is not valid JSON")?;
    CatalogSchema::load()?.validate(&value)?;
    serde_json::from_value(value).context("decoding catalog document")
}
