//! Validated view of a widget catalog.
//!
//! The index rejects anything that would make generation ambiguous or escape
//! the output root: two categories writing into the same directory, keys or
//! entry names that are not safe path segments, an entry whose page would be
//! the category index, or two entries in one category mapping to the same page
//! file. Generation only ever sees catalogs that passed these checks.

use crate::catalog::{
    CATALOG_SCHEMA_VERSION, CatalogEntry, Category, CategoryKey, WidgetCatalog, builtin_catalog,
    load_catalog_from_path,
};
use crate::generator::INDEX_FILE;
use anyhow::{Context, Result, bail};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

const UNSAFE_NAME_CHARS: &[char] = &['/', '\\', '\0'];

#[derive(Debug)]
/// Catalog plus a lookup from category key to declaration position.
pub struct CatalogIndex {
    catalog: WidgetCatalog,
    by_key: BTreeMap<CategoryKey, usize>,
}

impl CatalogIndex {
    /// Load and validate a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let catalog =
            load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        Self::from_catalog(catalog).with_context(|| format!("validating {}", path.display()))
    }

    /// Load and validate the catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_catalog(builtin_catalog()?).context("validating builtin catalog")
    }

    pub fn from_catalog(catalog: WidgetCatalog) -> Result<Self> {
        validate_schema_version(&catalog.schema_version)?;
        let by_key = build_index(&catalog)?;
        Ok(Self { catalog, by_key })
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> &[Category] {
        &self.catalog.categories
    }

    pub fn category(&self, key: &CategoryKey) -> Option<&Category> {
        self.by_key
            .get(key)
            .and_then(|&position| self.catalog.categories.get(position))
    }

    pub fn entry_count(&self) -> usize {
        self.catalog.entry_count()
    }
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version != CATALOG_SCHEMA_VERSION {
        bail!(
            "schema_version '{}' not supported, expected {}",
            schema_version,
            CATALOG_SCHEMA_VERSION
        );
    }
    Ok(())
}

fn validate_entry_name(entry: &CatalogEntry, key: &CategoryKey) -> Result<()> {
    if entry.name.trim().is_empty() {
        bail!("category {} contains an entry with no name", key);
    }

    let stem = entry.file_stem();
    if stem.trim().is_empty() || stem.contains(UNSAFE_NAME_CHARS) || stem.contains("..") {
        bail!(
            "entry name {:?} in category {} is not a safe file name",
            entry.name,
            key
        );
    }

    if entry.file_name() == INDEX_FILE {
        bail!(
            "entry {} in category {} would overwrite the category {}",
            entry.name,
            key,
            INDEX_FILE
        );
    }

    Ok(())
}

fn validate_category_key(key: &CategoryKey) -> Result<()> {
    if key.0.is_empty() {
        bail!("category key must not be empty");
    }

    if !key
        .0
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-'))
    {
        bail!("category key must match ^[a-z0-9_-]+$, got {}", key.0);
    }

    Ok(())
}

fn build_index(catalog: &WidgetCatalog) -> Result<BTreeMap<CategoryKey, usize>> {
    if catalog.categories.is_empty() {
        bail!("catalog contains no categories");
    }

    let mut map = BTreeMap::new();
    for (position, category) in catalog.categories.iter().enumerate() {
        validate_category_key(&category.key)?;
        if map.contains_key(&category.key) {
            bail!("duplicate category key {}", category.key);
        }
        if category.display_name.trim().is_empty() {
            bail!("category {} has an empty name", category.key);
        }

        let mut file_names: BTreeSet<String> = BTreeSet::new();
        for entry in &category.items {
            validate_entry_name(entry, &category.key)?;
            if entry.url.trim().is_empty() {
                bail!(
                    "entry {} in category {} has no url",
                    entry.name,
                    category.key
                );
            }
            if !file_names.insert(entry.file_name()) {
                bail!(
                    "entry {} in category {} collides with another entry on {}",
                    entry.name,
                    category.key,
                    entry.file_name()
                );
            }
        }

        map.insert(category.key.clone(), position);
    }
    Ok(map)
}
