#![allow(dead_code)]

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use widgetdocs::{CatalogEntry, CatalogIndex, Category, WidgetCatalog};

/// Build a validated catalog from `(key, name, [(widget, url)])` triples.
pub fn sample_catalog(categories: &[(&str, &str, &[(&str, &str)])]) -> Result<CatalogIndex> {
    let categories = categories
        .iter()
        .map(|(key, name, widgets)| {
            let items = widgets
                .iter()
                .map(|(widget, url)| CatalogEntry::new(*widget, *url))
                .collect();
            Category::new(*key, *name, items)
        })
        .collect();
    CatalogIndex::from_catalog(WidgetCatalog::from_categories(categories))
        .context("failed to build sample catalog")
}

/// Small two-category catalog shared by the generator tests.
pub fn fixture_catalog() -> Result<CatalogIndex> {
    sample_catalog(&[
        (
            "basics",
            "基础组件",
            &[
                ("Text", "https://api.flutter.dev/flutter/widgets/Text-class.html"),
                ("SizedBox", "https://api.flutter.dev/flutter/widgets/SizedBox-class.html"),
            ],
        ),
        (
            "input",
            "输入组件",
            &[
                ("TextField", "https://api.flutter.dev/flutter/material/TextField-class.html"),
                ("Chip", "https://api.flutter.dev/flutter/material/Chip-class.html"),
            ],
        ),
    ])
}

pub fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Every file under `root`, keyed by path relative to `root`.
pub fn snapshot_tree(root: &Path) -> Result<BTreeMap<PathBuf, String>> {
    let mut files = BTreeMap::new();
    for entry in WalkDir::new(root) {
        let entry = entry.with_context(|| format!("walking {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(root)?.to_path_buf();
        files.insert(relative, read(entry.path())?);
    }
    Ok(files)
}

pub fn generate_widgets_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_generate-widgets"))
}
