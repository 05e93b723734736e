pub mod alphabetical;
pub mod catalog;
pub mod generator;
pub mod render;
mod schema_loader;

pub use catalog::{
    CatalogEntry, CatalogIndex, Category, CategoryKey, WidgetCatalog, load_catalog_from_path,
};
pub use generator::{StubGenerator, WriteOutcome, WritePolicy, write_document};

use anyhow::{Context, Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

const SITE_SENTINEL: &str = "docs/.vitepress";

/// Output directory relative to the site root.
pub const DEFAULT_OUTPUT_DIR: &str = "docs/widgets";

/// Env var pointing at the documentation site checkout.
pub const ENV_SITE_ROOT: &str = "WIDGET_DOCS_ROOT";

fn is_site_root(candidate: &Path) -> bool {
    candidate.join(SITE_SENTINEL).is_dir()
}

fn site_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_site_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_site_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the documentation site: env hint, then the current directory and
/// the executable's directory (searching upwards), then the build-time hint.
pub fn find_site_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var(ENV_SITE_ROOT) {
        if let Some(root) = site_root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Ok(cwd) = env::current_dir() {
        if let Some(root) = search_upwards(&cwd) {
            return Ok(root);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(root) = search_upwards(exe_dir) {
                return Ok(root);
            }
        }
    }

    if let Some(hint) = option_env!("WIDGET_DOCS_ROOT_HINT") {
        if let Some(root) = site_root_from_hint(hint) {
            return Ok(root);
        }
    }

    bail!(
        "Unable to locate the documentation site (no {SITE_SENTINEL} found). Set {ENV_SITE_ROOT} or pass --output."
    );
}

pub fn default_output_root(site_root: &Path) -> PathBuf {
    site_root.join(DEFAULT_OUTPUT_DIR)
}

/// Explicit output root when given, otherwise `<site root>/docs/widgets`.
pub fn resolve_output_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let site_root = find_site_root()?;
    Ok(default_output_root(&site_root))
}

/// Catalog file when given, otherwise the builtin catalog.
pub fn load_catalog(explicit: Option<&Path>) -> Result<CatalogIndex> {
    match explicit {
        Some(path) => CatalogIndex::load(path),
        None => CatalogIndex::builtin().context("loading builtin catalog"),
    }
}
