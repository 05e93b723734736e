//! Materializes the widget documentation tree on disk.
//!
//! Two write policies coexist and must stay distinct: index pages are
//! regenerated on every run, while widget pages are only created when missing
//! so hand-written content survives. Any filesystem error aborts the run; files
//! written before the failure are left in place.

use crate::catalog::{CatalogEntry, CatalogIndex, Category};
use crate::render;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of category and global index pages.
pub const INDEX_FILE: &str = "index.md";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WritePolicy {
    /// Replace whatever is on disk.
    Overwrite,
    /// Leave an existing file untouched.
    SkipExisting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Skipped,
}

/// Write `contents` to `path` under `policy`.
pub fn write_document(path: &Path, contents: &str, policy: WritePolicy) -> Result<WriteOutcome> {
    match policy {
        WritePolicy::Overwrite => {
            fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
            Ok(WriteOutcome::Written)
        }
        WritePolicy::SkipExisting => {
            let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
                Ok(file) => file,
                Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                    return Ok(WriteOutcome::Skipped);
                }
                Err(err) => {
                    return Err(err).with_context(|| format!("creating {}", path.display()));
                }
            };
            file.write_all(contents.as_bytes())
                .with_context(|| format!("writing {}", path.display()))?;
            Ok(WriteOutcome::Written)
        }
    }
}

#[derive(Clone, Debug)]
pub struct StubGenerator {
    output_root: PathBuf,
    dry_run: bool,
}

impl StubGenerator {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            dry_run: false,
        }
    }

    /// Report what would be written without touching the filesystem.
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    pub fn category_dir(&self, category: &Category) -> PathBuf {
        self.output_root.join(category.key.as_str())
    }

    pub fn item_path(&self, category: &Category, entry: &CatalogEntry) -> PathBuf {
        self.category_dir(category).join(entry.file_name())
    }

    /// Generate the whole tree and return the number of widget pages written.
    ///
    /// In dry-run mode the count is the number of pages that would be written.
    pub fn run(&self, catalog: &CatalogIndex) -> Result<usize> {
        info!(
            output_root = %self.output_root.display(),
            dry_run = self.dry_run,
            "generating widget docs"
        );

        let mut written = 0;
        for category in catalog.categories() {
            written += self.generate_category(category)?;
        }

        let index_path = self.output_root.join(INDEX_FILE);
        let main_index = render::main_index(catalog.categories());
        self.emit(&index_path, &main_index, WritePolicy::Overwrite)?;
        info!(path = %index_path.display(), "wrote global index");

        Ok(written)
    }

    fn generate_category(&self, category: &Category) -> Result<usize> {
        let category_dir = self.category_dir(category);
        info!(
            category = %category.key,
            name = %category.display_name,
            "processing category"
        );

        if !self.dry_run {
            fs::create_dir_all(&category_dir)
                .with_context(|| format!("creating directory {}", category_dir.display()))?;
        }

        let index_path = category_dir.join(INDEX_FILE);
        let category_index = render::category_index(category);
        self.emit(&index_path, &category_index, WritePolicy::Overwrite)?;
        debug!(category = %category.key, "wrote category index");

        let mut written = 0;
        for entry in &category.items {
            let item_path = self.item_path(category, entry);
            let doc = render::widget_doc(entry, category);
            match self.emit(&item_path, &doc, WritePolicy::SkipExisting)? {
                WriteOutcome::Written => {
                    let verb = if self.dry_run { "would write" } else { "wrote" };
                    info!(category = %category.key, file = %entry.file_name(), "{verb} stub");
                    written += 1;
                }
                WriteOutcome::Skipped => {
                    info!(
                        category = %category.key,
                        file = %entry.file_name(),
                        "skipping existing stub"
                    );
                }
            }
        }
        Ok(written)
    }

    fn emit(&self, path: &Path, contents: &str, policy: WritePolicy) -> Result<WriteOutcome> {
        if !self.dry_run {
            return write_document(path, contents, policy);
        }
        match policy {
            WritePolicy::SkipExisting if path.exists() => Ok(WriteOutcome::Skipped),
            _ => Ok(WriteOutcome::Written),
        }
    }
}

/// Generate the documentation tree for `catalog` under `output_root`.
pub fn run(catalog: &CatalogIndex, output_root: &Path) -> Result<usize> {
    StubGenerator::new(output_root).run(catalog)
}
