//! Widget catalog wiring.
//!
//! The catalog is a JSON document (`catalogs/flutter_widgets.json` is compiled
//! into the binary) listing categories in generation order, each with the
//! widgets it documents. Types here mirror the document fields; callers use
//! `CatalogIndex` to get a validated view before generating anything.

pub mod index;
pub mod model;

pub use index::CatalogIndex;
pub use model::{
    CATALOG_SCHEMA_VERSION, CatalogEntry, Category, CategoryKey, WidgetCatalog, builtin_catalog,
};

pub use model::load_catalog_from_path;
