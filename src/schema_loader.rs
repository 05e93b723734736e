//! JSON Schema loader for catalog documents.
//!
//! The catalog schema ships inside the binary. Loading checks that its
//! `schema_version` const matches the version the decoder understands before
//! compiling a validator, so a stale schema file cannot silently accept
//! catalogs the model no longer matches.

use crate::catalog::CATALOG_SCHEMA_VERSION;
use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;

const CATALOG_SCHEMA_JSON: &str = include_str!("../schema/widget_catalog.schema.json");

/// Compiled validator for catalog documents.
pub(crate) struct CatalogSchema {
    compiled: JSONSchema,
}

impl CatalogSchema {
    pub(crate) fn load() -> Result<Self> {
        let schema: Value =
            serde_json::from_str(CATALOG_SCHEMA_JSON).context("parsing bundled catalog schema")?;

        let schema_version =
            extract_schema_version(&schema, "/properties/schema_version/const")
                .ok_or_else(|| anyhow!("catalog schema missing schema_version const"))?;
        if schema_version != CATALOG_SCHEMA_VERSION {
            bail!(
                "bundled catalog schema declares '{}', expected {}",
                schema_version,
                CATALOG_SCHEMA_VERSION
            );
        }

        let compiled = JSONSchema::compile(&schema)
            .map_err(|err| anyhow!("compiling bundled catalog schema: {err}"))?;
        Ok(Self { compiled })
    }

    pub(crate) fn validate(&self, instance: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details = errors
                .map(|err| format!("{}: {}", err.instance_path, err))
                .collect::<Vec<_>>()
                .join("\n");
            bail!("catalog failed schema validation:\n{}", details);
        }
        Ok(())
    }
}

fn extract_schema_version(schema: &Value, pointer: &str) -> Option<String> {
    let version = schema.pointer(pointer).and_then(Value::as_str)?;
    if version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        Some(version.to_string())
    } else {
        None
    }
}
