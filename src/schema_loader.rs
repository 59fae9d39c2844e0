//! JSON Schema loading for the movie record file.
//!
//! The catalog schema is bundled into the crate so the loader can validate a
//! record file before decoding it, even when the binary runs far from the
//! source tree.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::path::PathBuf;

const BUNDLED_CATALOG_SCHEMA: &str = include_str!("../schema/movie_catalog.schema.json");

/// Result of loading and compiling a JSON Schema.
pub(crate) struct SchemaLoadResult {
    pub compiled: JSONSchema,
}

/// Path of the catalog schema inside the source tree.
pub fn canonical_catalog_schema_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("schema/movie_catalog.schema.json")
}

/// Parse and compile the schema compiled into the crate.
pub(crate) fn bundled_catalog_schema() -> Result<SchemaLoadResult> {
    let raw: Value =
        serde_json::from_str(BUNDLED_CATALOG_SCHEMA).context("parsing bundled catalog schema")?;
    compile(raw, "bundled catalog schema")
}

fn compile(raw: Value, label: &str) -> Result<SchemaLoadResult> {
    // The compile error borrows the schema value, so flatten it to text here.
    let compiled =
        JSONSchema::compile(&raw).map_err(|err| anyhow!("compiling schema {label}: {err}"))?;
    Ok(SchemaLoadResult { compiled })
}

/// Validate `instance`, joining every violation into one error.
pub(crate) fn validate_instance(
    schema: &SchemaLoadResult,
    instance: &Value,
    origin: &str,
) -> Result<()> {
    if let Err(errors) = schema.compiled.validate(instance) {
        let details = errors
            .map(|err| format!("{}: {}", err.instance_path, err))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("movie catalog {origin} failed schema validation:\n{details}");
    }
    Ok(())
}
