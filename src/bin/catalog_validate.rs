//! Validate course catalog JSON documents.
//!
//! Usage:
//!   catalog-validate --file catalogs/courses_v1.json
//!   catalog-validate < catalog.json
//!
//! Documents are checked against the shipped JSON Schema first, then against
//! the allowed `schema_version` set and the index hygiene rules (unique ids,
//! non-empty fields). Exit status is the only success signal.

use anyhow::{Context, Result, bail};
use clap::Parser;
use coursecat::catalog::index::allowed_schema_versions;
use coursecat::{CourseCatalog, CourseIndex};
use serde_json::Value;
use std::fs::File;
use std::io::{Read, stdin};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "catalog-validate")]
#[command(about = "Validate course catalog documents against the catalog schema")]
struct Cli {
    /// Optional input file; reads stdin when omitted.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Catalog schema path.
    #[arg(long, default_value = "schema/course_catalog.schema.json")]
    schema: PathBuf,
}

fn read_input(file: Option<PathBuf>) -> Result<Value> {
    let mut buf = String::new();
    if let Some(path) = file {
        File::open(&path)
            .with_context(|| format!("opening input file {}", path.display()))?
            .read_to_string(&mut buf)
            .with_context(|| format!("reading input file {}", path.display()))?;
    } else {
        stdin()
            .read_to_string(&mut buf)
            .context("reading stdin for input JSON")?;
    }
    let value: Value = serde_json::from_str(&buf).context("parsing input JSON")?;
    Ok(value)
}

fn validate_against_schema(input: &Value, schema_path: &Path) -> Result<()> {
    let raw_schema: Arc<Value> = Arc::new(
        serde_json::from_reader(
            File::open(schema_path)
                .with_context(|| format!("opening catalog schema {}", schema_path.display()))?,
        )
        .with_context(|| format!("parsing catalog schema {}", schema_path.display()))?,
    );
    let raw_static: &'static Value = unsafe { &*(Arc::as_ptr(&raw_schema)) };
    let compiled = jsonschema::JSONSchema::compile(raw_static)
        .with_context(|| format!("compiling catalog schema {}", schema_path.display()))?;
    if let Err(errors) = compiled.validate(input) {
        let details = errors.map(|e| e.to_string()).collect::<Vec<_>>().join("\n");
        bail!("catalog failed schema validation:\n{}", details);
    }

    let version = input
        .get("schema_version")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let allowed = allowed_schema_versions();
    if !allowed.contains(&version) {
        bail!(
            "catalog schema_version '{}' not in allowed set {:?}",
            version,
            allowed
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let input = read_input(cli.file)?;
    validate_against_schema(&input, &cli.schema)?;

    let catalog: CourseCatalog =
        serde_json::from_value(input).context("decoding catalog document")?;
    CourseIndex::from_catalog(catalog).context("indexing catalog document")?;
    Ok(())
}
