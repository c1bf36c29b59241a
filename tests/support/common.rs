#![allow(dead_code)]

use anyhow::{Context, Result};
use coursecat::{Course, CourseIndex};
use serde_json::{Value, json};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Builds a catalog document from `(id, title, category, price)` rows.
/// Author and image fields are filled with per-id placeholders.
pub fn sample_catalog_document(entries: &[(u32, &str, &str, u32)]) -> Value {
    let courses: Vec<Value> = entries
        .iter()
        .map(|(id, title, category, price)| {
            json!({
                "id": id,
                "title": title,
                "category": category,
                "price": price,
                "author": format!("Author {id}"),
                "image": format!("assets/image{id}.png"),
            })
        })
        .collect();

    json!({
        "schema_version": "course_catalog_v1",
        "catalog": {"key": "sample_catalog_v1", "title": "sample catalog"},
        "courses": courses,
    })
}

/// Writes a catalog document to a temp file, keeping the file alive for the
/// caller's scope.
pub fn write_catalog_file(document: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(&mut file, document)?;
    file.flush()?;
    Ok(file)
}

pub fn sample_course_index(entries: &[(u32, &str, &str, u32)]) -> Result<CourseIndex> {
    let file = write_catalog_file(&sample_catalog_document(entries))?;
    CourseIndex::load(file.path()).context("failed to load sample course index")
}

/// Parses NDJSON output from `coursecat list` into course records.
pub fn parse_course_lines(bytes: &[u8]) -> Result<Vec<Course>> {
    let text = String::from_utf8_lossy(bytes);
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(idx, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("parsing course from output line {}", idx + 1))
        })
        .collect()
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to execute {cmd:?}"))?;
    if !output.status.success() {
        anyhow::bail!(
            "command {:?} failed with {}; stderr: {}",
            cmd,
            output.status,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}
