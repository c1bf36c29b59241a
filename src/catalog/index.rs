//! Indexed view of a catalog document.
//!
//! The index enforces the expected catalog schema version and provides fast
//! lookup by course id. It is intentionally strict about duplicates and
//! unknown schema versions so tooling cannot silently consume a catalog that
//! drifted from the document contract.

use crate::catalog::identity::{CatalogKey, CourseId};
use crate::catalog::model::{CATALOG_SCHEMA_VERSION, Course, CourseCatalog, load_catalog_from_path};
use anyhow::{Context, Result, bail};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

// The crate ships a single catalog schema; reject unexpected versions rather
// than risk serving records under mismatched metadata. Callers can widen the
// accepted set via env while keeping a sane default.
const ENV_ALLOWED_SCHEMA_VERSIONS: &str = "COURSECAT_ALLOWED_CATALOG_SCHEMAS";

#[derive(Debug)]
/// Course catalog plus a derived index keyed by course id.
pub struct CourseIndex {
    catalog_key: CatalogKey,
    catalog: CourseCatalog,
    by_id: BTreeMap<CourseId, Course>,
}

impl CourseIndex {
    /// Load and validate a catalog document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let catalog =
            load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        Self::from_catalog(catalog)
    }

    /// Validate an already-parsed catalog document.
    ///
    /// Checks the schema version, catalog metadata, per-course field hygiene,
    /// and id uniqueness, then builds a deterministic BTreeMap for lookups.
    pub fn from_catalog(catalog: CourseCatalog) -> Result<Self> {
        validate_schema_version(&catalog.schema_version)?;
        validate_catalog_metadata(&catalog)?;
        let by_id = build_index(&catalog)?;
        Ok(Self {
            catalog_key: catalog.catalog.key.clone(),
            catalog,
            by_id,
        })
    }

    /// The catalog key declared in the document.
    pub fn key(&self) -> &CatalogKey {
        &self.catalog_key
    }

    /// Resolve a course by id.
    ///
    /// Returns `None` instead of erroring; callers surface errors with the
    /// context that referenced the missing id.
    pub fn course(&self, id: &CourseId) -> Option<&Course> {
        self.by_id.get(id)
    }

    /// Iterates course ids in stable order.
    pub fn ids(&self) -> impl Iterator<Item = &CourseId> {
        self.by_id.keys()
    }

    /// Access the underlying document (course list in original order).
    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }
}

pub fn allowed_schema_versions() -> BTreeSet<String> {
    let mut versions: BTreeSet<String> = BTreeSet::new();
    versions.insert(CATALOG_SCHEMA_VERSION.to_string());
    if let Ok(raw) = std::env::var(ENV_ALLOWED_SCHEMA_VERSIONS) {
        for v in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            versions.insert(v.to_string());
        }
    }
    versions
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }

    if !schema_version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        bail!(
            "schema_version must match ^[A-Za-z0-9_.-]+$, got {}",
            schema_version
        );
    }

    let allowed = allowed_schema_versions();
    if !allowed.contains(schema_version) {
        bail!(
            "schema_version '{}' not in allowed set {:?}",
            schema_version,
            allowed
        );
    }

    Ok(())
}

fn validate_catalog_metadata(catalog: &CourseCatalog) -> Result<()> {
    validate_catalog_key(&catalog.catalog.key)?;
    if catalog.catalog.title.trim().is_empty() {
        bail!("catalog.title must not be empty");
    }
    if catalog
        .catalog
        .labels
        .iter()
        .any(|label| label.trim().is_empty())
    {
        bail!("catalog.labels must not contain empty entries");
    }
    Ok(())
}

fn validate_catalog_key(key: &CatalogKey) -> Result<()> {
    if key.0.is_empty() {
        bail!("catalog.key must not be empty");
    }

    if !key
        .0
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        bail!("catalog.key must match ^[A-Za-z0-9_.-]+$, got {}", key.0);
    }

    Ok(())
}

fn build_index(catalog: &CourseCatalog) -> Result<BTreeMap<CourseId, Course>> {
    if catalog.courses.is_empty() {
        bail!("catalog contains no courses");
    }

    let mut map = BTreeMap::new();
    for course in &catalog.courses {
        if course.title.trim().is_empty() {
            bail!("course {} has an empty title", course.id);
        }
        if course.author.trim().is_empty() {
            bail!("course {} has an empty author", course.id);
        }
        if course.image.trim().is_empty() {
            bail!("course {} has an empty image path", course.id);
        }
        if map.contains_key(&course.id) {
            bail!("duplicate course id {}", course.id);
        }
        map.insert(course.id, course.clone());
    }
    Ok(map)
}
