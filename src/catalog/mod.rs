//! Course catalog wiring.
//!
//! This module wraps course catalogs (the bundled literal list or documents
//! on disk such as `catalogs/courses_v1.json`) so callers can load a
//! validated snapshot and drive a view over it. Types mirror the document
//! fields; callers use `CourseIndex` for id lookups and `CatalogEngine` for
//! the filter/search/pagination view.

pub mod engine;
pub mod identity;
pub mod index;
pub mod model;

pub use engine::{CatalogEngine, CategoryCounts, PAGE_SIZE};
pub use identity::{CatalogKey, Category, CategoryFilter, CourseId};
pub use index::CourseIndex;
pub use model::{CATALOG_SCHEMA_VERSION, CatalogMetadata, Course, CourseCatalog};

pub use model::{bundled_catalog, load_catalog_from_path};

/// Default relative path to the bundled catalog document.
pub const DEFAULT_CATALOG_PATH: &str = "catalogs/courses_v1.json";
