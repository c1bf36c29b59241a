//! Course catalog engine and tooling.
//!
//! The library is a pure, synchronous core: a catalog document model with
//! validated loading, and a [`CatalogEngine`] that owns filter/search/
//! pagination state over a fixed course list. The binaries in `src/bin`
//! layer a CLI on top; rendering is left to callers.

pub mod catalog;
pub mod debounce;
pub mod sanitize;

pub use catalog::{
    CATALOG_SCHEMA_VERSION, CatalogEngine, CatalogKey, CatalogMetadata, Category, CategoryCounts,
    CategoryFilter, Course, CourseCatalog, CourseId, CourseIndex, DEFAULT_CATALOG_PATH, PAGE_SIZE,
    bundled_catalog, load_catalog_from_path,
};
pub use debounce::{DEFAULT_SEARCH_DELAY, Debouncer};
pub use sanitize::{escape_markup, normalize_query};
