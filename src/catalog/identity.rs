//! Identifier and category types shared across the catalog.
//!
//! These types mirror the fields of catalog documents on disk. `Category` is
//! a closed set: documents referencing anything else are rejected at load
//! time. Filter input from callers is looser, so it gets its own
//! [`CategoryFilter`] type where unrecognized names are valid and simply
//! match nothing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique course identifier within a catalog.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CourseId(pub u32);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key naming a catalog document, e.g. `courses_v1`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CatalogKey(pub String);

/// Course category. Serialized lowercase in catalog documents.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Marketing,
    Management,
    Hr,
    Design,
    Development,
}

impl Category {
    /// Every category, in the order tabs present them.
    pub const ALL: [Category; 5] = [
        Category::Marketing,
        Category::Management,
        Category::Hr,
        Category::Design,
        Category::Development,
    ];

    /// The wire/filter name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Marketing => "marketing",
            Category::Management => "management",
            Category::Hr => "hr",
            Category::Design => "design",
            Category::Development => "development",
        }
    }

    /// Human-facing label for badges and tabs.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Marketing => "Marketing",
            Category::Management => "Management",
            Category::Hr => "HR & Recruiting",
            Category::Design => "Design",
            Category::Development => "Development",
        }
    }

    fn parse(value: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied category filter.
///
/// Filter names are matched exactly against the lowercase category names;
/// `"all"` is the sentinel that matches everything. Anything else is kept
/// verbatim as `Unknown` and matches no course, which callers treat as an
/// empty result set rather than an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(Category),
    Unknown(String),
}

impl CategoryFilter {
    pub fn from_raw(raw: &str) -> Self {
        if raw == "all" {
            return CategoryFilter::All;
        }
        match Category::parse(raw) {
            Some(category) => CategoryFilter::Category(category),
            None => CategoryFilter::Unknown(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Category(category) => category.as_str(),
            CategoryFilter::Unknown(raw) => raw.as_str(),
        }
    }

    /// Whether a course in `category` passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(wanted) => *wanted == category,
            CategoryFilter::Unknown(_) => false,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}
