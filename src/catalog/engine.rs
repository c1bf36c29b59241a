//! Filter, search, and pagination state over a course list.
//!
//! [`CatalogEngine`] owns the course list and the current view state. Every
//! operation is a total, synchronous computation: no I/O, no locking, no
//! error path. Unknown filter names are valid input and produce an empty
//! view. Callers construct one engine per surface and poll the read
//! accessors after each mutation; rendering stays outside this crate.

use crate::catalog::identity::{Category, CategoryFilter};
use crate::catalog::model::{Course, CourseCatalog};
use crate::sanitize::normalize_query;
use std::collections::BTreeMap;

/// Courses shown initially and added per [`CatalogEngine::load_more`] call.
pub const PAGE_SIZE: usize = 9;

/// Course counts over the full catalog, independent of the active view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryCounts {
    total: usize,
    by_category: BTreeMap<Category, usize>,
}

impl CategoryCounts {
    fn tally(courses: &[Course]) -> Self {
        let mut by_category = BTreeMap::new();
        for course in courses {
            *by_category.entry(course.category).or_insert(0) += 1;
        }
        Self {
            total: courses.len(),
            by_category,
        }
    }

    /// The "all" bucket: total course count.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn of(&self, category: Category) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }

    /// Count for a filter value: total for `all`, zero for unknown names.
    pub fn for_filter(&self, filter: &CategoryFilter) -> usize {
        match filter {
            CategoryFilter::All => self.total,
            CategoryFilter::Category(category) => self.of(*category),
            CategoryFilter::Unknown(_) => 0,
        }
    }
}

#[derive(Debug)]
/// The catalog view state machine.
pub struct CatalogEngine {
    courses: Vec<Course>,
    filter: CategoryFilter,
    query: String,
    items_to_show: usize,
    // Indices into `courses`, recomputed on every filter/search change so the
    // view invariant never depends on call order.
    filtered: Vec<usize>,
}

impl CatalogEngine {
    /// Build an engine over a fixed course list.
    ///
    /// The initial view shows the first page of the whole list: filter `all`,
    /// empty query.
    pub fn new(courses: Vec<Course>) -> Self {
        let filtered = (0..courses.len()).collect();
        Self {
            courses,
            filter: CategoryFilter::All,
            query: String::new(),
            items_to_show: PAGE_SIZE,
            filtered,
        }
    }

    /// Convenience over [`CatalogEngine::new`] for a parsed catalog document.
    pub fn from_catalog(catalog: CourseCatalog) -> Self {
        Self::new(catalog.courses)
    }

    /// Set the category filter and reset pagination.
    ///
    /// Unknown names are kept and match nothing; callers render the empty
    /// state rather than an error.
    pub fn set_filter(&mut self, raw: &str) {
        self.filter = CategoryFilter::from_raw(raw);
        self.items_to_show = PAGE_SIZE;
        self.recompute();
    }

    /// Set the search query and reset pagination.
    ///
    /// The raw input is escaped, lower-cased, and trimmed before it is
    /// matched or stored, so the stored query is safe to echo into markup.
    pub fn set_search(&mut self, raw: &str) {
        self.query = normalize_query(raw);
        self.items_to_show = PAGE_SIZE;
        self.recompute();
    }

    /// Grow the visible window by one page, clamped to the match count.
    ///
    /// No-op once every matching course is visible.
    pub fn load_more(&mut self) {
        if self.filtered.len() > self.items_to_show {
            self.items_to_show = (self.items_to_show + PAGE_SIZE).min(self.filtered.len());
        }
    }

    /// The currently visible slice of matches, in original list order.
    pub fn visible_courses(&self) -> impl Iterator<Item = &Course> {
        self.filtered
            .iter()
            .take(self.items_to_show)
            .map(|&idx| &self.courses[idx])
    }

    /// Whether more matches exist beyond the visible window.
    pub fn has_more(&self) -> bool {
        self.filtered.len() > self.items_to_show
    }

    /// Counts per category over the FULL course list.
    ///
    /// Deliberately independent of the active filter and query; the tabs
    /// always report total membership.
    pub fn category_counts(&self) -> CategoryCounts {
        CategoryCounts::tally(&self.courses)
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// The stored (escaped, lower-cased, trimmed) query.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn items_to_show(&self) -> usize {
        self.items_to_show
    }

    /// Number of courses matching the current filter and query.
    pub fn matching_len(&self) -> usize {
        self.filtered.len()
    }

    fn recompute(&mut self) {
        let filter = &self.filter;
        let query = self.query.as_str();
        self.filtered = self
            .courses
            .iter()
            .enumerate()
            .filter(|(_, course)| {
                filter.matches(course.category) && course.title.to_lowercase().contains(query)
            })
            .map(|(idx, _)| idx)
            .collect();
    }
}
