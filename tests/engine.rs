// End-to-end view behavior over the bundled course list.
#[path = "support/common.rs"]
mod common;

use anyhow::Result;
use coursecat::{CatalogEngine, Category, CategoryFilter, PAGE_SIZE, bundled_catalog};

use common::sample_course_index;

fn engine() -> CatalogEngine {
    CatalogEngine::from_catalog(bundled_catalog())
}

// The combined view must equal the doubly-filtered sequence truncated to one
// page, for every category/query pair the tabs can produce.
#[test]
fn combined_view_equals_double_filter_truncated() {
    let catalog = bundled_catalog();
    let filters = ["all", "marketing", "management", "hr", "design", "development", "cooking"];
    let queries = ["", "management", "design", "product", "zzz"];

    for filter_raw in filters {
        for query in queries {
            let mut engine = engine();
            engine.set_filter(filter_raw);
            engine.set_search(query);

            let filter = CategoryFilter::from_raw(filter_raw);
            let expected: Vec<&str> = catalog
                .courses
                .iter()
                .filter(|course| {
                    filter.matches(course.category)
                        && course.title.to_lowercase().contains(query)
                })
                .map(|course| course.title.as_str())
                .take(PAGE_SIZE)
                .collect();

            let visible: Vec<&str> = engine
                .visible_courses()
                .map(|course| course.title.as_str())
                .collect();
            assert_eq!(
                visible, expected,
                "view mismatch for filter '{filter_raw}' query '{query}'"
            );
        }
    }
}

#[test]
fn marketing_filter_yields_four_courses() {
    let mut engine = engine();
    engine.set_filter("marketing");
    assert_eq!(engine.matching_len(), 4);
    assert!(
        engine
            .visible_courses()
            .all(|course| course.category == Category::Marketing)
    );
}

#[test]
fn product_search_yields_the_fundamentals_course() {
    let mut engine = engine();
    engine.set_search("product");
    let titles: Vec<_> = engine
        .visible_courses()
        .map(|course| course.title.as_str())
        .collect();
    assert_eq!(titles, ["Product Management Fundamentals"]);

    engine.set_filter("management");
    let titles: Vec<_> = engine
        .visible_courses()
        .map(|course| course.title.as_str())
        .collect();
    assert_eq!(titles, ["Product Management Fundamentals"]);
}

#[test]
fn pagination_walk_reaches_every_match_once() {
    let mut engine = engine();
    assert_eq!(engine.visible_courses().count(), PAGE_SIZE);
    assert!(engine.has_more());
    engine.load_more();
    assert_eq!(engine.visible_courses().count(), 18);
    assert!(!engine.has_more());

    let ids: Vec<u32> = engine.visible_courses().map(|course| course.id.0).collect();
    let expected: Vec<u32> = (1..=18).collect();
    assert_eq!(ids, expected);
}

#[test]
fn pagination_resets_after_deep_scroll() {
    let mut engine = engine();
    engine.load_more();
    assert_eq!(engine.items_to_show(), 18);

    engine.set_search("a");
    assert_eq!(engine.items_to_show(), PAGE_SIZE);
    assert_eq!(engine.visible_courses().count(), PAGE_SIZE.min(engine.matching_len()));

    engine.load_more();
    engine.set_filter("hr");
    assert_eq!(engine.items_to_show(), PAGE_SIZE);
}

#[test]
fn engine_over_loaded_document_behaves_like_bundled() -> Result<()> {
    let index = sample_course_index(&[
        (1, "Growth Marketing", "marketing", 120),
        (2, "Design Systems", "design", 300),
        (3, "Marketing Analytics", "marketing", 250),
    ])?;
    let mut engine = CatalogEngine::new(index.catalog().courses.clone());
    engine.set_filter("marketing");
    assert_eq!(engine.matching_len(), 2);
    engine.set_search("analytics");
    let titles: Vec<_> = engine
        .visible_courses()
        .map(|course| course.title.as_str())
        .collect();
    assert_eq!(titles, ["Marketing Analytics"]);
    Ok(())
}

#[test]
fn counts_report_total_membership() -> Result<()> {
    let engine = engine();
    let counts = engine.category_counts();
    assert_eq!(counts.total(), 18);
    let per_category: Vec<(Category, usize)> = Category::ALL
        .into_iter()
        .map(|category| (category, counts.of(category)))
        .collect();
    assert_eq!(
        per_category,
        [
            (Category::Marketing, 4),
            (Category::Management, 3),
            (Category::Hr, 5),
            (Category::Design, 3),
            (Category::Development, 3),
        ]
    );
    assert_eq!(
        per_category.iter().map(|(_, count)| count).sum::<usize>(),
        counts.total()
    );
    Ok(())
}
