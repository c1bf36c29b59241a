//! Serde document model for course catalogs.
//!
//! A catalog document carries a `schema_version` marker, catalog metadata,
//! and the course list. [`load_catalog_from_path`] only parses; hygiene
//! checks (version gate, duplicate ids, blank fields) live in
//! [`crate::catalog::index::CourseIndex`] so every consumer goes through the
//! same validation.

use crate::catalog::identity::{CatalogKey, Category, CourseId};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Version marker expected in catalog documents.
pub const CATALOG_SCHEMA_VERSION: &str = "course_catalog_v1";

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
/// A single course record. Immutable once loaded.
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub category: Category,
    pub price: u32,
    pub author: String,
    pub image: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
/// Metadata block naming a catalog document.
pub struct CatalogMetadata {
    pub key: CatalogKey,
    pub title: String,
    #[serde(default)]
    pub labels: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
/// A catalog document as stored under `catalogs/`.
pub struct CourseCatalog {
    pub schema_version: String,
    pub catalog: CatalogMetadata,
    pub courses: Vec<Course>,
}

/// Parse a catalog document from disk without validating it.
pub fn load_catalog_from_path(path: &Path) -> Result<CourseCatalog> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parsing catalog {}", path.display()))
}

/// The fixed course list compiled into the crate.
///
/// Same content as `catalogs/courses_v1.json`; callers that never touch the
/// filesystem construct their engine from this.
pub fn bundled_catalog() -> CourseCatalog {
    CourseCatalog {
        schema_version: CATALOG_SCHEMA_VERSION.to_string(),
        catalog: CatalogMetadata {
            key: CatalogKey("courses_v1".to_string()),
            title: "Online Courses".to_string(),
            labels: Vec::new(),
        },
        courses: vec![
            course(1, "The Ultimate Google Ads Training Course", Category::Marketing, 100, "Jerome Bell", "assets/image.png"),
            course(2, "Product Management Fundamentals", Category::Management, 480, "Marvin McKinney", "assets/image1.png"),
            course(3, "HR Management and Analytics", Category::Hr, 200, "Leslie Alexander Li", "assets/image2.png"),
            course(4, "Brand Management & PR Communications", Category::Marketing, 530, "Kristin Watson", "assets/image3.png"),
            course(5, "Graphic Design Basic", Category::Design, 500, "Guy Hawkins", "assets/image4.png"),
            course(6, "Business Development Management", Category::Management, 400, "Dianne Russell", "assets/image5.png"),
            course(7, "Highload Software Architecture", Category::Development, 600, "Brooklyn Simmons", "assets/image6.png"),
            course(8, "Human Resources – Selection and Recruitment", Category::Hr, 150, "Kathryn Murphy", "assets/image7.png"),
            course(9, "User Experience. Human-centered Design", Category::Design, 240, "Cody Fisher", "assets/image8.png"),
            course(10, "Digital Marketing Strategy", Category::Marketing, 350, "Sarah Johnson", "assets/image.png"),
            course(11, "Strategic Management & Leadership", Category::Management, 550, "Michael Brown", "assets/image1.png"),
            course(12, "HR Analytics and Metrics", Category::Hr, 280, "Emily Davis", "assets/image2.png"),
            course(13, "Social Media Marketing Mastery", Category::Marketing, 220, "David Wilson", "assets/image3.png"),
            course(14, "UI/UX Design Principles", Category::Design, 420, "Jessica Taylor", "assets/image4.png"),
            course(15, "Full Stack Web Development", Category::Development, 650, "James Anderson", "assets/image5.png"),
            course(16, "Talent Acquisition Strategies", Category::Hr, 300, "Lisa Martinez", "assets/image6.png"),
            course(17, "Mobile App Development", Category::Development, 580, "Robert Garcia", "assets/image7.png"),
            course(18, "Performance Management Systems", Category::Hr, 320, "Amanda White", "assets/image8.png"),
        ],
    }
}

fn course(
    id: u32,
    title: &str,
    category: Category,
    price: u32,
    author: &str,
    image: &str,
) -> Course {
    Course {
        id: CourseId(id),
        title: title.to_string(),
        category,
        price,
        author: author.to_string(),
        image: image.to_string(),
    }
}
