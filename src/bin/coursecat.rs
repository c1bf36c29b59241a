//! Drive the course catalog from the command line.
//!
//! Usage:
//!   coursecat list --category hr --search analytics --pages 2
//!   coursecat show --id 2
//!   coursecat counts
//!
//! `list` prints each visible course as one JSON object per line so output
//! composes with line-oriented tooling. All commands accept `--catalog` to
//! read a catalog document instead of the bundled course list.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use coursecat::{CatalogEngine, Category, CourseId, CourseIndex, bundled_catalog};
use serde_json::json;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "coursecat")]
#[command(about = "Filter, search, and page through the course catalog")]
struct Cli {
    /// Optional catalog document; uses the bundled course list when omitted.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: CommandTarget,
}

#[derive(Subcommand, Debug)]
enum CommandTarget {
    /// Print the visible courses as NDJSON, one object per line.
    List {
        /// Category name or `all`. Unknown names yield an empty listing.
        #[arg(long, default_value = "all")]
        category: String,
        /// Title search text; escaped and matched case-insensitively.
        #[arg(long, default_value = "")]
        search: String,
        /// Pages to reveal: each page past the first is one load-more step.
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },
    /// Print a single course by id.
    Show {
        #[arg(long)]
        id: u32,
    },
    /// Print per-category counts plus the `all` bucket.
    Counts,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let index = load_index(cli.catalog.as_deref())?;

    match cli.command {
        CommandTarget::List {
            category,
            search,
            pages,
        } => run_list(&index, &category, &search, pages),
        CommandTarget::Show { id } => run_show(&index, CourseId(id)),
        CommandTarget::Counts => run_counts(&index),
    }
}

fn load_index(catalog: Option<&Path>) -> Result<CourseIndex> {
    match catalog {
        Some(path) => CourseIndex::load(path),
        None => CourseIndex::from_catalog(bundled_catalog()),
    }
}

fn run_list(index: &CourseIndex, category: &str, search: &str, pages: usize) -> Result<()> {
    let mut engine = CatalogEngine::new(index.catalog().courses.clone());
    engine.set_filter(category);
    engine.set_search(search);
    for _ in 1..pages {
        engine.load_more();
    }

    for course in engine.visible_courses() {
        println!("{}", serde_json::to_string(course)?);
    }
    if engine.has_more() {
        eprintln!(
            "coursecat: showing {} of {} matches; pass --pages to reveal more",
            engine.visible_courses().count(),
            engine.matching_len()
        );
    }
    Ok(())
}

fn run_show(index: &CourseIndex, id: CourseId) -> Result<()> {
    match index.course(&id) {
        Some(course) => {
            println!("{}", serde_json::to_string(course)?);
            Ok(())
        }
        None => bail!("course id {} not found in catalog '{}'", id, index.key().0),
    }
}

fn run_counts(index: &CourseIndex) -> Result<()> {
    let engine = CatalogEngine::new(index.catalog().courses.clone());
    let counts = engine.category_counts();
    let mut out = json!({ "all": counts.total() });
    for category in Category::ALL {
        out[category.as_str()] = json!(counts.of(category));
    }
    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}
