//! Startup seeding of the course catalog from the embedded `data/courses.json`.

use std::collections::HashSet;

use anyhow::{bail, Context};
use sqlx::PgPool;
use tracing::{info, instrument};

use crate::courses::{self, Course};

const CATALOG_JSON: &str = include_str!("../data/courses.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: u64,
    pub skipped: u64,
}

/// Parses and validates the embedded catalog: non-empty, unique codes,
/// positive credits.
pub fn load_catalog() -> anyhow::Result<Vec<Course>> {
    parse_catalog(CATALOG_JSON)
}

fn parse_catalog(raw: &str) -> anyhow::Result<Vec<Course>> {
    let catalog: Vec<Course> = serde_json::from_str(raw).context("parse course catalog")?;
    if catalog.is_empty() {
        bail!("course catalog is empty");
    }

    let mut seen = HashSet::new();
    for course in &catalog {
        if course.course_code.trim().is_empty() {
            bail!("catalog entry '{}' has no course code", course.title);
        }
        if !seen.insert(course.course_code.as_str()) {
            bail!("duplicate course code {} in catalog", course.course_code);
        }
        if course.credits <= 0 {
            bail!("course {} has non-positive credits", course.course_code);
        }
    }
    Ok(catalog)
}

/// Inserts catalog entries that are not present yet. Safe to run on every
/// start.
#[instrument(skip(db))]
pub async fn seed_catalog(db: &PgPool) -> anyhow::Result<SeedReport> {
    let catalog = load_catalog()?;
    let inserted = courses::repo::insert_missing(db, &catalog).await?;
    let report = SeedReport {
        inserted,
        skipped: catalog.len() as u64 - inserted,
    };
    let total = courses::repo::count(db).await?;
    info!(
        inserted = report.inserted,
        skipped = report.skipped,
        total,
        "course catalog seeded"
    );
    Ok(report)
}


#[cfg(test)]
mod db_tests {
    use super::*;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn reseeding_does_not_duplicate(pool: PgPool) {
        let total = load_catalog().unwrap().len() as u64;

        let first = seed_catalog(&pool).await.unwrap();
        assert_eq!(first, SeedReport { inserted: total, skipped: 0 });

        let second = seed_catalog(&pool).await.unwrap();
        assert_eq!(second, SeedReport { inserted: 0, skipped: total });
        assert_eq!(courses::repo::count(&pool).await.unwrap(), total as i64);
    }
}
