use anyhow::Context;
use sqlx::PgPool;

use super::repo_types::{Course, CourseSummary};

/// Escapes `\`, `%` and `_` so user input matches literally inside LIKE.
pub fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Case-insensitive substring search on code and title. Codes starting with
/// the query come first, then other code matches, then title-only matches.
pub async fn search(db: &PgPool, query: &str, limit: i64) -> anyhow::Result<Vec<CourseSummary>> {
    let escaped = escape_like(query);
    let rows = sqlx::query_as::<_, CourseSummary>(
        r#"
        SELECT course_code, title, credits
          FROM courses
         WHERE course_code ILIKE $1 ESCAPE '\'
            OR title ILIKE $1 ESCAPE '\'
         ORDER BY (course_code ILIKE $2 ESCAPE '\') DESC,
                  (course_code ILIKE $1 ESCAPE '\') DESC,
                  course_code ASC
         LIMIT $3
        "#,
    )
    .bind(format!("%{escaped}%"))
    .bind(format!("{escaped}%"))
    .bind(limit)
    .fetch_all(db)
    .await
    .context("search courses")?;
    Ok(rows)
}

pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<Course>> {
    let rows = sqlx::query_as::<_, Course>(
        r#"
        SELECT course_code, title, subject, category, credits, difficulty,
               prerequisites, description, semesters_offered
          FROM courses
         ORDER BY course_code ASC
        "#,
    )
    .fetch_all(db)
    .await
    .context("list courses")?;
    Ok(rows)
}

pub async fn count(db: &PgPool) -> anyhow::Result<i64> {
    let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
        .fetch_one(db)
        .await
        .context("count courses")?;
    Ok(n)
}

/// Inserts catalog entries in one transaction, skipping codes already present.
/// Returns how many rows were actually inserted.
pub async fn insert_missing(db: &PgPool, courses: &[Course]) -> anyhow::Result<u64> {
    let mut tx = db.begin().await.context("begin tx")?;
    let mut inserted = 0;
    for c in courses {
        let res = sqlx::query(
            r#"
            INSERT INTO courses (course_code, title, subject, category, credits,
                                 difficulty, prerequisites, description,
                                 semesters_offered)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (course_code) DO NOTHING
            "#,
        )
        .bind(&c.course_code)
        .bind(&c.title)
        .bind(&c.subject)
        .bind(&c.category)
        .bind(c.credits)
        .bind(c.difficulty)
        .bind(&c.prerequisites)
        .bind(&c.description)
        .bind(&c.semesters_offered)
        .execute(&mut *tx)
        .await
        .with_context(|| format!("insert course {}", c.course_code))?;
        inserted += res.rows_affected();
    }
    tx.commit().await.context("commit tx")?;
    Ok(inserted)
}
