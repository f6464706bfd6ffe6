use anyhow::Context;
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use super::{repo_types::PlanDocument, semester::Semester};

/// The user's plan; an empty document when nothing was saved yet.
pub async fn load(db: &PgPool, user_id: Uuid) -> anyhow::Result<PlanDocument> {
    let doc = sqlx::query_scalar::<_, Json<PlanDocument>>(
        r#"
        SELECT semesters
          FROM plans
         WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
    .context("load plan")?;

    Ok(doc.map(|Json(d)| d).unwrap_or_default())
}

/// Replaces one semester's list in the user's plan document, creating the
/// document on first save. Other semesters are left as they are.
pub async fn save_semester(
    db: &PgPool,
    user_id: Uuid,
    semester: Semester,
    courses: &[String],
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO plans (user_id, semesters, updated_at)
        VALUES ($1, jsonb_build_object($2::text, $3::jsonb), now())
        ON CONFLICT (user_id) DO UPDATE
           SET semesters = plans.semesters || EXCLUDED.semesters,
               updated_at = now()
        "#,
    )
    .bind(user_id)
    .bind(semester.label())
    .bind(Json(courses))
    .execute(db)
    .await
    .with_context(|| format!("save plan semester {semester}"))?;

    Ok(())
}
