use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use super::dto::Profile;

pub async fn find_profile(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<Profile>> {
    let profile = sqlx::query_as::<_, Profile>(
        r#"
        SELECT name, email, netid, major, year, interests, completed_courses
          FROM users
         WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
    .context("find profile")?;
    Ok(profile)
}

/// Applies whichever of the three fields are `Some`; returns the updated
/// profile, or `None` when the user no longer exists.
pub async fn update_profile(
    db: &PgPool,
    user_id: Uuid,
    major: Option<&str>,
    year: Option<&str>,
    interests: Option<&[String]>,
) -> anyhow::Result<Option<Profile>> {
    let profile = sqlx::query_as::<_, Profile>(
        r#"
        UPDATE users
           SET major = COALESCE($2, major),
               year = COALESCE($3, year),
               interests = COALESCE($4, interests)
         WHERE id = $1
        RETURNING name, email, netid, major, year, interests, completed_courses
        "#,
    )
    .bind(user_id)
    .bind(major)
    .bind(year)
    .bind(interests)
    .fetch_optional(db)
    .await
    .context("update profile")?;
    Ok(profile)
}

/// Replaces the completed-course list. `false` when the user does not exist.
pub async fn set_completed_courses(
    db: &PgPool,
    user_id: Uuid,
    codes: &[String],
) -> anyhow::Result<bool> {
    let res = sqlx::query(
        r#"
        UPDATE users
           SET completed_courses = $2
         WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(codes)
    .execute(db)
    .await
    .context("set completed courses")?;
    Ok(res.rows_affected() == 1)
}
