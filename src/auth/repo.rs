pub use crate::auth::repo_types::User;
use sqlx::PgPool;
use uuid::Uuid;

impl User {
    /// Find a user by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Find a user by id.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create a new user with hashed password. The netid is the local part of
    /// the email.
    pub async fn create(
        db: &PgPool,
        email: &str,
        name: &str,
        password_hash: &str,
    ) -> anyhow::Result<User> {
        let netid = email.split('@').next().unwrap_or(email);
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, name, netid, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, name, password_hash, created_at
            "#,
        )
        .bind(email)
        .bind(name)
        .bind(netid)
        .bind(password_hash)
        .fetch_one(db)
        .await?;
        Ok(user)
    }
}

#[cfg(test)]
mod db_tests {
    use super::*;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn create_then_find(pool: PgPool) {
        let user = User::create(&pool, "ada@example.edu", "Ada", "hash")
            .await
            .expect("create");
        let by_email = User::find_by_email(&pool, "ada@example.edu")
            .await
            .expect("query")
            .expect("present");
        assert_eq!(by_email.id, user.id);
        assert_eq!(by_email.name, "Ada");

        let netid: String = sqlx::query_scalar("SELECT netid FROM users WHERE id = $1")
            .bind(user.id)
            .fetch_one(&pool)
            .await
            .expect("netid");
        assert_eq!(netid, "ada");

        assert!(User::find_by_id(&pool, Uuid::new_v4())
            .await
            .expect("query")
            .is_none());
    }
}
