use sqlx::{FromRow, PgPool};

/// The operator account. Single-operator tool: there is no
/// registration surface, the row is seeded at startup.
#[derive(Debug, FromRow)]
pub struct Account {
    pub id: i64,
    pub email: String,
}

impl Account {
    pub async fn by_token(pool: &PgPool, token: &str) -> Result<Option<Account>, sqlx::Error> {
        sqlx::query_as::<_, Account>("SELECT id, email FROM account WHERE token = $1")
            .bind(token)
            .fetch_optional(pool)
            .await
    }

    pub async fn by_credentials(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<Account>, sqlx::Error> {
        sqlx::query_as::<_, Account>(
            "SELECT id, email FROM account WHERE email = $1 AND password = $2",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_optional(pool)
        .await
    }

    /// Store the current session token, or clear it on sign-out.
    pub async fn set_token(
        pool: &PgPool,
        id: i64,
        token: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE account SET token = $1 WHERE id = $2")
            .bind(token)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Seed or refresh the operator account from the environment.
    pub async fn upsert_operator(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO account (email, password) VALUES ($1, $2)
             ON CONFLICT (email) DO UPDATE SET password = EXCLUDED.password",
        )
        .bind(email)
        .bind(password_hash)
        .execute(pool)
        .await?;
        Ok(())
    }
}
