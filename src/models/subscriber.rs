use sqlx::PgPool;

/// Write-only from the application's perspective: rows are inserted by
/// the public subscribe form and never read back.
pub struct Subscriber;

impl Subscriber {
    pub async fn create(pool: &PgPool, email: &str) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO subscriber (email) VALUES ($1)")
            .bind(email)
            .execute(pool)
            .await?;
        Ok(())
    }
}
