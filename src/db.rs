use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::errors::{InspectError, ResultExt};

/// The single database session used for a whole inspection run.
pub struct Database {
    pub pool: PgPool,
}

impl Database {
    /// Opens the session and checks it answers before any report output.
    pub async fn new(database_url: &str) -> Result<Self, InspectError> {
        // One connection: every query of the run shares the same session
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await
            .context("connect to database")?;

        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .context("ping database")?;

        Ok(Self { pool })
    }

    /// Closes the session, waiting for the connection to be released.
    pub async fn close(self) {
        self.pool.close().await;
        tracing::debug!("Database session closed");
    }
}
