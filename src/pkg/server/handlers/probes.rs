use axum::extract::State;
use sqlx::{PgPool, query};

use crate::{pkg::server::state::AppState, prelude::Result};

pub async fn home() -> &'static str {
    "Website is Live"
}

pub async fn livez() -> Result<()> {
    tracing::debug!("service is live");
    Ok(())
}

pub async fn healthz(State(state): State<AppState>) -> Result<()> {
    query("select 1").execute(&*state.db_pool).await?;
    tracing::debug!("service is healthy");
    Ok(())
}

/// Runs `SELECT NOW()` on a freshly acquired connection.
pub async fn probe(pool: &PgPool) -> Result<String> {
    let mut conn = pool
        .acquire()
        .await
        .inspect_err(|e| tracing::error!("Error acquiring client: {}", e))?;
    let now: String = sqlx::query_scalar("SELECT NOW()::text")
        .fetch_one(&mut *conn)
        .await
        .inspect_err(|e| tracing::error!("Error executing query: {}", e))?;
    tracing::info!("Connection successful: {}", &now);
    Ok(now)
}
