use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

use crate::config::AppConfig;
use crate::errors::AppError;

pub type PgPool = Pool<AsyncPgConnection>;
pub type PgConnection<'a> = PooledConnection<'a, AsyncPgConnection>;

#[tracing::instrument(name = "database_pool_setup", skip(config))]
pub async fn establish_pool(config: &AppConfig) -> Result<PgPool, AppError> {
    tracing::debug!("Initializing database connection pool");

    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.database_url);
    let min_idle = (config.pool_size / 4).max(1);

    let pool = Pool::builder()
        .max_size(config.pool_size)
        .min_idle(Some(min_idle))
        .connection_timeout(Duration::from_secs(5))
        .idle_timeout(Some(Duration::from_secs(600)))
        .max_lifetime(Some(Duration::from_secs(3600)))
        .build(manager)
        .await
        .map_err(|err| AppError::Pool(err.to_string()))?;

    tracing::info!(
        max_size = config.pool_size,
        min_idle,
        connection_timeout_secs = 5,
        "Database connection pool established"
    );

    Ok(pool)
}

/// Checks a connection out of the pool.
pub async fn connection(pool: &PgPool) -> Result<PgConnection<'_>, AppError> {
    pool.get().await.map_err(|err| AppError::Pool(err.to_string()))
}
