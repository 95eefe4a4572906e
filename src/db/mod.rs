//! # Database Handle
//!
//! Pooled connection handle shared by every request. Statements come from
//! the query builder already in the deployment's dialect, so execution goes
//! through the sqlx `Any` driver and never inspects the SQL text.

mod errors;

use sqlx::any::{AnyArguments, AnyPoolOptions};
use sqlx::query::Query;
use sqlx::{Any, AnyPool, Connection, FromRow};
use tracing::{debug, info};

use crate::config::{url_scheme, DatabaseConfig};
use crate::model::Company;
use crate::query::{BindValue, Dialect, Statement};

pub use errors::{DbError, DbResult};

/// Shared, thread-safe database handle
#[derive(Debug, Clone)]
pub struct Database {
    pool: AnyPool,
    dialect: Dialect,
}

impl Database {
    /// Open a pool for the configured server and ping it once.
    ///
    /// The URL scheme must belong to the configured dialect.
    pub async fn connect(config: &DatabaseConfig) -> DbResult<Self> {
        let url = config.connection_url()?;
        let scheme = url_scheme(&url).unwrap_or_default();
        if !config.dialect.accepts_scheme(scheme) {
            return Err(DbError::DialectMismatch {
                dialect: config.dialect,
                scheme: scheme.to_string(),
            });
        }

        sqlx::any::install_default_drivers();

        let redacted = config.redacted_url()?;
        let pool = AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&url)
            .await
            .map_err(|source| DbError::Connect {
                url: redacted.clone(),
                source,
            })?;

        let db = Self::from_pool(pool, config.dialect);
        db.ping().await.map_err(|source| DbError::Connect {
            url: redacted.clone(),
            source,
        })?;

        info!(dialect = %config.dialect, url = %redacted, "Established DB connection");
        Ok(db)
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: AnyPool, dialect: Dialect) -> Self {
        Self { pool, dialect }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Check that a pooled connection is alive
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await
    }

    /// Run a statement that returns no rows; yields the affected row count
    pub async fn execute(&self, stmt: &Statement) -> DbResult<u64> {
        debug!(sql = %stmt.sql, binds = ?stmt.binds, "execute");
        let result = bind_all(stmt).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Run a query and map every row to a company
    pub async fn fetch_all(&self, stmt: &Statement) -> DbResult<Vec<Company>> {
        debug!(sql = %stmt.sql, binds = ?stmt.binds, "fetch_all");
        let rows = bind_all(stmt).fetch_all(&self.pool).await?;
        let companies = rows
            .iter()
            .map(Company::from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(companies)
    }

    /// Run a query expected to match at most one row
    pub async fn fetch_optional(&self, stmt: &Statement) -> DbResult<Option<Company>> {
        debug!(sql = %stmt.sql, binds = ?stmt.binds, "fetch_optional");
        let row = bind_all(stmt).fetch_optional(&self.pool).await?;
        Ok(row.as_ref().map(Company::from_row).transpose()?)
    }

    /// Close the pool, waiting for checked-out connections to return
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn bind_all(stmt: &Statement) -> Query<'_, Any, AnyArguments<'_>> {
    stmt.binds
        .iter()
        .fold(sqlx::query(&stmt.sql), |query, value| match value {
            BindValue::Int(v) => query.bind(*v),
            BindValue::Text(v) => query.bind(v.as_str()),
        })
}
