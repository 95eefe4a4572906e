//! Application context shared by every handler

use std::sync::Arc;

use tracing::{info_span, Span};

use crate::db::Database;
use crate::query::QueryBuilder;

/// Shared state type
pub type SharedContext = Arc<AppContext>;

/// Immutable after construction. The query builder takes its dialect from
/// the database handle so the two cannot disagree.
#[derive(Debug)]
pub struct AppContext {
    db: Database,
    queries: QueryBuilder,
    span: Span,
}

impl AppContext {
    pub fn new(db: Database) -> Self {
        let dialect = db.dialect();
        Self {
            queries: QueryBuilder::new(dialect),
            span: info_span!("company_api", %dialect),
            db,
        }
    }

    /// Wrap for sharing across requests
    pub fn shared(self) -> SharedContext {
        Arc::new(self)
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    pub fn queries(&self) -> &QueryBuilder {
        &self.queries
    }

    /// Span for one endpoint invocation, parented to the service span
    pub fn endpoint_span(&self, endpoint: &'static str) -> Span {
        info_span!(parent: &self.span, "endpoint", name = endpoint)
    }
}
