//! Company routes

use axum::routing::get;
use axum::Router;

use super::context::SharedContext;
use super::handlers::{
    create_company, delete_company, get_company, homepage, list_companies, update_company,
};

/// Build the company router
pub fn company_routes(ctx: SharedContext) -> Router {
    Router::new()
        .route("/", get(homepage))
        .route("/Company_Detail", get(list_companies).post(create_company))
        .route(
            "/Company_Detail/:id",
            get(get_company).put(update_company).delete(delete_company),
        )
        .with_state(ctx)
}
