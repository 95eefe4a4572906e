//! # REST API Handlers
//!
//! One handler per company operation. Each runs inside an endpoint span,
//! builds its statement through the context's query builder and executes it
//! against the shared database handle.

use axum::body::Bytes;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{info, Instrument};

use crate::model::Company;
use crate::query::Operation;

use super::context::SharedContext;
use super::errors::{ApiError, ApiResult};
use super::parser::ListQuery;

/// Plain-text API summary served at `/`
pub const HOMEPAGE: &str = r#"
- POST /Company
  - Add new Company to DB
  - payload :
    {
		Client_ID 	(string)
		Company_ID 	(string)
		Company_Name (string)
		ASIC 		(string)
		Flight_Risk_Status (string)
		Recruit_Status (string)
		Total_Flight_Risk (string)
		Total_Backfill   (string)
		Create_Date (string)
		Last_Update   (string)
		Data_As_Of_Date  (string)
    }

- PUT /Company/{id}
  - Update an existing Company DB
  - query param : id (Company id from GET API)
  - payload :
  {
	  Client_ID 	(string)
	  Company_ID 	(string)
	  Company_Name (string)
	  ASIC 		(string)
	  Flight_Risk_Status (string)
	  Recruit_Status (string)
	  Total_Flight_Risk (string)
	  Total_Backfill   (string)
	  Create_Date (string)
	  Last_Update   (string)
	  Data_As_Of_Date  (string)
  }

- DELETE /Company/{id}
  - Deletes an entry from DB
  - query param : id (Company id from GET API)

- GET /Company/{id}
  - Retrieves Company data from DB for a given ID
  - query param : id (Company id from GET API) 

- GET /Company_Detail
  - retrives all Company_Detail from DB
  - query params : id (last ID from previous GET call for pagination), limit (max entry per page)
  - response : list of Company_Detail
"#;

// The Content-Type header is not consulted; any body that decodes is accepted.
fn decode_body(body: &[u8]) -> ApiResult<Company> {
    serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode_id(id: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    id.map(|Path(id)| id)
        .map_err(|e| ApiError::InvalidParam(e.body_text()))
}

/// `GET /`
pub async fn homepage(State(ctx): State<SharedContext>) -> &'static str {
    let _span = ctx.endpoint_span("homepage").entered();
    info!("Endpoint hit");
    HOMEPAGE
}

/// `POST /Company_Detail`
pub async fn create_company(
    State(ctx): State<SharedContext>,
    body: Bytes,
) -> ApiResult<Json<Company>> {
    let span = ctx.endpoint_span("createNewCompany");
    async move {
        info!("Endpoint hit");
        let company = decode_body(&body)?;

        let stmt = ctx.queries().build(Operation::Create(&company));
        let rows_affected = ctx.db().execute(&stmt).await?;
        info!(rows_affected, company_id = company.company_id, "Inserted new record");

        Ok::<_, ApiError>(Json(company))
    }
    .instrument(span)
    .await
}

/// `GET /Company_Detail?id=&limit=`
pub async fn list_companies(
    State(ctx): State<SharedContext>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<Vec<Company>>> {
    let span = ctx.endpoint_span("returnAllCompany");
    async move {
        info!("Endpoint hit");
        let Query(pairs) = query.map_err(|e| ApiError::InvalidParam(e.body_text()))?;
        let page = ListQuery::from_pairs(pairs).page()?;

        let stmt = ctx.queries().build(Operation::List {
            after: page.after,
            limit: page.limit,
        });
        let companies = ctx.db().fetch_all(&stmt).await?;
        info!(after = page.after, limit = ?page.limit, count = companies.len(), "Returned companies");

        Ok::<_, ApiError>(Json(companies))
    }
    .instrument(span)
    .await
}

/// `GET /Company_Detail/{id}`
pub async fn get_company(
    State(ctx): State<SharedContext>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Company>> {
    let span = ctx.endpoint_span("returnSingleCompany");
    async move {
        info!("Endpoint hit");
        let id = decode_id(id)?;

        let stmt = ctx.queries().build(Operation::Get { id });
        let company = ctx
            .db()
            .fetch_optional(&stmt)
            .await?
            .ok_or(ApiError::NotFound)?;
        info!(company_id = id, "Returned company");

        Ok::<_, ApiError>(Json(company))
    }
    .instrument(span)
    .await
}

/// `PUT /Company_Detail/{id}`
///
/// Echoes the received payload whether or not a row was changed.
pub async fn update_company(
    State(ctx): State<SharedContext>,
    id: Result<Path<i64>, PathRejection>,
    body: Bytes,
) -> ApiResult<Json<Company>> {
    let span = ctx.endpoint_span("updateCompany");
    async move {
        info!("Endpoint hit");
        let id = decode_id(id)?;
        let company = decode_body(&body)?;

        let stmt = ctx.queries().build(Operation::Update {
            id,
            company: &company,
        });
        let rows_affected = ctx.db().execute(&stmt).await?;
        info!(rows_affected, company_id = id, "DB update performed");

        Ok::<_, ApiError>(Json(company))
    }
    .instrument(span)
    .await
}

/// `DELETE /Company_Detail/{id}`
pub async fn delete_company(
    State(ctx): State<SharedContext>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let span = ctx.endpoint_span("deleteCompany");
    async move {
        info!("Endpoint hit");
        let id = decode_id(id)?;

        let stmt = ctx.queries().build(Operation::Delete { id });
        let rows_affected = ctx.db().execute(&stmt).await?;
        info!(rows_affected, company_id = id, "DB delete performed");

        Ok::<_, ApiError>(StatusCode::OK)
    }
    .instrument(span)
    .await
}
