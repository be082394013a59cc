//! HTTP Controller - the REST surface of the registry
//!
//! Routes:
//! - `POST   /companies`      create a company (201 + Location header)
//! - `GET    /companies`      list all companies
//! - `GET    /companies/{id}` fetch one company
//! - `DELETE /companies/{id}` delete a company and its dependents
//!
//! The controller only deserializes, delegates to `CompanyService` and
//! maps errors to status codes. Body validation stays with serde and
//! the persistence layer.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use registry_domain::{CompanyId, RepositoryError};
use registry_usecase::{CompanyDto, CompanyService};

/// Build the application router around a shared service.
pub fn router(service: Arc<CompanyService>) -> Router {
    Router::new()
        .route("/companies", post(create_company).get(list_companies))
        .route("/companies/{id}", get(get_company).delete(delete_company))
        .with_state(service)
}

/// Repository errors shaped for the wire.
#[derive(Debug)]
pub struct ApiError(RepositoryError);

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            RepositoryError::NotFound { .. } => StatusCode::NOT_FOUND,
            RepositoryError::Constraint { .. } => StatusCode::CONFLICT,
            RepositoryError::Persistence { .. } => {
                tracing::error!(error = %self.0, "persistence failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

async fn create_company(
    State(service): State<Arc<CompanyService>>,
    Json(dto): Json<CompanyDto>,
) -> Result<Response, ApiError> {
    let id = service.add_company(dto).await?;
    let created = service.get_by_id(id).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/companies/{id}"))],
        Json(created),
    )
        .into_response())
}

async fn list_companies(
    State(service): State<Arc<CompanyService>>,
) -> Result<Json<Vec<CompanyDto>>, ApiError> {
    Ok(Json(service.get_all().await?))
}

async fn get_company(
    State(service): State<Arc<CompanyService>>,
    Path(id): Path<i64>,
) -> Result<Json<CompanyDto>, ApiError> {
    Ok(Json(service.get_by_id(CompanyId::new(id)).await?))
}

async fn delete_company(
    State(service): State<Arc<CompanyService>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    service.delete_company(CompanyId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
