//! Axum handlers and router.
//!
//! Each request is an independent, read-only unit of work; handlers share
//! nothing but the connection pool and the configured time budget.

use std::future::Future;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::get,
};
use sea_orm::{DatabaseConnection, DbErr};
use tokio::time::timeout;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::cookbooks::{self, CookbookDetail, CookbookSummary};
use crate::errors::ApiError;
use crate::listing::{self, ListingParams, RecipePage, pagination};
use crate::openapi::ApiDoc;
use crate::views::{self, RecipeView};

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Per-request time budget for pipeline work.
    pub budget: Duration,
}

#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/recipes", get(list_recipes_handler))
        .route("/api/recipes/{id}", get(get_recipe_handler))
        .route("/api/cookbooks", get(list_cookbooks_handler))
        .route("/api/cookbooks/{id}", get(get_cookbook_handler))
        .route("/api/docs/openapi.json", get(openapi_handler))
        .with_state(state)
}

/// Run pipeline work under the configured time budget so a slow store
/// surfaces as a retryable timeout instead of a hung request.
async fn run_with_budget<T>(
    budget: Duration,
    work: impl Future<Output = Result<T, DbErr>>,
) -> Result<T, ApiError> {
    match timeout(budget, work).await {
        Ok(result) => result.map_err(ApiError::from),
        Err(_) => Err(ApiError::timeout(budget)),
    }
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    params(ListingParams),
    responses(
        (status = axum::http::StatusCode::OK, description = "One page of matching recipes with the total match count and the normalised query", body = RecipePage),
        (status = axum::http::StatusCode::SERVICE_UNAVAILABLE, description = "Entity store unavailable or request timed out (retryable)"),
        (status = axum::http::StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error")
    ),
    operation_id = "list_recipes",
    summary = "List recipes",
    description = "Lists recipes filtered by search term, sorted and paginated. Unknown or malformed parameters fall back to defaults rather than failing."
)]
pub async fn list_recipes_handler(
    Query(params): Query<ListingParams>,
    State(state): State<AppState>,
) -> Result<(HeaderMap, Json<RecipePage>), ApiError> {
    let page = run_with_budget(state.budget, listing::list_recipes(&state.db, &params)).await?;
    let (offset, limit) = page.query.page_slice().unwrap_or((0, page.total));
    let headers = pagination::content_range(offset, limit, page.total, "recipes");
    Ok((headers, Json(page)))
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    responses(
        (status = axum::http::StatusCode::OK, description = "The requested recipe", body = RecipeView),
        (status = axum::http::StatusCode::NOT_FOUND, description = "Recipe not found"),
        (status = axum::http::StatusCode::SERVICE_UNAVAILABLE, description = "Entity store unavailable or request timed out (retryable)"),
        (status = axum::http::StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error")
    ),
    operation_id = "get_recipe",
    summary = "Get one recipe",
    description = "Retrieves one recipe by its ID, denormalised with its classification, source, meals, preparations and courses."
)]
pub async fn get_recipe_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecipeView>, ApiError> {
    let view = run_with_budget(state.budget, views::get_recipe(&state.db, id))
        .await?
        .ok_or_else(|| ApiError::not_found("Recipe", Some(id.to_string())))?;
    Ok(Json(view))
}

#[utoipa::path(
    get,
    path = "/api/cookbooks",
    responses(
        (status = axum::http::StatusCode::OK, description = "All cookbooks, name ascending", body = [CookbookSummary]),
        (status = axum::http::StatusCode::SERVICE_UNAVAILABLE, description = "Entity store unavailable or request timed out (retryable)"),
        (status = axum::http::StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error")
    ),
    operation_id = "list_cookbooks",
    summary = "List cookbooks"
)]
pub async fn list_cookbooks_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CookbookSummary>>, ApiError> {
    let cookbooks = run_with_budget(state.budget, cookbooks::list_cookbooks(&state.db)).await?;
    Ok(Json(cookbooks))
}

#[utoipa::path(
    get,
    path = "/api/cookbooks/{id}",
    responses(
        (status = axum::http::StatusCode::OK, description = "The requested cookbook with its recipes in the fixed (classification, name, id) ordering", body = CookbookDetail),
        (status = axum::http::StatusCode::NOT_FOUND, description = "Cookbook not found"),
        (status = axum::http::StatusCode::SERVICE_UNAVAILABLE, description = "Entity store unavailable or request timed out (retryable)"),
        (status = axum::http::StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error")
    ),
    operation_id = "get_cookbook",
    summary = "Get one cookbook",
    description = "Retrieves one cookbook by its ID. Recipe ordering is a fixed contract and ignores any supplied sort parameters."
)]
pub async fn get_cookbook_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CookbookDetail>, ApiError> {
    let detail = run_with_budget(state.budget, cookbooks::get_cookbook(&state.db, id))
        .await?
        .ok_or_else(|| ApiError::not_found("Cookbook", Some(id.to_string())))?;
    Ok(Json(detail))
}

pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
