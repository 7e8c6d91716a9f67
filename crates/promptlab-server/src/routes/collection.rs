//! Collection Routes - Prompt Grouping Management
//!
//! HTTP handlers that delegate to CollectionService for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use promptlab::DomainError;

use crate::error::ApiResult;
use crate::extractor::AppJson;
use crate::models::{CollectionListResponse, CollectionResponse, CreateCollectionRequest};
use crate::AppState;

/// List all Collections
#[utoipa::path(
    get,
    path = "/collections",
    responses(
        (status = 200, description = "List of all Collections", body = CollectionListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Collection"
)]
pub async fn list_collections(
    State(state): State<AppState>,
) -> ApiResult<Json<CollectionListResponse>> {
    let collections = state.collection_service.list_all().await?;
    Ok(Json(collections.into()))
}

/// Get Collection by ID
#[utoipa::path(
    get,
    path = "/collections/{id}",
    params(("id" = String, Path, description = "Collection ID")),
    responses(
        (status = 200, description = "Collection found", body = CollectionResponse),
        (status = 404, description = "Collection not found")
    ),
    tag = "Collection"
)]
pub async fn get_collection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CollectionResponse>> {
    let collection = state
        .collection_service
        .get_by_id(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("Collection", &id))?;

    Ok(Json(collection.into()))
}

/// Create new Collection
#[utoipa::path(
    post,
    path = "/collections",
    request_body = CreateCollectionRequest,
    responses(
        (status = 201, description = "Collection created", body = CollectionResponse),
        (status = 422, description = "Invalid collection fields")
    ),
    tag = "Collection"
)]
pub async fn create_collection(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCollectionRequest>,
) -> ApiResult<(StatusCode, Json<CollectionResponse>)> {
    let collection = state.collection_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(collection.into())))
}

/// Delete Collection together with its Prompts
#[utoipa::path(
    delete,
    path = "/collections/{id}",
    params(("id" = String, Path, description = "Collection ID")),
    responses(
        (status = 204, description = "Collection and its prompts deleted"),
        (status = 404, description = "Collection not found")
    ),
    tag = "Collection"
)]
pub async fn delete_collection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.collection_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/collections", get(list_collections).post(create_collection))
        .route(
            "/collections/:id",
            get(get_collection).delete(delete_collection),
        )
}
