//! Prompt Routes - Prompt Template Management
//!
//! HTTP handlers that delegate to PromptService for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use promptlab::{DomainError, PromptQuery};

use crate::error::ApiResult;
use crate::extractor::AppJson;
use crate::models::{
    CreatePromptRequest, ListPromptsQuery, PatchPromptRequest, PromptListResponse, PromptResponse,
    TemplateVariablesResponse, UpdatePromptRequest,
};
use crate::AppState;

/// List prompts, newest first
#[utoipa::path(
    get,
    path = "/prompts",
    params(ListPromptsQuery),
    responses(
        (status = 200, description = "Matching prompts", body = PromptListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn list_prompts(
    State(state): State<AppState>,
    Query(query): Query<ListPromptsQuery>,
) -> ApiResult<Json<PromptListResponse>> {
    let query: PromptQuery = query.into();
    let prompts = state.prompt_service.list(&query).await?;
    Ok(Json(prompts.into()))
}

/// Get Prompt by ID
#[utoipa::path(
    get,
    path = "/prompts/{id}",
    params(("id" = String, Path, description = "Prompt ID")),
    responses(
        (status = 200, description = "Prompt found", body = PromptResponse),
        (status = 404, description = "Prompt not found")
    ),
    tag = "Prompt"
)]
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PromptResponse>> {
    let prompt = state
        .prompt_service
        .get_by_id(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("Prompt", &id))?;

    Ok(Json(prompt.into()))
}

/// Create new Prompt
#[utoipa::path(
    post,
    path = "/prompts",
    request_body = CreatePromptRequest,
    responses(
        (status = 201, description = "Prompt created", body = PromptResponse),
        (status = 400, description = "Collection not found"),
        (status = 422, description = "Invalid prompt fields")
    ),
    tag = "Prompt"
)]
pub async fn create_prompt(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePromptRequest>,
) -> ApiResult<(StatusCode, Json<PromptResponse>)> {
    let prompt = state.prompt_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(prompt.into())))
}

/// Replace Prompt
#[utoipa::path(
    put,
    path = "/prompts/{id}",
    params(("id" = String, Path, description = "Prompt ID")),
    request_body = UpdatePromptRequest,
    responses(
        (status = 200, description = "Prompt updated", body = PromptResponse),
        (status = 400, description = "Collection not found"),
        (status = 404, description = "Prompt not found"),
        (status = 422, description = "Invalid prompt fields")
    ),
    tag = "Prompt"
)]
pub async fn update_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdatePromptRequest>,
) -> ApiResult<Json<PromptResponse>> {
    let prompt = state.prompt_service.replace(&id, payload.into()).await?;
    Ok(Json(prompt.into()))
}

/// Partially update Prompt
#[utoipa::path(
    patch,
    path = "/prompts/{id}",
    params(("id" = String, Path, description = "Prompt ID")),
    request_body = PatchPromptRequest,
    responses(
        (status = 200, description = "Prompt updated", body = PromptResponse),
        (status = 400, description = "Collection not found"),
        (status = 404, description = "Prompt not found"),
        (status = 422, description = "Invalid prompt fields")
    ),
    tag = "Prompt"
)]
pub async fn patch_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<PatchPromptRequest>,
) -> ApiResult<Json<PromptResponse>> {
    let prompt = state.prompt_service.patch(&id, payload.into()).await?;
    Ok(Json(prompt.into()))
}

/// Delete Prompt
#[utoipa::path(
    delete,
    path = "/prompts/{id}",
    params(("id" = String, Path, description = "Prompt ID")),
    responses(
        (status = 204, description = "Prompt deleted"),
        (status = 404, description = "Prompt not found")
    ),
    tag = "Prompt"
)]
pub async fn delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if !state.prompt_service.delete(&id).await? {
        return Err(DomainError::not_found("Prompt", &id).into());
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Get template variables of a Prompt
#[utoipa::path(
    get,
    path = "/prompts/{id}/variables",
    params(("id" = String, Path, description = "Prompt ID")),
    responses(
        (status = 200, description = "Template variables", body = TemplateVariablesResponse),
        (status = 404, description = "Prompt not found")
    ),
    tag = "Prompt"
)]
pub async fn get_prompt_variables(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TemplateVariablesResponse>> {
    let report = state
        .prompt_service
        .template_report(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("Prompt", &id))?;

    Ok(Json(report.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/prompts", get(list_prompts).post(create_prompt))
        .route(
            "/prompts/:id",
            get(get_prompt)
                .put(update_prompt)
                .patch(patch_prompt)
                .delete(delete_prompt),
        )
        .route("/prompts/:id/variables", get(get_prompt_variables))
}
