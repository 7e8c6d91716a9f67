//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    // Collection models
    CollectionListResponse,
    CollectionResponse,
    CreateCollectionRequest,
    // Prompt models
    CreatePromptRequest,
    PatchPromptRequest,
    PromptListResponse,
    PromptResponse,
    TemplateVariablesResponse,
    UpdatePromptRequest,
};
use crate::HealthCheck;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health_check,
        // Prompt endpoints
        super::prompt::list_prompts,
        super::prompt::get_prompt,
        super::prompt::create_prompt,
        super::prompt::update_prompt,
        super::prompt::patch_prompt,
        super::prompt::delete_prompt,
        super::prompt::get_prompt_variables,
        // Collection endpoints
        super::collection::list_collections,
        super::collection::get_collection,
        super::collection::create_collection,
        super::collection::delete_collection,
    ),
    info(
        title = "PromptLab API",
        description = "Prompt template management organized into collections.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Prompt", description = "Prompt - Text templates with metadata"),
        (name = "Collection", description = "Collection - Named groupings of prompts"),
    ),
    components(
        schemas(
            HealthCheck,
            // Prompt
            CreatePromptRequest,
            UpdatePromptRequest,
            PatchPromptRequest,
            PromptResponse,
            PromptListResponse,
            TemplateVariablesResponse,
            // Collection
            CreateCollectionRequest,
            CollectionResponse,
            CollectionListResponse,
        )
    ),
)]
pub struct ApiDoc;
