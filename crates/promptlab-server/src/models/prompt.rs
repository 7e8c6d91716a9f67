//! Prompt DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use promptlab::{Prompt, PromptDraft, PromptPatch, PromptQuery};

use crate::application::TemplateReport;

/// Create Prompt request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePromptRequest {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub collection_id: Option<String>,
}

impl From<CreatePromptRequest> for PromptDraft {
    fn from(req: CreatePromptRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            description: req.description,
            collection_id: req.collection_id,
        }
    }
}

/// Full update request (PUT); omitted optional fields become empty
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePromptRequest {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub collection_id: Option<String>,
}

impl From<UpdatePromptRequest> for PromptDraft {
    fn from(req: UpdatePromptRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            description: req.description,
            collection_id: req.collection_id,
        }
    }
}

/// Partial update request (PATCH); omitted or null fields keep their value
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchPromptRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
    pub collection_id: Option<String>,
}

impl From<PatchPromptRequest> for PromptPatch {
    fn from(req: PatchPromptRequest) -> Self {
        Self {
            title: req.title.into(),
            content: req.content.into(),
            description: req.description.into(),
            collection_id: req.collection_id.into(),
        }
    }
}

/// Query parameters for listing prompts
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPromptsQuery {
    /// Only prompts in this collection
    pub collection_id: Option<String>,
    /// Case-insensitive match on title or description
    pub search: Option<String>,
}

impl From<ListPromptsQuery> for PromptQuery {
    fn from(query: ListPromptsQuery) -> Self {
        PromptQuery::new(query.collection_id, query.search)
    }
}

/// Prompt response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PromptResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub collection_id: Option<String>,
    #[serde(with = "promptlab::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "promptlab::timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl From<Prompt> for PromptResponse {
    fn from(prompt: Prompt) -> Self {
        Self {
            id: prompt.id().to_string(),
            title: prompt.title().to_string(),
            content: prompt.content().to_string(),
            description: prompt.description().map(str::to_string),
            collection_id: prompt.collection_id().map(str::to_string),
            created_at: prompt.created_at(),
            updated_at: prompt.updated_at(),
        }
    }
}

/// Prompt list response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PromptListResponse {
    pub prompts: Vec<PromptResponse>,
    pub total: usize,
}

impl From<Vec<Prompt>> for PromptListResponse {
    fn from(prompts: Vec<Prompt>) -> Self {
        let prompts: Vec<PromptResponse> = prompts.into_iter().map(Into::into).collect();
        Self {
            total: prompts.len(),
            prompts,
        }
    }
}

/// Template variables of a prompt
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TemplateVariablesResponse {
    pub prompt_id: String,
    /// `{{name}}` placeholders in order of appearance
    pub variables: Vec<String>,
    /// Whether the content passes the minimum-length check
    pub content_valid: bool,
}

impl From<TemplateReport> for TemplateVariablesResponse {
    fn from(report: TemplateReport) -> Self {
        Self {
            prompt_id: report.prompt_id,
            variables: report.variables,
            content_valid: report.content_valid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use promptlab::FieldUpdate;

    #[test]
    fn test_patch_request_null_and_missing_are_omitted() {
        let req: PatchPromptRequest =
            serde_json::from_str(r#"{"title": "New", "description": null}"#).unwrap();
        let patch = PromptPatch::from(req);

        assert_eq!(patch.title, FieldUpdate::Provided("New".to_string()));
        assert_eq!(patch.description, FieldUpdate::Omitted);
        assert_eq!(patch.content, FieldUpdate::Omitted);
        assert_eq!(patch.collection_id, FieldUpdate::Omitted);
    }

    #[test]
    fn test_update_request_requires_title_and_content() {
        let result = serde_json::from_str::<UpdatePromptRequest>(r#"{"title": "Only"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_prompt_response_serializes_all_fields() {
        let prompt = Prompt::new(PromptDraft::new("Title", "Content")).unwrap();
        let json = serde_json::to_value(PromptResponse::from(prompt.clone())).unwrap();

        assert_eq!(json["id"], prompt.id());
        assert_eq!(json["title"], "Title");
        assert!(json["description"].is_null());
        assert!(json["created_at"].is_string());
        assert!(json["updated_at"].is_string());
    }

    #[test]
    fn test_timestamps_render_with_fixed_precision() {
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let response = |created_at: DateTime<Utc>| PromptResponse {
            id: "p-1".to_string(),
            title: "Title".to_string(),
            content: "Content".to_string(),
            description: None,
            collection_id: None,
            created_at,
            updated_at: created_at,
        };

        let earlier = serde_json::to_value(response(base + Duration::milliseconds(120))).unwrap();
        let later =
            serde_json::to_value(response(base + Duration::nanoseconds(120_000_001))).unwrap();
        let much_later =
            serde_json::to_value(response(base + Duration::microseconds(120_001))).unwrap();

        assert_eq!(earlier["created_at"], "2026-01-01T00:00:00.120000Z");
        assert_eq!(later["updated_at"], "2026-01-01T00:00:00.120000Z");
        assert!(earlier["created_at"].as_str() <= later["created_at"].as_str());
        assert!(later["created_at"].as_str() < much_later["created_at"].as_str());
    }
}
