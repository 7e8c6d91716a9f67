//! Collection DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use promptlab::{Collection, CollectionDraft};

/// Create Collection request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCollectionRequest {
    pub name: String,
    pub description: Option<String>,
}

impl From<CreateCollectionRequest> for CollectionDraft {
    fn from(req: CreateCollectionRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

/// Collection response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CollectionResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "promptlab::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl From<Collection> for CollectionResponse {
    fn from(collection: Collection) -> Self {
        Self {
            id: collection.id().to_string(),
            name: collection.name().to_string(),
            description: collection.description().map(str::to_string),
            created_at: collection.created_at(),
        }
    }
}

/// Collection list response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CollectionListResponse {
    pub collections: Vec<CollectionResponse>,
    pub total: usize,
}

impl From<Vec<Collection>> for CollectionListResponse {
    fn from(collections: Vec<Collection>) -> Self {
        let collections: Vec<CollectionResponse> =
            collections.into_iter().map(Into::into).collect();
        Self {
            total: collections.len(),
            collections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_timestamp_is_fixed_width() {
        let collection = Collection::new(CollectionDraft::new("Work")).unwrap();
        let json = serde_json::to_value(CollectionResponse::from(collection.clone())).unwrap();

        assert_eq!(
            json["created_at"],
            promptlab::timestamp::format(&collection.created_at())
        );
        assert_eq!(
            json["created_at"].as_str().unwrap().len(),
            "2026-01-01T00:00:00.000000Z".len()
        );
    }
}
