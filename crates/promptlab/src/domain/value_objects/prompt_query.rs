//! PromptQuery - Criteria for listing prompts

/// Criteria applied by the prompt list pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptQuery {
    /// Keep only prompts in this collection (empty means no filter)
    pub collection_id: Option<String>,
    /// Case-insensitive text matched against title and description
    pub search: Option<String>,
}

impl PromptQuery {
    pub fn new(collection_id: Option<String>, search: Option<String>) -> Self {
        Self {
            collection_id,
            search,
        }
    }

    /// Collection filter, if one should be applied
    pub fn collection_filter(&self) -> Option<&str> {
        self.collection_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Search text, if one should be applied
    pub fn search_text(&self) -> Option<&str> {
        self.search.as_deref()
    }
}
