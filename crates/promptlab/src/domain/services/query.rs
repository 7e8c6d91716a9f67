//! Query pipeline over prompt snapshots
//!
//! filter → search → sort, as used by the prompt listing.

use crate::domain::entities::Prompt;
use crate::domain::value_objects::PromptQuery;

/// Keep prompts whose collection id equals `collection_id` exactly
pub fn filter_by_collection(prompts: Vec<Prompt>, collection_id: &str) -> Vec<Prompt> {
    prompts
        .into_iter()
        .filter(|p| p.collection_id() == Some(collection_id))
        .collect()
}

/// Case-insensitive substring match on title or description.
///
/// The empty query matches every prompt.
pub fn search(prompts: Vec<Prompt>, query: &str) -> Vec<Prompt> {
    let needle = query.to_lowercase();
    prompts
        .into_iter()
        .filter(|p| {
            p.title().to_lowercase().contains(&needle)
                || p
                    .description()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Stable sort by creation time; equal timestamps keep their input order
pub fn sort_by_date(mut prompts: Vec<Prompt>, descending: bool) -> Vec<Prompt> {
    if descending {
        prompts.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    } else {
        prompts.sort_by_key(|p| p.created_at());
    }
    prompts
}

/// Run the listing pipeline: collection filter, search, then newest first
pub fn apply_query(prompts: Vec<Prompt>, query: &PromptQuery) -> Vec<Prompt> {
    let total = prompts.len();

    let prompts = match query.collection_filter() {
        Some(collection_id) => filter_by_collection(prompts, collection_id),
        None => prompts,
    };

    let prompts = match query.search_text() {
        Some(text) => search(prompts, text),
        None => prompts,
    };

    tracing::debug!("Prompt query matched {} of {}", prompts.len(), total);

    sort_by_date(prompts, true)
}
