use std::collections::HashMap;
use std::sync::Arc;

use estatedesk_core::AppResult;
use estatedesk_domain::{SearchResult, SearchableEntity, UNRESOLVED_REFERENCE_PLACEHOLDER};
use tracing::{debug, warn};

use crate::EntityCollectionRepository;


/// Maximum number of results returned for one query.
pub const SEARCH_RESULT_LIMIT: usize = 10;

/// Queries must be longer than this many characters after trimming.
pub const SEARCH_MIN_QUERY_CHARS: usize = 2;

/// Returns whether the query is long enough to run a search.
#[must_use]
pub fn is_searchable_query(query: &str) -> bool {
    query.trim().chars().count() > SEARCH_MIN_QUERY_CHARS
}

/// Cross-entity substring search over the dashboard collections.
#[derive(Clone)]
pub struct EntitySearchService {
    repository: Arc<dyn EntityCollectionRepository>,
}

impl EntitySearchService {
    /// Creates a new search service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn EntityCollectionRepository>) -> Self {
        Self { repository }
    }

    /// Returns up to ten matches in collection priority order.
    ///
    /// Properties come first, then users, leads and deals, each in natural
    /// order. Matching is case-insensitive substring containment against the
    /// trimmed query. Short queries return nothing without reading any
    /// collection.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        if !is_searchable_query(query) {
            return Vec::new();
        }
        let needle = query.trim().to_lowercase();

        let properties = load_collection("properties", self.repository.list_properties());
        let users = load_collection("users", self.repository.list_users());
        let leads = load_collection("leads", self.repository.list_leads());
        let deals = load_collection("deals", self.repository.list_deals());

        let agent_names: HashMap<&str, &str> =
            users.iter().map(|user| (user.id(), user.name())).collect();

        let entities = properties
            .iter()
            .map(SearchableEntity::Property)
            .chain(users.iter().map(SearchableEntity::User))
            .chain(leads.iter().map(SearchableEntity::Lead))
            .chain(deals.iter().map(SearchableEntity::Deal));

        entities
            .map(|entity| {
                let agent_name = resolve_agent_name(&agent_names, &entity);
                entity.document(agent_name)
            })
            .filter(|document| document.matches(needle.as_str()))
            .take(SEARCH_RESULT_LIMIT)
            .enumerate()
            .map(|(index, document)| document.into_result(index + 1))
            .collect()
    }
}

fn load_collection<T>(collection: &str, result: AppResult<Vec<T>>) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(error) => {
            warn!(collection, %error, "search skipped unreadable collection");
            Vec::new()
        }
    }
}

fn resolve_agent_name<'a>(
    agent_names: &HashMap<&'a str, &'a str>,
    entity: &SearchableEntity<'_>,
) -> &'a str {
    let Some(agent_id) = entity.agent_reference() else {
        return UNRESOLVED_REFERENCE_PLACEHOLDER;
    };

    match agent_names.get(agent_id).copied() {
        Some(name) => name,
        None => {
            debug!(
                entity_type = entity.entity_type().as_str(),
                record_id = entity.id(),
                agent_id,
                "agent reference did not resolve"
            );
            UNRESOLVED_REFERENCE_PLACEHOLDER
        }
    }
}
