//! Application services and ports.

#![forbid(unsafe_code)]

mod access_guard;
mod navigation_composer;
mod permission_resolver;
mod search_ports;
mod search_presentation;
mod search_service;
mod search_session;

pub use access_guard::{
    ACCESS_DENIED_MESSAGE, AccessDecision, AccessDenied, DenialReason, ElementGuard, GuardOutcome,
    ModuleRequirement, RouteGuard, evaluate_access,
};
pub use navigation_composer::{
    ComposedItem, ComposedSection, NavigationComposer, NavigationUiState, filter_navigation,
    is_route_active,
};
pub use permission_resolver::PermissionResolver;
pub use search_ports::EntityCollectionRepository;
pub use search_presentation::{
    NO_RESULTS_MESSAGE, Navigator, SearchPanelEntry, SearchPanelView, activate_highlighted,
    activate_result,
};
pub use search_service::{
    EntitySearchService, SEARCH_MIN_QUERY_CHARS, SEARCH_RESULT_LIMIT, is_searchable_query,
};
pub use search_session::{SearchSession, SearchSessionState, SearchSessionStatus};
