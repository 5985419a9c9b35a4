use estatedesk_application::{ComposedItem, ComposedSection, SearchPanelEntry, SearchSessionStatus};
use estatedesk_domain::Module;
use serde::Serialize;

/// Everything the dashboard shell needs for one render of the session.
#[derive(Debug, Serialize)]
pub struct DashboardSnapshotResponse {
    pub display_name: String,
    pub role: Option<String>,
    pub role_display_name: String,
    pub permission_matrix_version: String,
    pub accessible_modules: Vec<&'static str>,
    pub landing_path: Option<String>,
    pub current_route: String,
    pub page: PageAccessResponse,
    pub quick_actions: Vec<&'static str>,
    pub navigation: Vec<NavigationSectionResponse>,
    pub search: Option<SearchPanelResponse>,
}

/// Route guard outcome for the current route.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PageAccessResponse {
    Allowed { module: String },
    Denied { module: String, message: String },
}

/// Visible navigation section.
#[derive(Debug, Serialize)]
pub struct NavigationSectionResponse {
    pub label: String,
    pub items: Vec<NavigationItemResponse>,
}

/// Visible navigation item.
#[derive(Debug, Serialize)]
pub struct NavigationItemResponse {
    pub label: String,
    pub icon: Option<String>,
    pub target_path: String,
    pub is_active: bool,
    pub is_expanded: bool,
    pub children: Vec<NavigationItemResponse>,
}

/// Search surface projection.
#[derive(Debug, Serialize)]
pub struct SearchPanelResponse {
    pub query: String,
    pub status: &'static str,
    pub results: Vec<SearchResultResponse>,
    pub empty_message: Option<&'static str>,
}

/// One search result row.
#[derive(Debug, Serialize)]
pub struct SearchResultResponse {
    pub rank: usize,
    pub entity: &'static str,
    pub title: String,
    pub subtitle: String,
    pub destination: String,
}

impl From<ComposedSection> for NavigationSectionResponse {
    fn from(value: ComposedSection) -> Self {
        Self {
            label: value.label,
            items: value.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ComposedItem> for NavigationItemResponse {
    fn from(value: ComposedItem) -> Self {
        Self {
            label: value.label,
            icon: value.icon,
            target_path: value.target_path,
            is_active: value.is_active || value.has_active_child,
            is_expanded: value.is_expanded,
            children: value.children.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<SearchPanelEntry> for SearchResultResponse {
    fn from(value: SearchPanelEntry) -> Self {
        Self {
            rank: value.rank,
            entity: value.entity_label,
            title: value.title,
            subtitle: value.subtitle,
            destination: value.destination,
        }
    }
}

pub fn module_names(modules: &[Module]) -> Vec<&'static str> {
    modules.iter().map(Module::as_str).collect()
}

pub fn status_name(status: SearchSessionStatus) -> &'static str {
    match status {
        SearchSessionStatus::Closed => "closed",
        SearchSessionStatus::OpenEmpty => "open_empty",
        SearchSessionStatus::OpenResults => "open_results",
        SearchSessionStatus::OpenNoMatch => "open_no_match",
    }
}
