//! EstateDesk dashboard composition root.
//!
//! Resolves the session role against the permission matrix, composes the
//! navigation menu, runs the route guard for the current route and, when a
//! query is given, drives one search session. The snapshot is printed as JSON.

#![forbid(unsafe_code)]

mod dashboard_config;
mod dto;

use std::sync::Arc;

use estatedesk_application::{
    ElementGuard, EntitySearchService, GuardOutcome, NavigationComposer, NavigationUiState,
    PermissionResolver, RouteGuard, SearchPanelView, SearchSession,
};
use estatedesk_core::{AppError, AppResult, SessionIdentity};
use estatedesk_domain::{Module, PermissionMatrix, Role, RouteLocation};
use estatedesk_infrastructure::{load_permission_matrix, standard_dataset, standard_navigation};
use tracing::{info, warn};

use crate::dashboard_config::{DashboardConfig, init_tracing};
use crate::dto::{
    DashboardSnapshotResponse, NavigationSectionResponse, PageAccessResponse, SearchPanelResponse,
    module_names, status_name,
};

const QUICK_ACTIONS: &[(Module, &str)] = &[
    (Module::Properties, "new_property"),
    (Module::Leads, "new_lead"),
    (Module::Visits, "schedule_visit"),
    (Module::Reports, "export_report"),
    (Module::Users, "invite_user"),
];

fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = DashboardConfig::load();
    let snapshot = build_snapshot(&config)?;

    let rendered = serde_json::to_string_pretty(&snapshot)
        .map_err(|error| AppError::Internal(format!("failed to render snapshot: {error}")))?;
    println!("{rendered}");

    Ok(())
}

fn build_snapshot(config: &DashboardConfig) -> AppResult<DashboardSnapshotResponse> {
    let matrix = match config.permission_matrix_path.as_deref() {
        Some(path) => load_permission_matrix(path)?,
        None => PermissionMatrix::standard(),
    };
    let resolver = PermissionResolver::new(Arc::new(matrix));

    let identity = SessionIdentity::new("local", "Local session", config.role_token.clone());
    let role = identity.role_token().and_then(Role::from_token);
    if let (Some(token), None) = (identity.role_token(), role) {
        warn!(
            role = token,
            "session role is not recognized; access is denied everywhere"
        );
    }
    info!(
        subject = identity.subject(),
        role = identity.role_token().unwrap_or("none"),
        matrix_version = resolver.matrix().version(),
        "composing dashboard"
    );

    let composer = NavigationComposer::new(standard_navigation()?);
    let navigation = composer
        .compose(
            role,
            &NavigationUiState::new(),
            config.current_route.as_str(),
        )
        .into_iter()
        .map(NavigationSectionResponse::from)
        .collect();

    let page_module = guarded_module(config.current_route.as_str());
    let page = match RouteGuard::new(page_module.as_str()).render(&resolver, role, || ()) {
        GuardOutcome::Allowed(()) => PageAccessResponse::Allowed {
            module: page_module,
        },
        GuardOutcome::Denied(denied) => PageAccessResponse::Denied {
            module: page_module,
            message: denied.message.to_owned(),
        },
    };

    let quick_actions = QUICK_ACTIONS
        .iter()
        .filter_map(|(module, action)| {
            ElementGuard::for_module(*module).render(&resolver, role, || *action)
        })
        .collect();

    let search = match config.search_query.as_deref() {
        Some(query) => Some(run_search(query)?),
        None => None,
    };

    Ok(DashboardSnapshotResponse {
        display_name: identity.display_name().to_owned(),
        role: role.map(|role| role.as_str().to_owned()),
        role_display_name: identity
            .role_token()
            .map(|token| resolver.role_display_name(token))
            .unwrap_or_default(),
        permission_matrix_version: resolver.matrix().version().to_owned(),
        accessible_modules: module_names(&resolver.accessible_modules(role)),
        landing_path: composer.landing_path(role),
        current_route: config.current_route.clone(),
        page,
        quick_actions,
        navigation,
        search,
    })
}

/// Module guarding a route, taken from its first path segment.
///
/// The root route belongs to the dashboard.
fn guarded_module(route: &str) -> String {
    let location = RouteLocation::parse(route);
    match location.path.trim_start_matches('/').split('/').next() {
        Some(segment) if !segment.is_empty() => segment.to_owned(),
        _ => Module::Dashboard.as_str().to_owned(),
    }
}

fn run_search(query: &str) -> AppResult<SearchPanelResponse> {
    let repository = standard_dataset()?;
    let mut session = SearchSession::new(EntitySearchService::new(Arc::new(repository)));

    session.focus();
    session.input(query);

    let view = SearchPanelView::from_state(session.state());
    Ok(SearchPanelResponse {
        query: session.state().query().to_owned(),
        status: status_name(session.status()),
        results: view.entries.into_iter().map(Into::into).collect(),
        empty_message: view.empty_message,
    })
}

#[cfg(test)]
mod tests {
    use crate::dashboard_config::DashboardConfig;
    use crate::dto::PageAccessResponse;

    use super::{build_snapshot, guarded_module};

    fn config(role: &str, route: &str, query: Option<&str>) -> DashboardConfig {
        DashboardConfig {
            role_token: Some(role.to_owned()),
            current_route: route.to_owned(),
            permission_matrix_path: None,
            search_query: query.map(str::to_owned),
        }
    }

    #[test]
    fn root_route_is_guarded_by_dashboard() {
        assert_eq!(guarded_module("/"), "dashboard");
        assert_eq!(guarded_module(""), "dashboard");
        assert_eq!(guarded_module("/?tab=today"), "dashboard");
        assert_eq!(guarded_module("/deals/commissions"), "deals");
        assert_eq!(guarded_module("/leads?status=new"), "leads");
    }

    #[test]
    fn financial_role_is_denied_the_properties_page() {
        let snapshot = build_snapshot(&config("financial", "/properties", None))
            .unwrap_or_else(|_| unreachable!());

        assert!(matches!(
            snapshot.page,
            PageAccessResponse::Denied { ref module, .. } if module == "properties"
        ));
        assert_eq!(snapshot.role.as_deref(), Some("financial"));
        assert!(!snapshot.accessible_modules.contains(&"properties"));
        assert!(!snapshot.quick_actions.contains(&"new_property"));
    }

    #[test]
    fn owner_opens_the_root_route() {
        let snapshot =
            build_snapshot(&config("owner", "/", None)).unwrap_or_else(|_| unreachable!());

        assert!(matches!(
            snapshot.page,
            PageAccessResponse::Allowed { ref module } if module == "dashboard"
        ));
        assert_eq!(snapshot.display_name, "Local session");
        assert_eq!(snapshot.landing_path.as_deref(), Some("/dashboard"));
        assert_eq!(snapshot.navigation.len(), 5);
    }

    #[test]
    fn unknown_role_sees_nothing_but_keeps_its_label() {
        let snapshot = build_snapshot(&config("intern", "/dashboard", None))
            .unwrap_or_else(|_| unreachable!());

        assert_eq!(snapshot.role, None);
        assert_eq!(snapshot.role_display_name, "intern");
        assert!(snapshot.navigation.is_empty());
        assert!(snapshot.accessible_modules.is_empty());
        assert!(matches!(snapshot.page, PageAccessResponse::Denied { .. }));
    }

    #[test]
    fn search_query_runs_one_session() {
        let snapshot = build_snapshot(&config("agent", "/dashboard", Some("joa")))
            .unwrap_or_else(|_| unreachable!());

        let search = snapshot.search.unwrap_or_else(|| unreachable!());
        assert_eq!(search.status, "open_results");
        assert_eq!(search.results.len(), 1);
        assert_eq!(search.results[0].destination, "/leads/l-201");
        assert_eq!(search.empty_message, None);
    }
}
