use std::env;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

const DEFAULT_CURRENT_ROUTE: &str = "/dashboard";

/// Runtime configuration of the dashboard composition root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub role_token: Option<String>,
    pub current_route: String,
    pub permission_matrix_path: Option<PathBuf>,
    pub search_query: Option<String>,
}

impl DashboardConfig {
    pub fn load() -> Self {
        Self::from_sources(|name| env::var(name).ok(), env::args().skip(1))
    }

    pub fn from_sources(
        lookup: impl Fn(&str) -> Option<String>,
        args: impl IntoIterator<Item = String>,
    ) -> Self {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let args_query = args.into_iter().collect::<Vec<_>>().join(" ");
        let search_query = if args_query.trim().is_empty() {
            non_empty("DASHBOARD_SEARCH_QUERY")
        } else {
            Some(args_query)
        };

        Self {
            role_token: non_empty("DASHBOARD_ROLE"),
            current_route: non_empty("DASHBOARD_CURRENT_ROUTE")
                .unwrap_or_else(|| DEFAULT_CURRENT_ROUTE.to_owned()),
            permission_matrix_path: non_empty("DASHBOARD_PERMISSION_MATRIX_PATH")
                .map(PathBuf::from),
            search_query,
        }
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
