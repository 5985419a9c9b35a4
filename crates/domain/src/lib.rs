//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod module;
mod navigation;
mod permission_matrix;
mod role;
mod search;

pub use module::Module;
pub use navigation::{NavigationNode, NavigationSection, NavigationTree, RouteLocation};
pub use permission_matrix::{PermissionMatrix, PermissionSet, STANDARD_MATRIX_VERSION};
pub use role::Role;
pub use search::{
    DealRecord, DealStatus, DealType, EntityType, LeadRecord, PropertyRecord, ROUTE_ID_PLACEHOLDER,
    SearchDocument, SearchResult, SearchableEntity, UNRESOLVED_REFERENCE_PLACEHOLDER, UserRecord,
};
