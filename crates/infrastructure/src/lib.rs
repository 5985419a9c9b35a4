//! Infrastructure adapters: in-memory collections, fixtures and configuration files.

#![forbid(unsafe_code)]

mod dashboard_navigation;
mod fixture_dataset;
mod in_memory_entity_repository;
mod permission_matrix_file;

pub use dashboard_navigation::standard_navigation;
pub use fixture_dataset::standard_dataset;
pub use in_memory_entity_repository::InMemoryEntityRepository;
pub use permission_matrix_file::{load_permission_matrix, parse_permission_matrix};
