//! Resources domain: curated learning resources

pub mod actions;
pub mod api;
pub mod domain;
pub mod repository;
pub mod testing;

pub use domain::{Resource, ResourceDraft, ResourceStatus};
pub use repository::{PgResourceStore, ResourceStore};

pub use actions::ResourcesState;
pub use api::{routes, ResourcesApiState};
