//! Members domain: the club's public roster

pub mod actions;
pub mod api;
pub mod domain;
pub mod repository;
pub mod testing;

pub use domain::{Member, MemberDraft};
pub use repository::{MemberStore, PgMemberStore};

pub use actions::MembersState;
pub use api::{routes, MembersApiState};
