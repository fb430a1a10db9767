//! Clubdesk authentication and authorization
//!
//! Resolves an inbound session credential into an [`AuthSession`]
//! (identity + profile, or anonymous) and provides the elevation
//! predicate every privileged mutation action checks. Resolution is
//! infallible: internal faults degrade to the anonymous session.

pub mod backend;
pub mod claims;
pub mod config;
pub mod error;
pub mod extractors;
pub mod jwt;
pub mod session;
pub mod types;

pub use backend::AuthBackend;
pub use claims::SessionClaims;
pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::{AuthUser, ElevatedUser, MaybeAuthUser};
pub use session::AuthSession;
pub use types::{Identity, Profile, Role};
