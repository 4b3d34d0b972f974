//! Users Domain
//!
//! Member accounts for the sportcenter: registration, sign-in, profile edits
//! and role-based administration.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, RequestContext (session)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Registration/update/auth rules, RolePolicy
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Gateways (trait + in-memory and Postgres)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← User, Role, patches, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{
//!     handlers,
//!     repository::InMemoryUserRepository,
//!     role_service::RolePolicy,
//!     service::UserService,
//! };
//!
//! let service = UserService::new(InMemoryUserRepository::new(), RolePolicy::default());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod messages;
pub mod models;
pub mod password;
pub mod postgres;
pub mod repository;
pub mod role_repository;
pub mod role_service;
pub mod service;
pub mod session;
pub mod validation;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use models::{
    AdminPatch, Gender, LoginRequest, NewUser, ProfileUpdate, RegisterRequest, Role, RoleInput,
    User, UserPatch, UserResponse, UserSearch, UsersPage,
};
pub use postgres::{PgRoleRepository, PgUserRepository};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use role_repository::{InMemoryRoleRepository, RoleRepository};
pub use role_service::{RolePolicy, RoleService};
pub use service::{UserService, filter_users, paginate};
pub use session::{Notice, NoticeKind, Principal, RequestContext};
