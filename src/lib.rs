pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

pub use api::v1::extractors::{AccessContext, AccessCtx};
pub use services::auth::{AccessError, Policy, PolicyEnforcer, Requirement};
