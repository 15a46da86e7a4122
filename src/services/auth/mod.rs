pub mod basic;
pub mod enforcer;
pub mod error;
pub mod factory;
pub mod policy;

pub use enforcer::PolicyEnforcer;
pub use error::AccessError;
pub use factory::build_enforcer;
pub use policy::{Policy, Requirement};
