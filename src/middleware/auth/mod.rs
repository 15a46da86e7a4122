pub mod policy;
pub mod setup;
