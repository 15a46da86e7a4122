pub mod access_ctx;

pub use access_ctx::{AccessContext, AccessCtx};
