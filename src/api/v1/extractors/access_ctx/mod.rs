/*!
 * Dataporten access context extractor
 *
 * Responsibility:
 * - Hand the per-request AccessContext (built by the setup stage) to handlers
 * - axum glue stays in core, the context type and its predicates in types
 *
 * Public API:
 * - AccessContext
 * - AccessCtx
 */

mod core;
mod types;

pub use self::core::AccessCtx;
pub use types::*;
