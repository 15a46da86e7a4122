/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - enforcer: PolicyEnforcer (shared platform secret, read-only after startup)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use crate::services::auth::PolicyEnforcer;

#[derive(Clone, Debug)]
pub struct AppState {
    pub enforcer: PolicyEnforcer,
}

impl AppState {
    pub fn new(enforcer: PolicyEnforcer) -> Self {
        Self { enforcer }
    }
}
