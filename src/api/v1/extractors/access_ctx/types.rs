/*
 * Responsibility
 * - Per-request identity/scope state asserted by the Dataporten platform
 * - Predicates (has_*) and requirements (require_*) evaluated by policies and handlers
 *
 * Notes
 * - Platform authentication happens before this type is built (PolicyEnforcer::init);
 *   a context with `initialized == true` only ever exists for an authenticated hop.
 * - Lives in request extensions for exactly one request, never shared.
 */
use axum::http::HeaderMap;

use crate::services::auth::error::{
    AccessError, SCOPES_REQUIRED, USER_REQUIRED, USER_REQUIRED_UNLESS_SCOPES,
};

pub const HEADER_USERID: &str = "x-dataporten-userid";
pub const HEADER_USERID_SEC: &str = "x-dataporten-userid-sec";
pub const HEADER_SCOPES: &str = "x-dataporten-scopes";
pub const HEADER_CLIENTID: &str = "x-dataporten-clientid";
/// Presence of this header triggers the access token read...
pub const HEADER_ACCESSTOKEN: &str = "x-dataporten-accesstoken";
/// ...but the value itself is taken from this one. Kept as the gateway contract states it.
pub const HEADER_TOKEN: &str = "x-dataporten-token";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessContext {
    pub user_id: Option<String>,
    pub user_id_sec: Option<Vec<String>>,
    pub client_id: Option<String>,
    /// `None` means the platform asserted nothing; `Some(vec![])` never comes from headers.
    pub scopes: Option<Vec<String>>,
    pub access_token: Option<String>,
    initialized: bool,
}

// UTF-8 when it is valid, otherwise latin1 (every byte maps to one char)
fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

// Presence is decided by the name alone; repeated headers are joined with ", "
fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    let mut values = headers.get_all(name).iter().peekable();
    values.peek()?;

    Some(
        values
            .map(|v| decode(v.as_bytes()))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

// No trimming, no filtering of empty entries: "" -> [""]
fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(str::to_string).collect()
}

impl AccessContext {
    /// Read the trusted `x-dataporten-*` headers. Each one is optional on its own.
    ///
    /// The result is not initialized; only `PolicyEnforcer::init` marks it so,
    /// after the platform hop is authenticated.
    pub(crate) fn from_headers(headers: &HeaderMap) -> Self {
        let access_token = headers
            .contains_key(HEADER_ACCESSTOKEN)
            .then(|| header(headers, HEADER_TOKEN))
            .flatten();

        Self {
            user_id: header(headers, HEADER_USERID),
            user_id_sec: header(headers, HEADER_USERID_SEC).as_deref().map(split_list),
            client_id: header(headers, HEADER_CLIENTID),
            scopes: header(headers, HEADER_SCOPES).as_deref().map(split_list),
            access_token,
            initialized: false,
        }
    }

    pub(crate) fn into_initialized(mut self) -> Self {
        self.initialized = true;
        self
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn has_user(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn require_user(&self) -> Result<(), AccessError> {
        if !self.has_user() {
            return Err(AccessError::AuthorizationDenied(USER_REQUIRED));
        }
        Ok(())
    }

    /// Satisfied by scopes alone. User presence is not consulted.
    pub fn require_user_unless_scopes<S: AsRef<str>>(
        &self,
        required: &[S],
    ) -> Result<(), AccessError> {
        if !self.has_scopes(required) {
            return Err(AccessError::AuthorizationDenied(USER_REQUIRED_UNLESS_SCOPES));
        }
        Ok(())
    }

    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes
            .as_ref()
            .is_some_and(|scopes| scopes.iter().any(|s| s == scope))
    }

    /// Every scope must be present. An empty list is always satisfied.
    pub fn has_scopes<S: AsRef<str>>(&self, scopes: &[S]) -> bool {
        scopes.iter().all(|s| self.has_scope(s.as_ref()))
    }

    pub fn require_scopes<S: AsRef<str>>(&self, scopes: &[S]) -> Result<(), AccessError> {
        if !self.has_scopes(scopes) {
            return Err(AccessError::AuthorizationDenied(SCOPES_REQUIRED));
        }
        Ok(())
    }
}
