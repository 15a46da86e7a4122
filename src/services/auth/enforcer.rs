//! PolicyEnforcer: the long-lived half of the Dataporten integration.
//!
//! Holds the shared platform secret and hands out the three pipeline stages:
//!
//! - `cors`   : permissive CORS headers, bare 204 for OPTIONS
//! - `setup`  : authenticate the platform hop, parse trusted headers into an `AccessContext`
//! - `policy` : evaluate a `Policy` against that context
//!
//! Layers added later run first, so wrap in reverse order:
//! ```ignore
//! let api = enforcer.policy(api, Policy::new().require_user());
//! let api = enforcer.setup(api);
//! let api = enforcer.cors(api);
//! ```

use std::fmt;
use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderMap, header};
use subtle::ConstantTimeEq;

use crate::api::v1::extractors::AccessContext;
use crate::middleware;
use crate::services::auth::basic::BasicCredentials;
use crate::services::auth::error::AccessError;
use crate::services::auth::policy::Policy;

/// The only username the platform authenticates with.
pub const PLATFORM_USERNAME: &str = "dataporten";

#[derive(Clone)]
pub struct PolicyEnforcer {
    password: Arc<str>,
}

impl fmt::Debug for PolicyEnforcer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyEnforcer")
            .field("password", &"<redacted>")
            .finish()
    }
}

impl PolicyEnforcer {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: Arc::from(password.into()),
        }
    }

    /// Platform → service trust boundary. Nothing from `x-dataporten-*` is trusted
    /// unless this passes.
    pub fn authenticate_platform(&self, headers: &HeaderMap) -> Result<(), AccessError> {
        let Some(value) = headers.get(header::AUTHORIZATION) else {
            return Err(AccessError::MissingCredentials);
        };
        if value.is_empty() {
            return Err(AccessError::MissingCredentials);
        }

        let value = value
            .to_str()
            .map_err(|_| AccessError::AuthenticationFailed)?;
        let creds = BasicCredentials::parse(value);

        let ok = creds.scheme == "Basic"
            && creds.username == PLATFORM_USERNAME
            && bool::from(creds.password.as_bytes().ct_eq(self.password.as_bytes()));

        if !ok {
            // never log the provided password
            tracing::debug!(
                scheme = %creds.scheme,
                username = %creds.username,
                "platform credentials rejected"
            );
            return Err(AccessError::AuthenticationFailed);
        }

        Ok(())
    }

    /// Authenticate, then parse. Header parsing never runs for an unauthenticated hop.
    pub fn init(&self, headers: &HeaderMap) -> Result<AccessContext, AccessError> {
        self.authenticate_platform(headers)?;
        Ok(AccessContext::from_headers(headers).into_initialized())
    }

    pub fn cors<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        middleware::cors::apply(router)
    }

    pub fn setup<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        middleware::auth::setup::apply(router, self.clone())
    }

    pub fn policy<S>(&self, router: Router<S>, policy: Policy) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        middleware::auth::policy::apply(router, policy)
    }
}
