/*
 * Responsibility
 * - Failure kinds of platform authentication and policy evaluation
 * - Display strings are part of the external contract (they end up in the
 *   `{"message": ...}` body), keep them byte-for-byte
 */
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// No `Authorization` header on the request.
    #[error("Missing Authorization header")]
    MissingCredentials,

    /// Credential present but not `Basic dataporten:<secret>`.
    #[error("Request was not propertly authenticated from the Connect platform.")]
    AuthenticationFailed,

    /// A policy requirement was not met.
    #[error("{0}")]
    AuthorizationDenied(&'static str),

    /// The pipeline or a policy declaration is wired up wrong.
    #[error("{0}")]
    Configuration(String),
}

pub const USER_REQUIRED: &str =
    "Request is required to be on behalf of an authenticated end user but is not.";

pub const USER_REQUIRED_UNLESS_SCOPES: &str = "Request is required to be on behalf of an authenticated end user but is not. \
     This requirement is relaxed when request is authorized with the sufficient scopes";

pub const SCOPES_REQUIRED: &str = "Request is not authorized with all the required sub scopes";

impl AccessError {
    pub fn setup_required() -> Self {
        Self::Configuration(
            "Dataporten needs to be setup before we can run a policy. Use the setup() middleware first."
                .to_string(),
        )
    }

    pub fn unknown_policy(key: &str) -> Self {
        Self::Configuration(format!("Cannot process unknown policy [{key}]"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_kept_literally() {
        assert_eq!(
            AccessError::MissingCredentials.to_string(),
            "Missing Authorization header"
        );
        assert_eq!(
            AccessError::AuthenticationFailed.to_string(),
            "Request was not propertly authenticated from the Connect platform."
        );
        assert_eq!(
            AccessError::AuthorizationDenied(USER_REQUIRED_UNLESS_SCOPES).to_string(),
            "Request is required to be on behalf of an authenticated end user but is not. \
             This requirement is relaxed when request is authorized with the sufficient scopes"
        );
        assert_eq!(
            AccessError::unknown_policy("foo").to_string(),
            "Cannot process unknown policy [foo]"
        );
    }
}
