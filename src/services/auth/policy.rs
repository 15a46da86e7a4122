//! Declarative per-route access policy.
//!
//! A `Policy` is a list of requirements evaluated against an `AccessContext`.
//! Routes normally build one with the typed builders; policies that come from
//! configuration (JSON) go through `Policy::from_json`, which is where unknown
//! keys are rejected.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::api::v1::extractors::AccessContext;
use crate::services::auth::error::AccessError;

pub const REQUIRE_USER: &str = "requireUser";
pub const REQUIRE_USER_UNLESS_SCOPES: &str = "requireUserUnlessScopes";
pub const REQUIRE_SCOPES: &str = "requireScopes";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    RequireUser,
    RequireUserUnlessScopes(Vec<String>),
    RequireScopes(Vec<String>),
}

impl Requirement {
    pub fn check(&self, ctx: &AccessContext) -> Result<(), AccessError> {
        match self {
            Requirement::RequireUser => ctx.require_user(),
            Requirement::RequireUserUnlessScopes(scopes) => {
                ctx.require_user_unless_scopes(scopes.as_slice())
            }
            Requirement::RequireScopes(scopes) => ctx.require_scopes(scopes.as_slice()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Policy {
    requirements: Vec<Requirement>,
}

impl Policy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require_user(mut self) -> Self {
        self.requirements.push(Requirement::RequireUser);
        self
    }

    pub fn require_user_unless_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requirements.push(Requirement::RequireUserUnlessScopes(
            scopes.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn require_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requirements.push(Requirement::RequireScopes(
            scopes.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// First failing requirement wins.
    pub fn evaluate(&self, ctx: &AccessContext) -> Result<(), AccessError> {
        self.requirements.iter().try_for_each(|r| r.check(ctx))
    }

    /// Build a policy from a declaration such as
    /// `{"requireUser": true, "requireScopes": ["groups"]}`.
    ///
    /// - a key set to `false` is skipped
    /// - `requireUser` is enabled by any other value
    /// - scope keys take an array of strings
    /// - any other key is a configuration error
    pub fn from_json(declaration: &Value) -> Result<Self, AccessError> {
        let Value::Object(map) = declaration else {
            return Err(AccessError::Configuration(
                "Policy declaration must be an object".to_string(),
            ));
        };
        Self::from_map(map)
    }

    fn from_map(map: &Map<String, Value>) -> Result<Self, AccessError> {
        let mut policy = Self::new();

        for (key, value) in map {
            if matches!(value, Value::Bool(false)) {
                continue;
            }

            let requirement = match key.as_str() {
                REQUIRE_USER => Requirement::RequireUser,
                REQUIRE_USER_UNLESS_SCOPES => {
                    Requirement::RequireUserUnlessScopes(scope_list(key, value)?)
                }
                REQUIRE_SCOPES => Requirement::RequireScopes(scope_list(key, value)?),
                other => return Err(AccessError::unknown_policy(other)),
            };
            policy.requirements.push(requirement);
        }

        Ok(policy)
    }
}

impl TryFrom<Map<String, Value>> for Policy {
    type Error = AccessError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::from_map(&map)
    }
}

fn scope_list(key: &str, value: &Value) -> Result<Vec<String>, AccessError> {
    let invalid =
        || AccessError::Configuration(format!("Policy [{key}] expects a list of scopes"));

    value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|v| v.as_str().map(str::to_string).ok_or_else(invalid))
        .collect()
}
