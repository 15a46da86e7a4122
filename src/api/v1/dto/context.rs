/*
 * Responsibility
 * - AccessContext の response DTO
 * - access token 自体は返さない (有無だけ)
 */
use serde::Serialize;

use crate::api::v1::extractors::AccessContext;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextResponse {
    pub user_id: Option<String>,
    pub user_id_sec: Option<Vec<String>>,
    pub client_id: Option<String>,
    pub scopes: Option<Vec<String>>,
    pub has_user: bool,
    pub has_access_token: bool,
}

impl From<&AccessContext> for ContextResponse {
    fn from(ctx: &AccessContext) -> Self {
        Self {
            user_id: ctx.user_id.clone(),
            user_id_sec: ctx.user_id_sec.clone(),
            client_id: ctx.client_id.clone(),
            scopes: ctx.scopes.clone(),
            has_user: ctx.has_user(),
            has_access_token: ctx.access_token.is_some(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextDetailsResponse {
    #[serde(flatten)]
    pub context: ContextResponse,
    // result of the handler's own finer-grained check
    pub can_read_user_id: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupsResponse {
    pub client_id: Option<String>,
    pub on_behalf_of: Option<String>,
    pub scopes: Vec<String>,
}
