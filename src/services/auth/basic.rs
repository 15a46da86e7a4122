//! `Authorization` header → (scheme, username, password).
//!
//! The parser is deliberately forgiving: it never fails, it only produces
//! whatever parts it could read. Whether those parts are acceptable is
//! decided by the caller.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicCredentials {
    pub scheme: String,
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    /// Parse `"<scheme> <base64(username:password)>"`.
    pub fn parse(header: &str) -> Self {
        let (scheme, blob) = header.split_once(' ').unwrap_or((header, ""));

        let mut creds = Self {
            scheme: scheme.to_string(),
            ..Self::default()
        };

        let Some(decoded) = STANDARD
            .decode(blob.trim())
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
        else {
            return creds;
        };

        // password may itself contain ':'
        match decoded.split_once(':') {
            Some((user, pass)) => {
                creds.username = user.to_string();
                creds.password = pass.to_string();
            }
            None => creds.username = decoded,
        }

        creds
    }
}
