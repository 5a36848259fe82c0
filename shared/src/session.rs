use serde::{Deserialize, Serialize};

/// Tokens handed back by the auth service in the OAuth redirect fragment.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<u64>,
    pub token_type: Option<String>,
}

impl AuthSession {
    /// Builds a session from decoded fragment pairs.
    ///
    /// Returns `None` for error redirects or when no access token is present.
    pub fn from_pairs<I, K, V>(pairs: I) -> Option<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut access_token = None;
        let mut refresh_token = None;
        let mut expires_in = None;
        let mut token_type = None;

        for (key, value) in pairs {
            let value = value.into();
            match key.as_ref() {
                "error" => {
                    log::warn!("sign-in redirect returned an error: {}", value);
                    return None;
                }
                "access_token" => access_token = Some(value),
                "refresh_token" => refresh_token = Some(value),
                "expires_in" => expires_in = value.parse().ok(),
                "token_type" => token_type = Some(value),
                _ => {}
            }
        }

        access_token
            .filter(|token| !token.is_empty())
            .map(|access_token| Self {
                access_token,
                refresh_token,
                expires_in,
                token_type,
            })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct UserMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

impl AuthUser {
    pub fn display_name(&self) -> &str {
        self.user_metadata
            .name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("player")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_from_redirect_pairs() {
        let session = AuthSession::from_pairs([
            ("access_token", "abc.def.ghi"),
            ("expires_in", "3600"),
            ("refresh_token", "r1"),
            ("token_type", "bearer"),
        ])
        .unwrap();
        assert_eq!(session.access_token, "abc.def.ghi");
        assert_eq!(session.expires_in, Some(3600));
        assert_eq!(session.refresh_token.as_deref(), Some("r1"));
    }

    #[test]
    fn test_session_missing_or_error() {
        assert!(AuthSession::from_pairs([("type", "recovery")]).is_none());
        assert!(AuthSession::from_pairs([("access_token", "")]).is_none());
        assert!(AuthSession::from_pairs([
            ("access_token", "abc"),
            ("error", "access_denied"),
        ])
        .is_none());
    }

    #[test]
    fn test_user_display_name() {
        let user: AuthUser = serde_json::from_str(
            r#"{"id":"u1","email":"a@b.c","user_metadata":{"name":"Ada","avatar_url":"https://x/y.png"}}"#,
        )
        .unwrap();
        assert_eq!(user.display_name(), "Ada");

        let bare: AuthUser = serde_json::from_str(r#"{"id":"u2","email":"a@b.c"}"#).unwrap();
        assert_eq!(bare.display_name(), "a@b.c");
    }
}
