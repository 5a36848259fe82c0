use shared::constants::TOKEN_STORAGE_KEY;
use shared::session::{AuthSession, AuthUser};
use wasm_bindgen::JsValue;
use web_sys::{window, UrlSearchParams};
use yew::prelude::*;

use crate::config::{current_origin, get_auth_base_url};

const REDIRECT_KEYS: [&str; 5] = ["error", "access_token", "refresh_token", "expires_in", "token_type"];

#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub user: Option<AuthUser>,
    pub token: Option<String>,
    pub sign_in: Callback<()>,
    pub sign_out: Callback<()>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

pub fn get_token() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(TOKEN_STORAGE_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
}

pub fn store_token(token: &str) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
            log::warn!("could not persist the session token");
        }
    }
}

pub fn clear_token() {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        storage.remove_item(TOKEN_STORAGE_KEY).ok();
    }
}

/// Moves a session handed back in the OAuth redirect fragment into storage
/// and strips the fragment from the address bar.
pub fn absorb_redirect_session() -> Option<AuthSession> {
    let window = window()?;
    let location = window.location();
    let hash = location.hash().ok()?;
    let fragment = hash.strip_prefix('#').unwrap_or(&hash);
    if fragment.is_empty() {
        return None;
    }

    let params = UrlSearchParams::new_with_str(fragment).ok()?;
    let pairs: Vec<(&str, String)> = REDIRECT_KEYS
        .iter()
        .filter_map(|&key| params.get(key).map(|value| (key, value)))
        .collect();
    if pairs.is_empty() {
        return None;
    }

    let session = AuthSession::from_pairs(pairs);
    if let Some(session) = &session {
        store_token(&session.access_token);
        log::info!("signed in, session expires in {:?}s", session.expires_in);
    }

    let clean_url = format!(
        "{}{}",
        location.pathname().unwrap_or_default(),
        location.search().unwrap_or_default()
    );
    if let Ok(history) = window.history() {
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(&clean_url))
            .ok();
    }

    session
}

pub fn redirect_to_sign_in() {
    let Some(window) = window() else {
        return;
    };
    let redirect_to = current_origin().unwrap_or_default();
    let url = format!(
        "{}/authorize?provider=google&redirect_to={}",
        get_auth_base_url(),
        String::from(js_sys::encode_uri_component(&redirect_to))
    );
    if window.location().set_href(&url).is_err() {
        log::error!("could not navigate to the sign-in page");
    }
}

#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext {
        user: None,
        token: None,
        sign_in: Callback::from(|_| redirect_to_sign_in()),
        sign_out: Callback::noop(),
    })
}
