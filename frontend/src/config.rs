use web_sys::window;

// Port `trunk serve` uses during development.
const DEV_SERVER_PORT: &str = "8080";
const DEV_API_URL: &str = "http://127.0.0.1:3000";

pub fn get_api_base_url() -> String {
    if let Some(url) = option_env!("QUIX_API_URL").filter(|url| !url.is_empty()) {
        return url.trim_end_matches('/').to_string();
    }

    if let Some(window) = window() {
        let location = window.location();
        if location.port().map(|port| port == DEV_SERVER_PORT).unwrap_or(false) {
            return DEV_API_URL.to_string();
        }
        // The backend serves the built frontend, so same origin works.
        if let Ok(origin) = location.origin() {
            return origin;
        }
    }

    DEV_API_URL.to_string()
}

/// Base URL of the GoTrue-compatible auth service, e.g. `https://xyz.supabase.co/auth/v1`.
pub fn get_auth_base_url() -> String {
    match option_env!("QUIX_AUTH_URL").filter(|url| !url.is_empty()) {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => format!("{}/auth/v1", get_api_base_url()),
    }
}

pub fn anon_key() -> Option<&'static str> {
    option_env!("QUIX_ANON_KEY").filter(|key| !key.is_empty())
}

pub fn current_origin() -> Option<String> {
    window().and_then(|w| w.location().origin().ok())
}
