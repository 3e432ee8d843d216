//! Build-time deployment configuration: router base path, asset prefix and the
//! games API location.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/play` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router (e.g., `/play` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// API used when `GAMES_API_URL` is not set at compile time.
pub const DEFAULT_API_URL: &str = "/api";

/// Base URL of the games API, without a trailing slash.
#[must_use]
pub fn api_url() -> String {
    api_url_with_base(option_env!("GAMES_API_URL").unwrap_or(DEFAULT_API_URL))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

fn api_url_with_base(base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        base.to_string()
    }
}
