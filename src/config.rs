//! API Base URL Configuration
//!
//! Resolution order: `window.MARKET_API_URL` set on the page, then the
//! `MARKET_API_URL` compile-time env var, then the localhost default.

use wasm_bindgen::JsValue;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

fn window_override() -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str("MARKET_API_URL")).ok()?;
    value.as_string().filter(|url| !url.trim().is_empty())
}

fn resolve_base(override_url: Option<String>) -> String {
    override_url
        .or_else(|| option_env!("MARKET_API_URL").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Root of the market REST API
pub fn api_root() -> String {
    format!("{}/marketapi", resolve_base(window_override()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        assert_eq!(
            resolve_base(Some("https://market.example.com".to_string())),
            "https://market.example.com"
        );
    }

    #[test]
    fn test_default_when_no_override() {
        // MARKET_API_URL is not set in the test environment
        assert_eq!(resolve_base(None), DEFAULT_BASE_URL);
    }
}
