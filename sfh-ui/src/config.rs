//! Where the backend lives and how page URLs are read.
//!
//! The API base URL is fixed at build time through `SFH_API_BASE_URL`.
//! Without it the apps talk to the origin that served the page.

use sfh_core::endpoints;

pub fn api_base_url() -> String {
    match option_env!("SFH_API_BASE_URL") {
        Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
        _ => page_origin(),
    }
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Query string of the current page, including the leading `?`.
pub fn page_query() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

fn decode_component(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw,
    }
}

/// Decoded value of `key` in a query string such as `?farm_id=3&tab=groups`.
pub fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| decode_component(k) == key)
        .map(|(_, v)| decode_component(v))
}

/// Numeric id from the query string, e.g. `farm_id` or `post`.
pub fn query_id(query: &str, key: &str) -> Option<i64> {
    query_param(query, key).and_then(|v| v.parse().ok())
}

/// Absolute URL of an analyzed crop image.
pub fn image_url(base_url: &str, filename: &str) -> String {
    format!("{}{}", base_url, endpoints::crop_image(filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_query_params() {
        let query = "?farm_id=3&tab=groups&flag";
        assert_eq!(query_param(query, "tab").as_deref(), Some("groups"));
        assert_eq!(query_param(query, "flag").as_deref(), Some(""));
        assert_eq!(query_param(query, "missing"), None);
        assert_eq!(query_id(query, "farm_id"), Some(3));
        assert_eq!(query_id("?farm_id=abc", "farm_id"), None);
        assert_eq!(query_id("", "farm_id"), None);
    }

    #[test]
    fn decodes_escaped_values() {
        let query = "?q=%EB%94%B8%EA%B8%B0+%ED%86%A0%EB%A7%88%ED%86%A0&farm%5Fid=%37";
        assert_eq!(query_param(query, "q").as_deref(), Some("딸기 토마토"));
        assert_eq!(query_id(query, "farm_id"), Some(7));
        assert_eq!(query_param("?bad=%FF", "bad").as_deref(), Some("%FF"));
    }

    #[test]
    fn builds_image_url() {
        assert_eq!(
            image_url("http://localhost:5000", "g1.jpg"),
            "http://localhost:5000/static/uploads/crop_images/g1.jpg"
        );
        assert_eq!(image_url("", "g1.jpg"), "/static/uploads/crop_images/g1.jpg");
    }
}
