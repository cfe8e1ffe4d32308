//! HTTP span helpers.

/// Label for any path outside the route table.
pub(super) const UNMATCHED_ROUTE: &str = "unmatched";

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    /// One of a fixed set of route templates, safe to use as a metric label.
    pub(super) route: &'static str,
    pub(super) span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let route = route_label(path);
    let span_name = format!("{} {route}", method_label(method));

    RequestSpanName { route, span_name }
}

/// Methods outside the standard set share one label.
pub(super) fn method_label(method: &str) -> &'static str {
    match method {
        "GET" => "GET",
        "HEAD" => "HEAD",
        "POST" => "POST",
        "PUT" => "PUT",
        "PATCH" => "PATCH",
        "DELETE" => "DELETE",
        "OPTIONS" => "OPTIONS",
        _ => "OTHER",
    }
}

/// Maps a request path onto its route template. Paths that match no route
/// collapse to [`UNMATCHED_ROUTE`] so client input cannot grow label sets.
fn route_label(path: &str) -> &'static str {
    let segments: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    match segments.as_slice() {
        [] => "/",
        ["healthcheck"] => "/healthcheck",
        ["metrics"] => "/metrics",
        ["api-doc", "openapi.json"] => "/api-doc/openapi.json",
        ["docs", ..] => "/docs",
        ["api", "v1", "internal", "shopping-item"] => "/api/v1/internal/shopping-item",
        ["api", "v1", "internal", "shopping-item", "mark-purchased"] => {
            "/api/v1/internal/shopping-item/mark-purchased"
        }
        ["api", "v1", "internal", "shopping-item", _] => "/api/v1/internal/shopping-item/{id}",
        _ => UNMATCHED_ROUTE,
    }
}
