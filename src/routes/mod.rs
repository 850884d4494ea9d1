//! Request handlers and the request-derived path values they substitute.
pub mod main;

/// Placeholder key for the mount path of the service.
pub const CONTEXT_PATH_KEY: &str = "contextPath";
/// Placeholder key for the request URL rebased onto the context path.
pub const FULL_WEB_PATH_KEY: &str = "fullWebPath";

/// Mount path of the request, extended by the configured suffix.
fn context_path(request_path: &str, suffix: Option<&str>) -> String {
    let mut context_path = request_path.trim_end_matches('/').to_string();
    if let Some(suffix) = suffix {
        if !suffix.is_empty() {
            context_path.push_str(suffix);
        }
    }
    context_path
}

/// Request URL with the first literal occurrence of the request path swapped
/// for the context path. A literal substring replace on purpose: when the
/// path does not occur verbatim the URL is returned unchanged.
fn full_web_path(request_url: &str, request_path: &str, context_path: &str) -> String {
    request_url.replacen(request_path, context_path, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_path_appends_suffix() {
        assert_eq!(context_path("/app", Some("/v2")), "/app/v2");
    }

    #[test]
    fn context_path_without_suffix() {
        assert_eq!(context_path("/app", None), "/app");
        assert_eq!(context_path("/app", Some("")), "/app");
    }

    #[test]
    fn context_path_strips_resource_slash() {
        assert_eq!(context_path("/app/", None), "/app");
    }

    #[test]
    fn full_web_path_rebases_url_onto_context_path() {
        assert_eq!(
            full_web_path("http://example.com/app/", "/app/", "/app/v2"),
            "http://example.com/app/v2"
        );
    }

    #[test]
    fn full_web_path_is_noop_when_path_absent() {
        assert_eq!(
            full_web_path("http://example.com/other", "/app/", "/app"),
            "http://example.com/other"
        );
    }
}
