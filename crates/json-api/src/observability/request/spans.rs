//! HTTP span helpers.

/// Collapse numeric path segments so one route maps to one span name and
/// one metrics label, whatever id it was called with.
pub(super) fn normalise_route(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_segments_become_placeholders() {
        assert_eq!(
            normalise_route("/api/v1/order/detail/41"),
            "/api/v1/order/detail/{id}"
        );
        assert_eq!(normalise_route("/api/v1/rating/get/7"), "/api/v1/rating/get/{id}");
    }

    #[test]
    fn non_numeric_paths_are_kept() {
        assert_eq!(normalise_route("/"), "/");
        assert_eq!(normalise_route("/api/v1/order/me"), "/api/v1/order/me");
        assert_eq!(normalise_route("/api/v1/v2x/12a"), "/api/v1/v2x/12a");
    }
}
