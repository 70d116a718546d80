use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::metrics::{HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION_SECONDS};

/// Records request count and latency per method, route and status
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = normalize_path(req.uri().path());

    let response = next.run(req).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    HTTP_REQUESTS_TOTAL
        .with_label_values(&[&method, &path, &status])
        .inc();

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[&method, &path])
        .observe(duration);

    response
}

/// Collapses dynamic segments so label cardinality stays bounded: the segment
/// after `files` becomes `{id}`, the one after `tags` becomes `{tag}`, and any
/// other numeric segment becomes `{id}`.
fn normalize_path(path: &str) -> String {
    let mut normalized = Vec::new();
    let mut previous = "";

    for segment in path.split('/') {
        let replacement = match previous {
            "files" if !segment.is_empty() && !is_file_action(segment) => "{id}",
            "tags" if !segment.is_empty() => "{tag}",
            _ if is_numeric_id(segment) => "{id}",
            _ => segment,
        };
        normalized.push(replacement);
        previous = segment;
    }

    normalized.join("/")
}

/// Fixed routes living directly under `/files`
fn is_file_action(segment: &str) -> bool {
    segment == "save-all"
}

fn is_numeric_id(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
