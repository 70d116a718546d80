use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, register_int_gauge, Encoder, HistogramVec,
    IntCounterVec, IntGauge, TextEncoder,
};

lazy_static! {
    // HTTP Metrics
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "http_requests_total",
        "Total number of HTTP requests",
        &["method", "path", "status"]
    )
    .unwrap();

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .unwrap();

    // Auth Metrics
    pub static ref LOGIN_ATTEMPTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "login_attempts_total",
        "Total number of login attempts",
        &["outcome"]
    )
    .unwrap();

    // Editor Metrics
    pub static ref WORKSPACES_ACTIVE: IntGauge = register_int_gauge!(
        "editor_workspaces_active",
        "Number of editor workspaces held in memory"
    )
    .unwrap();

    pub static ref SOLUTION_FILE_OPERATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "solution_file_operations_total",
        "Total number of solution file operations",
        &["operation"]
    )
    .unwrap();

    pub static ref PROBLEM_IMPORTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "problem_imports_total",
        "Total number of problem imports",
        &["outcome"]
    )
    .unwrap();

    pub static ref TEST_RUNS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "test_runs_total",
        "Total number of simulated test runs",
        &["kind"]
    )
    .unwrap();
}

/// Renders all metrics in Prometheus text format
pub fn render_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| prometheus::Error::Msg(format!("Failed to convert metrics to UTF-8: {}", e)))
}

/// Record one solution file operation (create, delete, save, ...)
pub fn record_file_operation(operation: &str) {
    SOLUTION_FILE_OPERATIONS_TOTAL
        .with_label_values(&[operation])
        .inc();
}
