use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static SUBMISSIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "inquiry_desk_submissions_total",
        "Accepted public form submissions",
        &["kind"]
    )
    .expect("register submissions_total")
});

pub static LOGIN_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "inquiry_desk_login_failures_total",
        "Rejected admin login attempts"
    )
    .expect("register login_failures_total")
});

pub static AUTH_REJECTED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "inquiry_desk_auth_rejected_total",
        "Requests to admin routes rejected by the token check"
    )
    .expect("register auth_rejected_total")
});

pub fn record_submission(kind: &str) {
    SUBMISSIONS_TOTAL.with_label_values(&[kind]).inc();
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}
