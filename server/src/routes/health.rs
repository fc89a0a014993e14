//! Liveness probe.

#[cfg(test)]
#[path = "health_test.rs"]
mod tests;

use axum::http::StatusCode;

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
