//! # Request Logging Middleware
//!
//! Logs method, path, status, and duration for every request. Bodies are
//! never read or logged: every endpoint here carries credentials.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{error, info, warn};

/// Log every request with its outcome and latency.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed = start.elapsed();

    if status.is_server_error() {
        error!("{} {} -> {} ({:?})", method, path, status.as_u16(), elapsed);
    } else if status.is_client_error() {
        warn!("{} {} -> {} ({:?})", method, path, status.as_u16(), elapsed);
    } else {
        info!("{} {} -> {} ({:?})", method, path, status.as_u16(), elapsed);
    }

    response
}
