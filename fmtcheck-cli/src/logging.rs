//! Request/response logging for the validation service.
//!
//! Writes straight to stderr instead of through `tracing` so ANSI colours are
//! not escaped. `-v` logs one summary line per request, `-vv` adds bodies.

use axum::body::{Body, Bytes};
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::Local;
use std::io::IsTerminal;
use std::time::Instant;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

// ANSI color codes
struct Colors {
    reset: &'static str,
    dim: &'static str,
    green: &'static str,
    yellow: &'static str,
    red: &'static str,
    cyan: &'static str,
    blue: &'static str,
    magenta: &'static str,
    gray: &'static str,
}

impl Colors {
    fn new() -> Self {
        if std::io::stderr().is_terminal() {
            Self {
                reset: "\x1b[0m",
                dim: "\x1b[2m",
                green: "\x1b[92m",   // 2xx
                yellow: "\x1b[93m",  // 3xx
                red: "\x1b[91m",     // 4xx, 5xx
                cyan: "\x1b[96m",    // method
                blue: "\x1b[94m",    // path
                magenta: "\x1b[95m", // duration
                gray: "\x1b[90m",    // bodies
            }
        } else {
            Self::plain()
        }
    }

    const fn plain() -> Self {
        Self {
            reset: "",
            dim: "",
            green: "",
            yellow: "",
            red: "",
            cyan: "",
            blue: "",
            magenta: "",
            gray: "",
        }
    }

    fn status_color(&self, status: StatusCode) -> &'static str {
        if status.is_success() {
            self.green
        } else if status.is_redirection() {
            self.yellow
        } else {
            self.red
        }
    }
}

/// Render a body for the debug log: pretty JSON when it parses, raw text otherwise.
fn render_body(bytes: &[u8]) -> (bool, String) {
    match serde_json::from_slice::<serde_json::Value>(bytes) {
        Ok(json) => (
            true,
            serde_json::to_string_pretty(&json).unwrap_or_default(),
        ),
        Err(_) => (false, String::from_utf8_lossy(bytes).into_owned()),
    }
}

fn log_body(colors: &Colors, what: &str, bytes: &Bytes) {
    if bytes.is_empty() {
        return;
    }
    let (is_json, body) = render_body(bytes);
    let raw = if is_json { "" } else { " (raw)" };
    eprintln!(
        "{} - DEBUG - {}{what} body{raw}:{}\n{}{body}{}",
        Local::now().format(TIMESTAMP_FORMAT),
        colors.dim,
        colors.reset,
        colors.gray,
        colors.reset
    );
}

#[derive(Clone)]
pub struct LoggingMiddleware {
    pub verbose: u8,
    /// Largest request body buffered for the debug log.
    pub max_body_bytes: usize,
}

impl LoggingMiddleware {
    pub const fn new(verbose: u8, max_body_bytes: usize) -> Self {
        Self {
            verbose,
            max_body_bytes,
        }
    }

    pub async fn handle(&self, request: Request, next: Next) -> Response {
        if self.verbose == 0 {
            return next.run(request).await;
        }

        let colors = Colors::new();
        let method = request.method().clone();
        let path = request.uri().path().to_owned();
        let start = Instant::now();

        let response = if self.verbose >= 2 {
            let (parts, body) = request.into_parts();
            match axum::body::to_bytes(body, self.max_body_bytes).await {
                Ok(bytes) => {
                    log_body(&colors, "Request", &bytes);
                    next.run(Request::from_parts(parts, Body::from(bytes))).await
                }
                Err(_) => StatusCode::PAYLOAD_TOO_LARGE.into_response(),
            }
        } else {
            next.run(request).await
        };

        let status = response.status();
        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
        eprintln!(
            "{} - INFO - {}{method}{} {}{path}{} -> {}{}{} in {}{duration_ms:.1}ms{}",
            Local::now().format(TIMESTAMP_FORMAT),
            colors.cyan,
            colors.reset,
            colors.blue,
            colors.reset,
            colors.status_color(status),
            status.as_u16(),
            colors.reset,
            colors.magenta,
            colors.reset
        );

        if self.verbose < 2 {
            return response;
        }

        // Responses are produced by this service, not the client.
        let (parts, body) = response.into_parts();
        let bytes = axum::body::to_bytes(body, usize::MAX)
            .await
            .unwrap_or_default();
        log_body(&colors, "Response", &bytes);
        Response::from_parts(parts, Body::from(bytes))
    }
}
