//! Middleware stack for the API server
//!
//! Provides logging, request ID generation, CORS, timeouts, and rate limiting.

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request, StatusCode},
    middleware::map_response,
    response::{IntoResponse, Response},
    Router,
};
use roster_common::{AppError, CorsConfig, RateLimitConfig};
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::response::ApiError;
use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request timeout; exceeding it yields 503 Service Unavailable
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Apply a global rate limiter to every route currently in `router`
pub fn apply_rate_limit(
    router: Router<AppState>,
    config: &RateLimitConfig,
) -> Result<Router<AppState>, AppError> {
    let invalid = || {
        AppError::Config(format!(
            "invalid rate limit: {} req/s, burst {}",
            config.requests_per_second, config.burst
        ))
    };

    if config.requests_per_second == 0 {
        return Err(invalid());
    }

    // One token replenished every 1/rps seconds; GlobalKeyExtractor shares a
    // single bucket between all clients.
    let governor_conf = GovernorConfigBuilder::default()
        .period(Duration::from_secs(1) / config.requests_per_second)
        .burst_size(config.burst)
        .key_extractor(GlobalKeyExtractor)
        .finish()
        .ok_or_else(invalid)?;

    Ok(router.layer(GovernorLayer {
        config: Arc::new(governor_conf),
    }))
}

/// Rewrite the bare 429 and 503 responses produced by the rate limiter and
/// timeout layers into the JSON error envelope. Handler responses already
/// carry JSON and pass through untouched.
pub async fn error_envelope(response: Response) -> Response {
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    if is_json {
        return response;
    }

    let err = match response.status() {
        StatusCode::TOO_MANY_REQUESTS => AppError::RateLimitExceeded,
        StatusCode::SERVICE_UNAVAILABLE => AppError::Timeout,
        _ => return response,
    };

    let (parts, _) = response.into_parts();
    let mut enveloped = ApiError::from(err).into_response();

    // Keep limiter hints such as retry-after
    for (name, value) in &parts.headers {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            enveloped.headers_mut().append(name.clone(), value.clone());
        }
    }
    enveloped
}

/// Apply request ID, tracing, error envelope, timeout and CORS layers
///
/// Request -> RequestID -> Trace -> Envelope -> Timeout -> CORS -> Handler
pub fn apply_middleware(
    router: Router<AppState>,
    cors_config: &CorsConfig,
    is_production: bool,
) -> Router<AppState> {
    router
        // CORS (innermost - applied last to outgoing responses)
        .layer(create_cors_layer(cors_config, is_production))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            REQUEST_TIMEOUT,
        ))
        // Wraps the timeout and the rate limiter applied to inner routes
        .layer(map_response(error_envelope))
        // Tracing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Request ID propagation
        .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID generation (outermost)
        .layer(SetRequestIdLayer::new(
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
}

/// Create CORS layer from configuration
fn create_cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([header::HeaderName::from_static(REQUEST_ID_HEADER)]);

    // In production, only allow configured origins
    // In development, allow any origin if no origins are configured
    if is_production || !config.allowed_origins.is_empty() {
        if config.allowed_origins.is_empty() {
            tracing::warn!(
                "CORS: No allowed origins configured in production mode. \
                 Requests from browsers will be blocked."
            );
            base_layer.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()))
        } else {
            let origins: Vec<HeaderValue> = config
                .allowed_origins
                .iter()
                .filter_map(|origin| {
                    origin.parse::<HeaderValue>().ok().or_else(|| {
                        tracing::warn!("Invalid CORS origin: {}", origin);
                        None
                    })
                })
                .collect();

            tracing::info!("CORS: Allowing {} configured origins", origins.len());
            base_layer.allow_origin(AllowOrigin::list(origins))
        }
    } else {
        tracing::warn!(
            "CORS: Allowing any origin (development mode). \
             Configure CORS_ALLOWED_ORIGINS for production."
        );
        base_layer.allow_origin(Any)
    }
}
