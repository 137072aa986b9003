//! HTTP server implementation (Axum)
//!
//! Sets up routing, middleware and shared state.

use super::cors::create_cors_layer;
use super::handlers;
use super::rate_limit::{self, RateLimiter};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use roi_application::{
    CalculateRoiUseCase, Clock, GetBenchmarksUseCase, ListSectorsUseCase, ReferenceDataPort,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across all HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub calculate_roi: Arc<CalculateRoiUseCase>,
    pub list_sectors: Arc<ListSectorsUseCase>,
    pub get_benchmarks: Arc<GetBenchmarksUseCase>,
    pub clock: Arc<dyn Clock>,
    /// Reported by `/health`
    pub environment: String,
    /// Applied to `/api/*` when set
    pub rate_limiter: Option<Arc<RateLimiter>>,
}

impl AppState {
    pub fn new(
        reference_data: Arc<dyn ReferenceDataPort>,
        clock: Arc<dyn Clock>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            calculate_roi: Arc::new(CalculateRoiUseCase::new(
                Arc::clone(&reference_data),
                Arc::clone(&clock),
            )),
            list_sectors: Arc::new(ListSectorsUseCase::new(Arc::clone(&reference_data))),
            get_benchmarks: Arc::new(GetBenchmarksUseCase::new(reference_data)),
            clock,
            environment: environment.into(),
            rate_limiter: None,
        }
    }

    pub fn with_rate_limiter(mut self, limiter: RateLimiter) -> Self {
        self.rate_limiter = Some(Arc::new(limiter));
        self
    }
}

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    let mut api = Router::new()
        .route(
            "/simulator/calculate",
            post(handlers::calculate).fallback(handlers::not_found),
        )
        .route(
            "/simulator/benchmarks",
            get(handlers::benchmarks).fallback(handlers::not_found),
        )
        .route(
            "/simulator/sectors",
            get(handlers::sectors).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found);

    if let Some(limiter) = state.rate_limiter.clone() {
        api = api.layer(middleware::from_fn_with_state(limiter, rate_limit::enforce));
    }

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api)
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(create_cors_layer())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(state: AppState, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        environment = %state.environment,
        "ROI simulator API listening on http://{}",
        listener.local_addr()?
    );

    axum::serve(
        listener,
        create_router(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
