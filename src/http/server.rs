//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the employee endpoints and `/health`
//! - Wire up middleware (tracing, body limit, request ID, metrics)
//! - Bind server to listener and stop on the shutdown signal

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::ApiConfig;
use crate::employee::{EmployeeClient, EmployeeService, EmployeeUpstream};
use crate::http::handlers;
use crate::http::request::with_request_tracing;
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: EmployeeService,
}

/// HTTP server for the employee API.
pub struct HttpServer {
    router: Router,
    config: ApiConfig,
}

impl HttpServer {
    /// Create a server talking to the upstream named in `config`.
    pub fn new(config: ApiConfig) -> Self {
        let client = EmployeeClient::from_config(&config.upstream);
        tracing::debug!(upstream = %client.url(), "Employee client created");
        Self::with_upstream(config, Arc::new(client))
    }

    /// Create a server over any upstream implementation.
    pub fn with_upstream(config: ApiConfig, upstream: Arc<dyn EmployeeUpstream>) -> Self {
        let state = AppState {
            service: EmployeeService::new(upstream),
        };
        let router = build_router(&config, state);
        Self { router, config }
    }

    /// The fully layered router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires or its sender is dropped.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(config: &ApiConfig, state: AppState) -> Router {
    let router = Router::new()
        .route(
            "/api/v1/employee",
            get(handlers::get_all_employees).post(handlers::create_employee),
        )
        .route(
            "/api/v1/employee/search/{search_string}",
            get(handlers::search_employees_by_name),
        )
        .route(
            "/api/v1/employee/highestSalary",
            get(handlers::get_highest_salary),
        )
        .route(
            "/api/v1/employee/topTenHighestEarningEmployeeNames",
            get(handlers::get_top_ten_highest_earning_employee_names),
        )
        .route(
            "/api/v1/employee/{id}",
            get(handlers::get_employee_by_id).delete(handlers::delete_employee_by_id),
        )
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.listener.max_body_bytes))
        .layer(middleware::from_fn(metrics::track_requests));

    with_request_tracing(router)
}
