//! HTTP client for the upstream employee service.
//!
//! # Responsibilities
//! - Issue GET/POST/DELETE calls against `{host}{path}`
//! - Map HTTP status to success or `UpstreamError`
//! - Unwrap the `{ "data": ... }` envelope
//! - Log and time every call
//!
//! # Design Decisions
//! - Stateless: holds a `reqwest::Client` (internally pooled and `Arc`ed)
//!   and the collection URL, so clones are cheap and safe to share
//! - No retries and no timeouts beyond the transport defaults
//! - Bodies are read fully before decoding so malformed payloads surface as
//!   `Decode` errors with the operation attached

use std::time::Instant;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::config::UpstreamConfig;
use crate::employee::error::{Operation, UpstreamError};
use crate::employee::types::{DeleteEmployeeInput, Employee, Envelope, NewEmployee};
use crate::observability::{metrics, redact};

/// The calls the service layer needs from the upstream.
#[async_trait]
pub trait EmployeeUpstream: Send + Sync {
    /// All employees, in upstream order.
    async fn list_employees(&self) -> Result<Vec<Employee>, UpstreamError>;

    /// One employee; `None` when the upstream does not know the id.
    async fn get_employee(&self, id: Uuid) -> Result<Option<Employee>, UpstreamError>;

    /// Create an employee; the upstream assigns id and email.
    async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, UpstreamError>;

    /// Delete by name; returns the upstream's "was deleted" flag.
    async fn delete_employee(&self, name: &str) -> Result<bool, UpstreamError>;
}

/// `reqwest`-backed implementation of [`EmployeeUpstream`].
#[derive(Debug, Clone)]
pub struct EmployeeClient {
    http: reqwest::Client,
    url: String,
}

impl EmployeeClient {
    /// Client for the given collection URL with a default transport.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &UpstreamConfig) -> Self {
        Self::new(&config.base_url())
    }

    /// Collection URL every call is made against.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send a request and read the full body.
    async fn send(
        &self,
        operation: Operation,
        request: reqwest::RequestBuilder,
    ) -> Result<(StatusCode, Vec<u8>), UpstreamError> {
        let response = request
            .send()
            .await
            .map_err(|source| UpstreamError::Transport { operation, source })?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| UpstreamError::Transport { operation, source })?;
        Ok((status, body.to_vec()))
    }

    async fn fetch_all(&self) -> Result<Vec<Employee>, UpstreamError> {
        let operation = Operation::ListEmployees;
        let (status, body) = self.send(operation, self.http.get(&self.url)).await?;
        check_status(operation, status, &body)?;
        decode_envelope::<Vec<Employee>>(operation, &body)?
            .ok_or(UpstreamError::MissingBody { operation })
    }

    async fn fetch_one(&self, id: Uuid) -> Result<Option<Employee>, UpstreamError> {
        let operation = Operation::GetEmployee;
        let url = format!("{}/{}", self.url, id);
        let (status, body) = self.send(operation, self.http.get(url)).await?;
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        check_status(operation, status, &body)?;
        decode_envelope::<Employee>(operation, &body)
    }

    async fn post_employee(&self, employee: &NewEmployee) -> Result<Employee, UpstreamError> {
        let operation = Operation::CreateEmployee;
        let request = self.http.post(&self.url).json(employee);
        let (status, body) = self.send(operation, request).await?;
        check_status(operation, status, &body)?;
        decode_envelope::<Employee>(operation, &body)?
            .ok_or(UpstreamError::MissingBody { operation })
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool, UpstreamError> {
        let operation = Operation::DeleteEmployee;
        let input = DeleteEmployeeInput {
            name: name.to_string(),
        };
        let request = self.http.delete(&self.url).json(&input);
        let (status, body) = self.send(operation, request).await?;
        check_status(operation, status, &body)?;
        decode_envelope::<bool>(operation, &body)?
            .ok_or(UpstreamError::MissingBody { operation })
    }
}

#[async_trait]
impl EmployeeUpstream for EmployeeClient {
    async fn list_employees(&self) -> Result<Vec<Employee>, UpstreamError> {
        let operation = Operation::ListEmployees;
        tracing::info!("Fetching employees");
        let start = Instant::now();

        let result = self.fetch_all().await;

        observe(operation, start, &result);
        if let Ok(employees) = &result {
            tracing::info!(
                count = employees.len(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Fetched employees"
            );
        }
        result
    }

    async fn get_employee(&self, id: Uuid) -> Result<Option<Employee>, UpstreamError> {
        let operation = Operation::GetEmployee;
        tracing::info!(employee_id = %id, "Fetching employee");
        let start = Instant::now();

        let result = self.fetch_one(id).await;

        observe(operation, start, &result);
        if let Ok(None) = &result {
            tracing::info!(employee_id = %id, "No employee found");
        }
        result
    }

    async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, UpstreamError> {
        let operation = Operation::CreateEmployee;
        tracing::info!(name = %redact::mask(&employee.name), "Creating employee");
        let start = Instant::now();

        let result = self.post_employee(employee).await;

        observe(operation, start, &result);
        if let Ok(created) = &result {
            tracing::info!(employee_id = %created.id, "Created employee");
        }
        result
    }

    async fn delete_employee(&self, name: &str) -> Result<bool, UpstreamError> {
        let operation = Operation::DeleteEmployee;
        let masked = redact::mask(name);
        tracing::info!(name = %masked, "Deleting employee");
        let start = Instant::now();

        let result = self.delete_by_name(name).await;

        observe(operation, start, &result);
        if let Ok(deleted) = &result {
            tracing::info!(
                name = %masked,
                deleted = *deleted,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Deleted employee"
            );
        }
        result
    }
}

/// Anything but 200 is a failure; 4xx keeps its status for passthrough.
fn check_status(operation: Operation, status: StatusCode, body: &[u8]) -> Result<(), UpstreamError> {
    if status == StatusCode::OK {
        return Ok(());
    }
    let body = String::from_utf8_lossy(body).into_owned();
    let status = status.as_u16();
    if (400..500).contains(&status) {
        Err(UpstreamError::Rejected {
            operation,
            status,
            body,
        })
    } else {
        Err(UpstreamError::UnexpectedStatus {
            operation,
            status,
            body,
        })
    }
}

/// Decode `{ "data": T }`. An empty body is `MissingBody`; a `null` or
/// absent `data` is `Ok(None)`.
fn decode_envelope<T: DeserializeOwned>(
    operation: Operation,
    body: &[u8],
) -> Result<Option<T>, UpstreamError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(UpstreamError::MissingBody { operation });
    }
    let envelope: Envelope<T> = serde_json::from_slice(body)
        .map_err(|source| UpstreamError::Decode { operation, source })?;
    Ok(envelope.data)
}

/// Record the call's metric and log failures.
fn observe<T>(operation: Operation, start: Instant, result: &Result<T, UpstreamError>) {
    let elapsed_ms = start.elapsed().as_millis() as u64;
    match result {
        Ok(_) => {
            metrics::record_upstream_call(operation.as_str(), "ok", start);
            tracing::debug!(operation = operation.as_str(), elapsed_ms, "Upstream call succeeded");
        }
        Err(e) => {
            metrics::record_upstream_call(operation.as_str(), e.outcome(), start);
            match e {
                UpstreamError::Rejected { status, body, .. }
                | UpstreamError::UnexpectedStatus { status, body, .. } => {
                    tracing::error!(
                        operation = operation.as_str(),
                        status = *status,
                        body = %body,
                        elapsed_ms,
                        "Upstream call failed"
                    );
                }
                _ => {
                    tracing::error!(
                        operation = operation.as_str(),
                        error = %e,
                        elapsed_ms,
                        "Upstream call failed"
                    );
                }
            }
        }
    }
}
