//! Error types for the employee subsystem.

use std::fmt;
use thiserror::Error;

/// Upstream call being made, used in messages, logs and metric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListEmployees,
    GetEmployee,
    CreateEmployee,
    DeleteEmployee,
}

impl Operation {
    /// Metric label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::ListEmployees => "list_employees",
            Operation::GetEmployee => "get_employee",
            Operation::CreateEmployee => "create_employee",
            Operation::DeleteEmployee => "delete_employee",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            Operation::ListEmployees => "get employees",
            Operation::GetEmployee => "get employee",
            Operation::CreateEmployee => "create employee",
            Operation::DeleteEmployee => "delete employee",
        };
        f.write_str(action)
    }
}

/// Failures talking to the upstream employee service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The upstream answered with a 4xx. The status is kept so callers can
    /// pass it through.
    #[error("Failed to {operation}. Upstream responded with {status}")]
    Rejected {
        operation: Operation,
        status: u16,
        body: String,
    },

    /// Any other non-200 answer.
    #[error("Failed to {operation}. Upstream responded with {status}")]
    UnexpectedStatus {
        operation: Operation,
        status: u16,
        body: String,
    },

    /// 200 without a body or without `data`.
    #[error("Failed to {operation}. Upstream response had no data")]
    MissingBody { operation: Operation },

    /// The body did not match the expected shape.
    #[error("Failed to {operation}. Upstream response could not be decoded: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    /// Connection, protocol or IO failure before a status was received.
    #[error("Failed to {operation}. Upstream unreachable: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },
}

impl UpstreamError {
    /// Status to forward to our caller, when the upstream's status should be
    /// passed through unchanged.
    pub fn passthrough_status(&self) -> Option<u16> {
        match self {
            UpstreamError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short outcome label for metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            UpstreamError::Rejected { .. } => "rejected",
            UpstreamError::UnexpectedStatus { .. } => "unexpected_status",
            UpstreamError::MissingBody { .. } => "missing_body",
            UpstreamError::Decode { .. } => "decode_error",
            UpstreamError::Transport { .. } => "transport_error",
        }
    }
}

/// Caller input that fails validation. Messages are returned verbatim to
/// API clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Employee id cannot be null or empty")]
    EmptyId,

    #[error("Invalid employee id: {0}. It should be a valid UUID.")]
    InvalidId(String),

    #[error("Employee input cannot be null")]
    MissingInput,

    #[error("Malformed employee input: {0}")]
    MalformedInput(String),

    #[error("Employee name cannot be null or empty")]
    EmptyName,

    #[error("Employee salary cannot be null or negative")]
    InvalidSalary,

    #[error("Invalid employee age: {}. It should be between 16 and 75.", display_age(.0))]
    InvalidAge(Option<i64>),

    #[error("Employee title cannot be null or empty")]
    EmptyTitle,
}

fn display_age(age: &Option<i64>) -> String {
    age.map_or_else(|| "null".to_string(), |a| a.to_string())
}

/// Everything a service call can fail with.
#[derive(Debug, Error)]
pub enum EmployeeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Employee id not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("{0}")]
    Internal(String),
}

pub type EmployeeResult<T> = Result<T, EmployeeError>;
