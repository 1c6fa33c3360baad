//! Employee subsystem.
//!
//! # Data Flow
//! ```text
//! handler input
//!     → validation.rs (ids, create input, search strings)
//!     → service.rs (search, aggregation, delete-by-id)
//!     → client.rs (reqwest calls, envelope decoding)
//!     → upstream employee service
//! ```
//!
//! # Design Decisions
//! - The service talks to the upstream through the `EmployeeUpstream` trait,
//!   so it can be exercised without a network
//! - Outcomes are explicit: `Option` for "not found", `EmployeeError` for
//!   everything that should become an error response

pub mod client;
pub mod error;
pub mod service;
pub mod types;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{EmployeeClient, EmployeeUpstream};
pub use error::{EmployeeError, EmployeeResult, Operation, UpstreamError, ValidationError};
pub use service::EmployeeService;
pub use types::{CreateEmployeeInput, DeleteEmployeeInput, Employee, NewEmployee};
