//! Employee REST API over an upstream employee service.

pub mod config;
pub mod employee;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::schema::ApiConfig;
pub use employee::{EmployeeClient, EmployeeService, EmployeeUpstream};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
