//! Employee records and the payloads exchanged with the upstream.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An employee as stored by the upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    #[serde(rename = "employee_name")]
    pub name: String,
    #[serde(rename = "employee_salary")]
    pub salary: u64,
    #[serde(rename = "employee_age")]
    pub age: u32,
    #[serde(rename = "employee_title")]
    pub title: String,
    #[serde(rename = "employee_email")]
    pub email: String,
}

/// Create request as received from callers. Every field may be missing or
/// null; `validation::validate_create_employee_input` decides what is
/// acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeInput {
    pub name: Option<String>,
    pub salary: Option<i64>,
    pub age: Option<i64>,
    pub title: Option<String>,
}

/// A create request that passed validation. This is the upstream POST body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEmployee {
    pub name: String,
    pub salary: u64,
    pub age: u32,
    pub title: String,
}

/// Upstream delete body; the upstream deletes by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteEmployeeInput {
    pub name: String,
}

/// The `{ "data": ... }` wrapper around every upstream payload.
/// Extra fields such as `status` are ignored.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
}
