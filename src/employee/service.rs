//! Employee service.
//!
//! Composes upstream calls and does the in-memory work on top of them:
//! name search, salary maximum, top earners, and delete-by-id. Every call
//! goes to the upstream; nothing is cached between requests.

use std::sync::Arc;

use uuid::Uuid;

use crate::employee::client::EmployeeUpstream;
use crate::employee::error::{EmployeeError, EmployeeResult};
use crate::employee::types::{Employee, NewEmployee};

/// How many names `top_ten_earners` returns at most.
pub const TOP_EARNERS_LIMIT: usize = 10;

pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";
pub const EMPLOYEE_DELETED: &str = "Successfully deleted employee";
pub const DELETE_FAILED: &str = "Failed to delete employee";

#[derive(Clone)]
pub struct EmployeeService {
    upstream: Arc<dyn EmployeeUpstream>,
}

impl EmployeeService {
    pub fn new(upstream: Arc<dyn EmployeeUpstream>) -> Self {
        Self { upstream }
    }

    pub async fn get_all_employees(&self) -> EmployeeResult<Vec<Employee>> {
        Ok(self.upstream.list_employees().await?)
    }

    /// Employees whose name contains `fragment`, ignoring case, in upstream order.
    pub async fn search_by_name(&self, fragment: &str) -> EmployeeResult<Vec<Employee>> {
        tracing::info!(search = %fragment, "Searching employees by name");
        let needle = fragment.to_lowercase();
        let matches: Vec<Employee> = self
            .upstream
            .list_employees()
            .await?
            .into_iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .collect();
        tracing::info!(search = %fragment, count = matches.len(), "Found employees");
        Ok(matches)
    }

    pub async fn get_by_id(&self, id: Uuid) -> EmployeeResult<Option<Employee>> {
        Ok(self.upstream.get_employee(id).await?)
    }

    /// Highest salary across all employees, 0 when there are none.
    pub async fn highest_salary(&self) -> EmployeeResult<u64> {
        let employees = self.upstream.list_employees().await?;
        Ok(employees.iter().map(|e| e.salary).max().unwrap_or(0))
    }

    /// Up to ten `"<name> (<salary>)"` entries, highest salary first.
    /// Equal salaries keep their upstream order.
    pub async fn top_ten_earners(&self) -> EmployeeResult<Vec<String>> {
        let mut employees = self.upstream.list_employees().await?;
        employees.sort_by(|a, b| b.salary.cmp(&a.salary));
        Ok(employees
            .into_iter()
            .take(TOP_EARNERS_LIMIT)
            .map(|e| format!("{} ({})", e.name, e.salary))
            .collect())
    }

    pub async fn create_employee(&self, employee: &NewEmployee) -> EmployeeResult<Employee> {
        Ok(self.upstream.create_employee(employee).await?)
    }

    /// Look the employee up, then delete it by name.
    ///
    /// The two upstream calls are not atomic: a concurrent change between
    /// them is not detected.
    pub async fn delete_by_id(&self, id: Uuid) -> EmployeeResult<String> {
        let Some(employee) = self.upstream.get_employee(id).await? else {
            return Ok(EMPLOYEE_NOT_FOUND.to_string());
        };

        if !self.upstream.delete_employee(&employee.name).await? {
            tracing::error!(employee_id = %id, "Upstream reported the employee was not deleted");
            return Err(EmployeeError::Internal(DELETE_FAILED.to_string()));
        }

        Ok(EMPLOYEE_DELETED.to_string())
    }
}
