//! In-process upstream used by service and handler tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::employee::client::EmployeeUpstream;
use crate::employee::error::{Operation, UpstreamError};
use crate::employee::types::{Employee, NewEmployee};

pub fn employee(name: &str, salary: u64) -> Employee {
    Employee {
        id: Uuid::new_v4(),
        name: name.to_string(),
        salary,
        age: 30,
        title: "Engineer".to_string(),
        email: format!("{}@company.com", name.to_lowercase().replace(' ', ".")),
    }
}

#[derive(Default)]
pub struct FakeUpstream {
    employees: Mutex<Vec<Employee>>,
    fail_status: Mutex<Option<u16>>,
    refuse_deletes: AtomicBool,
    delete_calls: AtomicUsize,
}

impl FakeUpstream {
    pub fn with(employees: Vec<Employee>) -> Arc<Self> {
        Arc::new(Self {
            employees: Mutex::new(employees),
            ..Self::default()
        })
    }

    /// Every call fails with a 500 from the upstream.
    pub fn failing() -> Arc<Self> {
        Self::failing_with(500)
    }

    /// Every call fails with the given upstream status.
    pub fn failing_with(status: u16) -> Arc<Self> {
        let fake = Self::with(Vec::new());
        *fake.fail_status.lock().unwrap() = Some(status);
        fake
    }

    /// Deletes answer `false`.
    pub fn refuse_deletes(&self) {
        self.refuse_deletes.store(true, Ordering::SeqCst);
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.employees.lock().unwrap().clone()
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    fn check(&self, operation: Operation) -> Result<(), UpstreamError> {
        match *self.fail_status.lock().unwrap() {
            Some(status) if (400..500).contains(&status) => Err(UpstreamError::Rejected {
                operation,
                status,
                body: String::new(),
            }),
            Some(status) => Err(UpstreamError::UnexpectedStatus {
                operation,
                status,
                body: String::new(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EmployeeUpstream for FakeUpstream {
    async fn list_employees(&self) -> Result<Vec<Employee>, UpstreamError> {
        self.check(Operation::ListEmployees)?;
        Ok(self.employees())
    }

    async fn get_employee(&self, id: Uuid) -> Result<Option<Employee>, UpstreamError> {
        self.check(Operation::GetEmployee)?;
        Ok(self.employees().into_iter().find(|e| e.id == id))
    }

    async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, UpstreamError> {
        self.check(Operation::CreateEmployee)?;
        let created = Employee {
            id: Uuid::new_v4(),
            name: employee.name.clone(),
            salary: employee.salary,
            age: employee.age,
            title: employee.title.clone(),
            email: format!("{}@company.com", employee.name.to_lowercase()),
        };
        self.employees.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete_employee(&self, name: &str) -> Result<bool, UpstreamError> {
        self.check(Operation::DeleteEmployee)?;
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.refuse_deletes.load(Ordering::SeqCst) {
            return Ok(false);
        }
        let mut employees = self.employees.lock().unwrap();
        let before = employees.len();
        employees.retain(|e| e.name != name);
        Ok(employees.len() < before)
    }
}
