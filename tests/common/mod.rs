//! Shared utilities for integration tests.
//!
//! Two kinds of upstream are available, both bound to an ephemeral port:
//! - `MockUpstream`: an axum app holding employees in memory
//! - `start_programmable_upstream`: a raw TCP server answering every request
//!   with whatever the closure returns, for malformed or failing responses

#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use uuid::Uuid;

use employee_api::config::ApiConfig;
use employee_api::employee::{CreateEmployeeInput, DeleteEmployeeInput, Employee};
use employee_api::{HttpServer, Shutdown};

pub const UPSTREAM_PATH: &str = "/api/v1/employee";

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

/// In-memory upstream speaking the `{ "data": ... }` envelope.
#[derive(Clone)]
pub struct MockUpstream {
    pub addr: SocketAddr,
    employees: Arc<Mutex<Vec<Employee>>>,
}

impl MockUpstream {
    pub async fn start(employees: Vec<Employee>) -> Self {
        let employees = Arc::new(Mutex::new(employees));
        let app = Router::new()
            .route(
                UPSTREAM_PATH,
                get(list).post(create).delete(delete_by_name),
            )
            .route(&format!("{UPSTREAM_PATH}/{{id}}"), get(get_one))
            .with_state(employees.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, employees }
    }

    pub fn host(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.employees.lock().unwrap().clone()
    }
}

type Store = Arc<Mutex<Vec<Employee>>>;

async fn list(State(store): State<Store>) -> Json<serde_json::Value> {
    let employees = store.lock().unwrap().clone();
    Json(json!({ "data": employees, "status": "Successfully processed request." }))
}

async fn get_one(State(store): State<Store>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let found = store.lock().unwrap().iter().find(|e| e.id == id).cloned();
    match found {
        Some(employee) => (StatusCode::OK, Json(json!({ "data": employee }))),
        None => (StatusCode::NOT_FOUND, Json(json!({ "data": null }))),
    }
}

async fn create(
    State(store): State<Store>,
    Json(input): Json<CreateEmployeeInput>,
) -> Json<serde_json::Value> {
    let name = input.name.unwrap_or_default();
    let employee = Employee {
        id: Uuid::new_v4(),
        email: format!("{}@company.com", name.to_lowercase()),
        name,
        salary: input.salary.unwrap_or_default() as u64,
        age: input.age.unwrap_or_default() as u32,
        title: input.title.unwrap_or_default(),
    };
    store.lock().unwrap().push(employee.clone());
    Json(json!({ "data": employee }))
}

async fn delete_by_name(
    State(store): State<Store>,
    Json(input): Json<DeleteEmployeeInput>,
) -> Json<serde_json::Value> {
    let mut employees = store.lock().unwrap();
    let before = employees.len();
    employees.retain(|e| e.name != input.name);
    Json(json!({ "data": employees.len() < before }))
}

/// A request as seen by the programmable upstream.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Start a raw TCP upstream answering each request with `f(request)`.
/// Returns the bound address and every request received so far.
pub async fn start_programmable_upstream<F, Fut>(
    f: F,
) -> (SocketAddr, Arc<Mutex<Vec<RecordedRequest>>>)
where
    F: Fn(RecordedRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let log = recorded.clone();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let f = f.clone();
            let log = log.clone();
            tokio::spawn(async move {
                let Some(request) = read_request(&mut socket).await else {
                    return;
                };
                log.lock().unwrap().push(request.clone());
                let (status, body) = f(request).await;
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason(status),
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (addr, recorded)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut request_line = head.lines().next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body_end = buf.len().min(header_end + content_length);
    let body = String::from_utf8_lossy(&buf[header_end..body_end]).to_string();
    Some(RecordedRequest { method, path, body })
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// Start the API against `upstream_host` on an ephemeral port.
pub async fn start_api(upstream_host: &str) -> (SocketAddr, Shutdown) {
    let mut config = ApiConfig::default();
    config.upstream.host = upstream_host.to_string();
    config.upstream.path = UPSTREAM_PATH.to_string();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
