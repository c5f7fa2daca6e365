// API client module: a small blocking HTTP client that creates employees
// on the employees API, one record per request. It is synchronous on
// purpose: each call returns only once the server answered or the
// transport gave up.

use crate::batch::Employee;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use thiserror::Error;

/// Where the employees API listens. Not configurable.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Path of the create endpoint under the base URL.
pub const CREATE_EMPLOYEE_PATH: &str = "/api/v1/employees/create";

/// Why a single submission did not succeed. Never fatal for the batch.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// The server answered with anything other than 200.
    #[error("{status} {body}")]
    Rejected { status: u16, body: String },

    /// No usable response: connection refused, DNS failure, timeout, ...
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Blocking client bound to one base URL.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Client for the fixed employees API at [`DEFAULT_BASE_URL`].
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client for an API served from another origin, e.g. a local mock.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .default_headers(json_headers())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn create_url(&self) -> String {
        format!("{}{}", self.base_url, CREATE_EMPLOYEE_PATH)
    }

    /// POST one employee to the create endpoint. A single attempt is made.
    /// Only status 200 is accepted; any other code, 2xx or not, is rejected.
    pub fn submit(&self, employee: &Employee) -> Result<(), SubmissionError> {
        let res = self.client.post(self.create_url()).json(employee).send()?;
        if res.status() != StatusCode::OK {
            let status = res.status().as_u16();
            let body = res.text().unwrap_or_else(|_| "".into());
            return Err(SubmissionError::Rejected { status, body });
        }
        Ok(())
    }
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}
