//! Transport seam between resource services and the network.

use crate::error::{ApiError, IncreaseError};
use log::debug;
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client as HttpClient, Url};
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(v)
    }
}

impl From<Method> for reqwest::Method {
    fn from(value: Method) -> Self {
        match value {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A single API call: verb, path relative to the base URL, query pairs and
/// an optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Performs an [`ApiRequest`] and returns the raw body of a successful
/// response. Non-2xx responses must be reported as [`IncreaseError::Api`].
pub trait Requester {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<String, IncreaseError>> + Send;
}

/// Default transport backed by `reqwest`.
#[derive(Clone)]
pub struct HttpRequester {
    http: HttpClient,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for HttpRequester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpRequester")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl HttpRequester {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, IncreaseError> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn set_base_url(&mut self, base_url: String) {
        self.base_url = base_url;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Duration) -> Result<(), IncreaseError> {
        self.http = HttpClient::builder().timeout(timeout).build()?;
        Ok(())
    }

    fn url(&self, request: &ApiRequest) -> Result<Url, IncreaseError> {
        let mut url = Url::parse(&format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            request.path
        ))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }
        Ok(url)
    }
}

impl Requester for HttpRequester {
    async fn send(&self, request: ApiRequest) -> Result<String, IncreaseError> {
        let url = self.url(&request)?;
        debug!("{} request to {}", request.method, url);

        let mut builder = self
            .http
            .request(request.method.into(), url)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!("Received status {}", status);
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(IncreaseError::Api(ApiError::from_response(
                status.as_u16(),
                &body,
            )))
        }
    }
}
