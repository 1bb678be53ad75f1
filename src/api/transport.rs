//
//  launchpad-client
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! The leaf of the client: sends one request and hands back the raw status,
//! headers and body. Status codes are never interpreted here; that is the
//! job of [`LaunchpadClient`](super::LaunchpadClient).
//!
//! The [`Transport`] trait is the seam that lets the client run against
//! `reqwest` in production and an in-memory recorder in tests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use tracing::debug;

use super::common::ApiError;
use crate::auth::AuthCredential;

/// Body attached to an outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized as JSON with `Content-Type: application/json`.
    Json(Value),
    /// Serialized as `application/x-www-form-urlencoded`.
    Form(Vec<(String, String)>),
}

/// A single outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Extra headers, applied in order
    pub headers: Vec<(String, String)>,
    /// Optional body
    pub body: Option<RequestBody>,
}

impl TransportRequest {
    /// Creates a request with no headers and no body.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Attaches a JSON body and the matching `Content-Type` header.
    pub fn json(mut self, body: Value) -> Self {
        self.headers
            .push(("Content-Type".to_string(), "application/json".to_string()));
        self.body = Some(RequestBody::Json(body));
        self
    }

    /// Attaches a form-encoded body.
    pub fn form(mut self, pairs: Vec<(String, String)>) -> Self {
        self.body = Some(RequestBody::Form(pairs));
        self
    }
}

/// The raw answer to a [`TransportRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// `Location` header, if any
    pub location: Option<String>,
    /// Raw body text
    pub body: String,
}

impl TransportResponse {
    /// Creates a response with the given status and body and no headers.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            location: None,
            body: body.into(),
        }
    }

    /// Sets the `Location` header.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Sends requests on behalf of the client.
///
/// Implementations must resolve exactly once per call and must not treat
/// non-2xx statuses as errors; only transport failures become `Err`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one request and returns the raw response.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ApiError>;
}

/// `reqwest`-backed [`Transport`].
///
/// # Example
///
/// ```rust,no_run
/// use launchpad_client::api::transport::HttpTransport;
/// use launchpad_client::auth::AuthCredential;
///
/// let transport = HttpTransport::new()?
///     .with_auth(AuthCredential::anonymous("my-app"));
/// # Ok::<(), launchpad_client::api::ApiError>(())
/// ```
pub struct HttpTransport {
    http: Client,
    auth: Option<AuthCredential>,
}

impl HttpTransport {
    /// Default request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Creates a transport with the default timeout and no credentials.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_timeout(Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a transport with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ApiError> {
        Ok(Self {
            http: Client::builder()
                .user_agent(format!("lp/{}", crate::VERSION))
                .timeout(timeout)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()?,
            auth: None,
        })
    }

    /// Sets the credentials applied to every request.
    pub fn with_auth(mut self, auth: AuthCredential) -> Self {
        self.auth = Some(auth);
        self
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ApiError> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let mut builder = self
            .http
            .request(request.method.clone(), &request.url)
            .header("Accept", "application/json");

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match request.body {
            Some(RequestBody::Json(body)) => builder.body(serde_json::to_string(&body)?),
            Some(RequestBody::Form(pairs)) => builder.form(&pairs),
            None => builder,
        };

        if let Some(auth) = &self.auth {
            builder = auth.apply_to_request(builder);
        }

        let response = builder.send().await?;
        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        debug!(status = %status, bytes = body.len(), "received response");

        Ok(TransportResponse {
            status,
            location,
            body,
        })
    }
}
