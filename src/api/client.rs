//
//  launchpad-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Client Facade for the Launchpad Web Service
//!
//! The entry point applications call. It resolves relative URIs against the
//! API root discovered from a page URL, performs requests through a
//! [`Transport`], and hands JSON representations to the resource wrapper.
//!
//! ## Features
//!
//! - API root discovery from a page URL (`<origin>/api/beta/`)
//! - Relative URI resolution
//! - GET with typed resource wrapping
//! - Named operations (`ws.op`) over GET and POST
//! - PATCH and PUT with JSON bodies
//! - Callback adapter for code that prefers success/failure handlers

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Method, StatusCode};
use serde_json::{Map, Value};
use tracing::{debug, instrument};
use url::Url;

use super::common::ApiError;
use super::resource::{wrap, Resource};
use super::transport::{HttpTransport, Transport, TransportRequest, TransportResponse};

/// The literal path segment appended to the page origin to reach the API root.
pub const API_PATH: &str = "/api/beta/";

static ABSOLUTE_URI: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?i)https?:").expect("valid regex"));

/// Computes the API base URI from a page URL.
///
/// Takes the origin (`scheme://host[:port]`) of `page_url` and appends
/// [`API_PATH`]. Default ports are dropped, explicit ones kept.
///
/// # Example
///
/// ```rust
/// use launchpad_client::api::client::base_uri_for;
///
/// assert_eq!(
///     base_uri_for("http://example.com/foo/bar").unwrap(),
///     "http://example.com/api/beta/"
/// );
/// ```
pub fn base_uri_for(page_url: &str) -> Result<String, ApiError> {
    let url = Url::parse(page_url).map_err(|e| ApiError::InvalidUri(format!("{page_url}: {e}")))?;
    let origin = url.origin();
    if !origin.is_tuple() {
        return Err(ApiError::InvalidUri(format!("{page_url}: no origin")));
    }
    Ok(format!("{}{}", origin.ascii_serialization(), API_PATH))
}

/// Outcome of a named operation.
///
/// Named operations may answer with a resource, a bare JSON value
/// (a string, a number, a list), or nothing at all.
#[derive(Debug, Clone)]
pub enum OperationResult {
    /// A JSON object, wrapped
    Resource(Resource),
    /// Any other JSON value
    Value(Value),
    /// An empty body
    Empty,
}

/// The client facade.
///
/// Cheap to clone: the transport is shared and the base URI never changes
/// after construction. Pass it by reference (or clone it) into whatever
/// needs network access.
///
/// # Example
///
/// ```rust,no_run
/// use launchpad_client::api::{LaunchpadClient, Wrapped};
///
/// # async fn example() -> Result<(), launchpad_client::api::ApiError> {
/// let client = LaunchpadClient::new("https://launchpad.net/ubuntu")?;
/// let bug = client.get("bugs/1").await?;
/// println!("{:?}", bug.get_field("title"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct LaunchpadClient {
    transport: Arc<dyn Transport>,
    base_uri: String,
}

impl std::fmt::Debug for LaunchpadClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LaunchpadClient")
            .field("base_uri", &self.base_uri)
            .finish_non_exhaustive()
    }
}

impl LaunchpadClient {
    /// Creates a client using an unauthenticated [`HttpTransport`].
    pub fn new(page_url: &str) -> Result<Self, ApiError> {
        Self::with_transport(page_url, Arc::new(HttpTransport::new()?))
    }

    /// Creates a client that sends every request through `transport`.
    pub fn with_transport(page_url: &str, transport: Arc<dyn Transport>) -> Result<Self, ApiError> {
        let base_uri = base_uri_for(page_url)?;
        debug!(%base_uri, "client created");
        Ok(Self { transport, base_uri })
    }

    /// Returns the API base URI, e.g. `https://launchpad.net/api/beta/`.
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Resolves `uri` against the base URI.
    ///
    /// URIs starting with an `http`/`https` scheme are returned unchanged;
    /// anything else is appended to the base as-is. A leading slash is not
    /// stripped, so `/bugs/1` becomes `<base>/bugs/1` with a doubled slash.
    pub fn normalize_uri(&self, uri: &str) -> String {
        if ABSOLUTE_URI.is_match(uri) {
            uri.to_string()
        } else {
            format!("{}{}", self.base_uri, uri)
        }
    }

    /// Fetches `uri` and wraps the representation.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Network`] if the transport fails
    /// - [`ApiError::Http`] for any non-2xx status
    /// - [`ApiError::Parse`] if the body is not JSON
    /// - [`ApiError::NotAnObject`] if the body is JSON but not an object
    #[instrument(skip(self), level = "debug")]
    pub async fn get(&self, uri: &str) -> Result<Resource, ApiError> {
        let url = self.normalize_uri(uri);
        let value = self.get_value(&url).await?;
        wrap(self.clone(), &url, value)
    }

    /// Callback form of [`get`](Self::get).
    ///
    /// Exactly one of `on_success` and `on_failure` runs, exactly once.
    pub async fn get_with<S, F>(&self, uri: &str, on_success: S, on_failure: F)
    where
        S: FnOnce(Resource),
        F: FnOnce(ApiError),
    {
        match self.get(uri).await {
            Ok(resource) => on_success(resource),
            Err(e) => on_failure(e),
        }
    }

    /// Fetches `uri` and returns the parsed JSON without wrapping it.
    pub async fn get_value(&self, uri: &str) -> Result<Value, ApiError> {
        let url = self.normalize_uri(uri);
        let response = self.send(TransportRequest::new(Method::GET, url)).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Fetches `uri` with extra query parameters and wraps the result.
    pub async fn get_with_params(
        &self,
        uri: &str,
        params: &[(String, String)],
    ) -> Result<Resource, ApiError> {
        let url = append_query(&self.normalize_uri(uri), params)?;
        let value = self.get_value(&url).await?;
        wrap(self.clone(), &url, value)
    }

    /// Invokes a read-only named operation: `GET <uri>?ws.op=<operation>&...`.
    #[instrument(skip(self, params), level = "debug")]
    pub async fn named_get(
        &self,
        uri: &str,
        operation: &str,
        params: &[(String, String)],
    ) -> Result<OperationResult, ApiError> {
        let mut query = vec![("ws.op".to_string(), operation.to_string())];
        query.extend_from_slice(params);
        let url = append_query(&self.normalize_uri(uri), &query)?;
        let response = self.send(TransportRequest::new(Method::GET, url.clone())).await?;
        self.operation_result(&url, &response)
    }

    /// Invokes a write operation: form-encoded `POST` with `ws.op=<operation>`.
    ///
    /// A `201 Created` answer with a `Location` header is followed with a GET
    /// and the new resource is returned.
    #[instrument(skip(self, params), level = "debug")]
    pub async fn named_post(
        &self,
        uri: &str,
        operation: &str,
        params: &[(String, String)],
    ) -> Result<OperationResult, ApiError> {
        let url = self.normalize_uri(uri);
        let mut form = vec![("ws.op".to_string(), operation.to_string())];
        form.extend_from_slice(params);

        let response = self
            .send(TransportRequest::new(Method::POST, url.clone()).form(form))
            .await?;

        if response.status == StatusCode::CREATED {
            if let Some(location) = &response.location {
                debug!(%location, "following created resource");
                return Ok(OperationResult::Resource(self.get(location).await?));
            }
        }
        self.operation_result(&url, &response)
    }

    /// Sends a partial update: `PATCH <uri>` with the given fields as JSON.
    ///
    /// Returns the new representation when the server sends one back.
    pub async fn patch(
        &self,
        uri: &str,
        fields: Map<String, Value>,
    ) -> Result<Option<Value>, ApiError> {
        let url = self.normalize_uri(uri);
        let response = self
            .send(TransportRequest::new(Method::PATCH, url).json(Value::Object(fields)))
            .await?;
        parse_optional_body(&response)
    }

    /// Sends a full replacement: `PUT <uri>` with `body` as JSON.
    ///
    /// Returns the new representation when the server sends one back.
    pub async fn put(&self, uri: &str, body: Value) -> Result<Option<Value>, ApiError> {
        let url = self.normalize_uri(uri);
        let response = self
            .send(TransportRequest::new(Method::PUT, url).json(body))
            .await?;
        parse_optional_body(&response)
    }

    /// Sends a request and turns non-2xx statuses into [`ApiError::Http`].
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ApiError> {
        let method = request.method.clone();
        let url = request.url.clone();
        let response = self.transport.send(request).await?;

        if !response.status.is_success() {
            debug!(%method, %url, status = %response.status, "request failed");
            return Err(ApiError::Http {
                status: response.status,
                body: response.body,
            });
        }

        Ok(response)
    }

    fn operation_result(
        &self,
        url: &str,
        response: &TransportResponse,
    ) -> Result<OperationResult, ApiError> {
        match parse_optional_body(response)? {
            None => Ok(OperationResult::Empty),
            Some(value @ Value::Object(_)) => {
                Ok(OperationResult::Resource(wrap(self.clone(), url, value)?))
            }
            Some(value) => Ok(OperationResult::Value(value)),
        }
    }
}

fn parse_optional_body(response: &TransportResponse) -> Result<Option<Value>, ApiError> {
    if response.body.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(&response.body)?))
}

/// Appends query parameters to an absolute URL, keeping any existing ones.
pub fn append_query(url: &str, params: &[(String, String)]) -> Result<String, ApiError> {
    if params.is_empty() {
        return Ok(url.to_string());
    }
    let mut parsed = Url::parse(url).map_err(|e| ApiError::InvalidUri(format!("{url}: {e}")))?;
    parsed
        .query_pairs_mut()
        .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    Ok(parsed.to_string())
}
