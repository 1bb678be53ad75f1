//
//  launchpad-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! Shared error handling used by the transport, the client facade, and the
//! wrapped resources.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for every API operation
//! - [`extract_error_message`] - Pulls a human readable message out of an error body
//!
//! # Example
//!
//! ```rust
//! use launchpad_client::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(e) if e.is_not_found() => println!("No such resource"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use reqwest::StatusCode;
use thiserror::Error;

/// Unified error type for all web service operations.
///
/// Every failure is local to the one request that produced it; nothing is
/// retried and nothing is fatal to the process.
///
/// # Variants
///
/// | Variant | Description |
/// |---------|-------------|
/// | `Network` | Connection failure or transport timeout |
/// | `Http` | Any non-2xx status, raw body kept for inspection |
/// | `Parse` | The response body was not valid JSON |
/// | `NotAnObject` | A representation was valid JSON but not an object |
/// | `InvalidUri` | A page URL or resource URI could not be parsed |
/// | `MissingSelfLink` | An entry without `self_link` was asked to save |
/// | `MissingLink` | `follow_link` found no matching link field |
#[derive(Error, Debug)]
pub enum ApiError {
    /// A network-level error occurred during the request.
    ///
    /// Covers connection failures, timeouts, DNS resolution errors and other
    /// transport-layer issues reported by `reqwest`.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    ///
    /// # Fields
    ///
    /// * `status` - The HTTP status code
    /// * `body` - The raw response body, unmodified
    #[error("API error ({status}): {}", extract_error_message(.body))]
    Http {
        /// The HTTP status code returned by the server
        status: StatusCode,
        /// The raw response body
        body: String,
    },

    /// The response body could not be parsed as JSON.
    #[error("Malformed JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A representation was valid JSON but not a JSON object.
    #[error("Representation is not a JSON object")]
    NotAnObject,

    /// A URI or page URL could not be parsed.
    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    /// The entry has no `self_link` to send updates to.
    #[error("Entry has no self_link")]
    MissingSelfLink,

    /// No `<name>_link` or `<name>_collection_link` field exists on the resource.
    #[error("No link named '{0}' on this resource")]
    MissingLink(String),
}

impl ApiError {
    /// Returns the HTTP status for `Http` errors, `None` otherwise.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Returns `true` if the server answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Returns `true` if the server rejected the credentials (401 or 403).
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }
}

/// Extracts a user-friendly message from an error response body.
///
/// The web service usually answers errors with a plain-text body, but
/// JSON bodies are also recognised in these shapes:
///
/// ```json
/// {"error": {"message": "..."}}
/// {"errors": [{"message": "..."}]}
/// {"message": "..."}
/// ```
///
/// Falls back to the trimmed raw body, or `"(empty body)"`.
pub fn extract_error_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = json
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }

        if let Some(message) = json
            .get("errors")
            .and_then(|e| e.as_array())
            .and_then(|arr| arr.first())
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }

        if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "(empty body)".to_string()
    } else {
        trimmed.to_string()
    }
}
