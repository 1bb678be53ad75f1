//
//  launchpad-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! A small client for the Launchpad web service that wraps JSON
//! representations into typed resources.
//!
//! ## Architecture
//!
//! Control flows through the modules in this order:
//!
//! - [`client`]: resolves URIs against the API root and issues requests
//! - [`transport`]: sends the HTTP request (`reqwest`, or anything implementing [`Transport`])
//! - [`resource`]: classifies the parsed JSON as a service root, entry or collection
//! - [`common`]: shared error type
//!
//! ```text
//! client.get(uri) -> transport.send -> JSON parse -> wrap -> Resource
//! entry.set_field(..) -> entry.save() -> transport.send(PUT self_link)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use launchpad_client::api::{LaunchpadClient, Resource, Wrapped};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), launchpad_client::api::ApiError> {
//! let client = LaunchpadClient::new("https://launchpad.net/")?;
//! if let Resource::Entry(mut bug) = client.get("bugs/1").await? {
//!     bug.set_field("title", json!("A better title"));
//!     bug.save().await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`ApiError`]:
//!
//! - `Network`: the transport failed
//! - `Http`: non-2xx status, raw body kept
//! - `Parse`: the body was not JSON

/// Client facade: URI resolution, GET, named operations, PATCH and PUT.
pub mod client;

/// Shared error type.
pub mod common;

/// Resource wrapper and the entry mutation protocol.
pub mod resource;

/// HTTP transport seam.
pub mod transport;

pub use client::{LaunchpadClient, OperationResult};
pub use common::ApiError;
pub use resource::{wrap, Collection, Entry, Resource, ServiceRoot, Wrapped};
pub use transport::{HttpTransport, Transport};
