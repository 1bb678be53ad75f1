//
//  launchpad-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Launchpad Client Library
//!
//! A client for the Launchpad web service that wraps JSON representations
//! into typed resources, plus the `lp` command-line tool built on it.
//!
//! ## Overview
//!
//! Every resource the service returns is one of three things:
//!
//! - the **service root**, where navigation begins
//! - an **entry**, a single resource with a canonical `self_link`
//! - a **collection**, a paged list carrying `total_size`
//!
//! The [`api`] layer fetches representations, classifies them, and lets
//! callers mutate entries and push them back with PUT or PATCH.
//!
//! ## Module Structure
//!
//! - [`cli`]: Command-line interface definitions using clap
//! - [`api`]: Client facade, resource wrapper, and HTTP transport
//! - [`auth`]: OAuth credentials and keyring storage
//! - [`config`]: Configuration file management
//! - [`output`]: Table and JSON rendering
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use launchpad_client::api::{LaunchpadClient, Resource, Wrapped};
//!
//! # async fn example() -> Result<(), launchpad_client::api::ApiError> {
//! let client = LaunchpadClient::new("https://launchpad.net/")?;
//! match client.get("bugs/1").await? {
//!     Resource::Entry(bug) => println!("{:?}", bug.get_field("title")),
//!     other => println!("got a {}", other.kind()),
//! }
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the clap derive API.
pub mod cli;

/// Web service client.
///
/// Resolves URIs against the API root, sends requests, and wraps the
/// returned representations.
pub mod api;

/// Authentication and credential management.
///
/// OAuth 1.0 `PLAINTEXT` signing and secure token storage via the system keyring.
pub mod auth;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/lp/config.toml`
/// - macOS: `~/Library/Application Support/lp/config.toml`
/// - Windows: `%APPDATA%\lp\config.toml`
pub mod config;

/// Output formatting for tables and JSON.
pub mod output;

pub use api::LaunchpadClient;
pub use cli::Cli;
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes, configuration
/// paths and as the default OAuth consumer key.
pub const APP_NAME: &str = "lp";

/// Application version constant, derived from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// The server rejected the credentials (401 or 403).
    ///
    /// Run `lp auth login` to store an access token.
    pub const AUTH_ERROR: i32 = 4;

    /// The requested resource does not exist (404).
    pub const NOT_FOUND: i32 = 8;

    /// Picks the exit code for an error returned by a command.
    pub fn for_error(error: &anyhow::Error) -> i32 {
        match error.downcast_ref::<crate::api::ApiError>() {
            Some(e) if e.is_not_found() => NOT_FOUND,
            Some(e) if e.is_auth_error() => AUTH_ERROR,
            _ => ERROR,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::api::ApiError;
        use reqwest::StatusCode;

        #[test]
        fn test_for_error() {
            let not_found = anyhow::Error::new(ApiError::Http {
                status: StatusCode::NOT_FOUND,
                body: String::new(),
            });
            assert_eq!(for_error(&not_found), NOT_FOUND);

            let forbidden = anyhow::Error::new(ApiError::Http {
                status: StatusCode::FORBIDDEN,
                body: String::new(),
            });
            assert_eq!(for_error(&forbidden), AUTH_ERROR);

            assert_eq!(for_error(&anyhow::anyhow!("boom")), ERROR);
        }
    }
}
