//
//  launchpad-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod auth;
mod config;
mod fields;
mod operation;
mod resource;
mod update;

pub use auth::AuthCommand;
pub use config::ConfigCommand;
pub use fields::{parse_field, parse_param};
pub use operation::{NamedGetCommand, NamedPostCommand};
pub use resource::{FollowCommand, GetCommand, RootCommand, SliceCommand};
pub use update::{PatchCommand, SaveCommand};

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use crate::api::{HttpTransport, LaunchpadClient};
use crate::auth::{AuthCredential, KeyringStore};
use crate::config::Config;

/// Launchpad CLI - Browse and update the Launchpad web service
#[derive(Parser, Debug)]
#[command(
    name = "lp",
    version,
    about = "Browse and update the Launchpad web service from the command line",
    propagate_version = true,
    after_help = "Use 'lp <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Page URL of the site; the API root is derived from its origin
    #[arg(long, global = true, env = "LP_PAGE_URL")]
    pub page_url: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Ignore stored credentials
    #[arg(long, global = true)]
    pub anonymous: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the service root
    Root(RootCommand),

    /// Fetch a resource
    Get(GetCommand),

    /// Fetch the resource behind a named link
    Follow(FollowCommand),

    /// Fetch part of a collection
    Slice(SliceCommand),

    /// Set fields on an entry and PUT the whole entry back
    Save(SaveCommand),

    /// Send a partial update (PATCH) to an entry
    Patch(PatchCommand),

    /// Invoke a read-only named operation
    #[command(name = "named-get")]
    NamedGet(NamedGetCommand),

    /// Invoke a write named operation
    #[command(name = "named-post")]
    NamedPost(NamedPostCommand),

    /// Manage stored credentials
    Auth(AuthCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Print version information
    Version,
}

/// Builds a client from the config file, global flags and stored credentials.
pub fn build_client(global: &GlobalOptions) -> Result<LaunchpadClient> {
    let mut config = Config::load()?;
    if let Some(page_url) = &global.page_url {
        config.set("page_url", page_url.clone())?;
    }

    let credential = if global.anonymous {
        AuthCredential::anonymous(&config.core.consumer_key)
    } else {
        stored_credential(&config)
    };
    debug!(authenticated = credential.is_authenticated(), "building client");

    let transport = HttpTransport::with_timeout(Duration::from_secs(config.core.timeout))?
        .with_auth(credential);
    Ok(LaunchpadClient::with_transport(
        &config.core.page_url,
        Arc::new(transport),
    )?)
}

fn stored_credential(config: &Config) -> AuthCredential {
    let anonymous = AuthCredential::anonymous(&config.core.consumer_key);
    let Ok(host) = config.api_host() else {
        return anonymous;
    };

    match KeyringStore::new().get(&host) {
        Ok(Some(token)) => AuthCredential::from_token(&config.core.consumer_key, token),
        Ok(None) => anonymous,
        Err(e) => {
            warn!("Could not read stored credentials, continuing anonymously: {e:#}");
            anonymous
        }
    }
}
