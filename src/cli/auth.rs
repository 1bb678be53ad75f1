//
//  launchpad-client
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authentication commands.
//!
//! Access tokens are stored in the system keyring, keyed by the host of the
//! configured page URL.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::auth::{read_token_from_stdin, AccessToken, KeyringStore};
use crate::config::Config;

use super::GlobalOptions;

/// Manage stored credentials
#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Store an access token
    Login(LoginArgs),

    /// Remove the stored access token
    Logout,

    /// Show whether a token is stored
    Status,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Access token as <key>:<secret>; read from stdin when omitted
    #[arg(long)]
    pub token: Option<String>,
}

impl AuthCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        if let Some(page_url) = &global.page_url {
            config.set("page_url", page_url.clone())?;
        }
        let host = config.api_host()?;
        let keyring = KeyringStore::new();

        match &self.command {
            AuthSubcommand::Login(args) => {
                let raw = match &args.token {
                    Some(token) => token.clone(),
                    None => {
                        eprintln!("Paste the access token as <key>:<secret>:");
                        read_token_from_stdin()?
                    }
                };
                let token = AccessToken::parse(&raw)?;
                keyring
                    .store(&host, &token)
                    .with_context(|| format!("Failed to store token for {host}"))?;
                println!("{} Logged in to {}", style("✓").green(), style(&host).cyan());
            }
            AuthSubcommand::Logout => {
                keyring.delete(&host)?;
                println!("{} Logged out of {}", style("✓").green(), style(&host).cyan());
            }
            AuthSubcommand::Status => {
                let token = keyring.get(&host)?;
                if global.json {
                    let result = serde_json::json!({
                        "host": host,
                        "authenticated": token.is_some(),
                        "token": token.as_ref().map(|t| t.key.clone()),
                    });
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else if let Some(token) = token {
                    println!("{} Logged in to {} (token {})", style("✓").green(), style(&host).cyan(), token.key);
                } else {
                    println!("{} Not logged in to {}; requests are anonymous", style("!").yellow(), style(&host).cyan());
                }
            }
        }

        Ok(())
    }
}
