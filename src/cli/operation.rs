//
//  launchpad-client
//  cli/operation.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Named operations (`ws.op`).
//!
//! ```bash
//! lp named-get people find -P text=jo
//! lp named-post bugs createBug -P target=ubuntu -P title=Crash -P description=Boom
//! ```

use anyhow::Result;
use clap::Args;

use crate::output::OutputWriter;

use super::{build_client, parse_param, GlobalOptions};

fn parse_params(params: &[String]) -> Result<Vec<(String, String)>> {
    params.iter().map(|p| parse_param(p)).collect()
}

/// Invoke a read-only named operation
#[derive(Args, Debug)]
pub struct NamedGetCommand {
    /// Resource URI, absolute or relative to the API root
    pub uri: String,

    /// Operation name
    pub operation: String,

    /// Operation parameters (key=value, can be repeated)
    #[arg(long, short = 'P', action = clap::ArgAction::Append)]
    pub param: Vec<String>,
}

impl NamedGetCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let params = parse_params(&self.param)?;
        let client = build_client(global)?;
        let result = client.named_get(&self.uri, &self.operation, &params).await?;
        OutputWriter::from_flag(global.json).write_operation(&result)
    }
}

/// Invoke a write named operation
#[derive(Args, Debug)]
pub struct NamedPostCommand {
    /// Resource URI, absolute or relative to the API root
    pub uri: String,

    /// Operation name
    pub operation: String,

    /// Operation parameters (key=value, can be repeated)
    #[arg(long, short = 'P', action = clap::ArgAction::Append)]
    pub param: Vec<String>,
}

impl NamedPostCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let params = parse_params(&self.param)?;
        let client = build_client(global)?;
        let result = client.named_post(&self.uri, &self.operation, &params).await?;
        OutputWriter::from_flag(global.json).write_operation(&result)
    }
}
