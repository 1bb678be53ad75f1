//
//  launchpad-client
//  cli/resource.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Read commands: `root`, `get`, `follow`, `slice`.
//!
//! ```bash
//! lp root
//! lp get bugs/1
//! lp get bugs/1 --field title
//! lp get ubuntu --param ws.size=5
//! lp follow bugs/1 owner
//! lp slice bugs --start 10 --size 5
//! ```

use anyhow::{bail, Result};
use clap::Args;

use crate::api::{Resource, Wrapped};
use crate::output::OutputWriter;

use super::{build_client, parse_param, GlobalOptions};

/// Show the service root
#[derive(Args, Debug)]
pub struct RootCommand {}

impl RootCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = build_client(global)?;
        let resource = client.get("").await?;
        OutputWriter::from_flag(global.json).write_resource(&resource)
    }
}

/// Fetch a resource
#[derive(Args, Debug)]
pub struct GetCommand {
    /// Resource URI, absolute or relative to the API root
    pub uri: String,

    /// Query parameters (key=value, can be repeated)
    #[arg(long, short = 'P', action = clap::ArgAction::Append)]
    pub param: Vec<String>,

    /// Print only this field
    #[arg(long, short = 'f')]
    pub field: Option<String>,
}

impl GetCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = build_client(global)?;
        let params = self
            .param
            .iter()
            .map(|p| parse_param(p))
            .collect::<Result<Vec<_>>>()?;

        let resource = if params.is_empty() {
            client.get(&self.uri).await?
        } else {
            client.get_with_params(&self.uri, &params).await?
        };

        let writer = OutputWriter::from_flag(global.json);
        match &self.field {
            Some(name) => match resource.get_field(name) {
                Some(value) => writer.write_value(value),
                None => bail!("No field '{}' on {} {}", name, resource.kind(), resource.original_uri()),
            },
            None => writer.write_resource(&resource),
        }
    }
}

/// Fetch the resource behind a named link
#[derive(Args, Debug)]
pub struct FollowCommand {
    /// Resource URI, absolute or relative to the API root
    pub uri: String,

    /// Link name, e.g. `owner` for `owner_link` or `bugs` for `bugs_collection_link`
    pub link: String,
}

impl FollowCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = build_client(global)?;
        let resource = client.get(&self.uri).await?;
        let target = resource.follow_link(&self.link).await?;
        OutputWriter::from_flag(global.json).write_resource(&target)
    }
}

/// Fetch part of a collection
#[derive(Args, Debug)]
pub struct SliceCommand {
    /// Collection URI, absolute or relative to the API root
    pub uri: String,

    /// Index of the first member
    #[arg(long, default_value = "0")]
    pub start: u64,

    /// Number of members
    #[arg(long, default_value = "20")]
    pub size: u64,
}

impl SliceCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = build_client(global)?;
        let Resource::Collection(collection) = client.get(&self.uri).await? else {
            bail!("{} is not a collection", self.uri);
        };
        let page = collection.slice(self.start, self.size).await?;
        OutputWriter::from_flag(global.json).write_resource(&page)
    }
}
