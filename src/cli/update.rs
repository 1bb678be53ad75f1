//
//  launchpad-client
//  cli/update.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Write commands: `save` (full PUT) and `patch` (partial update).
//!
//! ```bash
//! lp save bugs/1 -F title="Better title" -F tags='["crash"]'
//! lp patch bugs/1 -F title="Better title"
//! ```

use anyhow::{bail, Result};
use clap::Args;
use serde_json::{Map, Value};

use crate::api::{Entry, LaunchpadClient, Resource, Wrapped};
use crate::output::OutputWriter;

use super::{build_client, parse_field, GlobalOptions};

fn parse_fields(fields: &[String]) -> Result<Vec<(String, Value)>> {
    if fields.is_empty() {
        bail!("At least one -F key=value is required");
    }
    fields.iter().map(|f| parse_field(f)).collect()
}

async fn fetch_entry(client: &LaunchpadClient, uri: &str) -> Result<Entry> {
    match client.get(uri).await? {
        Resource::Entry(entry) => Ok(entry),
        other => bail!("{} is a {}, not an entry", uri, other.kind()),
    }
}

/// Set fields on an entry and PUT the whole entry back
#[derive(Args, Debug)]
pub struct SaveCommand {
    /// Entry URI, absolute or relative to the API root
    pub uri: String,

    /// Fields to set (key=value, JSON-typed, can be repeated)
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,
}

impl SaveCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let fields = parse_fields(&self.field)?;
        let client = build_client(global)?;
        let mut entry = fetch_entry(&client, &self.uri).await?;

        for (name, value) in fields {
            entry.set_field(name, value);
        }
        entry.save().await?;

        let writer = OutputWriter::from_flag(global.json);
        writer.write_success(&format!("Saved {}", entry.self_link().unwrap_or(self.uri.as_str())));
        writer.write_resource(&Resource::Entry(entry))
    }
}

/// Send a partial update (PATCH) to an entry
#[derive(Args, Debug)]
pub struct PatchCommand {
    /// Entry URI, absolute or relative to the API root
    pub uri: String,

    /// Fields to change (key=value, JSON-typed, can be repeated)
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,
}

impl PatchCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let mut fields = parse_fields(&self.field)?;
        let client = build_client(global)?;
        let mut entry = fetch_entry(&client, &self.uri).await?;

        if fields.len() == 1 {
            let (name, value) = fields.remove(0);
            entry.patch_field(&name, value).await?;
        } else {
            let Some(self_link) = entry.self_link().map(str::to_string) else {
                bail!("{} has no self_link", self.uri);
            };
            let body: Map<String, Value> = fields.into_iter().collect();
            client.patch(&self_link, body).await?;
            entry.refresh().await?;
        }

        let writer = OutputWriter::from_flag(global.json);
        writer.write_success(&format!("Patched {}", entry.self_link().unwrap_or(self.uri.as_str())));
        writer.write_resource(&Resource::Entry(entry))
    }
}
