//
//  launchpad-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Renders wrapped resources for the terminal:
//!
//! - **Table format**: field/value tables and collection listings via `comfy_table`
//! - **JSON format**: the raw representation, pretty-printed with `serde_json`
//!
//! ```rust,ignore
//! use launchpad_client::output::{OutputWriter, OutputFormat};
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! writer.write_resource(&resource)?;
//! writer.write_success("Saved");
//! ```

mod table;

pub use table::*;

use serde_json::Value;

use crate::api::{OperationResult, Resource, Wrapped};

/// Output formats.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    /// Human-readable tables; the default.
    #[default]
    Table,
    /// Pretty-printed JSON for scripting.
    Json,
}

/// Writes resources and status lines to stdout/stderr.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    /// Creates a writer; color follows the terminal.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    /// Picks JSON when `json` is set, tables otherwise.
    pub fn from_flag(json: bool) -> Self {
        Self::new(if json { OutputFormat::Json } else { OutputFormat::Table })
    }

    /// Renders a wrapped resource.
    pub fn write_resource(&self, resource: &Resource) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(&resource.to_value()),
            OutputFormat::Table => {
                println!("{}", render_resource(resource, self.color));
                Ok(())
            }
        }
    }

    /// Renders a raw JSON value.
    pub fn write_value(&self, value: &Value) -> anyhow::Result<()> {
        match (self.format, value) {
            (OutputFormat::Table, Value::String(s)) => {
                println!("{s}");
                Ok(())
            }
            _ => write_json(value),
        }
    }

    /// Renders the outcome of a named operation.
    pub fn write_operation(&self, result: &OperationResult) -> anyhow::Result<()> {
        match result {
            OperationResult::Resource(resource) => self.write_resource(resource),
            OperationResult::Value(value) => self.write_value(value),
            OperationResult::Empty => {
                self.write_success("Done");
                Ok(())
            }
        }
    }

    /// Prints a green check line to stderr.
    pub fn write_success(&self, message: &str) {
        if self.color {
            eprintln!("{} {}", console::style("✓").green(), message);
        } else {
            eprintln!("✓ {message}");
        }
    }

    /// Prints a red cross line to stderr.
    pub fn write_error(&self, message: &str) {
        if self.color {
            eprintln!("{} {}", console::style("✗").red(), message);
        } else {
            eprintln!("✗ {message}");
        }
    }
}

/// Pretty-prints any serializable value as JSON.
pub fn write_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Renders a resource as a table string.
pub fn render_resource(resource: &Resource, color: bool) -> String {
    match resource {
        Resource::Collection(collection) => {
            let header = format!(
                "{} of {} (from {})",
                collection.entries().len(),
                collection
                    .total_size()
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "?".to_string()),
                collection.start()
            );
            format!("{}\n{}", header, collection_table(collection.entries(), color))
        }
        _ => fields_table(resource.fields(), color).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{wrap, LaunchpadClient};
    use serde_json::json;

    fn resource(value: Value) -> Resource {
        let client = LaunchpadClient::new("http://example.com/").unwrap();
        wrap(client, "http://example.com/api/beta/bugs", value).unwrap()
    }

    #[test]
    fn test_render_collection_header() {
        let bugs = resource(json!({
            "total_size": 12,
            "start": 5,
            "entries": [{"id": 6, "title": "Crash"}]
        }));
        let rendered = render_resource(&bugs, false);
        assert!(rendered.starts_with("1 of 12 (from 5)\n"));
        assert!(rendered.contains("Crash"));
    }

    #[test]
    fn test_render_unknown_total() {
        let bugs = resource(json!({"total_size": null, "entries": []}));
        assert!(render_resource(&bugs, false).starts_with("0 of ? (from 0)"));
    }

    #[test]
    fn test_render_entry_fields() {
        let bug = resource(json!({"title": "Crash", "heat": 3}));
        let rendered = render_resource(&bug, false);
        assert!(rendered.contains("title"));
        assert!(rendered.contains("heat"));
    }
}
