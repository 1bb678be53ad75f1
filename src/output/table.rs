//
//  launchpad-client
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Table rendering for representations.

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde_json::{Map, Value};

/// Columns shown for collection members, in preference order.
const PREFERRED_COLUMNS: &[&str] = &["id", "name", "display_name", "title", "status", "self_link"];

/// Most columns a collection listing shows.
const MAX_COLUMNS: usize = 4;

/// Table with UTF-8 borders and dynamic column widths.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn set_headers(table: &mut Table, headers: &[&str], color: bool) {
    if color {
        table.set_header(headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
    } else {
        table.set_header(headers.to_vec());
    }
}

/// Renders a JSON value for a single cell.
///
/// Strings are shown bare, `null` as an empty cell, everything else as
/// compact JSON.
pub fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Field/value table for an entry or the service root.
pub fn fields_table(fields: &Map<String, Value>, color: bool) -> Table {
    let mut table = create_table();
    set_headers(&mut table, &["Field", "Value"], color);
    for (name, value) in fields {
        table.add_row(vec![name.clone(), format_cell(value)]);
    }
    table
}

/// Picks which member fields to show in a collection listing.
pub fn collection_columns(entries: &[Value]) -> Vec<String> {
    let Some(first) = entries.iter().find_map(Value::as_object) else {
        return Vec::new();
    };

    let mut columns: Vec<String> = PREFERRED_COLUMNS
        .iter()
        .filter(|c| first.contains_key(**c))
        .take(MAX_COLUMNS)
        .map(|c| c.to_string())
        .collect();

    if columns.is_empty() {
        columns = first.keys().take(MAX_COLUMNS).cloned().collect();
    }
    columns
}

/// One row per member of a collection page.
pub fn collection_table(entries: &[Value], color: bool) -> Table {
    let columns = collection_columns(entries);
    let mut table = create_table();
    let headers: Vec<&str> = columns.iter().map(String::as_str).collect();
    set_headers(&mut table, &headers, color);

    for entry in entries {
        let row: Vec<String> = match entry.as_object() {
            Some(object) => columns
                .iter()
                .map(|c| object.get(c).map(format_cell).unwrap_or_default())
                .collect(),
            None => vec![format_cell(entry)],
        };
        table.add_row(row);
    }
    table
}
