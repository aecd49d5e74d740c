//! List command - Print the visible records once
//!
//! Loads the dataset, applies the status selector and search string, and
//! prints the result as a table or as JSON.

use anyhow::Result;
use comfy_table::Color;
use policy_table_core::table::{self, NO_RECORDS_PLACEHOLDER};
use policy_table_core::{filter, Record, StatusSelector};
use std::path::PathBuf;

use crate::cli::config::{load_config, resolve_dataset, resolve_status};
use crate::cli::output::{build_placeholder_table, build_table, color_for_status, print_json};

/// Arguments for the list command
#[derive(Debug)]
pub struct ListArgs {
    pub data: Option<PathBuf>,
    pub status: Option<String>,
    pub search: String,
    pub json: bool,
}

/// Execute the list command
pub fn run(args: ListArgs) -> Result<()> {
    let config = load_config()?;
    let status = resolve_status(args.status.as_deref(), &config)?;
    let loaded = resolve_dataset(args.data, &config)?;

    let records = loaded.dataset.records();
    let visible = filter(records, status, &args.search);

    if args.json {
        return print_json(&visible);
    }

    println!("{}", summary_line(visible.len(), records.len(), status, &args.search));
    println!();
    println!("{}", render_table(&visible));
    Ok(())
}

/// "Showing 2 of 10 records (status: Terminated, search: "fin")"
fn summary_line(visible: usize, total: usize, status: StatusSelector, search: &str) -> String {
    let mut line = format!(
        "Showing {} of {} records (status: {}",
        visible,
        total,
        status.label()
    );
    if !search.is_empty() {
        line.push_str(&format!(", search: \"{}\"", search));
    }
    line.push(')');
    line
}

fn render_table(visible: &[&Record]) -> comfy_table::Table {
    let headers = table::headers();
    if visible.is_empty() {
        return build_placeholder_table(&headers, NO_RECORDS_PLACEHOLDER);
    }

    let rows: Vec<Vec<(String, Option<Color>)>> = visible
        .iter()
        .map(|record| {
            let status_color = record.status_code().map(color_for_status);
            table::row_cells(record)
                .into_iter()
                .enumerate()
                .map(|(idx, cell)| {
                    let color = if idx == STATUS_COLUMN { status_color } else { None };
                    (cell, color)
                })
                .collect()
        })
        .collect();

    build_table(&headers, rows)
}

const STATUS_COLUMN: usize = 4;
