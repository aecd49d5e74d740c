//! Output formatting utilities for CLI commands

use anyhow::Context;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

/// Build a table with cyan headers.
pub fn build_table(headers: &[String], rows: Vec<Vec<(String, Option<Color>)>>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|h| Cell::new(h).fg(Color::Cyan))
        .collect();
    table.set_header(header_cells);

    for row in rows {
        let cells: Vec<Cell> = row
            .into_iter()
            .map(|(text, color)| {
                let cell = Cell::new(text);
                if let Some(c) = color {
                    cell.fg(c)
                } else {
                    cell
                }
            })
            .collect();
        table.add_row(cells);
    }

    table
}

/// Headers followed by a single row holding `message`.
pub fn build_placeholder_table(headers: &[String], message: &str) -> Table {
    let mut table = build_table(headers, Vec::new());
    table.add_row(vec![Cell::new(message)
        .set_alignment(CellAlignment::Center)
        .fg(Color::Grey)]);
    table
}

/// Print any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}

/// Color for a raw status code
pub fn color_for_status(raw: &str) -> Color {
    match raw {
        "ACTIVE" => Color::Green,
        "DRAFT" => Color::Yellow,
        "LAPSE" | "CANCELLED" => Color::Red,
        "SURRENDERED" => Color::Magenta,
        "DEATH" | "MATURED" => Color::Blue,
        _ => Color::Grey,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<String> {
        vec!["Client".to_string(), "Status".to_string()]
    }

    #[test]
    fn test_build_table_renders_cells() {
        let table = build_table(
            &headers(),
            vec![vec![
                ("Amelia Hart".to_string(), None),
                ("Active".to_string(), Some(Color::Green)),
            ]],
        );
        let rendered = table.to_string();
        assert!(rendered.contains("Client"));
        assert!(rendered.contains("Amelia Hart"));
        assert!(rendered.contains("Active"));
    }

    #[test]
    fn test_placeholder_table() {
        let rendered = build_placeholder_table(&headers(), "No records found").to_string();
        assert!(rendered.contains("No records found"));
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(color_for_status("ACTIVE"), Color::Green);
        assert_eq!(color_for_status("MATURED"), Color::Blue);
        assert_eq!(color_for_status("unknown"), Color::Grey);
    }
}
