//! Projection of records onto the fixed table columns.
//!
//! Headers and the STATUS column go through [`format_label`]; every other
//! cell is shown raw.

use crate::label::format_label;
use crate::record::{Field, FieldValue, Record};

/// Shown in place of the rows when nothing matches.
pub const NO_RECORDS_PLACEHOLDER: &str = "No records found";

/// Column headers in display order.
pub fn headers() -> Vec<String> {
    Field::ALL.iter().map(Field::label).collect()
}

/// Display text of one cell. Missing values render empty.
pub fn cell_text(record: &Record, field: Field) -> String {
    match (field, record.get(field)) {
        (_, None) => String::new(),
        (Field::Status, Some(value)) => format_label(&value.display_string()),
        (_, Some(value)) => value.display_string(),
    }
}

/// Display text of every cell in header order.
pub fn row_cells(record: &Record) -> Vec<String> {
    Field::ALL
        .iter()
        .map(|field| cell_text(record, *field))
        .collect()
}

/// Convenience for callers that only need the formatted status.
pub fn status_label(record: &Record) -> Option<String> {
    record
        .get(Field::Status)
        .map(FieldValue::display_string)
        .map(|raw| format_label(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers() {
        assert_eq!(headers().len(), Field::ALL.len());
        assert_eq!(headers()[1], "Policy Number");
    }

    #[test]
    fn test_row_cells_format_only_status() {
        let record = Record::default()
            .with(Field::ProposalNumber, "PR-1")
            .with(Field::Status, "MATURED")
            .with(Field::Product, "TERM_LIFE_20")
            .with(Field::Premium, 1000i64);

        let cells = row_cells(&record);
        assert_eq!(cells[0], "PR-1");
        assert_eq!(cells[1], "");
        assert_eq!(cells[4], "Matured");
        assert_eq!(cells[5], "TERM_LIFE_20");
        assert_eq!(cells[7], "1000");
    }

    #[test]
    fn test_status_label() {
        let record = Record::default().with(Field::Status, "SURRENDERED");
        assert_eq!(status_label(&record).as_deref(), Some("Surrendered"));
        assert_eq!(status_label(&Record::default()), None);
    }
}
