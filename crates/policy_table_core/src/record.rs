//! Record model for the policy dataset.
//!
//! A record has a fixed schema of eight fields. Every field is optional so a
//! dataset with gaps still loads; missing values render empty and never match
//! a search.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// One column of the fixed record schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ProposalNumber,
    PolicyNumber,
    IssueDate,
    MaturityDate,
    Status,
    Product,
    Client,
    Premium,
}

impl Field {
    /// All fields in table header order.
    pub const ALL: [Field; 8] = [
        Field::ProposalNumber,
        Field::PolicyNumber,
        Field::IssueDate,
        Field::MaturityDate,
        Field::Status,
        Field::Product,
        Field::Client,
        Field::Premium,
    ];

    /// Raw key as it appears in the dataset.
    pub fn key(&self) -> &'static str {
        match self {
            Field::ProposalNumber => "PROPOSAL_NUMBER",
            Field::PolicyNumber => "POLICY_NUMBER",
            Field::IssueDate => "ISSUE_DATE",
            Field::MaturityDate => "MATURITY_DATE",
            Field::Status => "STATUS",
            Field::Product => "PRODUCT",
            Field::Client => "CLIENT",
            Field::Premium => "PREMIUM",
        }
    }

    /// Human-readable header label ("POLICY_NUMBER" -> "Policy Number").
    pub fn label(&self) -> String {
        crate::label::format_label(self.key())
    }
}

/// A scalar cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(Number),
    Text(String),
}

impl FieldValue {
    /// Borrow the value as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// String form used for both display and search.
    ///
    /// Integral numbers render without a fractional part, so a premium of
    /// `1000.0` reads and matches as "1000".
    pub fn display_string(&self) -> String {
        match self {
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) => render_number(n),
            FieldValue::Text(text) => text.clone(),
        }
    }
}

fn render_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 => {
            format!("{}", v as i64)
        }
        Some(v) => v.to_string(),
        None => n.to_string(),
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value.into())
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Number(value.into())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// One row of the dataset.
///
/// Keys outside the schema are ignored when loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "PROPOSAL_NUMBER", default, skip_serializing_if = "Option::is_none")]
    pub proposal_number: Option<FieldValue>,
    #[serde(rename = "POLICY_NUMBER", default, skip_serializing_if = "Option::is_none")]
    pub policy_number: Option<FieldValue>,
    #[serde(rename = "ISSUE_DATE", default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<FieldValue>,
    #[serde(rename = "MATURITY_DATE", default, skip_serializing_if = "Option::is_none")]
    pub maturity_date: Option<FieldValue>,
    #[serde(rename = "STATUS", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FieldValue>,
    #[serde(rename = "PRODUCT", default, skip_serializing_if = "Option::is_none")]
    pub product: Option<FieldValue>,
    #[serde(rename = "CLIENT", default, skip_serializing_if = "Option::is_none")]
    pub client: Option<FieldValue>,
    #[serde(rename = "PREMIUM", default, skip_serializing_if = "Option::is_none")]
    pub premium: Option<FieldValue>,
}

impl Record {
    /// Set a field, builder style.
    pub fn with(mut self, field: Field, value: impl Into<FieldValue>) -> Self {
        *self.slot_mut(field) = Some(value.into());
        self
    }

    /// Value of a field, `None` when missing or null.
    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        match field {
            Field::ProposalNumber => self.proposal_number.as_ref(),
            Field::PolicyNumber => self.policy_number.as_ref(),
            Field::IssueDate => self.issue_date.as_ref(),
            Field::MaturityDate => self.maturity_date.as_ref(),
            Field::Status => self.status.as_ref(),
            Field::Product => self.product.as_ref(),
            Field::Client => self.client.as_ref(),
            Field::Premium => self.premium.as_ref(),
        }
    }

    /// Raw STATUS code, if the field holds text.
    pub fn status_code(&self) -> Option<&str> {
        self.status.as_ref().and_then(FieldValue::as_text)
    }

    /// Present values in schema order.
    pub fn values(&self) -> impl Iterator<Item = &FieldValue> + '_ {
        Field::ALL.iter().filter_map(move |field| self.get(*field))
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<FieldValue> {
        match field {
            Field::ProposalNumber => &mut self.proposal_number,
            Field::PolicyNumber => &mut self.policy_number,
            Field::IssueDate => &mut self.issue_date,
            Field::MaturityDate => &mut self.maturity_date,
            Field::Status => &mut self.status,
            Field::Product => &mut self.product,
            Field::Client => &mut self.client,
            Field::Premium => &mut self.premium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_labels_in_header_order() {
        let labels: Vec<String> = Field::ALL.iter().map(Field::label).collect();
        assert_eq!(
            labels,
            vec![
                "Proposal Number",
                "Policy Number",
                "Issue Date",
                "Maturity Date",
                "Status",
                "Product",
                "Client",
                "Premium",
            ]
        );
    }

    #[test]
    fn test_deserialize_mixed_scalars() {
        let json = r#"{
            "PROPOSAL_NUMBER": "P-001",
            "POLICY_NUMBER": 4410021,
            "STATUS": "ACTIVE",
            "CLIENT": null,
            "PREMIUM": 1250.5,
            "BRANCH": "ignored"
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.get(Field::ProposalNumber), Some(&FieldValue::from("P-001")));
        assert_eq!(record.get(Field::PolicyNumber), Some(&FieldValue::from(4410021i64)));
        assert_eq!(record.status_code(), Some("ACTIVE"));
        assert_eq!(record.get(Field::Client), None);
        assert_eq!(record.get(Field::IssueDate), None);
        assert_eq!(record.premium.as_ref().unwrap().display_string(), "1250.5");
    }

    #[test]
    fn test_numeric_status_has_no_code() {
        let record = Record::default().with(Field::Status, 3i64);
        assert_eq!(record.status_code(), None);
    }

    #[test]
    fn test_number_rendering() {
        let integral: Record = serde_json::from_str(r#"{"PREMIUM": 1000.0}"#).unwrap();
        assert_eq!(integral.premium.unwrap().display_string(), "1000");

        let negative: Record = serde_json::from_str(r#"{"PREMIUM": -42}"#).unwrap();
        assert_eq!(negative.premium.unwrap().display_string(), "-42");

        let fractional: Record = serde_json::from_str(r#"{"PREMIUM": 0.25}"#).unwrap();
        assert_eq!(fractional.premium.unwrap().display_string(), "0.25");
    }

    #[test]
    fn test_values_skip_missing_fields() {
        let record = Record::default()
            .with(Field::Client, "Ada Lovelace")
            .with(Field::Premium, 1000i64);
        let values: Vec<String> = record.values().map(FieldValue::display_string).collect();
        assert_eq!(values, vec!["Ada Lovelace", "1000"]);
    }

    #[test]
    fn test_serialize_uses_raw_keys() {
        let record = Record::default()
            .with(Field::PolicyNumber, "POL-9")
            .with(Field::Status, "LAPSE");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["POLICY_NUMBER"], "POL-9");
        assert_eq!(value["STATUS"], "LAPSE");
        assert!(value.get("CLIENT").is_none());
    }
}
