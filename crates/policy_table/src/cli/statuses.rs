//! Statuses command - Show the status filter buttons

use anyhow::Result;
use policy_table_core::StatusSelector;
use serde::Serialize;

use crate::cli::output::{build_table, print_json};

/// Arguments for the statuses command
#[derive(Debug)]
pub struct StatusesArgs {
    pub json: bool,
}

/// One filter button
#[derive(Debug, Serialize)]
pub struct StatusButton {
    pub selector: StatusSelector,
    pub label: String,
    /// Raw codes matched; empty for ALL, which matches everything
    pub codes: Vec<String>,
}

pub fn buttons() -> Vec<StatusButton> {
    StatusSelector::BUTTONS
        .iter()
        .map(|selector| StatusButton {
            selector: *selector,
            label: selector.label(),
            codes: selector
                .codes()
                .unwrap_or_default()
                .iter()
                .map(|code| code.as_str().to_string())
                .collect(),
        })
        .collect()
}

/// Execute the statuses command
pub fn run(args: StatusesArgs) -> Result<()> {
    let buttons = buttons();
    if args.json {
        return print_json(&buttons);
    }

    let headers = ["Selector", "Label", "Matches"].map(String::from);
    let rows = buttons
        .into_iter()
        .map(|button| {
            let matches = if button.codes.is_empty() {
                "*".to_string()
            } else {
                button.codes.join(", ")
            };
            vec![
                (button.selector.to_string(), None),
                (button.label, None),
                (matches, None),
            ]
        })
        .collect();

    println!("{}", build_table(&headers, rows));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_in_order() {
        let buttons = buttons();
        let selectors: Vec<&str> = buttons.iter().map(|b| b.selector.as_str()).collect();
        assert_eq!(
            selectors,
            vec!["ALL", "ACTIVE", "SURRENDERED", "CANCELLED", "DRAFT", "TERMINATED", "LAPSE"]
        );
    }

    #[test]
    fn test_terminated_button_codes() {
        let buttons = buttons();
        let terminated = buttons
            .iter()
            .find(|b| b.selector == StatusSelector::Terminated)
            .unwrap();
        assert_eq!(terminated.label, "Terminated");
        assert_eq!(terminated.codes, vec!["DEATH", "MATURED"]);
        assert!(buttons[0].codes.is_empty());
    }
}
