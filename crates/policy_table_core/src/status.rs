//! Status codes and the selectors that filter on them.
//!
//! Records carry raw [`StatusCode`]s. Users pick a [`StatusSelector`], and a
//! selector may stand for several raw codes. The selector-to-codes relation
//! is the [`SELECTOR_CODES`] table; [`StatusSelector::All`] is the only
//! selector outside it and matches every record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::label::format_label;

/// Raw status code stored in a record's STATUS field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
    Active,
    Surrendered,
    Cancelled,
    Draft,
    Death,
    Matured,
    Lapse,
}

impl StatusCode {
    pub const ALL: [StatusCode; 7] = [
        StatusCode::Active,
        StatusCode::Surrendered,
        StatusCode::Cancelled,
        StatusCode::Draft,
        StatusCode::Death,
        StatusCode::Matured,
        StatusCode::Lapse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCode::Active => "ACTIVE",
            StatusCode::Surrendered => "SURRENDERED",
            StatusCode::Cancelled => "CANCELLED",
            StatusCode::Draft => "DRAFT",
            StatusCode::Death => "DEATH",
            StatusCode::Matured => "MATURED",
            StatusCode::Lapse => "LAPSE",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusCode {
    type Err = UnknownStatus;

    /// Exact, case-sensitive match on the raw code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Filter category offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusSelector {
    #[default]
    All,
    Active,
    Surrendered,
    Cancelled,
    Draft,
    /// Groups DEATH and MATURED.
    Terminated,
    Lapse,
}

/// Raw codes matched by each selector other than `All`.
pub const SELECTOR_CODES: &[(StatusSelector, &[StatusCode])] = &[
    (StatusSelector::Active, &[StatusCode::Active]),
    (StatusSelector::Surrendered, &[StatusCode::Surrendered]),
    (StatusSelector::Cancelled, &[StatusCode::Cancelled]),
    (StatusSelector::Draft, &[StatusCode::Draft]),
    (
        StatusSelector::Terminated,
        &[StatusCode::Death, StatusCode::Matured],
    ),
    (StatusSelector::Lapse, &[StatusCode::Lapse]),
];

impl StatusSelector {
    /// Selector buttons in display order.
    pub const BUTTONS: [StatusSelector; 7] = [
        StatusSelector::All,
        StatusSelector::Active,
        StatusSelector::Surrendered,
        StatusSelector::Cancelled,
        StatusSelector::Draft,
        StatusSelector::Terminated,
        StatusSelector::Lapse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusSelector::All => "ALL",
            StatusSelector::Active => "ACTIVE",
            StatusSelector::Surrendered => "SURRENDERED",
            StatusSelector::Cancelled => "CANCELLED",
            StatusSelector::Draft => "DRAFT",
            StatusSelector::Terminated => "TERMINATED",
            StatusSelector::Lapse => "LAPSE",
        }
    }

    /// Button label ("TERMINATED" -> "Terminated").
    pub fn label(&self) -> String {
        format_label(self.as_str())
    }

    /// Raw codes this selector matches, `None` for `All`.
    pub fn codes(&self) -> Option<&'static [StatusCode]> {
        SELECTOR_CODES
            .iter()
            .find(|(selector, _)| selector == self)
            .map(|(_, codes)| *codes)
    }

    /// Whether a raw STATUS value passes this selector.
    ///
    /// Comparison is against the raw code, case-sensitive. A missing status
    /// only passes `All`.
    pub fn matches_code(&self, raw: Option<&str>) -> bool {
        let Some(codes) = self.codes() else {
            return true;
        };
        let Some(raw) = raw else {
            return false;
        };
        codes.iter().any(|code| code.as_str() == raw)
    }

    /// Position in [`StatusSelector::BUTTONS`].
    pub fn index(&self) -> usize {
        Self::BUTTONS
            .iter()
            .position(|selector| selector == self)
            .unwrap_or(0)
    }

    /// Next button, wrapping around.
    pub fn next(&self) -> Self {
        Self::BUTTONS[(self.index() + 1) % Self::BUTTONS.len()]
    }

    /// Previous button, wrapping around.
    pub fn prev(&self) -> Self {
        let len = Self::BUTTONS.len();
        Self::BUTTONS[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for StatusSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusSelector {
    type Err = UnknownStatus;

    /// Accepts the raw token in any case ("terminated", "Terminated").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StatusSelector::BUTTONS
            .into_iter()
            .find(|selector| selector.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A status token outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown status: '{0}'")]
pub struct UnknownStatus(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_selector_but_all_is_in_table() {
        for selector in StatusSelector::BUTTONS {
            match selector {
                StatusSelector::All => assert!(selector.codes().is_none()),
                _ => assert!(selector.codes().is_some(), "{} has no codes", selector),
            }
        }
    }

    #[test]
    fn test_terminated_groups_death_and_matured() {
        let codes = StatusSelector::Terminated.codes().unwrap();
        assert_eq!(codes, &[StatusCode::Death, StatusCode::Matured]);
        assert!(StatusSelector::Terminated.matches_code(Some("DEATH")));
        assert!(StatusSelector::Terminated.matches_code(Some("MATURED")));
        assert!(!StatusSelector::Terminated.matches_code(Some("TERMINATED")));
        assert!(!StatusSelector::Terminated.matches_code(Some("ACTIVE")));
    }

    #[test]
    fn test_lapse_is_exact_match() {
        assert!(StatusSelector::Lapse.matches_code(Some("LAPSE")));
        assert!(!StatusSelector::Lapse.matches_code(Some("LAPSED")));
        assert!(!StatusSelector::Lapse.matches_code(Some("lapse")));
    }

    #[test]
    fn test_missing_status_only_passes_all() {
        assert!(StatusSelector::All.matches_code(None));
        assert!(!StatusSelector::Active.matches_code(None));
    }

    #[test]
    fn test_selector_parse_is_case_insensitive() {
        assert_eq!("terminated".parse::<StatusSelector>(), Ok(StatusSelector::Terminated));
        assert_eq!("ALL".parse::<StatusSelector>(), Ok(StatusSelector::All));
        assert_eq!(
            "EXPIRED".parse::<StatusSelector>(),
            Err(UnknownStatus("EXPIRED".to_string()))
        );
    }

    #[test]
    fn test_code_parse_is_exact() {
        assert_eq!("DEATH".parse::<StatusCode>(), Ok(StatusCode::Death));
        assert!("death".parse::<StatusCode>().is_err());
    }

    #[test]
    fn test_button_labels() {
        let labels: Vec<String> = StatusSelector::BUTTONS.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec!["All", "Active", "Surrendered", "Cancelled", "Draft", "Terminated", "Lapse"]
        );
    }

    #[test]
    fn test_next_and_prev_wrap() {
        assert_eq!(StatusSelector::All.prev(), StatusSelector::Lapse);
        assert_eq!(StatusSelector::Lapse.next(), StatusSelector::All);
        assert_eq!(StatusSelector::Draft.next(), StatusSelector::Terminated);
    }
}
