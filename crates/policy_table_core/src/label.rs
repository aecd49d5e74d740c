//! Display labels for raw field and status tokens.

/// Turn a raw token into a human-readable label.
///
/// The token is lower-cased, underscores become spaces, and the first
/// letter or digit of every whitespace-delimited word is upper-cased.
/// Punctuation before it is kept as-is.
///
/// Examples:
/// - "POLICY_NUMBER" -> "Policy Number"
/// - "(ACTIVE)" -> "(Active)"
/// - "" -> ""
pub fn format_label(token: &str) -> String {
    let mut label = String::with_capacity(token.len());
    let mut at_word_start = true;

    for ch in token.chars().flat_map(char::to_lowercase) {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_whitespace() {
            at_word_start = true;
            label.push(ch);
        } else if at_word_start && ch.is_alphanumeric() {
            at_word_start = false;
            label.extend(ch.to_uppercase());
        } else {
            label.push(ch);
        }
    }

    label
}
