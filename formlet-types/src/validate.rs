use std::sync::LazyLock;

use regex::Regex;

use crate::{Question, QuestionKind};

/// Accepted URL shape: https only, a host of letters, digits, and hyphens
/// with at least one dot-separated label, and an optional path/query tail.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)+[/?%&=]*$").expect("URL pattern compiles")
});

/// Live URL-format rule.
///
/// Empty input is valid, so an untouched field shows no error while typing.
pub fn url_is_valid(candidate: &str) -> bool {
    candidate.is_empty() || URL_PATTERN.is_match(candidate)
}

/// Submission completeness rule for one question.
///
/// A question passes when its trimmed value is non-empty (single-select
/// questions are exempt from this arm), its character count reaches the
/// kind's minimum length, and a numeric answer parses as a number.
pub fn answer_is_complete(question: &Question) -> bool {
    let value = question.value();
    if !question.kind().is_single_select() && value.trim().is_empty() {
        return false;
    }
    if value.chars().count() < question.min_length().unwrap_or(0) {
        return false;
    }
    if matches!(question.kind(), QuestionKind::Number) && value.trim().parse::<f64>().is_err() {
        return false;
    }
    true
}
