use std::fmt;

use crate::QuestionId;

/// Minimum answer length given to short-answer questions at creation.
pub const SHORT_ANSWER_MIN_LENGTH: usize = 5;

/// Maximum answer length given to long-answer questions at creation.
pub const LONG_ANSWER_MAX_LENGTH: usize = 300;

/// The type tag offered in the add-question selector.
///
/// This is the payload-free counterpart of [`QuestionKind`]: the selector
/// deals in tags, the created question carries the per-type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionType {
    /// Single-line text answer with a minimum length.
    ShortAnswer,
    /// Multi-line text answer with a maximum length.
    LongAnswer,
    /// Choose one option from a list built in edit mode.
    SingleSelect,
    /// Numeric answer.
    Number,
    /// An https URL, checked live while typing.
    Url,
    /// An ISO-8601 date produced by the date-picker collaborator.
    Date,
}

impl QuestionType {
    /// The types offered in the add-question selector, in display order.
    pub const OFFERED: [QuestionType; 6] = [
        Self::ShortAnswer,
        Self::LongAnswer,
        Self::SingleSelect,
        Self::Number,
        Self::Url,
        Self::Date,
    ];

    /// Human-readable label shown in the selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ShortAnswer => "Short answer",
            Self::LongAnswer => "Long answer",
            Self::SingleSelect => "Single select",
            Self::Number => "Number",
            Self::Url => "URL",
            Self::Date => "Date",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single question in the form being built.
///
/// Constructed with type-appropriate defaults by [`Question::new`]; all later
/// changes go through the session's update operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Unique within the owning session, ordered by creation.
    id: QuestionId,

    /// The prompt text shown to the person filling in the form.
    label: String,

    /// The answer content. Semantics depend on the kind: plain text, the
    /// selected option, numeric text, a URL, or an ISO-8601 date string.
    value: String,

    /// The kind of question (determines input control and validation).
    kind: QuestionKind,
}

impl Question {
    /// Create a new question of the given type with an empty label and value.
    pub fn new(id: QuestionId, question_type: QuestionType) -> Self {
        let kind = match question_type {
            QuestionType::ShortAnswer => QuestionKind::ShortAnswer(ShortAnswerQuestion::new()),
            QuestionType::LongAnswer => QuestionKind::LongAnswer(LongAnswerQuestion::new()),
            QuestionType::SingleSelect => QuestionKind::SingleSelect(SingleSelectQuestion::new()),
            QuestionType::Number => QuestionKind::Number,
            QuestionType::Url => QuestionKind::Url,
            QuestionType::Date => QuestionKind::Date,
        };
        Self {
            id,
            label: String::new(),
            value: String::new(),
            kind,
        }
    }

    /// Get the question id.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Get the prompt text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the answer content.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Get the payload-free type tag for this question.
    pub fn question_type(&self) -> QuestionType {
        self.kind.question_type()
    }

    /// Placeholder text for the label input while building the form.
    pub fn placeholder(&self) -> &'static str {
        match self.kind {
            QuestionKind::ShortAnswer(_) | QuestionKind::LongAnswer(_) => "Write question",
            QuestionKind::Url => "Link to your best work",
            _ => "Question Label",
        }
    }

    /// The options of a single-select question, `None` for any other kind.
    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            QuestionKind::SingleSelect(select) => Some(select.options()),
            _ => None,
        }
    }

    /// The minimum answer length, if this kind carries one.
    pub fn min_length(&self) -> Option<usize> {
        match &self.kind {
            QuestionKind::ShortAnswer(short) => Some(short.min_length()),
            _ => None,
        }
    }

    /// The maximum answer length, if this kind carries one.
    pub fn max_length(&self) -> Option<usize> {
        match &self.kind {
            QuestionKind::LongAnswer(long) => Some(long.max_length()),
            _ => None,
        }
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }

    /// Replace the answer content, truncating to the kind's maximum length
    /// the way a bounded input control would.
    pub(crate) fn set_value(&mut self, value: String) {
        self.value = match self.max_length() {
            Some(max) if value.chars().count() > max => value.chars().take(max).collect(),
            _ => value,
        };
    }

    pub(crate) fn kind_mut(&mut self) -> &mut QuestionKind {
        &mut self.kind
    }
}

/// The kind of question, determining the input control and validation.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Single-line text input with a minimum length.
    ShortAnswer(ShortAnswerQuestion),

    /// Multi-line text input with a maximum length.
    LongAnswer(LongAnswerQuestion),

    /// Select one option from a list configured in edit mode.
    SingleSelect(SingleSelectQuestion),

    /// Numeric input.
    Number,

    /// URL input with live format checking.
    Url,

    /// Date input filled through the date-picker collaborator.
    Date,
}

impl QuestionKind {
    /// Get the payload-free type tag for this kind.
    pub fn question_type(&self) -> QuestionType {
        match self {
            Self::ShortAnswer(_) => QuestionType::ShortAnswer,
            Self::LongAnswer(_) => QuestionType::LongAnswer,
            Self::SingleSelect(_) => QuestionType::SingleSelect,
            Self::Number => QuestionType::Number,
            Self::Url => QuestionType::Url,
            Self::Date => QuestionType::Date,
        }
    }

    /// Check if this is a single-select kind.
    pub fn is_single_select(&self) -> bool {
        matches!(self, Self::SingleSelect(_))
    }
}

/// Configuration for a short-answer question.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortAnswerQuestion {
    /// Fixed at creation, never edited later.
    min_length: usize,
}

impl ShortAnswerQuestion {
    /// Create a new short-answer question with the default minimum length.
    pub fn new() -> Self {
        Self {
            min_length: SHORT_ANSWER_MIN_LENGTH,
        }
    }

    /// Get the minimum answer length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Default for ShortAnswerQuestion {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a long-answer question.
#[derive(Debug, Clone, PartialEq)]
pub struct LongAnswerQuestion {
    /// Fixed at creation, never edited later.
    max_length: usize,
}

impl LongAnswerQuestion {
    /// Create a new long-answer question with the default maximum length.
    pub fn new() -> Self {
        Self {
            max_length: LONG_ANSWER_MAX_LENGTH,
        }
    }

    /// Get the maximum answer length.
    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Default for LongAnswerQuestion {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a single-select question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SingleSelectQuestion {
    /// Append-only, never reordered or removed.
    options: Vec<String>,
}

impl SingleSelectQuestion {
    /// Create a new single-select question with no options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the options in insertion order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub(crate) fn push_option(&mut self, option: String) {
        self.options.push(option);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_answer_defaults() {
        let question = Question::new(QuestionId::new(0), QuestionType::ShortAnswer);
        assert_eq!(question.min_length(), Some(SHORT_ANSWER_MIN_LENGTH));
        assert_eq!(question.max_length(), None);
        assert_eq!(question.options(), None);
        assert_eq!(question.label(), "");
        assert_eq!(question.value(), "");
    }

    #[test]
    fn long_answer_defaults() {
        let question = Question::new(QuestionId::new(0), QuestionType::LongAnswer);
        assert_eq!(question.max_length(), Some(LONG_ANSWER_MAX_LENGTH));
        assert_eq!(question.min_length(), None);
    }

    #[test]
    fn single_select_starts_without_options() {
        let question = Question::new(QuestionId::new(0), QuestionType::SingleSelect);
        assert_eq!(question.options(), Some(&[][..]));
    }

    #[test]
    fn type_tag_round_trips() {
        for question_type in QuestionType::OFFERED {
            let question = Question::new(QuestionId::new(0), question_type);
            assert_eq!(question.question_type(), question_type);
        }
    }

    #[test]
    fn placeholders() {
        let short = Question::new(QuestionId::new(0), QuestionType::ShortAnswer);
        assert_eq!(short.placeholder(), "Write question");

        let url = Question::new(QuestionId::new(1), QuestionType::Url);
        assert_eq!(url.placeholder(), "Link to your best work");

        let date = Question::new(QuestionId::new(2), QuestionType::Date);
        assert_eq!(date.placeholder(), "Question Label");
    }

    #[test]
    fn selector_labels() {
        assert_eq!(QuestionType::ShortAnswer.to_string(), "Short answer");
        assert_eq!(QuestionType::Url.to_string(), "URL");
    }
}
