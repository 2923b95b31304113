use crate::QuestionId;

/// Error type for form session operations.
///
/// Every variant is a user-input validation outcome, not a system fault.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// "Add question" requires a type to be selected first.
    #[error("no question type selected")]
    NoTypeSelected,

    /// The addressed question does not exist in this session.
    #[error("no question with id {0}")]
    UnknownQuestion(QuestionId),

    /// Options can only be appended to single-select questions.
    #[error("question {0} does not take options")]
    NotSingleSelect(QuestionId),

    /// Option text must be non-empty after trimming.
    #[error("option text is empty")]
    EmptyOption,

    /// At least one answer is missing, too short, or malformed.
    #[error("form has missing or invalid answers")]
    Incomplete,
}
