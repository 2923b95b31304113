/// An edit to a single field of one question.
///
/// Label edits happen while building the form, value edits while filling it
/// in. Options are appended through
/// [`FormSession::append_option`](crate::FormSession::append_option) instead.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    /// Replace the question's prompt text.
    Label(String),

    /// Replace the question's answer content.
    Value(String),
}
