use std::collections::HashMap;

use tracing::{debug, warn};

use crate::{
    FieldEdit, Mode, Question, QuestionId, QuestionKind, QuestionType, SessionError, validate,
};

/// Alert text shown when submission is rejected.
pub const SUBMIT_REJECTED_MESSAGE: &str = "Please fill all fields correctly!";

/// Toast text shown when submission succeeds.
pub const SUBMIT_ACCEPTED_MESSAGE: &str = "Form submitted successfully!";

/// The complete in-memory state of one form-building interaction.
///
/// Owns the ordered question sequence, the pending type for the next
/// "add question", the edit/preview mode, and per-question URL validity.
/// All mutation happens through the operations below, one user intent at a
/// time; nothing here blocks, retries, or runs concurrently.
///
/// Dropping the session discards the whole form. There is no reset or
/// removal operation.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    /// Insertion order is display and submission order.
    questions: Vec<Question>,

    /// The type the next "add question" will create, if any.
    selected_type: Option<QuestionType>,

    mode: Mode,

    /// Live URL-format validity, one entry per URL question that has been
    /// typed into. Absent entries read as valid.
    url_validity: HashMap<QuestionId, bool>,

    next_id: u64,
}

impl FormSession {
    /// Create an empty session in edit mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the questions in display order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the question with the given id, if it exists.
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }

    /// The pending type the next "add question" will create.
    pub fn selected_type(&self) -> Option<QuestionType> {
        self.selected_type
    }

    /// The current edit/preview mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Live URL validity for the given question.
    ///
    /// Questions that were never typed into read as valid, so no error shows
    /// before the first keystroke.
    pub fn url_validity(&self, id: QuestionId) -> bool {
        self.url_validity.get(&id).copied().unwrap_or(true)
    }

    /// Set or clear the pending type for the next "add question".
    pub fn select_type(&mut self, question_type: Option<QuestionType>) {
        debug!(
            event = "session.type_selected",
            question_type = question_type.map(|t| t.label()),
        );
        self.selected_type = question_type;
    }

    /// Whether "add question" is currently available.
    ///
    /// Presentation uses this to disable the action instead of surfacing
    /// [`SessionError::NoTypeSelected`] as a runtime error.
    pub fn can_add_question(&self) -> bool {
        self.selected_type.is_some()
    }

    /// Append a new question of the pending type and clear the selection.
    pub fn add_question(&mut self) -> Result<QuestionId, SessionError> {
        let question_type = self.selected_type.ok_or(SessionError::NoTypeSelected)?;
        let id = QuestionId::new(self.next_id);
        self.next_id += 1;
        self.questions.push(Question::new(id, question_type));
        self.selected_type = None;
        debug!(
            event = "session.question_added",
            id = %id,
            question_type = question_type.label(),
        );
        Ok(id)
    }

    /// Apply a field edit to the question with the given id.
    ///
    /// Replaces only the edited field; ordering and all other questions stay
    /// untouched. An unknown id leaves the session unchanged and returns
    /// `false`. Value edits on URL questions refresh that question's entry in
    /// the URL-validity map.
    pub fn update_question(&mut self, id: QuestionId, edit: FieldEdit) -> bool {
        let Some(question) = self.questions.iter_mut().find(|q| q.id() == id) else {
            warn!(event = "session.update_ignored", id = %id);
            return false;
        };
        match edit {
            FieldEdit::Label(label) => question.set_label(label),
            FieldEdit::Value(value) => {
                question.set_value(value);
                if question.question_type() == QuestionType::Url {
                    let valid = validate::url_is_valid(question.value());
                    self.url_validity.insert(id, valid);
                }
            }
        }
        true
    }

    /// Append an option to the single-select question with the given id.
    ///
    /// The text is trimmed before it is stored; empty text is rejected. The
    /// option list is append-only and keeps insertion order.
    pub fn append_option(&mut self, id: QuestionId, text: &str) -> Result<(), SessionError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SessionError::EmptyOption);
        }
        let question = self
            .questions
            .iter_mut()
            .find(|q| q.id() == id)
            .ok_or(SessionError::UnknownQuestion(id))?;
        match question.kind_mut() {
            QuestionKind::SingleSelect(select) => {
                select.push_option(trimmed.to_string());
                debug!(event = "session.option_appended", id = %id, option = trimmed);
                Ok(())
            }
            _ => Err(SessionError::NotSingleSelect(id)),
        }
    }

    /// Switch between edit and preview mode.
    ///
    /// Unconditional: entering preview does not require the form to be
    /// complete, and no question data is touched either way.
    pub fn set_mode(&mut self, mode: Mode) {
        debug!(event = "session.mode_set", preview = mode.is_preview());
        self.mode = mode;
    }

    /// Switch to preview mode.
    pub fn enter_preview(&mut self) {
        self.set_mode(Mode::Previewing);
    }

    /// Switch back to edit mode.
    pub fn back_to_edit(&mut self) {
        self.set_mode(Mode::Editing);
    }

    /// Run the completeness rule over every question.
    ///
    /// All-or-nothing: one failing question rejects the whole submission with
    /// [`SessionError::Incomplete`] and no per-field detail. Success leaves
    /// all data in memory untouched.
    pub fn submit(&self) -> Result<(), SessionError> {
        let incomplete = self
            .questions
            .iter()
            .any(|question| !validate::answer_is_complete(question));
        if incomplete {
            warn!(event = "session.submit_rejected");
            return Err(SessionError::Incomplete);
        }
        debug!(
            event = "session.submit_accepted",
            questions = self.questions.len(),
        );
        Ok(())
    }
}
