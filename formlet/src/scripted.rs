//! Scripted frontend for driving sessions without user interaction.
//!
//! `ScriptedFrontend` replays a recorded sequence of user intents against a
//! [`FormSession`]. This is useful for testing form flows end to end and for
//! demos that need a deterministic interaction.
//!
//! Questions are addressed by insertion index, not id: ids only exist once
//! the script runs, so scripts resolve indices to ids at replay time.
//!
//! # Example
//!
//! ```rust
//! use formlet::{FormEvent, FormFrontend, FormSession, QuestionType, RecordingNotifier, ScriptedFrontend};
//!
//! let mut session = FormSession::new();
//! let mut notifier = RecordingNotifier::new();
//!
//! ScriptedFrontend::new()
//!     .with_events([
//!         FormEvent::SelectType(QuestionType::ShortAnswer),
//!         FormEvent::AddQuestion,
//!         FormEvent::EditValue { index: 0, value: "hello".into() },
//!         FormEvent::EnterPreview,
//!         FormEvent::Submit,
//!     ])
//!     .run(&mut session, &mut notifier)
//!     .unwrap();
//!
//! assert_eq!(notifier.toasts().count(), 1);
//! ```

use formlet_types::{
    DatePicker, FieldEdit, FormFrontend, FormSession, Notifier, QuestionId, QuestionType,
    SUBMIT_ACCEPTED_MESSAGE, SUBMIT_REJECTED_MESSAGE, SessionError,
};
use tracing::debug;

/// One recorded user intent.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Pick a type in the add-question selector.
    SelectType(QuestionType),

    /// Press "Add Question".
    AddQuestion,

    /// Type into the label of the question at `index`.
    EditLabel {
        /// Insertion index of the target question.
        index: usize,
        /// The new prompt text.
        label: String,
    },

    /// Type into the value of the question at `index`.
    EditValue {
        /// Insertion index of the target question.
        index: usize,
        /// The new answer content.
        value: String,
    },

    /// Enter an option for the single-select question at `index`.
    AppendOption {
        /// Insertion index of the target question.
        index: usize,
        /// The option text, trimmed by the session before storing.
        text: String,
    },

    /// Pick a date for the question at `index` via the date-picker collaborator.
    PickDate {
        /// Insertion index of the target question.
        index: usize,
    },

    /// Press "Preview Form".
    EnterPreview,

    /// Press "Back to Edit".
    BackToEdit,

    /// Press "Submit Form".
    Submit,
}

/// Error type for `ScriptedFrontend`.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// An event addressed an index past the end of the question sequence.
    #[error("no question at index {0}")]
    UnknownIndex(usize),

    /// A `PickDate` event ran without a configured date picker.
    #[error("no date picker configured for this script")]
    NoDatePicker,

    /// The session rejected an operation.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// A frontend that replays pre-recorded events against a session.
///
/// Rejected submissions are a normal outcome routed to the notifier, like any
/// interactive frontend would; everything else the session rejects fails the
/// script.
#[derive(Default)]
pub struct ScriptedFrontend {
    events: Vec<FormEvent>,
    date_picker: Option<Box<dyn DatePicker>>,
}

impl ScriptedFrontend {
    /// Create a frontend with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event to the script.
    pub fn with_event(mut self, event: FormEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Append a sequence of events to the script.
    pub fn with_events(mut self, events: impl IntoIterator<Item = FormEvent>) -> Self {
        self.events.extend(events);
        self
    }

    /// Set the date-picker collaborator used by `PickDate` events.
    pub fn with_date_picker(mut self, picker: impl DatePicker + 'static) -> Self {
        self.date_picker = Some(Box::new(picker));
        self
    }

    fn resolve(session: &FormSession, index: usize) -> Result<QuestionId, ScriptError> {
        session
            .questions()
            .get(index)
            .map(|question| question.id())
            .ok_or(ScriptError::UnknownIndex(index))
    }
}

impl FormFrontend for ScriptedFrontend {
    type Error = ScriptError;

    fn run(
        &mut self,
        session: &mut FormSession,
        notifier: &mut dyn Notifier,
    ) -> Result<(), Self::Error> {
        for event in &self.events {
            debug!(event = "scripted.replay", step = ?event);
            match event {
                FormEvent::SelectType(question_type) => {
                    session.select_type(Some(*question_type));
                }
                FormEvent::AddQuestion => {
                    session.add_question()?;
                }
                FormEvent::EditLabel { index, label } => {
                    let id = Self::resolve(session, *index)?;
                    session.update_question(id, FieldEdit::Label(label.clone()));
                }
                FormEvent::EditValue { index, value } => {
                    let id = Self::resolve(session, *index)?;
                    session.update_question(id, FieldEdit::Value(value.clone()));
                }
                FormEvent::AppendOption { index, text } => {
                    let id = Self::resolve(session, *index)?;
                    session.append_option(id, text)?;
                }
                FormEvent::PickDate { index } => {
                    let id = Self::resolve(session, *index)?;
                    let picker = self.date_picker.as_mut().ok_or(ScriptError::NoDatePicker)?;
                    if let Some(date) = picker.pick() {
                        session.update_question(id, FieldEdit::Value(date));
                    }
                }
                FormEvent::EnterPreview => session.enter_preview(),
                FormEvent::BackToEdit => session.back_to_edit(),
                FormEvent::Submit => match session.submit() {
                    Ok(()) => notifier.toast(SUBMIT_ACCEPTED_MESSAGE),
                    Err(SessionError::Incomplete) => notifier.alert(SUBMIT_REJECTED_MESSAGE),
                    Err(other) => return Err(other.into()),
                },
            }
        }
        Ok(())
    }
}
