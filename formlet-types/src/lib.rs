//! Core types for the formlet crate.
//!
//! This crate provides the foundational types for the form builder:
//! - `FormSession` - the in-memory state of one form-building interaction
//! - `Question`, `QuestionKind`, `QuestionType` - the question model
//! - `FieldEdit` - typed edits applied through the session
//! - `Mode` - the edit/preview switch
//! - `url_is_valid` and `answer_is_complete` - the validation rules
//! - `FormFrontend`, `Notifier`, `DatePicker` - seams for presentation collaborators

mod error;
pub use error::SessionError;

mod field_edit;
pub use field_edit::FieldEdit;

mod mode;
pub use mode::Mode;

mod question;
pub use question::{
    LONG_ANSWER_MAX_LENGTH, LongAnswerQuestion, Question, QuestionKind, QuestionType,
    SHORT_ANSWER_MIN_LENGTH, ShortAnswerQuestion, SingleSelectQuestion,
};

mod question_id;
pub use question_id::QuestionId;

mod session;
pub use session::{FormSession, SUBMIT_ACCEPTED_MESSAGE, SUBMIT_REJECTED_MESSAGE};

mod traits;
pub use traits::{DatePicker, FormFrontend, Notifier};

mod validate;
pub use validate::{answer_is_complete, url_is_valid};
