//! # formlet
//!
//! Compose a form as a list of typed questions, flip to preview, fill it in,
//! and submit.
//!
//! A [`FormSession`] owns the whole interaction: the ordered question
//! sequence, the pending type for the next "add question", the edit/preview
//! mode, and live URL validity. Presentation stays outside the crate behind
//! the [`FormFrontend`], [`Notifier`], and [`DatePicker`] traits.
//!
//! ## Usage
//!
//! ```rust
//! use formlet::{FieldEdit, FormSession, QuestionType};
//!
//! let mut session = FormSession::new();
//!
//! session.select_type(Some(QuestionType::ShortAnswer));
//! let id = session.add_question().unwrap();
//! session.update_question(id, FieldEdit::Label("What is your name?".into()));
//!
//! session.enter_preview();
//! session.update_question(id, FieldEdit::Value("Alice".into()));
//! assert!(session.submit().is_ok());
//! ```
//!
//! For driving a session through a recorded interaction, see
//! [`ScriptedFrontend`].

// Re-export all types from formlet-types
pub use formlet_types::*;

mod scripted;
pub use scripted::{FormEvent, ScriptError, ScriptedFrontend};

mod notify;
pub use notify::{Notification, RecordingNotifier};

mod date_picker;
pub use date_picker::ChronoDatePicker;
