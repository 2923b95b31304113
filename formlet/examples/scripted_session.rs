//! Drive a complete form-building interaction from a script and print the
//! resulting form.
//!
//! Run with `RUST_LOG=debug` to watch the session operations.

use anyhow::Result;
use chrono::NaiveDate;
use formlet::{
    ChronoDatePicker, FormEvent, FormFrontend, FormSession, QuestionType, RecordingNotifier,
    ScriptedFrontend,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut session = FormSession::new();
    let mut notifier = RecordingNotifier::new();

    let date = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
    ScriptedFrontend::new()
        .with_date_picker(ChronoDatePicker::new(date))
        .with_events([
            FormEvent::SelectType(QuestionType::ShortAnswer),
            FormEvent::AddQuestion,
            FormEvent::EditLabel {
                index: 0,
                label: "What is your name?".into(),
            },
            FormEvent::SelectType(QuestionType::SingleSelect),
            FormEvent::AddQuestion,
            FormEvent::EditLabel {
                index: 1,
                label: "Remote or on-site?".into(),
            },
            FormEvent::AppendOption {
                index: 1,
                text: "Remote".into(),
            },
            FormEvent::AppendOption {
                index: 1,
                text: "On-site".into(),
            },
            FormEvent::SelectType(QuestionType::Date),
            FormEvent::AddQuestion,
            FormEvent::EditLabel {
                index: 2,
                label: "Earliest start date?".into(),
            },
            FormEvent::EnterPreview,
            FormEvent::EditValue {
                index: 0,
                value: "Alice Example".into(),
            },
            FormEvent::EditValue {
                index: 1,
                value: "Remote".into(),
            },
            FormEvent::PickDate { index: 2 },
            FormEvent::Submit,
        ])
        .run(&mut session, &mut notifier)?;

    for question in session.questions() {
        println!(
            "[{}] {}: {}",
            question.question_type(),
            question.label(),
            question.value()
        );
    }
    for notification in notifier.notifications() {
        println!("{notification:?}");
    }

    Ok(())
}
