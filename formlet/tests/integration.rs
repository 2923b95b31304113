//! Integration tests for formlet

use formlet::{
    ChronoDatePicker, FieldEdit, FormEvent, FormFrontend, FormSession, Notification, QuestionType,
    RecordingNotifier, SUBMIT_ACCEPTED_MESSAGE, SUBMIT_REJECTED_MESSAGE, ScriptError,
    ScriptedFrontend, SessionError,
};

#[test]
fn end_to_end_short_answer_and_single_select() {
    let mut session = FormSession::new();
    let mut notifier = RecordingNotifier::new();

    ScriptedFrontend::new()
        .with_events([
            FormEvent::SelectType(QuestionType::ShortAnswer),
            FormEvent::AddQuestion,
            FormEvent::SelectType(QuestionType::SingleSelect),
            FormEvent::AddQuestion,
            FormEvent::AppendOption {
                index: 1,
                text: "A".into(),
            },
            FormEvent::AppendOption {
                index: 1,
                text: "B".into(),
            },
            FormEvent::EditValue {
                index: 0,
                value: "hello".into(),
            },
            FormEvent::EnterPreview,
            FormEvent::EditValue {
                index: 1,
                value: "A".into(),
            },
            FormEvent::Submit,
        ])
        .run(&mut session, &mut notifier)
        .unwrap();

    assert_eq!(
        notifier.notifications(),
        &[Notification::Toast(SUBMIT_ACCEPTED_MESSAGE.to_string())]
    );
    assert_eq!(session.questions().len(), 2);
    assert_eq!(session.questions()[1].value(), "A");
}

#[test]
fn incomplete_submission_alerts_and_keeps_the_form() {
    let mut session = FormSession::new();
    let mut notifier = RecordingNotifier::new();

    ScriptedFrontend::new()
        .with_events([
            FormEvent::SelectType(QuestionType::ShortAnswer),
            FormEvent::AddQuestion,
            FormEvent::EditValue {
                index: 0,
                value: "abc".into(),
            },
            FormEvent::EnterPreview,
            FormEvent::Submit,
        ])
        .run(&mut session, &mut notifier)
        .unwrap();

    assert_eq!(
        notifier.alerts().collect::<Vec<_>>(),
        vec![SUBMIT_REJECTED_MESSAGE]
    );
    assert_eq!(notifier.toasts().count(), 0);
    assert_eq!(session.questions()[0].value(), "abc");
}

#[test]
fn fixing_the_short_answer_unblocks_submission() {
    let mut session = FormSession::new();
    let mut notifier = RecordingNotifier::new();

    ScriptedFrontend::new()
        .with_events([
            FormEvent::SelectType(QuestionType::ShortAnswer),
            FormEvent::AddQuestion,
            FormEvent::EnterPreview,
            FormEvent::EditValue {
                index: 0,
                value: "abc".into(),
            },
            FormEvent::Submit,
            FormEvent::BackToEdit,
            FormEvent::EnterPreview,
            FormEvent::EditValue {
                index: 0,
                value: "hello".into(),
            },
            FormEvent::Submit,
        ])
        .run(&mut session, &mut notifier)
        .unwrap();

    assert_eq!(
        notifier.notifications(),
        &[
            Notification::Alert(SUBMIT_REJECTED_MESSAGE.to_string()),
            Notification::Toast(SUBMIT_ACCEPTED_MESSAGE.to_string()),
        ]
    );
}

#[test]
fn date_questions_are_filled_through_the_picker() {
    let mut session = FormSession::new();
    let mut notifier = RecordingNotifier::new();
    let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

    ScriptedFrontend::new()
        .with_date_picker(ChronoDatePicker::new(date))
        .with_events([
            FormEvent::SelectType(QuestionType::Date),
            FormEvent::AddQuestion,
            FormEvent::EnterPreview,
            FormEvent::PickDate { index: 0 },
            FormEvent::Submit,
        ])
        .run(&mut session, &mut notifier)
        .unwrap();

    assert_eq!(session.questions()[0].value(), "2024-01-31");
    assert_eq!(notifier.toasts().count(), 1);
}

#[test]
fn pick_date_without_a_picker_fails_the_script() {
    let mut session = FormSession::new();
    let mut notifier = RecordingNotifier::new();

    let result = ScriptedFrontend::new()
        .with_events([
            FormEvent::SelectType(QuestionType::Date),
            FormEvent::AddQuestion,
            FormEvent::PickDate { index: 0 },
        ])
        .run(&mut session, &mut notifier);

    assert!(matches!(result, Err(ScriptError::NoDatePicker)));
}

#[test]
fn out_of_range_index_fails_the_script() {
    let mut session = FormSession::new();
    let mut notifier = RecordingNotifier::new();

    let result = ScriptedFrontend::new()
        .with_event(FormEvent::EditValue {
            index: 3,
            value: "x".into(),
        })
        .run(&mut session, &mut notifier);

    assert!(matches!(result, Err(ScriptError::UnknownIndex(3))));
}

#[test]
fn add_question_without_a_type_fails_the_script() {
    let mut session = FormSession::new();
    let mut notifier = RecordingNotifier::new();

    let result = ScriptedFrontend::new()
        .with_event(FormEvent::AddQuestion)
        .run(&mut session, &mut notifier);

    assert!(matches!(
        result,
        Err(ScriptError::Session(SessionError::NoTypeSelected))
    ));
}

#[test]
fn url_answers_are_validated_live_per_question() {
    let mut session = FormSession::new();
    let mut notifier = RecordingNotifier::new();

    ScriptedFrontend::new()
        .with_events([
            FormEvent::SelectType(QuestionType::Url),
            FormEvent::AddQuestion,
            FormEvent::SelectType(QuestionType::Url),
            FormEvent::AddQuestion,
            FormEvent::EnterPreview,
            FormEvent::EditValue {
                index: 0,
                value: "http://example.com".into(),
            },
            FormEvent::EditValue {
                index: 1,
                value: "https://example.com/a?b=c".into(),
            },
        ])
        .run(&mut session, &mut notifier)
        .unwrap();

    let first = session.questions()[0].id();
    let second = session.questions()[1].id();
    assert!(!session.url_validity(first));
    assert!(session.url_validity(second));
}

#[test]
fn number_questions_require_numeric_answers() {
    let mut session = FormSession::new();
    let mut notifier = RecordingNotifier::new();

    ScriptedFrontend::new()
        .with_events([
            FormEvent::SelectType(QuestionType::Number),
            FormEvent::AddQuestion,
            FormEvent::EnterPreview,
            FormEvent::EditValue {
                index: 0,
                value: "not a number".into(),
            },
            FormEvent::Submit,
            FormEvent::EditValue {
                index: 0,
                value: "42".into(),
            },
            FormEvent::Submit,
        ])
        .run(&mut session, &mut notifier)
        .unwrap();

    assert_eq!(
        notifier.notifications(),
        &[
            Notification::Alert(SUBMIT_REJECTED_MESSAGE.to_string()),
            Notification::Toast(SUBMIT_ACCEPTED_MESSAGE.to_string()),
        ]
    );
}

#[test]
fn direct_session_edits_mirror_the_scripted_flow() {
    let mut session = FormSession::new();

    session.select_type(Some(QuestionType::SingleSelect));
    let id = session.add_question().unwrap();
    session.append_option(id, "Yes").unwrap();
    session.append_option(id, "No").unwrap();
    session.update_question(id, FieldEdit::Label("Happy?".into()));

    session.enter_preview();
    session.update_question(id, FieldEdit::Value("Yes".into()));

    assert!(session.submit().is_ok());
    assert_eq!(
        session.question(id).unwrap().options(),
        Some(&["Yes".to_string(), "No".to_string()][..])
    );
}
