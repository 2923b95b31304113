use crate::FormSession;

/// Trait for presentation layers that drive a form session.
///
/// A frontend renders the session however it likes, translates user intents
/// into the session's operations, and reports submission outcomes through a
/// [`Notifier`]. The session itself stays presentation-agnostic.
pub trait FormFrontend {
    /// The error type for this frontend.
    type Error: Into<anyhow::Error>;

    /// Drive one form-building interaction over the session.
    ///
    /// Returns when the interaction ends. Rejected submissions are a normal
    /// outcome surfaced through the notifier, not an error.
    fn run(
        &mut self,
        session: &mut FormSession,
        notifier: &mut dyn Notifier,
    ) -> Result<(), Self::Error>;
}

/// Trait for the notification surface submission outcomes are reported to.
///
/// The session has no dependency on how either call is displayed.
pub trait Notifier {
    /// Blocking failure surface (a modal alert).
    fn alert(&mut self, message: &str);

    /// Non-blocking success surface (a toast).
    fn toast(&mut self, message: &str);
}

/// Trait for the date-picker collaborator.
///
/// Yields the picked date as an ISO-8601 string, or `None` when dismissed.
/// The session stores the value as an opaque string either way.
pub trait DatePicker {
    /// Let the user pick a date.
    fn pick(&mut self) -> Option<String>;
}
