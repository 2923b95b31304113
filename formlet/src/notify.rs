use formlet_types::Notifier;

/// A notification captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// A blocking failure alert.
    Alert(String),

    /// A non-blocking success toast.
    Toast(String),
}

/// A [`Notifier`] that records every notification for later assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notifications: Vec<Notification>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications in the order they were raised.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// The alert messages, in order.
    pub fn alerts(&self) -> impl Iterator<Item = &str> {
        self.notifications.iter().filter_map(|n| match n {
            Notification::Alert(message) => Some(message.as_str()),
            Notification::Toast(_) => None,
        })
    }

    /// The toast messages, in order.
    pub fn toasts(&self) -> impl Iterator<Item = &str> {
        self.notifications.iter().filter_map(|n| match n {
            Notification::Toast(message) => Some(message.as_str()),
            Notification::Alert(_) => None,
        })
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&mut self, message: &str) {
        self.notifications.push(Notification::Alert(message.to_string()));
    }

    fn toast(&mut self, message: &str) {
        self.notifications.push(Notification::Toast(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut notifier = RecordingNotifier::new();
        notifier.alert("first");
        notifier.toast("second");

        assert_eq!(
            notifier.notifications(),
            &[
                Notification::Alert("first".to_string()),
                Notification::Toast("second".to_string()),
            ]
        );
        assert_eq!(notifier.alerts().collect::<Vec<_>>(), vec!["first"]);
        assert_eq!(notifier.toasts().collect::<Vec<_>>(), vec!["second"]);
    }
}
