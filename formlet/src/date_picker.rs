use chrono::NaiveDate;
use formlet_types::DatePicker;

/// A [`DatePicker`] that always yields a fixed calendar date.
///
/// Stands in for an interactive picker widget in tests and scripted runs.
/// The date is emitted as an ISO-8601 string (`YYYY-MM-DD`), the format the
/// session treats as opaque.
#[derive(Debug, Clone, Copy)]
pub struct ChronoDatePicker {
    date: NaiveDate,
}

impl ChronoDatePicker {
    /// Picker that always returns the given date.
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl DatePicker for ChronoDatePicker {
    fn pick(&mut self) -> Option<String> {
        Some(self.date.format("%Y-%m-%d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_iso_8601() {
        let mut picker = ChronoDatePicker::new(NaiveDate::from_ymd_opt(2026, 8, 6).unwrap());
        assert_eq!(picker.pick().as_deref(), Some("2026-08-06"));
    }
}
