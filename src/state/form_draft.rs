//! Client-side form state for the timer editor

use std::fmt;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

use super::Timer;

/// Format of the local date-time input, minute precision
pub const LOCAL_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
const LOCAL_INPUT_FORMAT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// Whether a submit creates a new timer or replaces the existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Creating,
    Editing,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Creating => write!(f, "creating"),
            Mode::Editing => write!(f, "editing"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Failure,
}

/// User-facing outcome of the last operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, text: text.into() }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Failure, text: text.into() }
    }

    pub fn is_failure(&self) -> bool {
        self.kind == StatusKind::Failure
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            StatusKind::Success => write!(f, "✅ {}", self.text),
            StatusKind::Failure => write!(f, "❌ {}", self.text),
        }
    }
}

/// Editable draft of the timer, possibly invalid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    /// Target in local time, `YYYY-MM-DDTHH:MM`
    pub target_date_local: String,
    pub mode: Mode,
    pub status: Option<StatusMessage>,
}

impl FormDraft {
    /// Create an empty draft in creating mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate inputs from a stored timer and switch to editing
    pub fn fill_from(&mut self, timer: &Timer) {
        self.name = timer.name.clone();
        self.target_date_local = to_local_input(timer.target_date);
        self.mode = Mode::Editing;
    }

    /// Empty both inputs and switch back to creating
    pub fn clear(&mut self) {
        self.name.clear();
        self.target_date_local.clear();
        self.mode = Mode::Creating;
    }
}

/// Render an instant as a local date-time input value
pub fn to_local_input(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format(LOCAL_INPUT_FORMAT).to_string()
}

/// Parse a date-time input value into an absolute instant
///
/// Accepts the local input formats (with or without seconds), interpreted in
/// the host timezone, and full RFC 3339 timestamps. Local times that do not
/// exist (DST gaps) are rejected.
pub fn parse_local_input(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Some(instant.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(input, LOCAL_INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(input, LOCAL_INPUT_FORMAT_SECONDS))
        .ok()?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Timelike};

    #[test]
    fn local_input_round_trips_at_minute_precision() {
        let instant = Utc::now() + Duration::days(3);
        let input = to_local_input(instant);
        let parsed = parse_local_input(&input).unwrap();

        assert_eq!(parsed, instant.with_second(0).unwrap().with_nanosecond(0).unwrap());
    }

    #[test]
    fn rfc3339_input_is_accepted() {
        let parsed = parse_local_input("2999-01-01T00:00:00Z").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2999-01-01T00:00:00+00:00");
    }

    #[test]
    fn garbage_input_is_rejected() {
        assert_eq!(parse_local_input(""), None);
        assert_eq!(parse_local_input("   "), None);
        assert_eq!(parse_local_input("tomorrow at noon"), None);
        assert_eq!(parse_local_input("2025-13-40T99:00"), None);
    }

    #[test]
    fn fill_and_clear_toggle_mode() {
        let mut draft = FormDraft::new();
        assert_eq!(draft.mode, Mode::Creating);

        draft.fill_from(&Timer::new("Demo", Utc::now() + Duration::hours(2)));
        assert_eq!(draft.name, "Demo");
        assert_eq!(draft.target_date_local.len(), 16);
        assert_eq!(draft.mode, Mode::Editing);

        draft.clear();
        assert!(draft.name.is_empty());
        assert!(draft.target_date_local.is_empty());
        assert_eq!(draft.mode, Mode::Creating);
    }

    #[test]
    fn status_message_is_prefixed_by_kind() {
        assert_eq!(StatusMessage::success("Timer saved successfully!").to_string(), "✅ Timer saved successfully!");
        assert_eq!(StatusMessage::failure("Failed to reset timer.").to_string(), "❌ Failed to reset timer.");
    }
}
