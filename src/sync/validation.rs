//! Pre-submission checks on the form draft

use chrono::{DateTime, Utc};

use crate::{
    error::ValidationError,
    state::{parse_local_input, FormDraft, TimerPayload},
};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 32;

/// Validate a draft against the instant `now` and build the request payload
///
/// The name is trimmed and its length counted in characters. The target must
/// parse and lie strictly after `now`.
pub fn validate_draft(draft: &FormDraft, now: DateTime<Utc>) -> Result<TimerPayload, ValidationError> {
    let name = draft.name.trim();
    let length = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&length) {
        return Err(ValidationError::NameLength { length });
    }

    let input = draft.target_date_local.trim();
    if input.is_empty() {
        return Err(ValidationError::MissingTargetDate);
    }

    let target_date = parse_local_input(input).ok_or_else(|| ValidationError::UnparsableTargetDate {
        input: input.to_string(),
    })?;

    if target_date <= now {
        return Err(ValidationError::TargetNotInFuture);
    }

    Ok(TimerPayload {
        name: name.to_string(),
        target_date,
    })
}
