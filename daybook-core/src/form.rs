//! Event authoring input and validation.
//!
//! Form fields arrive as raw text. Validation runs before the overlap check,
//! and a form that fails validation is never checked for conflicts.

use chrono::NaiveDate;

use crate::error::{DaybookError, DaybookResult, ValidationError};
use crate::event::{ClockTime, Event, EventColor, EventDraft};
use crate::overlap::find_overlap;

const DEFAULT_START: &str = "09:00";
const DEFAULT_END: &str = "10:00";

/// Raw authoring input for creating or editing an event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub color: String,
}

impl Default for EventForm {
    fn default() -> Self {
        EventForm {
            title: String::new(),
            description: String::new(),
            start_time: DEFAULT_START.to_string(),
            end_time: DEFAULT_END.to_string(),
            color: EventColor::Default.to_string(),
        }
    }
}

impl From<&Event> for EventForm {
    /// Prefill the form from the event being edited.
    fn from(event: &Event) -> Self {
        EventForm {
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            start_time: event.start_time.to_string(),
            end_time: event.end_time.to_string(),
            color: event.color.to_string(),
        }
    }
}

impl EventForm {
    /// Turn the form into a draft on `date`.
    pub fn validate(&self, date: NaiveDate) -> Result<EventDraft, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() || self.start_time.trim().is_empty() || self.end_time.trim().is_empty() {
            return Err(ValidationError::MissingField);
        }

        let start_time: ClockTime = self.start_time.parse()?;
        let end_time: ClockTime = self.end_time.parse()?;
        if start_time >= end_time {
            return Err(ValidationError::EndNotAfterStart);
        }

        let color = if self.color.trim().is_empty() {
            EventColor::Default
        } else {
            self.color.parse()?
        };

        let description = Some(self.description.trim())
            .filter(|d| !d.is_empty())
            .map(String::from);

        Ok(EventDraft {
            title: title.to_string(),
            description,
            start_time,
            end_time,
            date,
            color,
        })
    }
}

/// Validate `form` and check it against `existing` events.
///
/// Pass the id of the event being edited as `exclude_id`.
pub fn check_save(
    existing: &[Event],
    form: &EventForm,
    date: NaiveDate,
    exclude_id: Option<&str>,
) -> DaybookResult<EventDraft> {
    let draft = form.validate(date)?;

    if let Some(conflict) = find_overlap(existing, &draft, exclude_id) {
        return Err(DaybookError::Overlap {
            title: conflict.title.clone(),
            time_range: conflict.time_range(),
        });
    }

    Ok(draft)
}
