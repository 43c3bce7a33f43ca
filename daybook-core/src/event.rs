//! Event types.
//!
//! The JSON shape matches what the store has always held: camelCase field
//! names, `"YYYY-MM-DD"` dates and `"HH:MM"` wall-clock times.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::ValidationError;

const CLOCK_FORMAT: &str = "%H:%M";

/// A calendar event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub date: NaiveDate,
    #[serde(default)]
    pub color: EventColor,
}

/// An event that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub description: Option<String>,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub date: NaiveDate,
    pub color: EventColor,
}

impl Event {
    /// Create a new event from a draft, generating a fresh id.
    pub fn from_draft(draft: EventDraft) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), draft)
    }

    /// Build an event that keeps an existing id (used when editing).
    pub fn with_id(id: String, draft: EventDraft) -> Self {
        Event {
            id,
            title: draft.title,
            description: draft.description,
            start_time: draft.start_time,
            end_time: draft.end_time,
            date: draft.date,
            color: draft.color,
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time.0)
    }

    pub fn end(&self) -> NaiveDateTime {
        self.date.and_time(self.end_time.0)
    }

    /// Format the time range (e.g. "09:00 - 10:00")
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

impl EventDraft {
    pub fn start(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time.0)
    }

    pub fn end(&self) -> NaiveDateTime {
        self.date.and_time(self.end_time.0)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

// =============================================================================
// Wall-clock time
// =============================================================================

/// A 24-hour wall-clock time, written as "HH:MM".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(pub NaiveTime);

impl ClockTime {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(ClockTime)
    }
}

impl FromStr for ClockTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // chrono accepts single-digit hours for %H; the stored format is fixed-width
        if trimmed.len() != 5 {
            return Err(ValidationError::InvalidTime(s.to_string()));
        }
        NaiveTime::parse_from_str(trimmed, CLOCK_FORMAT)
            .map(ClockTime)
            .map_err(|_| ValidationError::InvalidTime(s.to_string()))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format(CLOCK_FORMAT))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Category color
// =============================================================================

/// Category tag, used for coloring events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    #[default]
    Default,
    Work,
    Personal,
    Other,
}

impl EventColor {
    pub const ALL: [EventColor; 4] = [
        EventColor::Default,
        EventColor::Work,
        EventColor::Personal,
        EventColor::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventColor::Default => "default",
            EventColor::Work => "work",
            EventColor::Personal => "personal",
            EventColor::Other => "other",
        }
    }
}

impl FromStr for EventColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        EventColor::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| ValidationError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
