//! Time-slot conflict detection.
//!
//! Intervals are half-open: an event ending at 10:00 does not conflict with
//! one starting at 10:00. Bounds combine the event date with its wall-clock
//! times, so events on different dates never conflict.

use chrono::NaiveDateTime;

use crate::event::{Event, EventDraft};

/// Check whether `candidate` conflicts with any event in `existing`.
///
/// `exclude_id` skips one event, so an edited event is not compared with its
/// own previous version.
pub fn has_overlap(existing: &[Event], candidate: &EventDraft, exclude_id: Option<&str>) -> bool {
    find_overlap(existing, candidate, exclude_id).is_some()
}

/// The first event in `existing` that conflicts with `candidate`, if any.
pub fn find_overlap<'a>(
    existing: &'a [Event],
    candidate: &EventDraft,
    exclude_id: Option<&str>,
) -> Option<&'a Event> {
    let (start, end) = (candidate.start(), candidate.end());

    existing
        .iter()
        .filter(|e| exclude_id != Some(e.id.as_str()))
        .find(|e| intervals_overlap(start, end, e.start(), e.end()))
}

/// Candidate `[start, end)` against existing `[other_start, other_end)`.
fn intervals_overlap(
    start: NaiveDateTime,
    end: NaiveDateTime,
    other_start: NaiveDateTime,
    other_end: NaiveDateTime,
) -> bool {
    let starts_inside = start >= other_start && start < other_end;
    let ends_inside = end > other_start && end <= other_end;
    let contains = start <= other_start && end >= other_end;

    starts_inside || ends_inside || contains
}
