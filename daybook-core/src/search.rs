//! Free-text event search.

use crate::event::Event;

/// Case-insensitive substring match on title or description.
///
/// A query made only of whitespace matches every event; otherwise the
/// query is matched as given, whitespace included.
pub fn matches_query(event: &Event, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }

    let needle = query.to_lowercase();

    event.title.to_lowercase().contains(&needle)
        || event
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&needle))
}
