//! Calendar application state.
//!
//! The event collection is the single source of truth. The displayed month,
//! selected day and search query are plain fields changed through methods,
//! and every derived view (grid, day listing) is recomputed from them on
//! demand. Each mutation writes the full collection back to the store.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info, warn};

use crate::error::{DaybookError, DaybookResult};
use crate::event::Event;
use crate::export::{Export, month_export};
use crate::form::{EventForm, check_save};
use crate::grid::{CalendarGrid, build_month_grid, normalize_month};
use crate::search::matches_query;
use crate::store::{EVENTS_KEY, KeyValueStore};

pub struct CalendarApp<S: KeyValueStore> {
    store: S,
    events: Vec<Event>,
    year: i32,
    month: u32,
    selected: Option<NaiveDate>,
    query: String,
}

impl<S: KeyValueStore> CalendarApp<S> {
    /// Load the stored events and show the month containing `today`.
    ///
    /// A missing or unreadable collection starts out empty.
    pub fn load(store: S, today: NaiveDate) -> Self {
        let events = load_events(&store);

        CalendarApp {
            store,
            events,
            year: today.year(),
            month: today.month0(),
            selected: None,
            query: String::new(),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Displayed (year, zero-based month)
    pub fn month(&self) -> (i32, u32) {
        (self.year, self.month)
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn show_month(&mut self, year: i32, month: i32) {
        let (year, month) = normalize_month(year, month);
        self.year = year;
        self.month = month;
    }

    pub fn shift_month(&mut self, delta: i32) {
        self.show_month(self.year, (self.month as i32).saturating_add(delta));
    }

    pub fn previous_month(&mut self) {
        self.shift_month(-1);
    }

    pub fn next_month(&mut self) {
        self.shift_month(1);
    }

    pub fn select_day(&mut self, date: NaiveDate) {
        self.selected = Some(date);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// The displayed month with events attached and the search query applied.
    pub fn grid(&self, today: NaiveDate) -> CalendarGrid {
        build_month_grid(self.year, self.month as i32, today)
            .with_events(&self.events)
            .filtered(&self.query)
    }

    /// Events on `date` matching the search query, ordered by start time.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        let mut events: Vec<&Event> = self
            .events
            .iter()
            .filter(|e| e.date == date && matches_query(e, &self.query))
            .collect();

        events.sort_by_key(|e| (e.start_time, e.end_time));
        events
    }

    /// Events on the selected day, if one is selected.
    pub fn selected_events(&self) -> Vec<&Event> {
        self.selected.map(|d| self.events_on(d)).unwrap_or_default()
    }

    /// Export the displayed month.
    pub fn export(&self) -> DaybookResult<Export> {
        month_export(&self.events, self.year, self.month as i32)
    }

    // =========================================================================
    // Event operations
    // =========================================================================

    pub fn add_event(&mut self, form: &EventForm, date: NaiveDate) -> DaybookResult<&Event> {
        let draft = check_save(&self.events, form, date, None)?;
        let event = Event::from_draft(draft);

        info!(id = %event.id, date = %event.date, "adding event");
        self.events.push(event);
        self.persist()?;

        let index = self.events.len() - 1;
        Ok(&self.events[index])
    }

    pub fn update_event(&mut self, id: &str, form: &EventForm, date: NaiveDate) -> DaybookResult<&Event> {
        let index = self.position(id)?;
        let draft = check_save(&self.events, form, date, Some(id))?;

        info!(id, date = %draft.date, "updating event");
        self.events[index] = Event::with_id(id.to_string(), draft);
        self.persist()?;

        Ok(&self.events[index])
    }

    pub fn delete_event(&mut self, id: &str) -> DaybookResult<Event> {
        let index = self.position(id)?;
        let removed = self.events.remove(index);

        info!(id, "deleted event");
        self.persist()?;

        Ok(removed)
    }

    fn position(&self, id: &str) -> DaybookResult<usize> {
        self.events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| DaybookError::EventNotFound(id.to_string()))
    }

    fn persist(&mut self) -> DaybookResult<()> {
        let json = serde_json::to_string(&self.events)?;
        self.store.set(EVENTS_KEY, &json)?;

        debug!(count = self.events.len(), "persisted events");
        Ok(())
    }
}

fn load_events(store: &impl KeyValueStore) -> Vec<Event> {
    let raw = match store.get(EVENTS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "could not read stored events, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Event>>(&raw) {
        Ok(events) => {
            debug!(count = events.len(), "loaded events");
            events
        }
        Err(e) => {
            warn!(error = %e, "stored events are malformed, starting empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::store::MemoryStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn form(title: &str, start: &str, end: &str) -> EventForm {
        EventForm {
            title: title.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            ..EventForm::default()
        }
    }

    fn empty_app() -> CalendarApp<MemoryStore> {
        CalendarApp::load(MemoryStore::new(), date(2024, 3, 15))
    }

    fn stored(app: &CalendarApp<MemoryStore>) -> Vec<Event> {
        let raw = app.store().get(EVENTS_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_load_starts_on_todays_month() {
        let app = empty_app();
        assert_eq!(app.month(), (2024, 2));
        assert!(app.events().is_empty());
        assert_eq!(app.selected(), None);
    }

    #[test]
    fn test_load_malformed_storage_is_empty() {
        let store = MemoryStore::with_value(EVENTS_KEY, "{not json");
        let app = CalendarApp::load(store, date(2024, 3, 15));
        assert!(app.events().is_empty());
    }

    #[test]
    fn test_load_existing_events() {
        let json = r#"[{"id":"x","title":"Yoga","description":"","startTime":"07:00","endTime":"08:00","date":"2024-03-04","color":"personal"}]"#;
        let app = CalendarApp::load(MemoryStore::with_value(EVENTS_KEY, json), date(2024, 3, 15));

        assert_eq!(app.events().len(), 1);
        assert_eq!(app.event("x").map(|e| e.title.as_str()), Some("Yoga"));
    }

    #[test]
    fn test_navigation_rolls_over_years() {
        let mut app = CalendarApp::load(MemoryStore::new(), date(2024, 1, 10));

        app.previous_month();
        assert_eq!(app.month(), (2023, 11));

        app.next_month();
        app.next_month();
        assert_eq!(app.month(), (2024, 1));

        app.shift_month(11);
        assert_eq!(app.month(), (2025, 0));

        app.show_month(2024, 12);
        assert_eq!(app.month(), (2025, 0));
    }

    #[test]
    fn test_add_event_persists() {
        let mut app = empty_app();

        let id = app
            .add_event(&form("Standup", "09:00", "09:15"), date(2024, 3, 1))
            .unwrap()
            .id
            .clone();

        assert_eq!(app.events().len(), 1);
        assert_eq!(stored(&app), app.events());
        assert_eq!(stored(&app)[0].id, id);
    }

    #[test]
    fn test_add_overlapping_event_is_rejected_without_mutation() {
        let mut app = empty_app();
        app.add_event(&form("Standup", "09:00", "10:00"), date(2024, 3, 1))
            .unwrap();

        let result = app.add_event(&form("Call", "09:30", "10:30"), date(2024, 3, 1));
        assert!(matches!(result, Err(DaybookError::Overlap { .. })));
        assert_eq!(app.events().len(), 1);
        assert_eq!(stored(&app).len(), 1);
    }

    #[test]
    fn test_add_invalid_event_is_rejected() {
        let mut app = empty_app();
        let result = app.add_event(&form("", "09:00", "10:00"), date(2024, 3, 1));

        assert!(matches!(
            result,
            Err(DaybookError::Validation(ValidationError::MissingField))
        ));
        assert_eq!(app.store().get(EVENTS_KEY).unwrap(), None);
    }

    #[test]
    fn test_update_keeps_id_and_ignores_own_interval() {
        let mut app = empty_app();
        let id = app
            .add_event(&form("Standup", "09:00", "10:00"), date(2024, 3, 1))
            .unwrap()
            .id
            .clone();

        let updated = app
            .update_event(&id, &form("Standup (moved)", "09:00", "10:00"), date(2024, 3, 1))
            .unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.title, "Standup (moved)");

        app.update_event(&id, &form("Standup", "09:30", "10:30"), date(2024, 3, 1))
            .unwrap();
        assert_eq!(app.events().len(), 1);
        assert_eq!(stored(&app)[0].start_time.to_string(), "09:30");
    }

    #[test]
    fn test_update_conflicting_with_another_event() {
        let mut app = empty_app();
        app.add_event(&form("A", "09:00", "10:00"), date(2024, 3, 1))
            .unwrap();
        let id = app
            .add_event(&form("B", "11:00", "12:00"), date(2024, 3, 1))
            .unwrap()
            .id
            .clone();

        let result = app.update_event(&id, &form("B", "09:30", "11:00"), date(2024, 3, 1));
        assert!(matches!(result, Err(DaybookError::Overlap { .. })));
        assert_eq!(app.event(&id).unwrap().start_time.to_string(), "11:00");
    }

    #[test]
    fn test_update_and_delete_unknown_id() {
        let mut app = empty_app();
        assert!(matches!(
            app.update_event("missing", &form("A", "09:00", "10:00"), date(2024, 3, 1)),
            Err(DaybookError::EventNotFound(_))
        ));
        assert!(matches!(
            app.delete_event("missing"),
            Err(DaybookError::EventNotFound(_))
        ));
    }

    #[test]
    fn test_delete_event_persists() {
        let mut app = empty_app();
        let id = app
            .add_event(&form("A", "09:00", "10:00"), date(2024, 3, 1))
            .unwrap()
            .id
            .clone();

        let removed = app.delete_event(&id).unwrap();
        assert_eq!(removed.title, "A");
        assert!(app.events().is_empty());
        assert!(stored(&app).is_empty());
    }

    #[test]
    fn test_grid_applies_query() {
        let mut app = empty_app();
        app.add_event(&form("Dentist", "09:00", "10:00"), date(2024, 3, 1))
            .unwrap();
        app.add_event(&form("Lunch", "12:00", "13:00"), date(2024, 3, 1))
            .unwrap();

        app.set_query("dent");
        let grid = app.grid(date(2024, 3, 15));

        let total: usize = grid.days().iter().map(|d| d.events.len()).sum();
        assert_eq!(total, 1);
        assert!(grid.today().is_some());
    }

    #[test]
    fn test_events_on_sorted_by_start() {
        let mut app = empty_app();
        app.add_event(&form("Late", "15:00", "16:00"), date(2024, 3, 1))
            .unwrap();
        app.add_event(&form("Early", "08:00", "09:00"), date(2024, 3, 1))
            .unwrap();
        app.add_event(&form("Other day", "08:00", "09:00"), date(2024, 3, 2))
            .unwrap();

        app.select_day(date(2024, 3, 1));
        let titles: Vec<_> = app.selected_events().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Early", "Late"]);
    }

    #[test]
    fn test_export_uses_displayed_month() {
        let mut app = empty_app();
        app.add_event(&form("March", "09:00", "10:00"), date(2024, 3, 1))
            .unwrap();
        app.add_event(&form("April", "09:00", "10:00"), date(2024, 4, 1))
            .unwrap();

        app.next_month();
        let export = app.export().unwrap();
        let events: Vec<Event> = serde_json::from_slice(&export.bytes).unwrap();

        assert_eq!(export.filename, "calendar-events-2024-04.json");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "April");
    }
}
