use chrono::NaiveDate;
use daybook_core::export::{DirectorySink, ExportSink};
use daybook_core::store::{EVENTS_KEY, FileStore, KeyValueStore};
use daybook_core::{CalendarApp, DaybookError, EventColor, EventForm};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn events_survive_a_reload() {
    let dir = tempfile::tempdir().unwrap();
    let today = date(2024, 2, 10);

    let id = {
        let mut app = CalendarApp::load(FileStore::new(dir.path()), today);
        let form = EventForm {
            title: "Leap day party".to_string(),
            description: "Bring snacks".to_string(),
            start_time: "18:00".to_string(),
            end_time: "21:00".to_string(),
            color: "personal".to_string(),
        };
        app.add_event(&form, date(2024, 2, 29)).unwrap().id.clone()
    };

    let app = CalendarApp::load(FileStore::new(dir.path()), today);
    let event = app.event(&id).unwrap();
    assert_eq!(event.title, "Leap day party");
    assert_eq!(event.color, EventColor::Personal);
    assert_eq!(event.description.as_deref(), Some("Bring snacks"));

    let grid = app.grid(today);
    let leap_day = grid
        .days()
        .iter()
        .find(|d| d.date == date(2024, 2, 29))
        .unwrap();
    assert!(leap_day.is_current_month);
    assert_eq!(leap_day.events.len(), 1);
}

#[test]
fn reads_collections_written_by_earlier_versions() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    store
        .set(
            EVENTS_KEY,
            r#"[
                {"id":"1","title":"Gym","startTime":"07:00","endTime":"08:00","date":"2024-03-01"},
                {"id":"2","title":"Review","description":"","startTime":"10:00","endTime":"11:00","date":"2024-03-01","color":"work"}
            ]"#,
        )
        .unwrap();

    let mut app = CalendarApp::load(store, date(2024, 3, 1));
    assert_eq!(app.events().len(), 2);

    let clash = EventForm {
        title: "Coffee".to_string(),
        start_time: "07:30".to_string(),
        end_time: "07:45".to_string(),
        ..EventForm::default()
    };
    assert!(matches!(
        app.add_event(&clash, date(2024, 3, 1)),
        Err(DaybookError::Overlap { .. })
    ));
}

#[test]
fn malformed_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("calendar-events.json"), "garbage").unwrap();

    let app = CalendarApp::load(FileStore::new(dir.path()), date(2024, 3, 1));
    assert!(app.events().is_empty());
}

#[test]
fn export_writes_displayed_month() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = CalendarApp::load(FileStore::new(dir.path().join("data")), date(2024, 3, 1));

    app.add_event(&EventForm { title: "March".into(), ..EventForm::default() }, date(2024, 3, 8))
        .unwrap();
    app.add_event(&EventForm { title: "May".into(), ..EventForm::default() }, date(2024, 5, 8))
        .unwrap();

    let sink = DirectorySink::new(dir.path().join("out"));
    let path = sink.deliver(&app.export().unwrap()).unwrap();

    assert!(path.ends_with("calendar-events-2024-03.json"));
    let written: serde_json::Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
    assert_eq!(written.as_array().unwrap().len(), 1);
    assert_eq!(written[0]["title"], "March");
    assert_eq!(written[0]["startTime"], "09:00");
}
