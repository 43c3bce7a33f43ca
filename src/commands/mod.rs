pub mod add;
pub mod config;
pub mod day;
pub mod delete;
pub mod edit;
pub mod export;
pub mod month;

use daybook_core::EventForm;

/// Event fields given on the command line. `None` means "not given".
pub struct FormFields {
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl FormFields {
    /// Overlay the given fields on top of `form`.
    pub fn apply_to(self, mut form: EventForm) -> EventForm {
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(start) = self.start {
            form.start_time = start;
        }
        if let Some(end) = self.end {
            form.end_time = end;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(color) = self.color {
            form.color = color;
        }
        form
    }
}
