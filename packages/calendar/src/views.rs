use calendar_router::{Element, View};

/// The calendar page, mounted at `/`.
pub struct CalendarPage;

impl View for CalendarPage {
    fn render(&self) -> Element {
        Element::new(r#"<main class="calendar-page"><h1>Calendar</h1></main>"#)
    }
}
