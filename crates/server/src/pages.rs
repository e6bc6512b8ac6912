use askama::Template;
use shared::view::ScheduleViewModel;

use crate::error::RenderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Page {
    Schedule,
    Upcoming,
}

impl Page {
    pub(crate) fn template_name(self) -> &'static str {
        match self {
            Page::Schedule => "schedule",
            Page::Upcoming => "upcoming",
        }
    }
}

/// Turns a view model into the HTML body for a named page.
pub(crate) trait PageRenderer: Send + Sync {
    fn render(&self, page: Page, view: &ScheduleViewModel) -> Result<String, RenderError>;
}

#[derive(Template)]
#[template(path = "schedule.html")]
struct ScheduleTemplate<'a> {
    view: &'a ScheduleViewModel,
}

#[derive(Template)]
#[template(path = "upcoming.html")]
struct UpcomingTemplate<'a> {
    view: &'a ScheduleViewModel,
}

/// Renders pages with the templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TemplateRenderer;

impl PageRenderer for TemplateRenderer {
    fn render(&self, page: Page, view: &ScheduleViewModel) -> Result<String, RenderError> {
        let rendered = match page {
            Page::Schedule => ScheduleTemplate { view }.render(),
            Page::Upcoming => UpcomingTemplate { view }.render(),
        };
        rendered.map_err(|source| RenderError {
            template: page.template_name(),
            source,
        })
    }
}
