//! Terminal output helpers.

use owo_colors::OwoColorize;
use pulpit_core::{CalendarEvent, Series, SeriesStatus};

pub fn series_line(series: &Series) -> String {
    format!(
        "  {}  {}  {} sermon(s)  [{}]",
        series.title.bold(),
        status_label(series.status),
        series.sermons.len(),
        series.id.dimmed(),
    )
}

pub fn event_line(event: &CalendarEvent) -> String {
    format!(
        "  {}  {} — {}",
        event.date.format("%Y-%m-%d").to_string().bold(),
        event.title,
        event.subtitle.dimmed(),
    )
}

pub fn status_label(status: SeriesStatus) -> String {
    match status {
        SeriesStatus::Planning => "planning".yellow().to_string(),
        SeriesStatus::Active => "active".green().to_string(),
        SeriesStatus::Complete => "complete".blue().to_string(),
        SeriesStatus::Archived => "archived".dimmed().to_string(),
    }
}
