pub mod archive;
pub mod calendar;
pub mod delete;
pub mod list;
pub mod new;
pub mod sermon;

use anyhow::Result;
use pulpit_core::planner::Planner;
use pulpit_core::remote::RemoteGateway;

/// Resolve a series by id or (case-insensitive) title across both
/// partitions.
pub fn resolve_series(planner: &Planner<RemoteGateway>, needle: &str) -> Result<String> {
    let all = planner
        .active_series()
        .iter()
        .chain(planner.archived_series().iter());

    for series in all {
        if series.id == needle || series.title.eq_ignore_ascii_case(needle) {
            return Ok(series.id.clone());
        }
    }

    let available: Vec<&str> = planner
        .active_series()
        .iter()
        .chain(planner.archived_series().iter())
        .map(|s| s.title.as_str())
        .collect();
    anyhow::bail!(
        "Series '{}' not found. Available: {}",
        needle,
        available.join(", ")
    )
}

pub fn parse_day(s: &str) -> Result<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}
