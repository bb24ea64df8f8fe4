use anyhow::Result;
use pulpit_core::planner::Planner;
use pulpit_core::remote::RemoteGateway;
use pulpit_core::sermon::{CustomFields, NewSermon, SermonStatus};

use super::{parse_day, resolve_series};

pub async fn add(
    planner: &mut Planner<RemoteGateway>,
    series_needle: &str,
    title: String,
    date: Option<&str>,
    theme: String,
    scripture: String,
) -> Result<()> {
    let series_id = resolve_series(planner, series_needle)?;
    let date = date.map(parse_day).transpose()?;
    let dated = date.is_some();

    let new = NewSermon {
        title,
        theme,
        scripture,
        date,
        notes: String::new(),
        custom: CustomFields::new(),
        status: SermonStatus::Draft,
    };

    let id = planner.add_sermon(&series_id, new).await?;

    if dated {
        println!("Added sermon {} with a calendar entry.", id);
    } else {
        println!("Added sermon {} (undated; no calendar entry).", id);
    }
    Ok(())
}

pub async fn rm(
    planner: &mut Planner<RemoteGateway>,
    series_needle: &str,
    sermon_needle: &str,
) -> Result<()> {
    let series_id = resolve_series(planner, series_needle)?;

    let sermon_id = planner
        .series(&series_id)
        .and_then(|series| {
            series
                .sermons
                .iter()
                .find(|s| s.id == sermon_needle || s.title.eq_ignore_ascii_case(sermon_needle))
        })
        .map(|s| s.id.clone())
        .ok_or_else(|| anyhow::anyhow!("Sermon '{}' not found in that series", sermon_needle))?;

    planner.delete_sermon(&series_id, &sermon_id).await?;
    println!("Removed sermon '{}' and its calendar entry.", sermon_needle);
    Ok(())
}
