use anyhow::Result;
use pulpit_core::planner::Planner;
use pulpit_core::remote::RemoteGateway;
use pulpit_core::series::{NewSeries, SeriesStatus};

use super::parse_day;

pub async fn run(
    planner: &mut Planner<RemoteGateway>,
    title: String,
    description: String,
    color: String,
    start: &str,
    end: &str,
) -> Result<()> {
    let new = NewSeries {
        title,
        description,
        summary: String::new(),
        color,
        start_date: parse_day(start)?,
        end_date: parse_day(end)?,
        status: SeriesStatus::Planning,
        collaborators: vec![],
        artwork: None,
        bumper_video: None,
    };

    let id = planner.create_series(new).await?;
    let series = planner.series(&id).expect("just created");

    println!("Created series '{}' ({})", series.title, id);
    println!("Add sermons with `pulpit sermon add \"{}\" <title> --date <day>`.", series.title);
    Ok(())
}
