use anyhow::Result;
use pulpit_core::planner::Planner;
use pulpit_core::remote::RemoteGateway;

use super::resolve_series;

pub async fn run(planner: &mut Planner<RemoteGateway>, needle: &str, archive: bool) -> Result<()> {
    let id = resolve_series(planner, needle)?;

    if archive {
        planner.archive_series(&id).await?;
        println!("Archived '{}'. Its calendar events stay in place.", needle);
    } else {
        planner.unarchive_series(&id).await?;
        println!("Restored '{}' to the active series.", needle);
    }
    Ok(())
}
