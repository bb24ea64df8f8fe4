use anyhow::Result;
use pulpit_core::planner::Planner;
use pulpit_core::remote::RemoteGateway;

use super::resolve_series;

pub async fn run(planner: &mut Planner<RemoteGateway>, needle: &str) -> Result<()> {
    let id = resolve_series(planner, needle)?;

    // Best-effort: local removal proceeds even if the remote delete fails.
    planner.delete_series(&id).await?;
    println!("Deleted '{}' and its calendar events.", needle);
    Ok(())
}
