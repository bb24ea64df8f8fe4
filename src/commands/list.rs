use anyhow::Result;
use owo_colors::OwoColorize;
use pulpit_core::planner::Planner;
use pulpit_core::remote::RemoteGateway;

use crate::render;

pub fn run(planner: &Planner<RemoteGateway>) -> Result<()> {
    let active = planner.active_series();
    let archived = planner.archived_series();

    if active.is_empty() && archived.is_empty() {
        println!("No series yet. Create one with `pulpit new <title> --start <date> --end <date>`.");
        return Ok(());
    }

    if !active.is_empty() {
        println!("{}", "Series".bold());
        for series in active {
            println!("{}", render::series_line(series));
        }
    }

    if !archived.is_empty() {
        println!("\n{}", "Archived".bold());
        for series in archived {
            println!("{}", render::series_line(series));
        }
    }

    Ok(())
}
