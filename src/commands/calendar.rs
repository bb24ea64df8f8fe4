use anyhow::Result;
use pulpit_core::planner::Planner;
use pulpit_core::remote::RemoteGateway;

use crate::render;

pub fn run(planner: &Planner<RemoteGateway>) -> Result<()> {
    let events = planner.calendar_events();

    if events.is_empty() {
        println!("No dated sermons yet.");
        return Ok(());
    }

    for event in events {
        println!("{}", render::event_line(event));
    }
    Ok(())
}
