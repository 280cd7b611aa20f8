//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `sikkim_core` wiring end to end.
//! - Keep output deterministic for quick local sanity checks: no clock
//!   access, fixed demo month.

use sikkim_core::{
    builtin_archives, builtin_events, builtin_monasteries, CalendarController, GridCell,
    MonthCursor,
};
use std::error::Error;

const DEMO_YEAR: i32 = 2025;
const DEMO_MONTH0: u32 = 8; // September

fn main() -> Result<(), Box<dyn Error>> {
    println!("sikkim_core version={}", sikkim_core::core_version());

    let events = builtin_events()?;
    let archives = builtin_archives()?;
    let monasteries = builtin_monasteries()?;
    println!(
        "datasets events={} archives={} monasteries={}",
        events.len(),
        archives.len(),
        monasteries.len()
    );

    let controller = CalendarController::new(events, MonthCursor::new(DEMO_YEAR, DEMO_MONTH0));
    println!();
    println!("{}", controller.cursor());
    println!("Sun Mon Tue Wed Thu Fri Sat");
    for week in controller.current_grid().weeks() {
        let row: Vec<String> = week.iter().map(render_cell).collect();
        println!("{}", row.join(" ").trim_end());
    }

    println!();
    for (key, event) in controller.month_summary() {
        println!("{key}  {} @ {} ({})", event.title, event.location, event.time);
    }

    Ok(())
}

/// Three-column cell: day number, `*` marking a day with an event.
fn render_cell(cell: &GridCell) -> String {
    match cell {
        GridCell::Blank => "   ".to_string(),
        GridCell::Day { day, event: None } => format!("{day:>2} "),
        GridCell::Day {
            day,
            event: Some(_),
        } => format!("{day:>2}*"),
    }
}
