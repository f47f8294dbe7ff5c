use anyhow::{Result, bail};
use colored::*;

use crate::session::Session;

use super::args::DailyArgs;
use super::table;
use super::util::prompt_line;

pub(crate) fn handle_daily(args: DailyArgs, session: &Session) -> Result<()> {
    let days = args
        .days
        .unwrap_or_else(|| session.trip_duration_or_default());
    if days == 0 {
        bail!("Day count must be at least one");
    }

    println!("\n{}", "Daily Planner".bold());
    println!("Enter your daily activities below (leave a day blank to skip it):");

    let mut rows = Vec::with_capacity(days as usize);
    for day in 1..=days {
        let activity = prompt_line(&format!("Day {day}: "))?;
        rows.push([day.to_string(), activity]);
    }

    println!("\n{}", "Daily Activities:".bold());
    print!("{}", table::format_table(["Day", "Activity"], &rows));

    Ok(())
}
