use anyhow::Result;
use colored::*;
use std::io::{self, Write};

use crate::config::Config;
use crate::session::Session;

use super::args::{DailyArgs, PlanArgs};
use super::daily;
use super::locate;
use super::plan;

/// Interactive page menu. One session object lives for the whole loop so
/// the daily planner can pick up the duration set by the plan page.
pub(crate) async fn run_pages(config: &Config) -> Result<()> {
    println!("{}", "🌍 voya — Travel Planner AI".bold());
    println!("Plan a trip, sketch your days, or look up a place.");

    let mut session = Session::new();

    loop {
        println!("\n📑 Pages:\n");
        println!("  1. Main — generate a travel plan");
        println!("  2. Daily Planner");
        println!("  3. Place Location Finder");
        println!("  q. Quit");

        let selection = prompt_selection()?;
        let result = match selection.as_str() {
            "1" => plan::handle_plan(PlanArgs::default(), config, &mut session).await,
            "2" => daily::handle_daily(DailyArgs::default(), &session),
            "3" => locate::run_interactive(config).await,
            "q" | "quit" => break,
            _ => {
                println!("❌ Please enter 1, 2, 3, or q.");
                continue;
            }
        };

        // A failed page interaction returns to the menu rather than
        // taking the whole run down with it.
        if let Err(err) = result {
            eprintln!("{} {err:#}", "❌".red());
        }
    }

    Ok(())
}

fn prompt_selection() -> Result<String> {
    print!("\nSelect page [1-3, q]: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_lowercase())
}
