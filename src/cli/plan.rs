use anyhow::{Context, Result};
use colored::*;

use crate::client::CompletionClient;
use crate::config::Config;
use crate::planner::{self, TravelPlan, TripRequest};
use crate::session::Session;
use crate::validator;

use super::args::PlanArgs;
use super::table;
use super::util::{prompt_nonempty_string, prompt_positive_f64, prompt_positive_u32};

pub(crate) async fn handle_plan(
    args: PlanArgs,
    config: &Config,
    session: &mut Session,
) -> Result<()> {
    let request = gather_request(args)?;
    // Flag values bypass the prompt loops, so check them before any call.
    request.validate()?;

    let client = CompletionClient::new(&config.llm)?;
    let plan = planner::generate_plan(&client, &request, &config.trip)
        .await
        .context("Could not generate a travel plan")?;

    session.set_trip_duration(request.duration_days);
    render_plan(&plan, &request);

    Ok(())
}

fn gather_request(args: PlanArgs) -> Result<TripRequest> {
    let PlanArgs {
        destination,
        days,
        budget,
        enjoyment,
        travelers,
    } = args;

    let needs_prompting = destination.is_none()
        || days.is_none()
        || budget.is_none()
        || enjoyment.is_none()
        || travelers.is_none();
    if needs_prompting {
        println!("\n{}", "Travel Planner".bold());
        println!("Enter your travel details below:");
    }

    let destination = match destination {
        Some(value) => value,
        None => prompt_nonempty_string("🌍 Travel destination")?,
    };
    let duration_days = match days {
        Some(value) => value,
        None => prompt_positive_u32("📅 Trip duration in days")?,
    };
    let budget = match budget {
        Some(value) => value,
        None => prompt_positive_f64("💰 Travel budget")?,
    };
    let enjoyment_type = match enjoyment {
        Some(value) => value,
        None => prompt_nonempty_string("🎯 Type of enjoyment during the trip")?,
    };
    let traveler_count = match travelers {
        Some(value) => value,
        None => prompt_positive_u32("🧳 Number of people traveling")?,
    };

    Ok(TripRequest {
        destination,
        duration_days,
        budget,
        enjoyment_type,
        traveler_count,
    })
}

fn render_plan(plan: &TravelPlan, request: &TripRequest) {
    println!("\n{}", "Travel Plan:".bold());
    println!("{}", plan.text);

    println!("\n{}", "Travel Itinerary:".bold());
    if plan.itinerary.is_empty() {
        println!(
            "{}",
            "⚠️  No date/time - activity lines were recognized in the plan.".yellow()
        );
    } else {
        let rows: Vec<[String; 2]> = plan
            .itinerary
            .iter()
            .map(|entry| [entry.date_or_time.clone(), entry.activity.clone()])
            .collect();
        print!("{}", table::format_table(["Date/Time", "Activity"], &rows));
    }

    if validator::enjoyment_mentioned(&plan.text, &request.enjoyment_type) {
        println!("\n{}", "✅ Enjoyment type validated!".green());
    } else {
        println!(
            "\n{}",
            "⚠️  The generated plan may not align with the specified enjoyment type.".yellow()
        );
    }
}
