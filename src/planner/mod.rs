mod parsing;
mod prompt;
mod transport;
mod types;

pub use types::{ItineraryEntry, TravelPlan, TripRequest};

use anyhow::Result;

use crate::client::CompletionBackend;
use crate::config::TripSettings;

/// Request a plan from the generation collaborator and split it into an
/// itinerary table. When generation fails the parser is never invoked.
pub async fn generate_plan(
    client: &dyn CompletionBackend,
    request: &TripRequest,
    settings: &TripSettings,
) -> Result<TravelPlan> {
    let text = transport::request_plan_text(client, request, settings).await?;
    let itinerary = parsing::parse_itinerary(&text);
    Ok(TravelPlan { text, itinerary })
}
