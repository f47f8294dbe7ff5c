use anyhow::{Result, bail};

/// Trip preferences gathered from the user, consumed once per request.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    pub destination: String,
    pub duration_days: u32,
    pub budget: f64,
    pub enjoyment_type: String,
    pub traveler_count: u32,
}

impl TripRequest {
    /// Every field must be non-empty/positive before any outbound call.
    pub fn validate(&self) -> Result<()> {
        if self.destination.trim().is_empty() {
            bail!("Travel destination cannot be empty");
        }
        if self.duration_days == 0 {
            bail!("Trip duration must be at least one day");
        }
        if !self.budget.is_finite() || self.budget <= 0.0 {
            bail!("Travel budget must be greater than zero");
        }
        if self.enjoyment_type.trim().is_empty() {
            bail!("Enjoyment type cannot be empty");
        }
        if self.traveler_count == 0 {
            bail!("Traveler count must be at least one");
        }
        Ok(())
    }
}

/// One (date/time, activity) row extracted from generated plan text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryEntry {
    pub date_or_time: String,
    pub activity: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TravelPlan {
    pub text: String,
    pub itinerary: Vec<ItineraryEntry>,
}
