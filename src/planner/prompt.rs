use super::types::TripRequest;

pub(crate) fn build_prompt(request: &TripRequest) -> String {
    format!(
        "I want to travel to {} for {} days with a budget of {} and enjoy {}. We are {} people. Please suggest an itinerary.",
        request.destination,
        request.duration_days,
        request.budget,
        request.enjoyment_type,
        request.traveler_count
    )
}
