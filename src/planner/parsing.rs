use super::types::ItineraryEntry;

const ENTRY_SEPARATOR: &str = " - ";

/// Split generated plan text into (date/time, activity) rows.
///
/// A line is kept only when splitting on the literal `" - "` yields exactly
/// two segments; every other line (no separator, or two or more separators)
/// contributes no row and no error.
pub(crate) fn parse_itinerary(plan_text: &str) -> Vec<ItineraryEntry> {
    let mut itinerary = Vec::new();

    for line in plan_text.lines() {
        let mut segments = line.split(ENTRY_SEPARATOR);
        if let (Some(date_or_time), Some(activity), None) =
            (segments.next(), segments.next(), segments.next())
        {
            itinerary.push(ItineraryEntry {
                date_or_time: date_or_time.trim().to_string(),
                activity: activity.trim().to_string(),
            });
        }
    }

    itinerary
}
