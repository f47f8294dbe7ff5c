/// Fallback day count for the daily planner when no plan has been
/// generated in the current session.
pub const DEFAULT_TRIP_DURATION_DAYS: u32 = 1;

/// Context carried across pages within one interactive run. The plan page
/// records the trip duration here; the daily planner reads it back.
#[derive(Debug, Clone, Default)]
pub struct Session {
    trip_duration_days: Option<u32>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_trip_duration(&mut self, days: u32) {
        self.trip_duration_days = Some(days);
    }

    pub fn trip_duration_or_default(&self) -> u32 {
        self.trip_duration_days.unwrap_or(DEFAULT_TRIP_DURATION_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_TRIP_DURATION_DAYS, Session};

    #[test]
    fn defaults_to_one_day_when_unset() {
        let session = Session::new();
        assert_eq!(session.trip_duration_or_default(), DEFAULT_TRIP_DURATION_DAYS);
    }

    #[test]
    fn carries_duration_set_by_plan_page() {
        let mut session = Session::new();
        session.set_trip_duration(5);
        assert_eq!(session.trip_duration_or_default(), 5);
    }
}
