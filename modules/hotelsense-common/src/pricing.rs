use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_GUESTS: u32 = 2;

/// Nights between two `YYYY-MM-DD` dates, never less than one.
///
/// Unparseable dates count as a single night.
pub fn nights_between(check_in: &str, check_out: &str) -> u32 {
    let (Some(start), Some(end)) = (parse_date(check_in), parse_date(check_out)) else {
        return 1;
    };
    let days = (end - start).num_days();
    days.max(1) as u32
}

/// Default stay: tomorrow through one week from `today`.
pub fn default_stay(today: NaiveDate) -> (String, String) {
    (
        format_date(today + Duration::days(1)),
        format_date(today + Duration::days(7)),
    )
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    // Accept full timestamps too; only the date part matters.
    let date_part = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

// --- Trip budget ---

/// Rough trip cost: room and meals scale with nights, the rest are flat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripBudget {
    pub nights: u32,
    pub room_rate: f64,
    pub meals_per_day: f64,
    pub transport: f64,
    pub activities: f64,
}

impl Default for TripBudget {
    fn default() -> Self {
        Self {
            nights: 3,
            room_rate: 3000.0,
            meals_per_day: 1000.0,
            transport: 500.0,
            activities: 1500.0,
        }
    }
}

impl TripBudget {
    pub fn room_total(&self) -> f64 {
        f64::from(self.nights) * self.room_rate
    }

    pub fn meals_total(&self) -> f64 {
        f64::from(self.nights) * self.meals_per_day
    }

    pub fn total(&self) -> f64 {
        self.room_total() + self.meals_total() + self.transport + self.activities
    }
}
