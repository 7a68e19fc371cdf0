// src/domain/availability.rs

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::Rng;
use std::collections::BTreeMap;

pub const SLOT_TIMES: [&str; 6] = ["08:00", "10:00", "12:00", "14:00", "16:00", "18:00"];

/// Days shown, counted from tomorrow.
pub const WINDOW_DAYS: u64 = 14;

/// Chance that any one slot is shown as free.
pub const AVAILABLE_PROBABILITY: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub time: &'static str,
    pub available: bool,
}

/// Simulated open slots. Not backed by any schedule; regenerated on every
/// page load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Availability {
    days: BTreeMap<NaiveDate, Vec<TimeSlot>>,
}

impl Availability {
    pub fn generate<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> Self {
        Self::build(today, || rng.gen_bool(AVAILABLE_PROBABILITY))
    }

    /// Every slot of the window open.
    #[cfg(test)]
    pub fn fully_open(today: NaiveDate) -> Self {
        Self::build(today, || true)
    }

    fn build(today: NaiveDate, mut open: impl FnMut() -> bool) -> Self {
        let days = (1..=WINDOW_DAYS)
            .filter_map(|offset| today.checked_add_days(Days::new(offset)))
            .filter(|date| date.weekday() != Weekday::Sun)
            .map(|date| {
                let slots = SLOT_TIMES
                    .iter()
                    .map(|&time| TimeSlot {
                        time,
                        available: open(),
                    })
                    .collect();
                (date, slots)
            })
            .collect();

        Self { days }
    }

    pub fn slots_for(&self, date: NaiveDate) -> Option<&[TimeSlot]> {
        self.days.get(&date).map(Vec::as_slice)
    }

    pub fn is_open(&self, date: NaiveDate, time: &str) -> bool {
        self.slots_for(date)
            .map(|slots| slots.iter().any(|s| s.time == time && s.available))
            .unwrap_or(false)
    }

    #[cfg(test)]
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Date key format used by `<input type="date">`.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_key(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
