//! Inbound/outbound date and day selectors, kept in step with each other.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// Day labels as the day dropdown lists them, Sunday first
pub const DAY_LABELS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

pub fn day_label(date: NaiveDate) -> &'static str {
    DAY_LABELS[date.weekday().num_days_from_sunday() as usize]
}

pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| TableError::InvalidDate(text.to_string()))
}

/// Which table's selectors changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Inbound,
    Outbound,
}

/// One date input plus its day dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateDay {
    pub date: NaiveDate,
    pub day: String,
}

impl DateDay {
    fn on(date: NaiveDate) -> Self {
        Self {
            date,
            day: day_label(date).to_string(),
        }
    }
}

/// Both selector pairs. A change on one side is mirrored on the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySelectors {
    pub inbound: DateDay,
    pub outbound: DateDay,
}

impl DaySelectors {
    /// Both sides set to `today` and its weekday
    pub fn today(today: NaiveDate) -> Self {
        Self {
            inbound: DateDay::on(today),
            outbound: DateDay::on(today),
        }
    }

    /// Date changed on one side: copy it across and re-derive both days
    pub fn set_date(&mut self, side: Side, date: NaiveDate) {
        tracing::debug!(?side, %date, "date changed");
        self.inbound = DateDay::on(date);
        self.outbound = DateDay::on(date);
    }

    /// Parse a `YYYY-MM-DD` input value and apply it; state is untouched on error
    pub fn set_date_str(&mut self, side: Side, text: &str) -> Result<()> {
        let date = parse_date(text)?;
        self.set_date(side, date);
        Ok(())
    }

    /// Day changed on one side: mirror the label, dates stay as they are
    pub fn set_day(&mut self, side: Side, day: &str) {
        tracing::debug!(?side, day, "day changed");
        self.inbound.day = day.to_string();
        self.outbound.day = day.to_string();
    }

    pub fn side(&self, side: Side) -> &DateDay {
        match side {
            Side::Inbound => &self.inbound,
            Side::Outbound => &self.outbound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_label() {
        assert_eq!(day_label(date(2026, 10, 19)), "MON");
        assert_eq!(day_label(date(2026, 10, 18)), "SUN");
        assert_eq!(day_label(date(2026, 10, 24)), "SAT");
    }

    #[test]
    fn test_today_sets_both_sides() {
        let sel = DaySelectors::today(date(2026, 10, 19));
        assert_eq!(sel.inbound, sel.outbound);
        assert_eq!(sel.inbound.day, "MON");
    }

    #[test]
    fn test_date_change_syncs_other_side() {
        let mut sel = DaySelectors::today(date(2026, 10, 19));
        sel.set_date_str(Side::Outbound, "2026-10-23").unwrap();
        assert_eq!(sel.inbound.date, date(2026, 10, 23));
        assert_eq!(sel.inbound.day, "FRI");
        assert_eq!(sel.side(Side::Outbound).day, "FRI");
    }

    #[test]
    fn test_day_change_syncs_other_side() {
        let mut sel = DaySelectors::today(date(2026, 10, 19));
        sel.set_day(Side::Inbound, "WED");
        assert_eq!(sel.outbound.day, "WED");
        assert_eq!(sel.outbound.date, date(2026, 10, 19));
    }

    #[test]
    fn test_bad_date_leaves_state() {
        let mut sel = DaySelectors::today(date(2026, 10, 19));
        let before = sel.clone();
        let err = sel.set_date_str(Side::Inbound, "19/10/2026").unwrap_err();
        assert_eq!(err.code(), "INVALID_DATE");
        assert_eq!(sel, before);
    }
}
