// src/calendar.rs
//! Date → (week parity, day) projection.
//!
//! The portal alternates two week patterns. Today's parity comes from the ISO week
//! number's evenness relative to a configured base. For a date N days away there are two
//! historical ways of projecting parity, kept side by side as [`ParityPolicy`]:
//!
//! - `IsoWeek`: parity of the target date's own ISO week number.
//! - `DayCount`: today's parity, flipped once per ISO week boundary crossed going forward.
//!   Going backward never flips, as the old tool did.
//!
//! They agree inside a year but not across a 53-week year: on Mon 2026-12-28 (week 53)
//! with offset 7 the target is 2027-01-04 (week 1). Both weeks are odd, so `IsoWeek` keeps
//! the parity while `DayCount` flips it.

use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::Deserialize;

use crate::model::{Day, Parity};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ParityPolicy {
    #[default]
    IsoWeek,
    DayCount,
}

/// The resolved query target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    pub date: NaiveDate,
    pub week: Parity,
    pub day: Day,
}

#[derive(Clone, Copy, Debug)]
pub struct ParityCalculator {
    /// Parity of even ISO weeks.
    base: Parity,
    policy: ParityPolicy,
}

impl ParityCalculator {
    pub fn new(base: Parity, policy: ParityPolicy) -> Self {
        Self { base, policy }
    }

    /// Parity of the ISO week containing `date`.
    pub fn parity_on(&self, date: NaiveDate) -> Parity {
        if date.iso_week().week() % 2 == 0 { self.base } else { self.base.opposite() }
    }

    /// Project `today` by `offset` days. `None` if the target date is out of range.
    pub fn resolve(&self, today: NaiveDate, offset: Option<i64>) -> Option<Target> {
        let Some(offset) = offset else {
            return Some(Target { date: today, week: self.parity_on(today), day: today.weekday().into() });
        };

        let date = today.checked_add_signed(TimeDelta::try_days(offset)?)?;
        let week = match self.policy {
            ParityPolicy::IsoWeek => self.parity_on(date),
            ParityPolicy::DayCount => {
                let current = self.parity_on(today);
                if weeks_crossed(today, offset) % 2 == 1 { current.opposite() } else { current }
            }
        };
        Some(Target { date, week, day: date.weekday().into() })
    }
}

/// ISO week boundaries crossed going `offset` days forward from `today`.
/// Anything that stays within the rest of this week, negative offsets included, is 0.
fn weeks_crossed(today: NaiveDate, offset: i64) -> i64 {
    let room = 6 - i64::from(today.weekday().num_days_from_monday());
    if offset <= room { 0 } else { (offset - room - 1) / 7 + 1 }
}
