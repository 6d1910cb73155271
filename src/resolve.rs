// src/resolve.rs
//! Week / day / subgroup lookup over a parsed [`Schedule`].

use crate::config::consts::{NO_CLASSES_TEXT, NO_SCHEDULE_TEXT};
use crate::model::{ClassEntry, Day, Parity, Schedule, Subgroup};

/// Why a lookup came back empty. Both are ordinary answers, not failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotFound {
    /// The week, or the day within it, is not in the document.
    NoScheduleForDay,
    /// The day exists but nothing applies to this subgroup.
    NoClassesToday,
}

impl NotFound {
    pub fn message(self) -> &'static str {
        match self {
            NotFound::NoScheduleForDay => NO_SCHEDULE_TEXT,
            NotFound::NoClassesToday => NO_CLASSES_TEXT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DaySchedule<'a> {
    Classes(Vec<&'a ClassEntry>),
    NotFound(NotFound),
}

/// Entries admitted for `subgroup`, in their original order.
pub fn filter_for<'a, I>(entries: I, subgroup: Subgroup) -> Vec<&'a ClassEntry>
where
    I: IntoIterator<Item = &'a ClassEntry>,
{
    entries
        .into_iter()
        .filter(|e| subgroup.admits(e.subgroup))
        .collect()
}

pub fn resolve(schedule: &Schedule, week: Parity, day: Day, subgroup: Subgroup) -> DaySchedule<'_> {
    let Some(entries) = schedule.week(week).and_then(|w| w.day(day)) else {
        return DaySchedule::NotFound(NotFound::NoScheduleForDay);
    };

    let admitted = filter_for(entries, subgroup);
    if admitted.is_empty() {
        DaySchedule::NotFound(NotFound::NoClassesToday)
    } else {
        DaySchedule::Classes(admitted)
    }
}
