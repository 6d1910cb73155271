// src/model.rs
//! In-memory timetable model.
//!
//! Built once per run from the current document and thrown away afterwards:
//! `Schedule` → `WeekBlock` per parity → ordered `ClassEntry` list per `Day`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize, Serializer};

use crate::config::consts::ALL_SUBGROUPS_TEXT;
use crate::core::sanitize::normalize_apostrophes;

/* ---------------- Day ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Name as the portal prints it, lowercased.
    pub fn ukrainian(self) -> &'static str {
        match self {
            Day::Monday => "понеділок",
            Day::Tuesday => "вівторок",
            Day::Wednesday => "середа",
            Day::Thursday => "четвер",
            Day::Friday => "п'ятниця",
            Day::Saturday => "субота",
            Day::Sunday => "неділя",
        }
    }

    pub fn english(self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
        }
    }

    /// Match a day header. Case-insensitive, Ukrainian or English,
    /// any apostrophe flavour (`'`, `’`, `ʼ`).
    pub fn from_label(label: &str) -> Option<Day> {
        let key = normalize_apostrophes(label.trim()).to_lowercase();
        Day::ALL
            .into_iter()
            .find(|d| d.ukrainian() == key || d.english() == key)
    }
}

impl From<Weekday> for Day {
    fn from(w: Weekday) -> Self {
        match w {
            Weekday::Mon => Day::Monday,
            Weekday::Tue => Day::Tuesday,
            Weekday::Wed => Day::Wednesday,
            Weekday::Thu => Day::Thursday,
            Weekday::Fri => Day::Friday,
            Weekday::Sat => Day::Saturday,
            Weekday::Sun => Day::Sunday,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ukrainian())
    }
}

/* ---------------- Parity ---------------- */

/// Which of the two alternating week patterns ("тиждень 1" / "тиждень 2").
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "u8")]
pub enum Parity {
    First,
    Second,
}

impl Parity {
    pub fn number(self) -> u8 {
        match self {
            Parity::First => 1,
            Parity::Second => 2,
        }
    }

    pub fn opposite(self) -> Parity {
        match self {
            Parity::First => Parity::Second,
            Parity::Second => Parity::First,
        }
    }
}

impl TryFrom<u8> for Parity {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Parity::First),
            2 => Ok(Parity::Second),
            other => Err(format!("week parity must be 1 or 2, got {other}")),
        }
    }
}

impl FromStr for Parity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u8 = s.trim().parse().map_err(|_| format!("not a week number: {s:?}"))?;
        Parity::try_from(n)
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/* ---------------- Subgroup ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subgroup {
    /// Session shared by every subgroup.
    All,
    Group(u8),
}

impl Subgroup {
    /// Does an entry tagged `tag` belong in this subgroup's timetable?
    pub fn admits(self, tag: Subgroup) -> bool {
        tag == Subgroup::All || tag == self
    }
}

impl FromStr for Subgroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.eq_ignore_ascii_case("all") || t.to_lowercase() == ALL_SUBGROUPS_TEXT.to_lowercase() {
            return Ok(Subgroup::All);
        }
        match t.parse::<u8>() {
            Ok(n) if n > 0 => Ok(Subgroup::Group(n)),
            _ => Err(format!("not a subgroup: {s:?}")),
        }
    }
}

impl fmt::Display for Subgroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subgroup::All => f.write_str(ALL_SUBGROUPS_TEXT),
            Subgroup::Group(n) => write!(f, "{n}"),
        }
    }
}

impl Serialize for Subgroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/* ---------------- Entries ---------------- */

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassEntry {
    pub time: String,
    pub subject: String,
    pub subgroup: Subgroup,
    /// Only captured when the parser runs with details enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

impl ClassEntry {
    pub fn new(time: &str, subject: &str, subgroup: Subgroup) -> Self {
        Self {
            time: s!(time),
            subject: s!(subject),
            subgroup,
            teacher: None,
            room: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeekBlock {
    days: BTreeMap<Day, Vec<ClassEntry>>,
}

impl WeekBlock {
    /// Register a day column; it exists from now on even if nothing is pushed.
    pub fn add_day(&mut self, day: Day) {
        self.days.entry(day).or_default();
    }

    pub fn push(&mut self, day: Day, entry: ClassEntry) {
        self.days.entry(day).or_default().push(entry);
    }

    pub fn day(&self, day: Day) -> Option<&[ClassEntry]> {
        self.days.get(&day).map(Vec::as_slice)
    }

    pub fn days(&self) -> impl Iterator<Item = Day> + '_ {
        self.days.keys().copied()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schedule {
    weeks: BTreeMap<Parity, WeekBlock>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous block if the week was already present.
    pub fn insert_week(&mut self, week: Parity, block: WeekBlock) -> Option<WeekBlock> {
        self.weeks.insert(week, block)
    }

    pub fn week(&self, week: Parity) -> Option<&WeekBlock> {
        self.weeks.get(&week)
    }

    pub fn weeks(&self) -> impl Iterator<Item = (Parity, &WeekBlock)> {
        self.weeks.iter().map(|(p, b)| (*p, b))
    }
}
