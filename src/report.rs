// src/report.rs
//! What a run prints: the target line and the JSON answer.

use serde::{Serialize, Serializer};

use crate::calendar::Target;
use crate::model::ClassEntry;
use crate::resolve::{DaySchedule, NotFound};

/// Owned form of [`DaySchedule`], serialized as either a list of entries or the
/// "not found" message string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Classes(Vec<ClassEntry>),
    NotFound(NotFound),
}

impl From<DaySchedule<'_>> for Outcome {
    fn from(day: DaySchedule<'_>) -> Self {
        match day {
            DaySchedule::Classes(v) => Outcome::Classes(v.into_iter().cloned().collect()),
            DaySchedule::NotFound(r) => Outcome::NotFound(r),
        }
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outcome::Classes(v) => v.serialize(serializer),
            Outcome::NotFound(r) => serializer.serialize_str(r.message()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Answer {
    pub target: Target,
    pub outcome: Outcome,
}

impl Answer {
    /// `\t\t<day> //: <week>`
    pub fn header(&self) -> String {
        format!("\t\t{} //: {}", self.target.day, self.target.week)
    }

    /// Indented JSON, non-ASCII kept verbatim.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.outcome)
    }
}
