// src/specs/schedule.rs
//! Scraping *spec* for the group timetable page.
//!
//! Page layout (one block per week parity):
//! ```text
//! <div class="wrapper">
//!   <h2>Тиждень 1</h2>
//!   <table>
//!     <tr><th></th><th class="day-name">Понеділок</th> …</tr>
//!     <tr><th class="hour-name"><div class="name">1 пара</div><div class="full-name">08:00 - 09:35</div></th>
//!         <td><div class="pair"><div class="subject">…</div><div class="subgroup">Підгрупа 1</div>
//!             <div class="teacher">…</div><div class="room">…</div></div></td> …</tr>
//! ```
//!
//! Strictness:
//! - Missing week containers, titles, day headers, time-slot rows or time labels make the
//!   page malformed; we refuse to guess a partial timetable.
//! - A `div.pair` without a (non-empty) subject is an empty slot and is skipped.
//! - Subgroup, teacher and room are optional; subgroup defaults to "all".
//! - A pair whose subgroup label doesn't end in a subgroup number is logged and skipped;
//!   no numeric subgroup query could ever select it.

use std::sync::LazyLock;
use std::time::Instant;

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::config::consts::{NO_ROOM_TEXT, UNKNOWN_TEACHER_TEXT};
use crate::core::html::{first_text, selector, text_of};
use crate::core::sanitize::last_token;
use crate::model::{ClassEntry, Day, Parity, Schedule, Subgroup, WeekBlock};

static WEEK: LazyLock<Selector> = LazyLock::new(|| selector("div.wrapper"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("h2"));
static DAY_NAME: LazyLock<Selector> = LazyLock::new(|| selector("th.day-name"));
static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
static HOUR: LazyLock<Selector> = LazyLock::new(|| selector("th.hour-name"));
static FULL_NAME: LazyLock<Selector> = LazyLock::new(|| selector("div.full-name"));
static CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static PAIR: LazyLock<Selector> = LazyLock::new(|| selector("div.pair"));
static SUBJECT: LazyLock<Selector> = LazyLock::new(|| selector("div.subject"));
static SUBGROUP: LazyLock<Selector> = LazyLock::new(|| selector("div.subgroup"));
static TEACHER: LazyLock<Selector> = LazyLock::new(|| selector("div.teacher"));
static ROOM: LazyLock<Selector> = LazyLock::new(|| selector("div.room"));

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no week containers (div.wrapper) in document")]
    NoWeeks,

    #[error("week container #{index} has no title")]
    MissingWeekTitle { index: usize },

    #[error("week title {title:?} does not end in week number 1 or 2")]
    BadWeekTitle { title: String },

    #[error("week {week} appears more than once")]
    DuplicateWeek { week: Parity },

    #[error("week {week} has no day headers")]
    NoDayHeaders { week: Parity },

    #[error("week {week}: unknown day header {label:?}")]
    UnknownDay { week: Parity, label: String },

    #[error("week {week} has no time-slot rows")]
    NoTimeSlots { week: Parity },

    #[error("week {week}: time-slot header without a label")]
    MissingTimeLabel { week: Parity },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Capture teacher and room on every entry.
    pub include_details: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ScheduleParser {
    options: ParseOptions,
}

impl ScheduleParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn parse(&self, doc: &str) -> Result<Schedule, ParseError> {
        let t = Instant::now();
        let html = Html::parse_document(doc);
        let mut schedule = Schedule::new();
        let mut found = false;

        for (index, week_el) in html.select(&WEEK).enumerate() {
            found = true;
            let (week, block) = self.parse_week(week_el, index)?;
            if schedule.insert_week(week, block).is_some() {
                return Err(ParseError::DuplicateWeek { week });
            }
        }
        if !found {
            return Err(ParseError::NoWeeks);
        }

        logd!("Parse schedule ({} bytes) in {:?}", doc.len(), t.elapsed());
        Ok(schedule)
    }

    fn parse_week(&self, week_el: ElementRef<'_>, index: usize) -> Result<(Parity, WeekBlock), ParseError> {
        let title = first_text(week_el, &TITLE).ok_or(ParseError::MissingWeekTitle { index })?;
        let week = last_token(&title)
            .and_then(|t| t.parse::<Parity>().ok())
            .ok_or_else(|| ParseError::BadWeekTitle { title: title.clone() })?;

        // Day columns, in header order
        let mut days = Vec::new();
        for th in week_el.select(&DAY_NAME) {
            let label = text_of(th);
            let day = Day::from_label(&label).ok_or(ParseError::UnknownDay { week, label })?;
            days.push(day);
        }
        if days.is_empty() {
            return Err(ParseError::NoDayHeaders { week });
        }

        let mut block = WeekBlock::default();
        for &day in &days {
            block.add_day(day);
        }

        // First row is the day header row
        let mut slots = 0usize;
        for row in week_el.select(&ROW).skip(1) {
            let Some(hour) = row.select(&HOUR).next() else { continue };
            let time = first_text(hour, &FULL_NAME).ok_or(ParseError::MissingTimeLabel { week })?;
            slots += 1;

            for (i, cell) in row.select(&CELL).enumerate() {
                // Surplus cells have no day column
                let Some(&day) = days.get(i) else { continue };
                for pair in cell.select(&PAIR) {
                    if let Some(entry) = self.parse_pair(pair, &time, week) {
                        block.push(day, entry);
                    }
                }
            }
        }
        if slots == 0 {
            return Err(ParseError::NoTimeSlots { week });
        }

        Ok((week, block))
    }

    fn parse_pair(&self, pair: ElementRef<'_>, time: &str, week: Parity) -> Option<ClassEntry> {
        let subject = match first_text(pair, &SUBJECT) {
            Some(s) if !s.is_empty() => s,
            _ => return None, // empty slot
        };

        let subgroup = match first_text(pair, &SUBGROUP) {
            Some(label) => match parse_subgroup_label(&label) {
                Some(sg) => sg,
                None => {
                    logw!("Week {week}: skipping {subject:?} at {time}, subgroup label {label:?}");
                    return None;
                }
            },
            None => Subgroup::All,
        };

        let mut entry = ClassEntry::new(time, &subject, subgroup);
        if self.options.include_details {
            entry.teacher = Some(non_empty_or(first_text(pair, &TEACHER), UNKNOWN_TEACHER_TEXT));
            entry.room = Some(non_empty_or(first_text(pair, &ROOM), NO_ROOM_TEXT));
        }
        Some(entry)
    }
}

/// "Підгрупа 2" → Group(2); blank label → All.
fn parse_subgroup_label(label: &str) -> Option<Subgroup> {
    let Some(tok) = last_token(label) else {
        return Some(Subgroup::All);
    };
    tok.trim_matches(|c: char| !c.is_alphanumeric()).parse().ok()
}

fn non_empty_or(text: Option<String>, fallback: &str) -> String {
    text.filter(|t| !t.is_empty()).unwrap_or_else(|| s!(fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week_html(title: &str, days: &[&str], rows: &[(&str, Vec<&str>)]) -> String {
        let mut out = join!("<div class=\"wrapper\"><h2>", title, "</h2><table><tr><th></th>");
        for d in days {
            out.push_str(&format!("<th class=\"day-name\">{d}</th>"));
        }
        out.push_str("</tr>");
        for (time, cells) in rows {
            out.push_str(&format!(
                "<tr><th class=\"hour-name\"><div class=\"name\">пара</div><div class=\"full-name\">{time}</div></th>"
            ));
            for c in cells.iter() {
                out.push_str(&format!("<td>{c}</td>"));
            }
            out.push_str("</tr>");
        }
        out.push_str("</table></div>");
        out
    }

    fn doc(weeks: &[String]) -> String {
        join!("<html><body>", &weeks.concat(), "</body></html>")
    }

    const MATH_1: &str = r#"<div class="pair"><div class="subject">Math</div><div class="subgroup">Підгрупа 1</div><div class="teacher">Іваненко І.І.</div><div class="room">1.101</div></div>"#;
    const LAB_2: &str = r#"<div class="pair"><div class="subject">Math-lab</div><div class="subgroup">Підгрупа 2</div></div>"#;
    const SHARED: &str = r#"<div class="pair"><div class="subject">Physics</div></div>"#;

    #[test]
    fn parses_week_days_and_entries_in_order() {
        let both = join!(MATH_1, LAB_2);
        let html = doc(&[week_html(
            "Тиждень 1",
            &["Понеділок", "Вівторок"],
            &[
                ("9:00", vec![both.as_str(), SHARED]),
                ("10:40", vec![SHARED, ""]),
            ],
        )]);
        let schedule = ScheduleParser::default().parse(&html).unwrap();
        let week = schedule.week(Parity::First).unwrap();

        let monday = week.day(Day::Monday).unwrap();
        assert_eq!(monday.len(), 3);
        assert_eq!(monday[0], ClassEntry::new("9:00", "Math", Subgroup::Group(1)));
        assert_eq!(monday[1], ClassEntry::new("9:00", "Math-lab", Subgroup::Group(2)));
        assert_eq!(monday[2], ClassEntry::new("10:40", "Physics", Subgroup::All));

        let tuesday = week.day(Day::Tuesday).unwrap();
        assert_eq!(tuesday, &[ClassEntry::new("9:00", "Physics", Subgroup::All)]);
        assert!(schedule.week(Parity::Second).is_none());
    }

    #[test]
    fn pairs_without_subject_are_skipped() {
        let empty = r#"<div class="pair"><div class="subgroup">Підгрупа 1</div></div><div class="pair"><div class="subject"> </div></div>"#;
        let html = doc(&[week_html("Тиждень 2", &["Середа"], &[("8:00", vec![empty])])]);
        let schedule = ScheduleParser::default().parse(&html).unwrap();
        let wed = schedule.week(Parity::Second).unwrap().day(Day::Wednesday).unwrap();
        assert!(wed.is_empty());
    }

    #[test]
    fn details_are_opt_in() {
        let both = join!(MATH_1, LAB_2);
        let html = doc(&[week_html("Тиждень 1", &["Понеділок"], &[("9:00", vec![both.as_str()])])]);

        let bare = ScheduleParser::default().parse(&html).unwrap();
        let e = &bare.week(Parity::First).unwrap().day(Day::Monday).unwrap()[0];
        assert_eq!(e.teacher, None);
        assert_eq!(e.room, None);

        let detailed = ScheduleParser::new(ParseOptions { include_details: true }).parse(&html).unwrap();
        let day = detailed.week(Parity::First).unwrap().day(Day::Monday).unwrap();
        assert_eq!(day[0].teacher.as_deref(), Some("Іваненко І.І."));
        assert_eq!(day[0].room.as_deref(), Some("1.101"));
        assert_eq!(day[1].teacher.as_deref(), Some(UNKNOWN_TEACHER_TEXT));
        assert_eq!(day[1].room.as_deref(), Some(NO_ROOM_TEXT));
    }

    #[test]
    fn surplus_cells_are_ignored() {
        let html = doc(&[week_html("Тиждень 1", &["Понеділок"], &[("9:00", vec![SHARED, SHARED])])]);
        let schedule = ScheduleParser::default().parse(&html).unwrap();
        let week = schedule.week(Parity::First).unwrap();
        assert_eq!(week.days().collect::<Vec<_>>(), vec![Day::Monday]);
        assert_eq!(week.day(Day::Monday).unwrap().len(), 1);
    }

    #[test]
    fn subgroup_label_variants() {
        assert_eq!(parse_subgroup_label("Підгрупа 2"), Some(Subgroup::Group(2)));
        assert_eq!(parse_subgroup_label("(1)"), Some(Subgroup::Group(1)));
        assert_eq!(parse_subgroup_label(""), Some(Subgroup::All));
        assert_eq!(parse_subgroup_label("Обидві"), Some(Subgroup::All));
        assert_eq!(parse_subgroup_label("Підгрупа перша"), None);
    }

    #[test]
    fn missing_markers_are_malformed() {
        let p = ScheduleParser::default();

        assert_eq!(p.parse("<html><body><p>maintenance</p></body></html>"), Err(ParseError::NoWeeks));

        let no_title = r#"<div class="wrapper"><table><tr><th class="day-name">Понеділок</th></tr></table></div>"#;
        assert_eq!(p.parse(no_title), Err(ParseError::MissingWeekTitle { index: 0 }));

        let bad_title = doc(&[week_html("Тиждень 3", &["Понеділок"], &[("9:00", vec![SHARED])])]);
        assert!(matches!(p.parse(&bad_title), Err(ParseError::BadWeekTitle { .. })));

        let no_days = doc(&[week_html("Тиждень 1", &[], &[("9:00", vec![SHARED])])]);
        assert_eq!(p.parse(&no_days), Err(ParseError::NoDayHeaders { week: Parity::First }));

        let no_rows = doc(&[week_html("Тиждень 1", &["Понеділок"], &[])]);
        assert_eq!(p.parse(&no_rows), Err(ParseError::NoTimeSlots { week: Parity::First }));

        let bad_day = doc(&[week_html("Тиждень 1", &["Funday"], &[("9:00", vec![SHARED])])]);
        assert!(matches!(p.parse(&bad_day), Err(ParseError::UnknownDay { .. })));

        let twice = doc(&[
            week_html("Тиждень 1", &["Понеділок"], &[("9:00", vec![SHARED])]),
            week_html("Тиждень 1", &["Вівторок"], &[("9:00", vec![SHARED])]),
        ]);
        assert_eq!(p.parse(&twice), Err(ParseError::DuplicateWeek { week: Parity::First }));
    }

    #[test]
    fn time_slot_without_label_is_malformed() {
        let html = r#"<div class="wrapper"><h2>Тиждень 1</h2><table>
            <tr><th></th><th class="day-name">Понеділок</th></tr>
            <tr><th class="hour-name"><div class="name">1 пара</div></th><td></td></tr>
        </table></div>"#;
        assert_eq!(
            ScheduleParser::default().parse(html),
            Err(ParseError::MissingTimeLabel { week: Parity::First })
        );
    }

    #[test]
    fn odd_subgroup_label_skips_only_that_pair() {
        let odd = r#"<div class="pair"><div class="subject">Math</div><div class="subgroup">1 підгр.</div></div>"#;
        let html = doc(&[week_html(
            "Тиждень 1",
            &["Понеділок", "Вівторок"],
            &[("9:00", vec![SHARED, odd]), ("10:40", vec!["", LAB_2])],
        )]);
        let schedule = ScheduleParser::default().parse(&html).unwrap();
        let week = schedule.week(Parity::First).unwrap();

        assert_eq!(week.day(Day::Monday).unwrap(), &[ClassEntry::new("9:00", "Physics", Subgroup::All)]);
        assert_eq!(
            week.day(Day::Tuesday).unwrap(),
            &[ClassEntry::new("10:40", "Math-lab", Subgroup::Group(2))]
        );
    }
}
