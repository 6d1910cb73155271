// src/runner.rs
//! One query, end to end:
//! offset check → fetch (or fall back to the snapshot) → promote snapshot → parse → resolve.

use std::path::Path;

use chrono::NaiveDate;

use crate::{
    config::AppOptions,
    core::{FetchError, Source},
    error::{Error, Result},
    report::{Answer, Outcome},
    resolve::resolve,
    specs::ScheduleParser,
    store::{Promotion, SnapshotStore},
    change::Comparison,
};

/// Diagnostic sink for recoverable events.
/// The CLI prints them; tests record them or pass `NullNotices`.
pub trait Notices {
    /// The source could not be fetched; the run continues from `fallback`.
    fn fetch_failed(&mut self, _err: &FetchError, _fallback: &Path) {}

    /// The freshly fetched document differs from the previous snapshot.
    /// Called before promotion: `previous` still holds the old document.
    fn schedule_changed(&mut self, _previous: &Path, _source: &str) {}
}

/// A no-op sink you can pass when you don't care.
pub struct NullNotices;
impl Notices for NullNotices {}

enum Obtained {
    Fresh(String),
    Fallback(String),
}

/// Parse the positional day offset. Absent means today.
pub fn parse_offset(arg: Option<&str>) -> Result<Option<i64>> {
    arg.map(|a| a.trim().parse::<i64>().map_err(|_| Error::InvalidOffset(s!(a))))
        .transpose()
}

pub fn run(
    opts: &AppOptions,
    source: &dyn Source,
    today: NaiveDate,
    offset_arg: Option<&str>,
    notices: &mut dyn Notices,
) -> Result<Answer> {
    // Bad input is reported before any I/O
    let offset = parse_offset(offset_arg)?;
    opts.validate()?;
    let target = opts
        .schedule
        .calculator()
        .resolve(today, offset)
        .ok_or_else(|| Error::InvalidOffset(offset_arg.map(String::from).unwrap_or_default()))?;
    logf!("Query: {} -> {} ({}), week {}", today, target.date, target.day, target.week);

    let store = SnapshotStore::from_options(&opts.store);
    let doc = match obtain(source, &store, notices)? {
        Obtained::Fresh(doc) => {
            store.write_current(&doc)?;
            if store.pending()? == Promotion::Compared(Comparison::Changed) {
                logf!("Schedule changed at {}", source.location());
                notices.schedule_changed(store.previous_path(), source.location());
            }
            store.promote()?;
            doc
        }
        // Nothing new was obtained, so nothing is promoted
        Obtained::Fallback(doc) => doc,
    };

    let schedule = ScheduleParser::new(opts.schedule.parse_options()).parse(&doc)?;
    let outcome = Outcome::from(resolve(&schedule, target.week, target.day, opts.schedule.subgroup()));
    Ok(Answer { target, outcome })
}

fn obtain(source: &dyn Source, store: &SnapshotStore, notices: &mut dyn Notices) -> Result<Obtained> {
    match source.fetch() {
        Ok(doc) => Ok(Obtained::Fresh(doc)),
        Err(err) => {
            logw!("Fetch failed: {err}");
            match store.read_previous()? {
                Some(doc) => {
                    notices.fetch_failed(&err, store.previous_path());
                    Ok(Obtained::Fallback(doc))
                }
                None => {
                    loge!("No snapshot at {}", store.previous_path().display());
                    Err(Error::NoFallback { path: store.previous_path().to_path_buf(), source: err })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_parse_like_integers() {
        assert_eq!(parse_offset(None).unwrap(), None);
        assert_eq!(parse_offset(Some("3")).unwrap(), Some(3));
        assert_eq!(parse_offset(Some("-2")).unwrap(), Some(-2));
        assert_eq!(parse_offset(Some("+1")).unwrap(), Some(1));
        assert!(matches!(parse_offset(Some("abc")), Err(Error::InvalidOffset(s)) if s == "abc"));
        assert!(matches!(parse_offset(Some("1.5")), Err(Error::InvalidOffset(_))));
    }
}
