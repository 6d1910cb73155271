// tests/scenarios.rs
//
// Parser + resolver against the captured-style fixture page.
//
use kai_week::model::{ClassEntry, Day, Parity, Subgroup};
use kai_week::resolve::{resolve, DaySchedule, NotFound};
use kai_week::specs::{ParseOptions, ScheduleParser};

const FIXTURE: &str = include_str!("fixtures/schedule.html");

fn subjects(day: DaySchedule<'_>) -> Vec<String> {
    match day {
        DaySchedule::Classes(v) => v.iter().map(|e| e.subject.clone()).collect(),
        DaySchedule::NotFound(r) => panic!("expected classes, got {r:?}"),
    }
}

#[test]
fn fixture_parses_both_weeks() {
    let s = ScheduleParser::default().parse(FIXTURE).unwrap();

    let w1 = s.week(Parity::First).unwrap();
    assert_eq!(w1.days().collect::<Vec<_>>(), vec![Day::Monday, Day::Wednesday, Day::Friday]);
    let w2 = s.week(Parity::Second).unwrap();
    assert_eq!(w2.days().collect::<Vec<_>>(), vec![Day::Monday, Day::Tuesday]);

    let monday = w1.day(Day::Monday).unwrap();
    assert_eq!(monday[0], ClassEntry::new("9:00", "Math", Subgroup::Group(1)));
    assert_eq!(monday[1], ClassEntry::new("9:00", "Math-lab", Subgroup::Group(2)));
    assert_eq!(monday[2], ClassEntry::new("10:40", "Philosophy", Subgroup::All));

    // placeholder pair without subject is dropped
    assert!(w1.day(Day::Friday).unwrap().is_empty());
}

#[test]
fn subgroup_two_monday_gets_lab_and_shared_lecture() {
    let s = ScheduleParser::default().parse(FIXTURE).unwrap();
    let got = subjects(resolve(&s, Parity::First, Day::Monday, Subgroup::Group(2)));
    assert_eq!(got, ["Math-lab", "Philosophy"]);
}

#[test]
fn missing_tuesday_is_no_schedule() {
    let s = ScheduleParser::default().parse(FIXTURE).unwrap();
    assert_eq!(
        resolve(&s, Parity::First, Day::Tuesday, Subgroup::Group(1)),
        DaySchedule::NotFound(NotFound::NoScheduleForDay)
    );
}

#[test]
fn wednesday_for_other_subgroup_is_no_classes() {
    let s = ScheduleParser::default().parse(FIXTURE).unwrap();
    assert_eq!(
        resolve(&s, Parity::First, Day::Wednesday, Subgroup::Group(2)),
        DaySchedule::NotFound(NotFound::NoClassesToday)
    );
    let got = subjects(resolve(&s, Parity::First, Day::Wednesday, Subgroup::Group(1)));
    assert_eq!(got, ["Chemistry", "Chemistry lab"]);
}

#[test]
fn week_two_tuesday_is_time_ordered() {
    let s = ScheduleParser::default().parse(FIXTURE).unwrap();
    let DaySchedule::Classes(v) = resolve(&s, Parity::Second, Day::Tuesday, Subgroup::Group(1)) else {
        panic!("expected classes");
    };
    assert_eq!(v.len(), 1);
    assert_eq!(v[0].time, "10:40");
}

#[test]
fn details_toggle_changes_only_teacher_and_room() {
    let bare = ScheduleParser::default().parse(FIXTURE).unwrap();
    let rich = ScheduleParser::new(ParseOptions { include_details: true }).parse(FIXTURE).unwrap();

    let b = &bare.week(Parity::First).unwrap().day(Day::Monday).unwrap()[0];
    let r = &rich.week(Parity::First).unwrap().day(Day::Monday).unwrap()[0];
    assert_eq!((b.teacher.as_deref(), b.room.as_deref()), (None, None));
    assert_eq!(r.teacher.as_deref(), Some("Петренко О.В."));
    assert_eq!(r.room.as_deref(), Some("11.203"));
    assert_eq!((&b.time, &b.subject, b.subgroup), (&r.time, &r.subject, r.subgroup));

    let wed = &rich.week(Parity::First).unwrap().day(Day::Wednesday).unwrap()[0];
    assert_eq!(wed.teacher.as_deref(), Some("Невідомий викладач"));
    assert_eq!(wed.room.as_deref(), Some("2.105"));
}
