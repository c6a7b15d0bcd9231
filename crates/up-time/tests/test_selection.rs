//! Range selection and working-day classification across states.

use up_time::{
    classify, expand_range, Calendar, Date, DayKind, Jurisdiction, Selection, StateCalendar,
    WeekendsOnly, Year,
};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── expand_range ────────────────────────────────────────────────────────────

#[test]
fn plain_working_week() {
    // Mon 2025-06-02 .. Fri 2025-06-06, no holiday that week in Berlin
    let s = expand_range(date(2025, 6, 2), date(2025, 6, 6), Jurisdiction::Berlin);
    let expected: Vec<Date> = (2..=6).map(|d| date(2025, 6, d)).collect();
    assert_eq!(s.dates(), expected.as_slice());
}

#[test]
fn spanning_a_weekend() {
    // Thu 2025-06-05 .. Wed 2025-06-11 in Hamburg: Whit Monday (9th) and the
    // weekend drop out
    let s = expand_range(date(2025, 6, 11), date(2025, 6, 5), Jurisdiction::Hamburg);
    let got: Vec<String> = s.iter().map(|d| d.to_string()).collect();
    assert_eq!(got, ["2025-06-05", "2025-06-06", "2025-06-10", "2025-06-11"]);
}

#[test]
fn corpus_christi_only_where_observed() {
    let a = date(2025, 6, 16);
    let b = date(2025, 6, 20);
    let by = expand_range(a, b, Jurisdiction::Bayern);
    let be = expand_range(a, b, Jurisdiction::Berlin);
    assert_eq!(by.len(), 4);
    assert_eq!(be.len(), 5);
    assert!(!by.contains(date(2025, 6, 19)));
    assert!(be.contains(date(2025, 6, 19)));
}

#[test]
fn half_holidays_are_not_editable() {
    // 2025-12-22 (Mon) .. 2026-01-02 (Fri)
    let s = expand_range(date(2025, 12, 22), date(2026, 1, 2), Jurisdiction::Bayern);
    let got: Vec<String> = s.into_iter().map(|d| d.to_string()).collect();
    assert_eq!(
        got,
        ["2025-12-22", "2025-12-23", "2025-12-29", "2025-12-30", "2026-01-02"]
    );
}

#[test]
fn single_working_day() {
    let d = date(2025, 6, 3);
    let s = expand_range(d, d, Jurisdiction::Bremen);
    assert_eq!(s.first(), Some(d));
    assert_eq!(s.last(), Some(d));
}

#[test]
fn single_weekend_day_is_empty() {
    let d = date(2025, 6, 7);
    assert!(expand_range(d, d, Jurisdiction::Bremen).is_empty());
}

#[test]
fn generic_over_calendar() {
    let a = date(2025, 12, 22);
    let b = date(2025, 12, 26);
    assert_eq!(Selection::between(&WeekendsOnly, a, b).len(), 5);
    assert_eq!(
        Selection::between(&StateCalendar::new(Jurisdiction::Hessen), a, b).len(),
        2
    );
}

#[test]
fn whole_year_matches_workday_count() {
    let y = Year::new(2025).unwrap();
    for j in Jurisdiction::ALL {
        let cal = StateCalendar::new(j);
        let s = expand_range(y.first_day(), y.last_day(), j);
        assert_eq!(
            s.len() as u32,
            cal.workdays_between(y.first_day(), y.last_day()),
            "{j}"
        );
        assert!(s.iter().all(|d| classify(d, j) == DayKind::Workday));
    }
}

// ─── classify ────────────────────────────────────────────────────────────────

#[test]
fn classify_kinds() {
    let j = Jurisdiction::NordrheinWestfalen;
    assert_eq!(classify(date(2025, 11, 1), j), DayKind::Weekend); // Saturday
    assert_eq!(classify(date(2024, 11, 1), j), DayKind::HolidayFull); // Friday
    assert_eq!(classify(date(2024, 12, 31), j), DayKind::HolidayHalf);
    assert_eq!(classify(date(2024, 10, 31), j), DayKind::Workday);
    assert_eq!(classify(date(2024, 10, 31), Jurisdiction::Niedersachsen), DayKind::HolidayFull);
}
