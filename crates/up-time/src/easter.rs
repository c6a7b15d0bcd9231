//! Gregorian Easter Sunday.
//!
//! Every moveable holiday is an offset from Easter Sunday, so an error here
//! shifts all of them at once.  The integration tests check the result
//! against a published table.

use crate::date::Date;
use crate::year::Year;

/// Month and day of Easter Sunday in the Gregorian calendar.
///
/// Meeus/Jones/Butcher ("anonymous Gregorian") algorithm.  Valid for every
/// year from 1583 on; no upper bound.
pub fn easter_sunday_md(year: i32) -> (u8, u8) {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    // h: epact-derived days from March 21 to the paschal full moon
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    // l: days from the full moon to the following Sunday
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    ((n / 31) as u8, (n % 31 + 1) as u8)
}

/// Easter Sunday of `year`.
pub fn easter_sunday(year: Year) -> Date {
    let (month, day) = easter_sunday_md(year.get() as i32);
    Date::from_ymd_unchecked(year.get(), month, day)
}

/// Easter Sunday for any year the `Date` type can represent.
pub(crate) fn easter_sunday_in(year: u16) -> Date {
    let (month, day) = easter_sunday_md(year as i32);
    Date::from_ymd_unchecked(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    #[test]
    fn known_dates() {
        assert_eq!(easter_sunday_md(2024), (3, 31));
        assert_eq!(easter_sunday_md(2025), (4, 20));
        assert_eq!(easter_sunday_md(2000), (4, 23));
    }

    #[test]
    fn extremes() {
        // earliest and latest possible dates
        assert_eq!(easter_sunday_md(1818), (3, 22));
        assert_eq!(easter_sunday_md(2285), (3, 22));
        assert_eq!(easter_sunday_md(1943), (4, 25));
        assert_eq!(easter_sunday_md(2038), (4, 25));
    }

    #[test]
    fn first_gregorian_easter() {
        assert_eq!(easter_sunday_md(1583), (4, 10));
    }

    #[test]
    fn is_a_sunday() {
        let d = easter_sunday(Year::new(2026).unwrap());
        assert_eq!(d.to_string(), "2026-04-05");
        assert_eq!(d.weekday(), Weekday::Sunday);
    }
}
