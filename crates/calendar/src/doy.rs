//! Day-of-year newtype for the Gregorian calendar.

use chrono::{Datelike, NaiveDate};

/// Day-of-year ("Julian day") in the Gregorian calendar (1..=366).
///
/// January 1 is day 1. December 31 is day 365, or 366 in leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Doy(u16);

impl Doy {
    /// Day-of-year of a calendar date. Infallible: chrono dates are always valid.
    pub fn from_date(date: NaiveDate) -> Self {
        // ordinal() is 1..=366 by construction
        Self(date.ordinal() as u16)
    }

    /// Returns the inner day-of-year value (1..=366).
    pub fn get(self) -> u16 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn from_date_jan_first() {
        assert_eq!(Doy::from_date(date(1990, 1, 1)).get(), 1);
    }

    #[test]
    fn from_date_leap_year_shifts_march() {
        assert_eq!(Doy::from_date(date(2000, 3, 1)).get(), 61);
        assert_eq!(Doy::from_date(date(2001, 3, 1)).get(), 60);
    }

    #[test]
    fn from_date_dec_31() {
        assert_eq!(Doy::from_date(date(2000, 12, 31)).get(), 366);
        assert_eq!(Doy::from_date(date(1999, 12, 31)).get(), 365);
    }

    #[test]
    fn ord_follows_calendar() {
        assert!(Doy::from_date(date(2000, 1, 1)) < Doy::from_date(date(2000, 12, 31)));
    }
}
