//! Colombia national-holiday calendar.
//!
//! Three rule families, all independent of any persisted data:
//!
//! * six fixed-date holidays,
//! * seven "Ley Emiliani" holidays (Ley 51 de 1983) that move to the next
//!   Monday unless the anchor date already falls on one,
//! * Holy Thursday and Good Friday, derived from Easter Sunday via Butcher's
//!   Gregorian computus.

use crate::date::Date;

/// The six fixed national holidays as (month, day, name).
const FIXED_HOLIDAYS: [(u8, u8, &str); 6] = [
    (1, 1, "New Year's Day"),
    (5, 1, "Labour Day"),
    (7, 20, "Independence Day"),
    (8, 7, "Battle of Boyacá"),
    (12, 8, "Immaculate Conception"),
    (12, 25, "Christmas Day"),
];

/// Anchor dates of the seven Ley Emiliani holidays as (month, day, name).
/// Each observance moves to the following Monday unless the anchor already
/// falls on a Monday.
const EMILIANI_HOLIDAYS: [(u8, u8, &str); 7] = [
    (1, 6, "Epiphany"),
    (3, 19, "Saint Joseph's Day"),
    (6, 29, "Saint Peter and Saint Paul"),
    (8, 15, "Assumption of the Virgin"),
    (10, 12, "Columbus Day"),
    (11, 1, "All Saints' Day"),
    (11, 11, "Independence of Cartagena"),
];

/// Colombia holiday rules.
///
/// Weekends and the holiday families above are observed.  Administratively
/// declared override days live in the
/// [`OverrideStore`](crate::overrides::OverrideStore), not here.
#[derive(Debug, Clone, Copy, Default)]
pub struct Colombia;

impl Colombia {
    /// Return `true` if `date` is a Saturday or Sunday.
    pub fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return the name of the fixed holiday falling on `date`, if any.
    pub fn fixed_holiday_name(&self, date: Date) -> Option<&'static str> {
        let (m, d) = (date.month(), date.day());
        FIXED_HOLIDAYS
            .iter()
            .find(|&&(fm, fd, _)| fm == m && fd == d)
            .map(|&(_, _, name)| name)
    }

    /// Return `true` if `date` is one of the six fixed national holidays.
    pub fn is_fixed_holiday(&self, date: Date) -> bool {
        self.fixed_holiday_name(date).is_some()
    }

    /// Return the seven Ley Emiliani observances of `year`, each on a Monday.
    pub fn moving_holidays_for_year(&self, year: u16) -> [Date; 7] {
        EMILIANI_HOLIDAYS
            .map(|(m, d, _)| next_monday_on_or_after(Date::from_ymd_unchecked(year, m, d)))
    }

    /// Return `true` if `date` is a Ley Emiliani observance.
    pub fn is_moving_holiday(&self, date: Date) -> bool {
        self.moving_holidays_for_year(date.year()).contains(&date)
    }

    /// Compute Easter Sunday of `year` using Butcher's Gregorian computus.
    pub fn easter_sunday(&self, year: u16) -> Date {
        let y = year as i32;
        let a = y % 19;
        let b = y / 100;
        let c = y % 100;
        let d = b / 4;
        let e = b % 4;
        let f = (b + 8) / 25;
        let g = (b - f + 1) / 3;
        let h = (19 * a + b - d - g + 15) % 30;
        let i = c / 4;
        let k = c % 4;
        let l = (32 + 2 * e + 2 * i - h - k) % 7;
        let m = (a + 11 * h + 22 * l) / 451;
        let month = (h + l - 7 * m + 114) / 31;
        let day = (h + l - 7 * m + 114) % 31 + 1;
        Date::from_ymd_unchecked(year, month as u8, day as u8)
    }

    /// Return (Holy Thursday, Good Friday) of `year` — Easter − 3 and
    /// Easter − 2 days.
    pub fn holy_week_for_year(&self, year: u16) -> (Date, Date) {
        let easter = self.easter_sunday(year);
        (easter - 3, easter - 2)
    }

    /// Return `true` if `date` is Holy Thursday or Good Friday.
    pub fn is_holy_week_holiday(&self, date: Date) -> bool {
        let (holy_thursday, good_friday) = self.holy_week_for_year(date.year());
        date == holy_thursday || date == good_friday
    }

    /// Return `true` if `date` is a rule holiday (fixed, moving, or Holy
    /// Week).  Weekends are not holidays in this sense.
    pub fn is_holiday(&self, date: Date) -> bool {
        self.is_fixed_holiday(date)
            || self.is_moving_holiday(date)
            || self.is_holy_week_holiday(date)
    }

    /// Return `true` if `date` is neither a weekend nor a rule holiday.
    ///
    /// This is the store-independent half of the business-day check; the
    /// [`BusinessDayCalculator`](crate::calculator::BusinessDayCalculator)
    /// layers the override store on top.
    pub fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Return the named rule holidays of `year` in calendar order.
    pub fn holidays_for_year(&self, year: u16) -> Vec<(Date, &'static str)> {
        let mut holidays: Vec<(Date, &'static str)> = FIXED_HOLIDAYS
            .iter()
            .map(|&(m, d, name)| (Date::from_ymd_unchecked(year, m, d), name))
            .collect();
        let moved = self.moving_holidays_for_year(year);
        for (&(_, _, name), date) in EMILIANI_HOLIDAYS.iter().zip(moved) {
            holidays.push((date, name));
        }
        let (holy_thursday, good_friday) = self.holy_week_for_year(year);
        holidays.push((holy_thursday, "Holy Thursday"));
        holidays.push((good_friday, "Good Friday"));
        holidays.sort_by_key(|&(date, _)| date);
        holidays
    }
}

/// Return `date` if it is a Monday, otherwise the next Monday after it.
fn next_monday_on_or_after(date: Date) -> Date {
    let days_to_monday = (8 - date.weekday().ordinal() as i32) % 7;
    date + days_to_monday
}
