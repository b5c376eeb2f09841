//! Golden-list tests for the Colombia holiday rules.

use plazo_time::{Colombia, Date};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Collect all non-weekend rule holidays in the inclusive range `[from, to]`.
fn holiday_list(cal: &Colombia, from: Date, to: Date) -> Vec<Date> {
    let mut holidays = Vec::new();
    let mut d = from;
    while d <= to {
        if cal.is_holiday(d) && !cal.is_weekend(d) {
            holidays.push(d);
        }
        d += 1;
    }
    holidays
}

/// Assert that the computed weekday-holiday list for a range matches
/// `expected` exactly, reporting any date that differs.
fn check_holidays(cal: &Colombia, from: Date, to: Date, expected: &[Date]) {
    let calculated = holiday_list(cal, from, to);
    let calc_set: std::collections::HashSet<_> = calculated.iter().copied().collect();
    let exp_set: std::collections::HashSet<_> = expected.iter().copied().collect();

    for &d in &calculated {
        assert!(
            exp_set.contains(&d),
            "{} calculated as holiday but not expected ({})",
            d,
            d.weekday()
        );
    }
    for &d in expected {
        assert!(
            calc_set.contains(&d),
            "{} expected as holiday but not found ({})",
            d,
            d.weekday()
        );
    }
}

#[test]
fn holidays_2024() {
    // Jul 20 falls on a Saturday and Dec 8 on a Sunday in 2024, so neither
    // appears in the weekday-only list.
    let expected: Vec<Date> = vec![
        date(2024, 1, 1),
        date(2024, 1, 8),   // Epiphany moved from Sat Jan 6
        date(2024, 3, 25),  // Saint Joseph moved from Tue Mar 19
        date(2024, 3, 28),  // Holy Thursday
        date(2024, 3, 29),  // Good Friday
        date(2024, 5, 1),
        date(2024, 7, 1),   // Saint Peter and Saint Paul moved from Sat Jun 29
        date(2024, 8, 7),
        date(2024, 8, 19),  // Assumption moved from Thu Aug 15
        date(2024, 10, 14), // Columbus Day moved from Sat Oct 12
        date(2024, 11, 4),  // All Saints moved from Fri Nov 1
        date(2024, 11, 11), // Independence of Cartagena, already a Monday
        date(2024, 12, 25),
    ];
    check_holidays(&Colombia, date(2024, 1, 1), date(2024, 12, 31), &expected);
}

#[test]
fn holidays_2025() {
    // Jul 20 falls on a Sunday in 2025.
    let expected: Vec<Date> = vec![
        date(2025, 1, 1),
        date(2025, 1, 6),   // Epiphany, already a Monday
        date(2025, 3, 24),  // Saint Joseph moved from Wed Mar 19
        date(2025, 4, 17),  // Holy Thursday
        date(2025, 4, 18),  // Good Friday
        date(2025, 5, 1),
        date(2025, 6, 30),  // Saint Peter and Saint Paul moved from Sun Jun 29
        date(2025, 8, 7),
        date(2025, 8, 18),  // Assumption moved from Fri Aug 15
        date(2025, 10, 13), // Columbus Day moved from Sun Oct 12
        date(2025, 11, 3),  // All Saints moved from Sat Nov 1
        date(2025, 11, 17), // Independence of Cartagena moved from Tue Nov 11
        date(2025, 12, 8),
        date(2025, 12, 25),
    ];
    check_holidays(&Colombia, date(2025, 1, 1), date(2025, 12, 31), &expected);
}

#[test]
fn fixed_holidays_every_year() {
    let cal = Colombia;
    for year in [1920u16, 1999, 2025, 2101] {
        for (m, d) in [(1, 1), (5, 1), (7, 20), (8, 7), (12, 8), (12, 25)] {
            assert!(
                cal.is_fixed_holiday(date(year, m, d)),
                "{year}-{m:02}-{d:02} should be a fixed holiday"
            );
        }
    }
}

#[test]
fn rule_families_are_recomputed_per_year() {
    // The same calendar instance answers for any year without carried state.
    let cal = Colombia;
    assert!(cal.is_moving_holiday(date(2024, 11, 11)));
    assert!(!cal.is_moving_holiday(date(2025, 11, 11)));
    assert!(cal.is_holy_week_holiday(date(2024, 3, 29)));
    assert!(!cal.is_holy_week_holiday(date(2025, 3, 29)));
}
