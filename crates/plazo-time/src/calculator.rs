//! Business-day arithmetic over the Colombia calendar plus an override store.
//!
//! The calculator is the single source of truth for "is this a working day":
//! deadline assignment (`add_business_days`) and the "days remaining" display
//! (`count_business_days_between`) are both derived from that one check.

use crate::colombia::Colombia;
use crate::date::Date;
use crate::overrides::OverrideStore;
use crate::weekday::Weekday;
use plazo_core::ensure;
use plazo_core::errors::Result;
use std::collections::HashSet;

/// Statutory number of business days to respond to a petition.
pub const STATUTORY_RESPONSE_DAYS: i32 = 15;

/// Why a date is not a business day.
///
/// When several conditions hold at once (a fixed holiday falling on a
/// Saturday, say) only the highest-precedence one is reported: weekend, then
/// fixed holiday, then Holy Week, then moving holiday, then override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NonBusinessReason {
    /// Saturday or Sunday.
    Weekend(Weekday),
    /// One of the six fixed national holidays, by name.
    FixedHoliday(&'static str),
    /// Holy Thursday (Easter − 3 days).
    HolyThursday,
    /// Good Friday (Easter − 2 days).
    GoodFriday,
    /// A Ley Emiliani Monday observance.
    MovingHoliday,
    /// An administratively declared non-working day, with its description.
    Override(String),
}

impl std::fmt::Display for NonBusinessReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NonBusinessReason::Weekend(day) => write!(f, "{day} (Weekend)"),
            NonBusinessReason::FixedHoliday(name) => write!(f, "{name}"),
            NonBusinessReason::HolyThursday => write!(f, "Holy Thursday"),
            NonBusinessReason::GoodFriday => write!(f, "Good Friday"),
            NonBusinessReason::MovingHoliday => write!(f, "Public holiday (Ley Emiliani)"),
            NonBusinessReason::Override(description) => write!(f, "{description}"),
        }
    }
}

/// Business-day calculator for the Colombia calendar.
///
/// The override store is injected at construction; the calculator never
/// writes to it and keeps no state of its own, so a shared instance may be
/// used from any number of threads.
#[derive(Debug)]
pub struct BusinessDayCalculator<S: OverrideStore> {
    calendar: Colombia,
    store: S,
}

impl<S: OverrideStore> BusinessDayCalculator<S> {
    /// Create a calculator backed by `store`.
    pub fn new(store: S) -> Self {
        Self {
            calendar: Colombia,
            store,
        }
    }

    /// Return `true` if `date` is a working day: not a weekend, not a rule
    /// holiday, and not covered by an active override.
    pub fn is_business_day(&self, date: Date) -> Result<bool> {
        if !self.calendar.is_business_day(date) {
            return Ok(false);
        }
        Ok(!self.store.has_active_override(date)?)
    }

    /// Return the date `n` business days after `start`.
    ///
    /// `start` itself never counts, even when it is a business day: the walk
    /// begins at `start + 1`.  `n == 0` returns `start` unchanged without
    /// walking, and `n < 0` is rejected.
    pub fn add_business_days(&self, start: Date, n: i32) -> Result<Date> {
        ensure!(n >= 0, "business-day offset must be non-negative, got {n}");
        if n == 0 {
            return Ok(start);
        }
        let mut date = start;
        let mut counted = 0;
        while counted < n {
            date = date.add_days(1)?;
            if self.is_business_day(date)? {
                counted += 1;
            }
        }
        Ok(date)
    }

    /// Count business days strictly after `start` and up to and including
    /// `end`.
    ///
    /// A reversed or empty range returns 0 rather than an error, so callers
    /// can display "days remaining" for deadlines already in the past.
    pub fn count_business_days_between(&self, start: Date, end: Date) -> Result<i32> {
        if end <= start {
            return Ok(0);
        }
        // One range read instead of one store read per day visited.
        let overridden: HashSet<i32> = self
            .store
            .active_overrides_between(start + 1, end)?
            .into_iter()
            .map(|o| o.date.serial())
            .collect();
        let mut count = 0;
        let mut d = start + 1;
        while d <= end {
            if self.calendar.is_business_day(d) && !overridden.contains(&d.serial()) {
                count += 1;
            }
            if d == end {
                break;
            }
            d += 1;
        }
        Ok(count)
    }

    /// Explain why `date` is not a business day, or `None` if it is one.
    pub fn classify(&self, date: Date) -> Result<Option<NonBusinessReason>> {
        let weekday = date.weekday();
        if weekday.is_weekend() {
            return Ok(Some(NonBusinessReason::Weekend(weekday)));
        }
        if let Some(name) = self.calendar.fixed_holiday_name(date) {
            return Ok(Some(NonBusinessReason::FixedHoliday(name)));
        }
        let (holy_thursday, good_friday) = self.calendar.holy_week_for_year(date.year());
        if date == holy_thursday {
            return Ok(Some(NonBusinessReason::HolyThursday));
        }
        if date == good_friday {
            return Ok(Some(NonBusinessReason::GoodFriday));
        }
        if self.calendar.is_moving_holiday(date) {
            return Ok(Some(NonBusinessReason::MovingHoliday));
        }
        if let Some(entry) = self.store.active_override(date)? {
            return Ok(Some(NonBusinessReason::Override(entry.description)));
        }
        Ok(None)
    }

    /// Human-readable reason a date is not a business day, or
    /// `"Business day"` when it is one.
    pub fn describe_non_business_day(&self, date: Date) -> Result<String> {
        Ok(match self.classify(date)? {
            Some(reason) => reason.to_string(),
            None => "Business day".to_string(),
        })
    }

    /// Statutory response deadline for a petition received on `intake`:
    /// [`STATUTORY_RESPONSE_DAYS`] business days after it.
    pub fn response_deadline(&self, intake: Date) -> Result<Date> {
        self.add_business_days(intake, STATUTORY_RESPONSE_DAYS)
    }

    /// Business days left between `today` and `due`; 0 once the deadline has
    /// passed.
    pub fn business_days_remaining(&self, today: Date, due: Date) -> Result<i32> {
        self.count_business_days_between(today, due)
    }
}
