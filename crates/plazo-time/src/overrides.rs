//! Administratively declared non-working days.
//!
//! Override days are owned by an external administrative workflow (creation,
//! soft deletion, bulk seeding); the calendar engine only ever reads them.
//! The [`OverrideStore`] trait is the seam between the pure calendar logic
//! and whatever persistence backs it.

use crate::date::Date;
use plazo_core::errors::Result;
use std::collections::HashMap;

/// An ad hoc non-working day not derivable from the holiday rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonBusinessDayOverride {
    /// The day declared non-working.  Unique per store.
    pub date: Date,
    /// Human-readable reason, shown verbatim by
    /// [`describe_non_business_day`](crate::calculator::BusinessDayCalculator::describe_non_business_day).
    pub description: String,
    /// Whether the day was also declared a national holiday.  Informational
    /// only; it has no effect on any calculation.
    pub declared_national_holiday: bool,
    /// Soft-delete flag.  Inactive overrides are invisible to every query.
    pub active: bool,
}

impl NonBusinessDayOverride {
    /// Create an active override for `date`.
    pub fn new(date: Date, description: impl Into<String>) -> Self {
        Self {
            date,
            description: description.into(),
            declared_national_holiday: false,
            active: true,
        }
    }
}

/// Read access to the override table.
///
/// Implementations must surface only overrides with `active == true`, and
/// must report lookup failures as [`Error::StoreUnavailable`] rather than
/// pretending no override exists: a deadline computed on a silent fallback
/// could be legally wrong.
///
/// [`Error::StoreUnavailable`]: plazo_core::Error::StoreUnavailable
pub trait OverrideStore: std::fmt::Debug + Send + Sync {
    /// Return the active override for `date`, if any.
    fn active_override(&self, date: Date) -> Result<Option<NonBusinessDayOverride>>;

    /// Return `true` if an active override covers `date`.
    fn has_active_override(&self, date: Date) -> Result<bool> {
        Ok(self.active_override(date)?.is_some())
    }

    /// Return all active overrides in the inclusive range `[from, to]`,
    /// in calendar order.
    ///
    /// The default implementation performs one lookup per day; stores with a
    /// cheaper range scan should replace it.
    fn active_overrides_between(
        &self,
        from: Date,
        to: Date,
    ) -> Result<Vec<NonBusinessDayOverride>> {
        let mut found = Vec::new();
        let mut d = from;
        while d <= to {
            if let Some(o) = self.active_override(d)? {
                found.push(o);
            }
            if d == to {
                break;
            }
            d += 1;
        }
        Ok(found)
    }
}

/// A store with no overrides at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl OverrideStore for NoOverrides {
    fn active_override(&self, _date: Date) -> Result<Option<NonBusinessDayOverride>> {
        Ok(None)
    }

    fn has_active_override(&self, _date: Date) -> Result<bool> {
        Ok(false)
    }
}

/// An in-memory override table, keyed by date.
///
/// Suitable for tests and for callers that load the persisted table once and
/// hand it to the calculator.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOverrides {
    entries: HashMap<i32, NonBusinessDayOverride>,
}

impl InMemoryOverrides {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an override, replacing any previous entry for the same date.
    pub fn insert(&mut self, entry: NonBusinessDayOverride) {
        self.entries.insert(entry.date.serial(), entry);
    }

    /// Mark the override for `date` inactive, if present.
    pub fn deactivate(&mut self, date: Date) {
        if let Some(entry) = self.entries.get_mut(&date.serial()) {
            entry.active = false;
        }
    }

    /// Number of entries, active or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl OverrideStore for InMemoryOverrides {
    fn active_override(&self, date: Date) -> Result<Option<NonBusinessDayOverride>> {
        Ok(self
            .entries
            .get(&date.serial())
            .filter(|entry| entry.active)
            .cloned())
    }

    fn active_overrides_between(
        &self,
        from: Date,
        to: Date,
    ) -> Result<Vec<NonBusinessDayOverride>> {
        let mut found: Vec<NonBusinessDayOverride> = self
            .entries
            .values()
            .filter(|entry| entry.active && entry.date >= from && entry.date <= to)
            .cloned()
            .collect();
        found.sort_by_key(|entry| entry.date);
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn empty_store_has_nothing() {
        let store = InMemoryOverrides::new();
        assert!(store.is_empty());
        assert_eq!(store.active_override(date(2025, 3, 14)).unwrap(), None);
        assert!(!store.has_active_override(date(2025, 3, 14)).unwrap());
    }

    #[test]
    fn insert_and_lookup() {
        let mut store = InMemoryOverrides::new();
        let day = date(2025, 3, 14);
        store.insert(NonBusinessDayOverride::new(day, "Civic day"));

        let found = store.active_override(day).unwrap().unwrap();
        assert_eq!(found.description, "Civic day");
        assert!(store.has_active_override(day).unwrap());
        assert!(!store.has_active_override(day + 1).unwrap());
    }

    #[test]
    fn insert_replaces_same_date() {
        let mut store = InMemoryOverrides::new();
        let day = date(2025, 3, 14);
        store.insert(NonBusinessDayOverride::new(day, "First"));
        store.insert(NonBusinessDayOverride::new(day, "Second"));

        assert_eq!(store.len(), 1);
        let found = store.active_override(day).unwrap().unwrap();
        assert_eq!(found.description, "Second");
    }

    #[test]
    fn deactivated_entries_are_invisible() {
        let mut store = InMemoryOverrides::new();
        let day = date(2025, 3, 14);
        store.insert(NonBusinessDayOverride::new(day, "Civic day"));
        store.deactivate(day);

        assert_eq!(store.len(), 1);
        assert_eq!(store.active_override(day).unwrap(), None);
        assert!(store
            .active_overrides_between(date(2025, 3, 1), date(2025, 3, 31))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn range_query_is_sorted_and_inclusive() {
        let mut store = InMemoryOverrides::new();
        store.insert(NonBusinessDayOverride::new(date(2025, 3, 31), "Third"));
        store.insert(NonBusinessDayOverride::new(date(2025, 3, 1), "First"));
        store.insert(NonBusinessDayOverride::new(date(2025, 3, 14), "Second"));
        store.insert(NonBusinessDayOverride::new(date(2025, 4, 1), "Outside"));

        let found = store
            .active_overrides_between(date(2025, 3, 1), date(2025, 3, 31))
            .unwrap();
        let descriptions: Vec<_> = found.iter().map(|o| o.description.as_str()).collect();
        assert_eq!(descriptions, ["First", "Second", "Third"]);
    }

    #[test]
    fn default_range_impl_matches_per_day_lookups() {
        // NoOverrides exercises the trait's default range implementation.
        let store = NoOverrides;
        let found = store
            .active_overrides_between(date(2025, 1, 1), date(2025, 1, 31))
            .unwrap();
        assert!(found.is_empty());
    }
}
