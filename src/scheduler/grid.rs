use crate::core::models::ItemId;
use crate::core::types::{Interval, Weekday};
use crate::errors::{Error, Result};
use std::collections::BTreeMap;

/// A committed slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Booking {
    pub weekday: Weekday,
    pub interval: Interval,
    pub owner: ItemId,
}

/// Per-run occupancy of the week.
///
/// Bookings on one weekday never overlap; `commit` refuses anything that
/// would break that.
#[derive(Debug, Default)]
pub struct WeeklyGrid {
    days: BTreeMap<Weekday, Vec<Booking>>,
}

impl WeeklyGrid {
    pub fn new() -> Self {
        Self::default()
    }

    fn first_conflict(&self, weekday: Weekday, interval: &Interval) -> Option<&Booking> {
        self.bookings(weekday)
            .iter()
            .find(|b| b.interval.overlaps(interval))
    }

    pub fn has_conflict(&self, weekday: Weekday, interval: &Interval) -> bool {
        self.first_conflict(weekday, interval).is_some()
    }

    pub fn commit(&mut self, weekday: Weekday, interval: Interval, owner: ItemId) -> Result<()> {
        if let Some(existing) = self.first_conflict(weekday, &interval) {
            return Err(Error::ConflictViolation {
                weekday,
                interval,
                owner,
                existing: existing.owner,
            });
        }
        self.days.entry(weekday).or_default().push(Booking {
            weekday,
            interval,
            owner,
        });
        Ok(())
    }

    /// Drop every booking held by `owner`; returns how many were removed.
    pub fn rollback(&mut self, owner: ItemId) -> usize {
        let mut removed = 0;
        for bookings in self.days.values_mut() {
            let before = bookings.len();
            bookings.retain(|b| b.owner != owner);
            removed += before - bookings.len();
        }
        removed
    }

    /// Bookings on one day in commit order.
    pub fn bookings(&self, weekday: Weekday) -> &[Booking] {
        self.days.get(&weekday).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All bookings, Monday first, commit order within a day.
    pub fn iter(&self) -> impl Iterator<Item = &Booking> {
        self.days.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
