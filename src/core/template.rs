//! Weekly bell schedule: which interval a period label occupies on each day.
//!
//! The template is read-only for the duration of a run. Times are parsed when
//! the template is built, so a run only ever sees well-formed intervals here.

use crate::core::types::{Interval, Weekday};
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridTemplate {
    days: BTreeMap<Weekday, BTreeMap<String, Interval>>,
}

impl GridTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form used by callers that assemble a template in code.
    pub fn with_period(
        mut self,
        day: Weekday,
        label: impl Into<String>,
        start: &str,
        end: &str,
    ) -> Result<Self> {
        self.insert(day, label, Interval::parse(start, end)?);
        Ok(self)
    }

    /// Same label and times on every listed day.
    pub fn with_period_on(
        mut self,
        days: &[Weekday],
        label: &str,
        start: &str,
        end: &str,
    ) -> Result<Self> {
        let interval = Interval::parse(start, end)?;
        for day in days {
            self.insert(*day, label, interval);
        }
        Ok(self)
    }

    pub fn insert(&mut self, day: Weekday, label: impl Into<String>, interval: Interval) {
        self.days
            .entry(day)
            .or_default()
            .insert(label.into(), interval);
    }

    /// The interval `label` occupies on `day`, if the template defines it.
    pub fn slot(&self, day: Weekday, label: &str) -> Option<Interval> {
        self.days.get(&day).and_then(|periods| periods.get(label)).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.days.values().all(BTreeMap::is_empty)
    }
}
