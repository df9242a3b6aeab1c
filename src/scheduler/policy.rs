use crate::core::models::{Attendance, ItemId, Section};
use crate::core::template::GridTemplate;
use crate::core::types::{Interval, Weekday};
use crate::errors::Result;
use crate::scheduler::grid::WeeklyGrid;
use serde::Serialize;
use std::fmt;

/// Which alternative an item was placed through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "via", rename_all = "kebab-case")]
pub enum Placement {
    Period { label: String },
    /// Zero-based position in the item's section list.
    Section { index: usize },
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::Period { label } => write!(f, "period {label}"),
            Placement::Section { index } => write!(f, "section {}", index + 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceOutcome {
    Placed(Placement),
    Rejected,
}

/// Feasibility check and placement for one attendance topology.
///
/// On `Placed` every slot of the item is committed to the grid; on
/// `Rejected` the grid is exactly as it was before the call.
pub trait AttendancePolicy {
    fn place(&self, owner: ItemId, grid: &mut WeeklyGrid) -> Result<PlaceOutcome>;
}

// ---------------------------------------------------------------------------
// Recurring: Mon/Tue/Fri plus one of Wed/Thu, all through one period label
// ---------------------------------------------------------------------------

pub struct RecurringPolicy<'a> {
    periods: &'a [String],
    template: &'a GridTemplate,
}

impl<'a> RecurringPolicy<'a> {
    pub fn new(periods: &'a [String], template: &'a GridTemplate) -> Self {
        Self { periods, template }
    }

    fn free_slot(&self, grid: &WeeklyGrid, day: Weekday, label: &str) -> Option<Interval> {
        self.template
            .slot(day, label)
            .filter(|interval| !grid.has_conflict(day, interval))
    }

    /// Commits the label's slots if all of them fit; otherwise leaves the
    /// grid untouched and returns false.
    fn try_label(&self, label: &str, owner: ItemId, grid: &mut WeeklyGrid) -> Result<bool> {
        for day in Weekday::STANDARD {
            let Some(interval) = self.free_slot(grid, day, label) else {
                grid.rollback(owner);
                return Ok(false);
            };
            grid.commit(day, interval, owner)?;
        }

        let block = Weekday::BLOCK
            .into_iter()
            .find_map(|day| self.free_slot(grid, day, label).map(|iv| (day, iv)));
        match block {
            Some((day, interval)) => {
                grid.commit(day, interval, owner)?;
                Ok(true)
            }
            None => {
                grid.rollback(owner);
                Ok(false)
            }
        }
    }
}

impl AttendancePolicy for RecurringPolicy<'_> {
    fn place(&self, owner: ItemId, grid: &mut WeeklyGrid) -> Result<PlaceOutcome> {
        for label in self.periods {
            if self.try_label(label, owner, grid)? {
                return Ok(PlaceOutcome::Placed(Placement::Period {
                    label: label.clone(),
                }));
            }
        }
        Ok(PlaceOutcome::Rejected)
    }
}

// ---------------------------------------------------------------------------
// Sectioned: first section whose every meeting is free, adopted whole
// ---------------------------------------------------------------------------

pub struct SectionedPolicy<'a> {
    sections: &'a [Section],
}

impl<'a> SectionedPolicy<'a> {
    pub fn new(sections: &'a [Section]) -> Self {
        Self { sections }
    }
}

impl AttendancePolicy for SectionedPolicy<'_> {
    fn place(&self, owner: ItemId, grid: &mut WeeklyGrid) -> Result<PlaceOutcome> {
        // Read every section's times up front so bad data fails the run even
        // when an earlier section would have fit.
        let resolved = self
            .sections
            .iter()
            .map(Section::meetings)
            .collect::<Result<Vec<_>>>()?;

        for (index, meetings) in resolved.iter().enumerate() {
            if meetings.is_empty() {
                continue;
            }
            let fits = meetings
                .iter()
                .all(|(day, interval)| !grid.has_conflict(*day, interval));
            if fits {
                for (day, interval) in meetings {
                    grid.commit(*day, *interval, owner)?;
                }
                return Ok(PlaceOutcome::Placed(Placement::Section { index }));
            }
        }
        Ok(PlaceOutcome::Rejected)
    }
}

pub fn make_policy<'a>(
    attendance: &'a Attendance,
    template: &'a GridTemplate,
) -> Box<dyn AttendancePolicy + 'a> {
    match attendance {
        Attendance::Recurring { periods } => Box::new(RecurringPolicy::new(periods, template)),
        Attendance::Sectioned { sections } => Box::new(SectionedPolicy::new(sections)),
    }
}
