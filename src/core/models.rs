use crate::core::types::{AttendanceKind, Interval, Weekday};
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight of an item when neither the run nor the item names one.
pub const DEFAULT_IMPORTANCE: f64 = 0.5;

/// Position of an item in the caller's catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub usize);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One meeting pattern of a sectioned item. Times stay as caller text until a
/// run reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub days: Vec<Weekday>,
    pub start: String,
    pub end: String,
}

impl Section {
    pub fn new(days: Vec<Weekday>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            days,
            start: start.into(),
            end: end.into(),
        }
    }

    /// Every `(weekday, interval)` meeting of this section, repeated days
    /// collapsed, declared order kept.
    pub fn meetings(&self) -> Result<Vec<(Weekday, Interval)>> {
        let interval = Interval::parse(&self.start, &self.end)?;
        let mut days: Vec<Weekday> = Vec::with_capacity(self.days.len());
        for day in &self.days {
            if !days.contains(day) {
                days.push(*day);
            }
        }
        Ok(days.into_iter().map(|d| (d, interval)).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Attendance {
    Recurring {
        #[serde(default)]
        periods: Vec<String>,
    },
    Sectioned {
        #[serde(default)]
        sections: Vec<Section>,
    },
}

impl Attendance {
    pub fn kind(&self) -> AttendanceKind {
        match self {
            Attendance::Recurring { .. } => AttendanceKind::Recurring,
            Attendance::Sectioned { .. } => AttendanceKind::Sectioned,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Falls back to the run's default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<f64>,
    #[serde(flatten)]
    pub attendance: Attendance,
}

impl Item {
    pub fn recurring<I, S>(name: impl Into<String>, periods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            importance: None,
            attendance: Attendance::Recurring {
                periods: periods.into_iter().map(Into::into).collect(),
            },
        }
    }

    pub fn sectioned(name: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            name: name.into(),
            importance: None,
            attendance: Attendance::Sectioned { sections },
        }
    }

    pub fn with_importance(mut self, importance: f64) -> Self {
        self.importance = Some(importance);
        self
    }

    pub fn kind(&self) -> AttendanceKind {
        self.attendance.kind()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = match &self.attendance {
            Attendance::Recurring { periods } => format!("periods=[{}]", periods.join(", ")),
            Attendance::Sectioned { sections } => format!("sections={}", sections.len()),
        };
        write!(
            f,
            "Item(name='{}', kind={}, importance={:?}, {})",
            self.name,
            self.kind(),
            self.importance,
            shape
        )
    }
}
