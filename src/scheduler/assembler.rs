use crate::core::models::{Item, ItemId};
use crate::core::types::{AttendanceKind, Interval, Weekday};
use crate::scheduler::grid::WeeklyGrid;
use crate::scheduler::policy::Placement;
use crate::scheduler::selector::ItemState;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedItem {
    pub item: ItemId,
    pub name: String,
    pub importance: f64,
    pub placement: Placement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedEvent {
    pub item: ItemId,
    pub name: String,
    pub weekday: Weekday,
    pub interval: Interval,
    pub kind: AttendanceKind,
    pub placement: Placement,
}

/// Everything a run hands back to its caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleResult {
    /// Placed items in the order they were placed.
    pub selection: Vec<SelectedItem>,
    /// Monday first, commit order within a day.
    pub events: Vec<PlacedEvent>,
    /// One entry per catalog item.
    pub included: BTreeMap<ItemId, bool>,
    pub total_weight: f64,
}

impl ScheduleResult {
    pub fn is_included(&self, id: ItemId) -> bool {
        self.included.get(&id).copied().unwrap_or(false)
    }

    pub fn rejected(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.included
            .iter()
            .filter(|(_, placed)| !**placed)
            .map(|(id, _)| *id)
    }

    pub fn events_for(&self, id: ItemId) -> impl Iterator<Item = &PlacedEvent> + '_ {
        self.events.iter().filter(move |e| e.item == id)
    }

    pub fn summary(&self) -> String {
        format!(
            "Schedule generated with {} courses (total importance: {:.2})",
            self.selection.len(),
            self.total_weight
        )
    }
}

pub struct ResultAssembler;

impl ResultAssembler {
    pub fn assemble(
        items: &[Item],
        states: &[ItemState],
        selection: Vec<SelectedItem>,
        grid: &WeeklyGrid,
    ) -> ScheduleResult {
        let by_owner: HashMap<ItemId, &SelectedItem> =
            selection.iter().map(|s| (s.item, s)).collect();

        let events = grid
            .iter()
            .filter_map(|booking| {
                let selected = by_owner.get(&booking.owner)?;
                let item = items.get(booking.owner.0)?;
                Some(PlacedEvent {
                    item: booking.owner,
                    name: selected.name.clone(),
                    weekday: booking.weekday,
                    interval: booking.interval,
                    kind: item.kind(),
                    placement: selected.placement.clone(),
                })
            })
            .collect();

        let included = states
            .iter()
            .enumerate()
            .map(|(idx, state)| (ItemId(idx), *state == ItemState::Placed))
            .collect();

        let total_weight = selection.iter().map(|s| s.importance).sum();

        ScheduleResult {
            selection,
            events,
            included,
            total_weight,
        }
    }
}
