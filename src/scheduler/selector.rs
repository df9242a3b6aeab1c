use crate::core::models::{DEFAULT_IMPORTANCE, Item, ItemId};
use crate::core::template::GridTemplate;
use crate::errors::Result;
use crate::scheduler::assembler::{ResultAssembler, ScheduleResult, SelectedItem};
use crate::scheduler::comparator::{Candidate, priority_order};
use crate::scheduler::grid::WeeklyGrid;
use crate::scheduler::policy::{PlaceOutcome, Placement, make_policy};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Pending,
    Placed,
    Rejected,
}

/// Hears about each decision as a run makes it.
pub trait SelectionObserver {
    fn item_placed(&self, candidate: &Candidate<'_>, placement: &Placement);
    fn item_rejected(&self, candidate: &Candidate<'_>);
}

pub struct SilentObserver;

impl SelectionObserver for SilentObserver {
    fn item_placed(&self, _candidate: &Candidate<'_>, _placement: &Placement) {}
    fn item_rejected(&self, _candidate: &Candidate<'_>) {}
}

/// Single-pass greedy selection.
///
/// Items are visited once, heaviest first. Each is placed if its policy finds
/// room in the grid as it stands at that moment; nothing placed earlier is
/// ever moved or evicted.
pub struct GreedySelector<'a> {
    template: &'a GridTemplate,
    default_importance: f64,
    observer: &'a dyn SelectionObserver,
}

impl<'a> GreedySelector<'a> {
    pub fn new(template: &'a GridTemplate) -> Self {
        Self {
            template,
            default_importance: DEFAULT_IMPORTANCE,
            observer: &SilentObserver,
        }
    }

    pub fn with_default_importance(mut self, importance: f64) -> Self {
        self.default_importance = importance;
        self
    }

    pub fn with_observer(mut self, observer: &'a dyn SelectionObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Override by name, then the item's own weight, then the default.
    pub fn resolve_importance(&self, item: &Item, overrides: &HashMap<String, f64>) -> f64 {
        overrides
            .get(&item.name)
            .copied()
            .or(item.importance)
            .unwrap_or(self.default_importance)
    }

    pub fn run(&self, items: &[Item], overrides: &HashMap<String, f64>) -> Result<ScheduleResult> {
        let candidates = items
            .iter()
            .enumerate()
            .map(|(idx, item)| Candidate {
                id: ItemId(idx),
                item,
                importance: self.resolve_importance(item, overrides),
            })
            .collect();

        let mut grid = WeeklyGrid::new();
        let mut states = vec![ItemState::Pending; items.len()];
        let mut selection = Vec::new();

        for candidate in priority_order(candidates) {
            let policy = make_policy(&candidate.item.attendance, self.template);
            match policy.place(candidate.id, &mut grid)? {
                PlaceOutcome::Placed(placement) => {
                    states[candidate.id.0] = ItemState::Placed;
                    self.observer.item_placed(&candidate, &placement);
                    selection.push(SelectedItem {
                        item: candidate.id,
                        name: candidate.item.name.clone(),
                        importance: candidate.importance,
                        placement,
                    });
                }
                PlaceOutcome::Rejected => {
                    states[candidate.id.0] = ItemState::Rejected;
                    self.observer.item_rejected(&candidate);
                }
            }
        }

        Ok(ResultAssembler::assemble(items, &states, selection, &grid))
    }
}
