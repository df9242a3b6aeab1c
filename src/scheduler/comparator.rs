use crate::core::models::{Item, ItemId};
use std::cmp::Ordering;

/// An item as one run sees it: the caller's item plus the weight this run
/// resolved for it. The caller's catalog is never touched.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub id: ItemId,
    pub item: &'a Item,
    pub importance: f64,
}

/// Importance descending; equal weights keep catalog order.
pub fn by_priority(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    let by_weight = b.importance.total_cmp(&a.importance);
    if by_weight != Ordering::Equal {
        return by_weight;
    }
    a.id.cmp(&b.id)
}

/// Candidates in the order a greedy run visits them.
pub fn priority_order(mut candidates: Vec<Candidate<'_>>) -> Vec<Candidate<'_>> {
    candidates.sort_by(by_priority);
    candidates
}
