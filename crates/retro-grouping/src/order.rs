//! Fractional ordering within an idea context.
//!
//! Reordering never renumbers siblings: the moved idea gets a key strictly
//! between its new neighbours, or one [`ORDER_STEP`] beyond an end of the list.
//!
//! # Drift
//!
//! Each insertion between the same two neighbours halves their gap, so after
//! enough insertions `f64` runs out of room and a midpoint collapses onto a
//! neighbour. The calculator does not detect this. Callers check
//! [`needs_rebalance`] and persist the output of [`rebalance`] when it fires.

use serde::{Deserialize, Serialize};

use crate::model::{Idea, IdeaContext};

/// Increment used when extending past either end of a context.
pub const ORDER_STEP: f64 = 1.0;

/// A new sort key for one idea.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub idea_id: String,
    pub order: f64,
}

/// Members of `context`, ascending by order.
///
/// Equal keys keep their input order.
#[must_use]
pub fn context_ideas<'a>(all: &'a [Idea], context: IdeaContext<'_>) -> Vec<&'a Idea> {
    let mut members: Vec<&Idea> = all.iter().filter(|idea| context.contains(idea)).collect();
    members.sort_by(|a, b| a.order.total_cmp(&b.order));
    members
}

/// New order for `active` when dropped on `over` inside `over`'s context.
///
/// Moving down the list (or arriving from outside the context) lands after
/// `over`; moving up lands before it. If `over` is missing from `all` its own
/// order is returned unchanged.
#[must_use]
pub fn calculate_new_order(active: &Idea, over: &Idea, all: &[Idea]) -> f64 {
    let members = context_ideas(all, over.context());

    let Some(over_index) = members.iter().position(|idea| idea.id == over.id) else {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "grouping.order_fallback",
            active_id = %active.id,
            over_id = %over.id,
        );
        return over.order;
    };
    let active_index = members.iter().position(|idea| idea.id == active.id);

    // An outsider sorts before everything.
    let moving_down = active_index.is_none_or(|index| index < over_index);

    if moving_down {
        match members.get(over_index + 1) {
            Some(next) => (over.order + next.order) / 2.0,
            None => over.order + ORDER_STEP,
        }
    } else if over_index == 0 {
        over.order - ORDER_STEP
    } else {
        (members[over_index - 1].order + over.order) / 2.0
    }
}

/// Order for an idea appended to the end of `context`.
#[must_use]
pub fn append_order(all: &[Idea], context: IdeaContext<'_>) -> f64 {
    all.iter()
        .filter(|idea| context.contains(idea))
        .map(|idea| idea.order)
        .reduce(f64::max)
        .map_or(0.0, |last| last + ORDER_STEP)
}

/// Smallest gap between adjacent members of `context`.
///
/// `None` when the context has fewer than two members.
#[must_use]
pub fn min_gap(all: &[Idea], context: IdeaContext<'_>) -> Option<f64> {
    context_ideas(all, context)
        .windows(2)
        .map(|pair| pair[1].order - pair[0].order)
        .reduce(f64::min)
}

/// Whether `context` should be renumbered before further midpoint inserts.
///
/// Fires when any adjacent gap is at or below `threshold`, or when any member
/// carries a non-finite order.
#[must_use]
pub fn needs_rebalance(all: &[Idea], context: IdeaContext<'_>, threshold: f64) -> bool {
    let members = context_ideas(all, context);
    if members.iter().any(|idea| !idea.order.is_finite()) {
        return true;
    }
    members
        .windows(2)
        .any(|pair| pair[1].order - pair[0].order <= threshold)
}

/// Renumber `context` to `0, 1, 2, ...` in display order.
///
/// Only ideas whose order actually changes are returned.
#[must_use]
pub fn rebalance(all: &[Idea], context: IdeaContext<'_>) -> Vec<OrderUpdate> {
    let updates: Vec<OrderUpdate> = context_ideas(all, context)
        .into_iter()
        .enumerate()
        .filter_map(|(index, idea)| {
            let order = index as f64 * ORDER_STEP;
            (idea.order != order).then(|| OrderUpdate {
                idea_id: idea.id.clone(),
                order,
            })
        })
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        message = "grouping.rebalance",
        category_id = context.category_id,
        group_id = context.group_id.unwrap_or(""),
        changed = updates.len(),
    );

    updates
}
