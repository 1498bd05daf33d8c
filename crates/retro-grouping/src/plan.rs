//! Drop planning: turn a gesture into the writes the caller must persist.
//!
//! The planner composes [`resolve_drop_action`] and the order calculator over
//! a snapshot of ideas and groups. It never mutates the snapshot; the returned
//! [`DropPlan`] lists [`Mutation`]s in the order they should be applied.
//!
//! Cross-category moves are not drops between ideas. They go through
//! [`plan_category_move`], which changes the category and clears the group in
//! one step.

use serde::{Deserialize, Serialize};

use crate::config::GroupingConfig;
use crate::drop_action::{DragDropState, DropAction, is_grouped, resolve_drop_action};
use crate::error::PlanError;
use crate::model::{Group, Idea, IdeaContext};
use crate::order::{ORDER_STEP, OrderUpdate, append_order, calculate_new_order};

/// A single write derived from a drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum Mutation {
    /// Create a group and move `members` into it at the given orders.
    CreateGroup {
        category_id: String,
        title: String,
        members: Vec<OrderUpdate>,
    },
    /// Put an idea in an existing group.
    AssignGroup {
        idea_id: String,
        group_id: String,
        order: f64,
    },
    /// Reorder an idea inside its current context.
    SetOrder { idea_id: String, order: f64 },
    /// Move an idea to another category, clearing its group.
    ChangeCategory {
        idea_id: String,
        category_id: String,
        order: f64,
    },
    /// Remove a group that no longer has members.
    DeleteGroup { group_id: String },
}

/// Result of planning one gesture.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropPlan {
    /// Resolver outcome; `None` for reorders, self-drops and category moves.
    pub action: Option<DropAction>,
    pub mutations: Vec<Mutation>,
    /// The destination context is crowded enough that the caller should
    /// persist a [`crate::order::rebalance`] pass after applying this plan.
    pub rebalance_hint: bool,
}

impl DropPlan {
    /// Whether applying the plan changes nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.mutations.is_empty()
    }
}

/// Plan the drop of `active_id` onto `target_id`.
pub fn plan_drop(
    active_id: &str,
    target_id: &str,
    ideas: &[Idea],
    groups: &[Group],
    config: &GroupingConfig,
) -> Result<DropPlan, PlanError> {
    let active = find_idea(ideas, active_id)?;
    let target = find_idea(ideas, target_id)?;

    let state = DragDropState {
        active_id: active.id.clone(),
        active_group_id: active.group_id.clone(),
        target_id: target.id.clone(),
        target_group_id: target.group_id.clone(),
    };
    state.validate()?;

    if active.id == target.id {
        return Ok(DropPlan::default());
    }
    if active.category_id != target.category_id {
        return Err(PlanError::CategoryMismatch {
            active: active.id.clone(),
            target: target.id.clone(),
        });
    }

    let action = resolve_drop_action(&state);
    let threshold = config.rebalance_threshold;
    let mut plan = DropPlan {
        action,
        ..DropPlan::default()
    };

    match action {
        Some(DropAction::CreateGroup) => {
            plan.mutations.push(Mutation::CreateGroup {
                category_id: target.category_id.clone(),
                title: config.default_group_title.clone(),
                members: vec![
                    OrderUpdate {
                        idea_id: target.id.clone(),
                        order: 0.0,
                    },
                    OrderUpdate {
                        idea_id: active.id.clone(),
                        order: ORDER_STEP,
                    },
                ],
            });
        }
        Some(DropAction::JoinGroup) => {
            // The ungrouped side joins the grouped side's group.
            let (joiner, anchor) = if is_grouped(target.group_id.as_deref()) {
                (active, target)
            } else {
                (target, active)
            };
            let context = anchor.context();
            let order = if joiner.id == active.id {
                calculate_new_order(active, target, ideas)
            } else {
                append_order(ideas, context)
            };
            plan.rebalance_hint = crowded(ideas, context, &joiner.id, order, threshold);
            plan.mutations.push(Mutation::AssignGroup {
                idea_id: joiner.id.clone(),
                group_id: context.group_id.unwrap_or_default().to_owned(),
                order,
            });
        }
        Some(DropAction::MoveToGroup) => {
            let order = calculate_new_order(active, target, ideas);
            plan.rebalance_hint = crowded(ideas, target.context(), &active.id, order, threshold);
            plan.mutations.push(Mutation::AssignGroup {
                idea_id: active.id.clone(),
                group_id: target.group_id.clone().unwrap_or_default(),
                order,
            });
            if let Some(emptied) = emptied_group(ideas, groups, active) {
                plan.mutations.push(emptied);
            }
        }
        None => {
            let order = calculate_new_order(active, target, ideas);
            plan.rebalance_hint = crowded(ideas, target.context(), &active.id, order, threshold);
            plan.mutations.push(Mutation::SetOrder {
                idea_id: active.id.clone(),
                order,
            });
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        message = "grouping.plan",
        active_id,
        target_id,
        action = plan.action.map_or("none", DropAction::as_str),
        mutations = plan.mutations.len(),
        rebalance_hint = plan.rebalance_hint,
    );

    Ok(plan)
}

/// Plan moving an idea to another category.
///
/// The idea leaves its group and is appended to the destination category's
/// ungrouped ideas. Moving within the same category plans nothing.
pub fn plan_category_move(
    idea_id: &str,
    category_id: &str,
    ideas: &[Idea],
    groups: &[Group],
) -> Result<DropPlan, PlanError> {
    let idea = find_idea(ideas, idea_id)?;
    if idea.category_id == category_id {
        return Ok(DropPlan::default());
    }

    let mut plan = DropPlan::default();
    plan.mutations.push(Mutation::ChangeCategory {
        idea_id: idea.id.clone(),
        category_id: category_id.to_owned(),
        order: append_order(ideas, IdeaContext::ungrouped(category_id)),
    });
    if let Some(emptied) = emptied_group(ideas, groups, idea) {
        plan.mutations.push(emptied);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        message = "grouping.plan",
        active_id = idea_id,
        category_id,
        mutations = plan.mutations.len(),
    );

    Ok(plan)
}

fn find_idea<'a>(ideas: &'a [Idea], id: &str) -> Result<&'a Idea, PlanError> {
    ideas
        .iter()
        .find(|idea| idea.id == id)
        .ok_or_else(|| PlanError::IdeaNotFound(id.to_owned()))
}

/// `DeleteGroup` for the group `leaving` is in, if it has no other members
/// and still exists.
fn emptied_group(ideas: &[Idea], groups: &[Group], leaving: &Idea) -> Option<Mutation> {
    let group_id = leaving.group_id.as_deref().filter(|id| !id.is_empty())?;
    let has_others = ideas
        .iter()
        .any(|idea| idea.id != leaving.id && idea.group_id.as_deref() == Some(group_id));
    let known = groups.iter().any(|group| group.id == group_id);
    (!has_others && known).then(|| Mutation::DeleteGroup {
        group_id: group_id.to_owned(),
    })
}

/// Whether `order` sits within `threshold` of another member of `context`.
fn crowded(
    ideas: &[Idea],
    context: IdeaContext<'_>,
    moving_id: &str,
    order: f64,
    threshold: f64,
) -> bool {
    !order.is_finite()
        || ideas
            .iter()
            .filter(|idea| idea.id != moving_id && context.contains(idea))
            .any(|idea| (idea.order - order).abs() <= threshold)
}
