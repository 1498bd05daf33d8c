//! Property-based invariant tests for drop resolution and fractional ordering.
//!
//! 1. The resolver is total and deterministic; self-drops always resolve to `None`
//! 2. The computed order never ties an existing key in the target context
//! 3. The computed order lands on the side of `over` matching the move direction
//! 4. Ideas outside the target context never influence the result
//! 5. Rebalancing yields evenly spaced, order-preserving keys

use proptest::prelude::*;
use retro_grouping::{
    DragDropState, DropAction, Idea, IdeaContext, calculate_new_order, context_ideas, rebalance,
    resolve_drop_action,
};

// ── Strategies ──────────────────────────────────────────────────────────

fn group_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None::<String>),
        Just(Some(String::new())),
        "[AB]".prop_map(Some),
    ]
}

/// A single context with distinct orders, shuffled relative to display order.
fn context_strategy() -> impl Strategy<Value = Vec<Idea>> {
    prop::collection::btree_set(-1000i32..1000, 1..12)
        .prop_map(|orders| {
            orders
                .into_iter()
                .enumerate()
                .map(|(i, order)| Idea::new(format!("i{i}"), "c1", f64::from(order) / 4.0))
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

/// Ideas from other contexts that must never affect the result.
fn noise_strategy() -> impl Strategy<Value = Vec<Idea>> {
    prop::collection::vec((any::<bool>(), -1000.0f64..1000.0), 0..12).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (other_category, order))| {
                if other_category {
                    Idea::new(format!("n{i}"), "c2", order)
                } else {
                    Idea::new(format!("n{i}"), "c1", order).in_group("G")
                }
            })
            .collect()
    })
}

fn display_position(ideas: &[Idea], id: &str) -> usize {
    context_ideas(ideas, IdeaContext::ungrouped("c1"))
        .iter()
        .position(|idea| idea.id == id)
        .expect("idea in context")
}

// ═══════════════════════════════════════════════════════════════════════
// 1. Resolver totality
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn self_drop_always_none(
        id in "[a-z0-9]{1,8}",
        g1 in group_strategy(),
        g2 in group_strategy(),
    ) {
        let state = DragDropState {
            active_id: id.clone(),
            active_group_id: g1,
            target_id: id,
            target_group_id: g2,
        };
        prop_assert_eq!(resolve_drop_action(&state), None);
    }

    #[test]
    fn resolver_matches_table(
        g1 in group_strategy(),
        g2 in group_strategy(),
    ) {
        let state = DragDropState {
            active_id: "1".into(),
            active_group_id: g1.clone(),
            target_id: "2".into(),
            target_group_id: g2.clone(),
        };
        let grouped = |g: &Option<String>| g.as_deref().is_some_and(|s| !s.is_empty());
        let expected = match (grouped(&g1), grouped(&g2)) {
            (false, false) => Some(DropAction::CreateGroup),
            (true, false) | (false, true) => Some(DropAction::JoinGroup),
            (true, true) if g1 != g2 => Some(DropAction::MoveToGroup),
            (true, true) => None,
        };
        let first = resolve_drop_action(&state);
        prop_assert_eq!(first, expected);
        prop_assert_eq!(resolve_drop_action(&state), first);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2-3. No collision, correct side
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn new_order_never_ties_and_lands_on_correct_side(
        ideas in context_strategy(),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let active = &ideas[a.index(ideas.len())];
        let over = &ideas[b.index(ideas.len())];
        prop_assume!(active.id != over.id);

        let order = calculate_new_order(active, over, &ideas);
        prop_assert!(order.is_finite());
        for idea in &ideas {
            prop_assert!(idea.order != order, "order {} ties {}", order, idea.id);
        }

        let moving_down = display_position(&ideas, &active.id) < display_position(&ideas, &over.id);
        if moving_down {
            prop_assert!(order > over.order);
        } else {
            prop_assert!(order < over.order);
        }

        // Strictly between `over` and its neighbour on that side: no other key
        // falls between them.
        let (lo, hi) = if order < over.order { (order, over.order) } else { (over.order, order) };
        let between = ideas.iter().filter(|i| i.order > lo && i.order < hi).count();
        prop_assert_eq!(between, 0);
    }

    #[test]
    fn outsider_is_placed_after_target(
        ideas in context_strategy(),
        b in any::<prop::sample::Index>(),
    ) {
        let over = &ideas[b.index(ideas.len())];
        let outsider = Idea::new("outsider", "c1", 0.0).in_group("Other");
        let order = calculate_new_order(&outsider, over, &ideas);
        prop_assert!(order > over.order);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Context isolation
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn other_contexts_do_not_influence_order(
        ideas in context_strategy(),
        noise in noise_strategy(),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let active = ideas[a.index(ideas.len())].clone();
        let over = ideas[b.index(ideas.len())].clone();

        let clean = calculate_new_order(&active, &over, &ideas);
        let mut noisy = ideas.clone();
        noisy.extend(noise);
        prop_assert_eq!(calculate_new_order(&active, &over, &noisy), clean);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5. Rebalance
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rebalance_preserves_display_order(ideas in context_strategy()) {
        let ctx = IdeaContext::ungrouped("c1");
        let before: Vec<String> = context_ideas(&ideas, ctx).iter().map(|i| i.id.clone()).collect();

        let mut after = ideas.clone();
        for update in rebalance(&ideas, ctx) {
            let idea = after.iter_mut().find(|i| i.id == update.idea_id).expect("known idea");
            idea.order = update.order;
        }

        let sorted = context_ideas(&after, ctx);
        let ids: Vec<String> = sorted.iter().map(|i| i.id.clone()).collect();
        prop_assert_eq!(ids, before);
        for (index, idea) in sorted.iter().enumerate() {
            prop_assert_eq!(idea.order, index as f64);
        }
    }
}
