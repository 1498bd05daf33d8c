#![forbid(unsafe_code)]

//! Grouping core for collaborative retrospective boards.
//!
//! # Role
//! During the idea grouping stage participants drag idea cards onto each
//! other. This crate decides what such a drop means and where the dragged
//! idea lands, as pure functions over a snapshot of the board. It performs no
//! I/O and holds no state; persisting the results is the caller's job.
//!
//! # Primary responsibilities
//! - **Drop actions**: [`resolve_drop_action`] classifies a drop as create,
//!   join, move, or nothing. [`is_valid_drag_drop_state`] guards untyped input.
//! - **Fractional order**: [`calculate_new_order`] picks a sort key between
//!   the new neighbours without renumbering siblings.
//! - **Planning**: [`plan_drop`] and [`plan_category_move`] combine both into
//!   the list of writes to persist.
//!
//! ```
//! use retro_grouping::{DragDropState, DropAction, describe_drop_action, resolve_drop_action};
//!
//! let state = DragDropState::new("1", None, "2", Some("G1"));
//! let action = resolve_drop_action(&state);
//! assert_eq!(action, Some(DropAction::JoinGroup));
//! assert_eq!(describe_drop_action(action), "Will join this group");
//! ```

pub mod config;
pub mod drop_action;
pub mod error;
pub mod guard;
pub mod model;
pub mod order;
pub mod plan;

pub use config::GroupingConfig;
pub use drop_action::{
    DragDropState, DropAction, describe_drop_action, is_grouped, resolve_drop_action,
};
pub use error::{ConfigError, GuardError, ParseDropActionError, PlanError};
pub use guard::is_valid_drag_drop_state;
pub use model::{Group, Idea, IdeaContext};
pub use order::{
    ORDER_STEP, OrderUpdate, append_order, calculate_new_order, context_ideas, min_gap,
    needs_rebalance, rebalance,
};
pub use plan::{DropPlan, Mutation, plan_category_move, plan_drop};
