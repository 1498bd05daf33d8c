//! Drop-action resolution for the idea grouping stage.
//!
//! Dragging one idea card onto another resolves to exactly one outcome, using
//! only the two ids and their current group membership:
//!
//! | active            | target            | outcome              |
//! |-------------------|-------------------|----------------------|
//! | same id as target | (any)             | `None`               |
//! | ungrouped         | ungrouped         | [`DropAction::CreateGroup`] |
//! | ungrouped         | grouped           | [`DropAction::JoinGroup`]   |
//! | grouped           | ungrouped         | [`DropAction::JoinGroup`]   |
//! | grouped `G1`      | grouped `G2 != G1`| [`DropAction::MoveToGroup`] |
//! | grouped `G`       | grouped `G`       | `None`               |
//!
//! `None` only means "no group is created, joined or left". A same-group drop
//! is still a reorder request, handled by [`crate::order::calculate_new_order`].
//!
//! # Empty group ids
//!
//! An empty-string group id counts as ungrouped (see [`is_grouped`]). Callers
//! must never use `""` as a real group id.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GuardError, ParseDropActionError};

/// Outcome of dropping one idea onto another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DropAction {
    /// Both ideas were ungrouped; they form a new group.
    CreateGroup,
    /// Exactly one side was grouped; the other joins that group.
    JoinGroup,
    /// The active idea leaves its group for the target's group.
    MoveToGroup,
}

impl DropAction {
    /// Wire name used by the UI layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateGroup => "create-group",
            Self::JoinGroup => "join-group",
            Self::MoveToGroup => "move-to-group",
        }
    }
}

impl fmt::Display for DropAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DropAction {
    type Err = ParseDropActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create-group" => Ok(Self::CreateGroup),
            "join-group" => Ok(Self::JoinGroup),
            "move-to-group" => Ok(Self::MoveToGroup),
            other => Err(ParseDropActionError(other.to_owned())),
        }
    }
}

/// Identity and group membership of a dragged idea and its drop target.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragDropState {
    pub active_id: String,
    /// `None` covers both `null` and an absent field.
    #[serde(default)]
    pub active_group_id: Option<String>,
    pub target_id: String,
    #[serde(default)]
    pub target_group_id: Option<String>,
}

impl DragDropState {
    #[must_use]
    pub fn new(
        active_id: impl Into<String>,
        active_group_id: Option<&str>,
        target_id: impl Into<String>,
        target_group_id: Option<&str>,
    ) -> Self {
        Self {
            active_id: active_id.into(),
            active_group_id: active_group_id.map(str::to_owned),
            target_id: target_id.into(),
            target_group_id: target_group_id.map(str::to_owned),
        }
    }

    /// Check that both ids are non-empty.
    ///
    /// Group ids need no check once typed: any string or `None` is well-shaped.
    pub fn validate(&self) -> Result<(), GuardError> {
        if self.active_id.is_empty() {
            return Err(GuardError::InvalidId { field: "activeId" });
        }
        if self.target_id.is_empty() {
            return Err(GuardError::InvalidId { field: "targetId" });
        }
        Ok(())
    }

    /// Resolve this state. See [`resolve_drop_action`].
    #[must_use]
    pub fn resolve(&self) -> Option<DropAction> {
        resolve_drop_action(self)
    }
}

/// Whether a group id marks its idea as grouped.
///
/// `None` and `""` are both ungrouped.
#[must_use]
pub fn is_grouped(group_id: Option<&str>) -> bool {
    matches!(group_id, Some(id) if !id.is_empty())
}

/// Classify a drop. First matching rule wins; the function is total.
#[must_use]
pub fn resolve_drop_action(state: &DragDropState) -> Option<DropAction> {
    let action = classify(state);
    #[cfg(feature = "tracing")]
    tracing::debug!(
        message = "grouping.drop_resolved",
        active_id = %state.active_id,
        target_id = %state.target_id,
        action = action.map_or("none", DropAction::as_str),
    );
    action
}

fn classify(state: &DragDropState) -> Option<DropAction> {
    if state.active_id == state.target_id {
        return None;
    }

    let active = state.active_group_id.as_deref();
    let target = state.target_group_id.as_deref();

    match (is_grouped(active), is_grouped(target)) {
        (false, false) => Some(DropAction::CreateGroup),
        (false, true) | (true, false) => Some(DropAction::JoinGroup),
        (true, true) if active != target => Some(DropAction::MoveToGroup),
        (true, true) => None,
    }
}

/// Short hint shown while hovering a drop target.
#[must_use]
pub fn describe_drop_action(action: Option<DropAction>) -> &'static str {
    match action {
        Some(DropAction::CreateGroup) => "Will create group",
        Some(DropAction::JoinGroup) => "Will join this group",
        Some(DropAction::MoveToGroup) => "Will move to this group",
        None => "No action",
    }
}
