//! Plain records read from the session snapshot.
//!
//! Field names follow the document store's camelCase layout so records can be
//! deserialized straight from a listener payload.

use serde::{Deserialize, Serialize};

/// A single submitted idea.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: String,
    pub category_id: String,
    /// `None` means ungrouped.
    #[serde(default)]
    pub group_id: Option<String>,
    /// Sort key within the idea's context. Only relative order is meaningful.
    pub order: f64,
}

impl Idea {
    /// Create an ungrouped idea.
    #[must_use]
    pub fn new(id: impl Into<String>, category_id: impl Into<String>, order: f64) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
            group_id: None,
            order,
        }
    }

    /// Place the idea in a group.
    #[must_use]
    pub fn in_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// The `(categoryId, groupId)` sibling set this idea is ordered within.
    #[must_use]
    pub fn context(&self) -> IdeaContext<'_> {
        IdeaContext {
            category_id: &self.category_id,
            group_id: self.group_id.as_deref(),
        }
    }
}

/// A named cluster of ideas inside one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub category_id: String,
    #[serde(default)]
    pub title: String,
}

/// Ideas sharing a category and a group membership.
///
/// Membership is exact equality on both fields; an empty-string group id is
/// its own context here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdeaContext<'a> {
    pub category_id: &'a str,
    pub group_id: Option<&'a str>,
}

impl<'a> IdeaContext<'a> {
    /// The ungrouped column of a category.
    #[must_use]
    pub fn ungrouped(category_id: &'a str) -> Self {
        Self {
            category_id,
            group_id: None,
        }
    }

    /// The members of one group.
    #[must_use]
    pub fn group(category_id: &'a str, group_id: &'a str) -> Self {
        Self {
            category_id,
            group_id: Some(group_id),
        }
    }

    /// Whether `idea` belongs to this context.
    #[must_use]
    pub fn contains(&self, idea: &Idea) -> bool {
        idea.category_id == self.category_id && idea.group_id.as_deref() == self.group_id
    }
}
