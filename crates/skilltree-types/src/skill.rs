//! Skill domain types.
//!
//! Defines the shared `Base` record shape and the `Skill` entity. Skills are
//! flat parent-pointer records; any hierarchy is derived from `parents` by
//! `skilltree-core` and never stored on the entity itself.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Base shape
// ---------------------------------------------------------------------------

/// Fields shared by every record in a skill tree: the skills themselves and
/// the graph that owns them.
pub trait Base {
    /// Identifier, unique within the owning collection.
    fn id(&self) -> &str;

    fn title(&self) -> &str;

    fn description(&self) -> &str;

    /// Soft-delete marker.
    fn is_deleted(&self) -> bool;
}

// ---------------------------------------------------------------------------
// Skill
// ---------------------------------------------------------------------------

/// A node in a skill graph.
///
/// `parents` holds the ids of the skills this one builds on; an empty list
/// makes the skill a root. Parent ids are not required to resolve to skills
/// in the same graph.
///
/// `children` exists for record-shape compatibility only. The graph resets it
/// to empty on insertion and nothing ever fills it; use the children index in
/// `skilltree-core` for the parent -> child view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub parents: Vec<String>,
    #[serde(default)]
    pub is_learnt: bool,
    #[serde(default)]
    pub children: Vec<Skill>,
}

impl Skill {
    /// Create an unlearnt, non-deleted root skill.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            is_deleted: false,
            parents: Vec::new(),
            is_learnt: false,
            children: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replace the parent list, keeping the given order.
    pub fn with_parents<I, S>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parents = parents.into_iter().map(Into::into).collect();
        self
    }

    pub fn learnt(mut self, is_learnt: bool) -> Self {
        self.is_learnt = is_learnt;
        self
    }

    pub fn deleted(mut self, is_deleted: bool) -> Self {
        self.is_deleted = is_deleted;
        self
    }

    /// A skill with no parent references.
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// Copy of this skill marked as soft-deleted. All other fields are kept.
    pub fn tombstoned(&self) -> Self {
        Self {
            is_deleted: true,
            ..self.clone()
        }
    }
}

impl Base for Skill {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}
