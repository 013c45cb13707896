//! The skill graph: an ordered collection of skill records with soft-delete.
//!
//! Records are kept in a flat `Vec` in insertion order. Nothing here
//! validates ids or parent references: duplicate ids coexist until a disable
//! collapses them, and parents may point at skills that do not exist. Lookup
//! misses are silent (`None`, `false`, or a no-op) and never an error.
//!
//! Any hierarchy is derived on demand from the parent projection returned by
//! [`SkillGraph::adjacency_list`]; see [`crate::index`] and [`crate::topology`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use skilltree_types::config::TopologyConfig;
use skilltree_types::error::TopologyError;
use skilltree_types::skill::{Base, Skill};

use crate::index;
use crate::topology::SkillTopology;

/// A named skill tree owning its skill records.
///
/// Graphs themselves are never soft-deleted, so [`Base::is_deleted`] is
/// always `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGraph {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    skills: Vec<Skill>,
}

impl SkillGraph {
    /// Create an empty graph.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::with_skills(id, title, description, Vec::new())
    }

    /// Create a graph seeded with `skills`, stored exactly as given.
    pub fn with_skills(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        skills: Vec<Skill>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            skills,
        }
    }

    /// All records in sequence order, tombstones included.
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Append a copy of `skill` and hand the caller's value back.
    ///
    /// The stored copy always has `children` cleared; `is_deleted` is kept as
    /// supplied. No uniqueness check is made against existing ids.
    pub fn add_skill(&mut self, skill: Skill) -> Skill {
        let stored = Skill {
            id: skill.id.clone(),
            title: skill.title.clone(),
            description: skill.description.clone(),
            is_deleted: skill.is_deleted,
            parents: skill.parents.clone(),
            is_learnt: skill.is_learnt,
            children: Vec::new(),
        };
        debug!(
            graph_id = %self.id,
            skill_id = %stored.id,
            parents = stored.parents.len(),
            "skill added"
        );
        self.skills.push(stored);
        skill
    }

    /// Soft-delete every record with `skill_id`.
    ///
    /// All matching records are removed and a single tombstoned copy of the
    /// first match is appended at the tail. Unknown ids are a no-op.
    pub fn disable_skill(&mut self, skill_id: &str) {
        let Some(tombstone) = self.get_skill(skill_id).map(Skill::tombstoned) else {
            debug!(graph_id = %self.id, skill_id, "disable skipped: skill not found");
            return;
        };

        let before = self.skills.len();
        self.skills.retain(|s| s.id != skill_id);
        debug!(
            graph_id = %self.id,
            skill_id,
            superseded = before - self.skills.len(),
            "skill disabled"
        );
        self.skills.push(tombstone);
    }

    /// First record with `skill_id` in sequence order, tombstones included.
    pub fn get_skill(&self, skill_id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == skill_id)
    }

    /// Non-deleted skills in sequence order, optionally filtered by learnt state.
    pub fn get_skills(&self, is_learnt: Option<bool>) -> Vec<&Skill> {
        self.skills
            .iter()
            .filter(|s| !s.is_deleted)
            .filter(|s| is_learnt.is_none_or(|learnt| s.is_learnt == learnt))
            .collect()
    }

    /// Set the learnt flag on every record with `skill_id`.
    ///
    /// Returns `false` when no record matched. Sequence order is unchanged.
    pub fn set_learnt(&mut self, skill_id: &str, is_learnt: bool) -> bool {
        let mut matched = false;
        for skill in self.skills.iter_mut().filter(|s| s.id == skill_id) {
            skill.is_learnt = is_learnt;
            matched = true;
        }
        if matched {
            debug!(graph_id = %self.id, skill_id, is_learnt, "learnt state updated");
        } else {
            debug!(graph_id = %self.id, skill_id, "learnt update skipped: skill not found");
        }
        matched
    }

    /// Drop every skill record.
    pub fn wipe(&mut self) {
        debug!(graph_id = %self.id, removed = self.skills.len(), "graph wiped");
        self.skills = Vec::new();
    }

    /// Parent id -> child ids for the non-deleted skills.
    pub fn children_index(&self) -> HashMap<String, Vec<String>> {
        index::children_index(self.get_skills(None))
    }

    /// Derive a traversable topology from the current records.
    pub fn topology(&self, config: &TopologyConfig) -> Result<SkillTopology, TopologyError> {
        SkillTopology::build(self, config)
    }

    /// Each record paired with its parent ids, in sequence order.
    ///
    /// This is the raw projection every derived view starts from. Deleted
    /// records and duplicate ids are included as they appear.
    pub(crate) fn adjacency_list(&self) -> Vec<(&Skill, &[String])> {
        self.skills
            .iter()
            .map(|skill| (skill, skill.parents.as_slice()))
            .collect()
    }
}

impl Base for SkillGraph {
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
        false
    }
}
