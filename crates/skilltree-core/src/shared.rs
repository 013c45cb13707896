//! Thread-safe handle over a skill graph.
//!
//! `SkillGraph` has no internal locking. Hosts that touch one graph from
//! several threads go through `SharedSkillGraph`, which serializes writers
//! behind an `RwLock`. Reads hand back owned clones so no guard escapes.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use skilltree_types::skill::Skill;

use crate::graph::SkillGraph;

/// Cloneable shared view of one [`SkillGraph`].
///
/// Cloning produces another handle to the same graph (backed by
/// `Arc<RwLock<...>>`). A panic while holding the lock does not poison the
/// handle for other threads: every operation on `SkillGraph` leaves it in a
/// consistent state, so the inner value is recovered.
#[derive(Debug, Clone)]
pub struct SharedSkillGraph {
    inner: Arc<RwLock<SkillGraph>>,
}

impl SharedSkillGraph {
    pub fn new(graph: SkillGraph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    pub fn add_skill(&self, skill: Skill) -> Skill {
        self.write().add_skill(skill)
    }

    pub fn disable_skill(&self, skill_id: &str) {
        self.write().disable_skill(skill_id);
    }

    pub fn get_skill(&self, skill_id: &str) -> Option<Skill> {
        self.read().get_skill(skill_id).cloned()
    }

    pub fn get_skills(&self, is_learnt: Option<bool>) -> Vec<Skill> {
        self.read()
            .get_skills(is_learnt)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn set_learnt(&self, skill_id: &str, is_learnt: bool) -> bool {
        self.write().set_learnt(skill_id, is_learnt)
    }

    pub fn wipe(&self) {
        self.write().wipe();
    }

    /// Owned copy of the graph as it is right now.
    pub fn snapshot(&self) -> SkillGraph {
        self.read().clone()
    }

    /// Run `f` against the graph under a read lock.
    ///
    /// Keep `f` short: writers wait until it returns.
    pub fn read_with<R>(&self, f: impl FnOnce(&SkillGraph) -> R) -> R {
        f(&*self.read())
    }

    fn read(&self) -> RwLockReadGuard<'_, SkillGraph> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SkillGraph> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<SkillGraph> for SharedSkillGraph {
    fn from(graph: SkillGraph) -> Self {
        Self::new(graph)
    }
}
