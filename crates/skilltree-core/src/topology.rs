//! Traversable topology derived from a skill graph.
//!
//! Uses `petgraph` to turn the flat parent projection into a directed graph
//! with edges from parent to child. Topological sort rejects cycles, and
//! depth-based grouping produces tiers: every skill in a tier only depends on
//! skills in earlier tiers.
//!
//! The topology is a snapshot. It does not track later mutations of the
//! [`SkillGraph`] it was built from.

use std::collections::{HashMap, HashSet};

use petgraph::Direction;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use skilltree_types::config::{DanglingParentPolicy, TopologyConfig};
use skilltree_types::error::TopologyError;
use skilltree_types::skill::Skill;

use crate::graph::SkillGraph;

/// Node weight: the parts of a skill record traversal cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillNode {
    pub id: String,
    pub is_learnt: bool,
    pub is_deleted: bool,
}

impl From<&Skill> for SkillNode {
    fn from(skill: &Skill) -> Self {
        Self {
            id: skill.id.clone(),
            is_learnt: skill.is_learnt,
            is_deleted: skill.is_deleted,
        }
    }
}

/// Acyclic parent -> child view over a skill graph.
///
/// Node indices follow the graph's sequence order, and every query that
/// returns several skills returns them in that order. Unknown ids yield empty
/// results rather than errors.
#[derive(Debug, Clone)]
pub struct SkillTopology {
    dag: DiGraph<SkillNode, ()>,
    ids: HashMap<String, NodeIndex>,
    /// Depth per node, indexed by `NodeIndex::index()`.
    depths: Vec<usize>,
    /// Tiers flattened: parents always precede their children.
    order: Vec<NodeIndex>,
}

impl SkillTopology {
    /// Build the topology for `graph`.
    ///
    /// 1. One node per skill id (first record wins), skipping tombstones
    ///    unless `include_deleted` is set.
    /// 2. One edge per resolved parent reference; unresolved ones follow the
    ///    configured [`DanglingParentPolicy`].
    /// 3. `toposort` rejects cycles, self-references included.
    /// 4. Depth = 0 for skills with no resolved parents, else one more than
    ///    the deepest parent.
    pub fn build(graph: &SkillGraph, config: &TopologyConfig) -> Result<Self, TopologyError> {
        let mut dag = DiGraph::<SkillNode, ()>::new();
        let mut ids: HashMap<String, NodeIndex> = HashMap::new();
        let mut nodes: Vec<(NodeIndex, &Skill, &[String])> = Vec::new();

        for (skill, parents) in graph.adjacency_list() {
            if skill.is_deleted && !config.include_deleted {
                continue;
            }
            if ids.contains_key(&skill.id) {
                continue;
            }
            let idx = dag.add_node(SkillNode::from(skill));
            ids.insert(skill.id.clone(), idx);
            nodes.push((idx, skill, parents));
        }

        for (child_idx, skill, parents) in &nodes {
            for parent in *parents {
                match ids.get(parent) {
                    Some(&parent_idx) => {
                        if !dag.contains_edge(parent_idx, *child_idx) {
                            dag.add_edge(parent_idx, *child_idx, ());
                        }
                    }
                    None => match config.dangling_parents {
                        DanglingParentPolicy::Ignore => {
                            debug!(
                                skill_id = %skill.id,
                                parent_id = %parent,
                                "ignoring dangling parent reference"
                            );
                        }
                        DanglingParentPolicy::Error => {
                            return Err(TopologyError::DanglingParent {
                                skill_id: skill.id.clone(),
                                parent_id: parent.clone(),
                            });
                        }
                    },
                }
            }
        }

        let sorted = toposort(&dag, None)
            .map_err(|cycle| TopologyError::CycleDetected(dag[cycle.node_id()].id.clone()))?;

        let mut depths = vec![0usize; dag.node_count()];
        for &idx in &sorted {
            let depth = dag
                .neighbors_directed(idx, Direction::Incoming)
                .map(|parent| depths[parent.index()] + 1)
                .max()
                .unwrap_or(0);
            depths[idx.index()] = depth;
        }

        let mut order: Vec<NodeIndex> = dag.node_indices().collect();
        order.sort_by_key(|idx| (depths[idx.index()], idx.index()));

        debug!(
            graph_id = %graph.id,
            nodes = dag.node_count(),
            edges = dag.edge_count(),
            tiers = depths.iter().max().map_or(0, |d| d + 1),
            "topology built"
        );

        Ok(Self {
            dag,
            ids,
            depths,
            order,
        })
    }

    pub fn len(&self) -> usize {
        self.dag.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.dag.node_count() == 0
    }

    pub fn contains(&self, skill_id: &str) -> bool {
        self.ids.contains_key(skill_id)
    }

    pub fn node(&self, skill_id: &str) -> Option<&SkillNode> {
        self.ids.get(skill_id).map(|&idx| &self.dag[idx])
    }

    /// Skills with no resolved parents.
    pub fn roots(&self) -> Vec<&str> {
        self.dag
            .node_indices()
            .filter(|&idx| {
                self.dag
                    .neighbors_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .map(|idx| self.dag[idx].id.as_str())
            .collect()
    }

    /// Direct children of `skill_id`.
    pub fn children(&self, skill_id: &str) -> Vec<&str> {
        self.neighbors(skill_id, Direction::Outgoing)
    }

    /// Resolved direct parents of `skill_id`.
    pub fn parents(&self, skill_id: &str) -> Vec<&str> {
        self.neighbors(skill_id, Direction::Incoming)
    }

    /// Length of the longest parent chain above `skill_id`; 0 for roots.
    pub fn depth(&self, skill_id: &str) -> Option<usize> {
        self.ids.get(skill_id).map(|idx| self.depths[idx.index()])
    }

    /// Skills grouped by depth. Index 0 holds the roots.
    pub fn tiers(&self) -> Vec<Vec<&str>> {
        let mut tiers: Vec<Vec<&str>> = Vec::new();
        for &idx in &self.order {
            let depth = self.depths[idx.index()];
            if tiers.len() <= depth {
                tiers.resize_with(depth + 1, Vec::new);
            }
            tiers[depth].push(self.dag[idx].id.as_str());
        }
        tiers
    }

    /// Every skill, each one after all of its parents.
    pub fn learning_order(&self) -> Vec<&str> {
        self.order
            .iter()
            .map(|&idx| self.dag[idx].id.as_str())
            .collect()
    }

    /// Transitive parents of `skill_id`, in learning order.
    pub fn prerequisites(&self, skill_id: &str) -> Vec<&str> {
        let Some(&start) = self.ids.get(skill_id) else {
            return Vec::new();
        };

        let mut visited = HashSet::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            for parent in self.dag.neighbors_directed(current, Direction::Incoming) {
                if visited.insert(parent) {
                    stack.push(parent);
                }
            }
        }

        self.order
            .iter()
            .filter(|idx| visited.contains(*idx))
            .map(|&idx| self.dag[idx].id.as_str())
            .collect()
    }

    /// Live, unlearnt skills whose resolved parents are all learnt.
    pub fn unlockable(&self) -> Vec<&str> {
        self.dag
            .node_indices()
            .filter(|&idx| {
                let node = &self.dag[idx];
                !node.is_learnt
                    && !node.is_deleted
                    && self
                        .dag
                        .neighbors_directed(idx, Direction::Incoming)
                        .all(|parent| self.dag[parent].is_learnt)
            })
            .map(|idx| self.dag[idx].id.as_str())
            .collect()
    }

    fn neighbors(&self, skill_id: &str, direction: Direction) -> Vec<&str> {
        let Some(&idx) = self.ids.get(skill_id) else {
            return Vec::new();
        };
        let mut neighbors: Vec<NodeIndex> =
            self.dag.neighbors_directed(idx, direction).collect();
        neighbors.sort();
        neighbors
            .into_iter()
            .map(|n| self.dag[n].id.as_str())
            .collect()
    }
}
