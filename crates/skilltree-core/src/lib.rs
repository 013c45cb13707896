//! Skill graph operations for Skilltree.
//!
//! `SkillGraph` owns a flat, ordered collection of skill records and
//! implements soft-delete and learnt-state queries over it. Everything
//! hierarchical (children, roots, tiers, learning order) is derived on demand
//! by `index` and `topology` and never stored on the records.
//!
//! Depends only on `skilltree-types`; the only I/O is the optional config
//! loader.

pub mod config;
pub mod graph;
pub mod index;
pub mod shared;
pub mod topology;

pub use graph::SkillGraph;
pub use shared::SharedSkillGraph;
pub use topology::SkillTopology;
