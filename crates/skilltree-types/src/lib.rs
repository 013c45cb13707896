//! Shared domain types for Skilltree.
//!
//! This crate contains the record shapes used across the workspace: the
//! `Base` trait, the `Skill` entity, configuration types, and error types.
//!
//! Zero infrastructure dependencies -- only serde, toml, thiserror.

pub mod config;
pub mod error;
pub mod skill;
