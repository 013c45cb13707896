//! Observability setup for Skilltree hosts.
//!
//! The library crates only emit `tracing` events; embedding applications call
//! [`tracing_setup::init_tracing`] once at startup to decide where they go.

pub mod tracing_setup;
