//! Shared utilities for SkillChain.

pub mod logging;

pub use logging::init_tracing;
