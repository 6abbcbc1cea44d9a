//! CLI command implementations.

pub mod fetch;
pub mod inspect;
pub mod predict;
