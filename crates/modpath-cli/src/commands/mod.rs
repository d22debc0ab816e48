//! Subcommand implementations.

pub mod canonical;
pub mod check;
pub mod escape;
pub mod sort;
pub mod split;
