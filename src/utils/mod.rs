//! Utility modules shared by the asset commands.

pub mod exec;
pub mod path;
