//! Command implementations for textpatch CLI

pub mod apply;
pub mod check;
pub mod completions;
pub mod helpers;
pub mod version;
