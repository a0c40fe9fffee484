//! Command implementations for the vinv CLI

pub mod completions;
pub mod ls;
pub mod version;
