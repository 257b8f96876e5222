//! Command implementations for fixnotes CLI

pub mod completions;
pub mod helpers;
pub mod list;
pub mod render;
pub mod version;
