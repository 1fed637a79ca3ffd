//! Parser module — `//$` directives and the region state machine.

pub mod directive;
pub mod marker;

pub use marker::parse;
