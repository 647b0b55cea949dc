//! Semantic entity marking and export (community-level document tagging).

pub mod entity;
pub mod export;
pub mod marking;
