// src/graph/mod.rs
pub mod entries;
pub mod load;
pub mod model;
pub mod reach;

pub use model::{DependencyGraph, IncomingEdge, NodeRecord, OutgoingEdge};
pub use reach::{rank_top, RankEntry, ReachState};
