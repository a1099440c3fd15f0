//! Caves Core - Path enumeration through cave layouts
//!
//! This crate parses a cave layout (an undirected graph of labelled caves)
//! and counts every route from `start` to `end` under one of two revisit
//! policies.

pub mod cave;
pub mod error;
pub mod layout;
pub mod policy;
pub mod solution;
pub mod traversal;

pub use cave::{CaveKind, END, START};
pub use error::{Error, Result};
pub use layout::Layout;
pub use policy::{Part, VisitCounter, VisitPolicy};
pub use solution::{part1, part2, solve};
pub use traversal::{CavePath, PathEnumerator, PathQuery, PathResult, TraversalStats};
