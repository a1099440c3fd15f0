//! Exhaustive path enumeration through a cave layout

use crate::cave::{self, START};
use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::policy::{VisitCounter, VisitPolicy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Path query builder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathQuery {
    /// Cave every path starts from
    #[serde(default = "default_start")]
    pub start: String,

    /// Admission rule applied at every step
    pub policy: VisitPolicy,

    /// Keep the complete paths, not just their count
    #[serde(default)]
    pub record_paths: bool,
}

fn default_start() -> String {
    START.to_string()
}

impl PathQuery {
    pub fn new(policy: VisitPolicy) -> Self {
        Self {
            start: default_start(),
            policy,
            record_paths: false,
        }
    }

    /// Start from a cave other than `start`
    pub fn from(mut self, start: impl Into<String>) -> Self {
        self.start = start.into();
        self
    }

    pub fn record_paths(mut self, record: bool) -> Self {
        self.record_paths = record;
        self
    }
}

/// A complete route ending in `end`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CavePath {
    pub caves: Vec<String>,
}

impl CavePath {
    /// Visits of `cave` along this path
    pub fn visits(&self, cave: &str) -> usize {
        self.caves.iter().filter(|c| *c == cave).count()
    }
}

impl fmt::Display for CavePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.caves.join(","))
    }
}

/// Traversal statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalStats {
    pub caves_entered: usize,
    pub branches_refused: usize,
    pub longest_path: usize,
}

/// Result of a path enumeration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResult {
    /// Number of complete paths
    pub count: usize,

    /// Complete paths, empty unless the query recorded them
    pub paths: Vec<CavePath>,

    pub stats: TraversalStats,
}

/// Pending step of the depth-first search.
///
/// Each frame owns its own snapshot of the route so far, so sibling
/// branches never see each other's visits.
struct Frame<'a> {
    cave: &'a str,
    path: Vec<&'a str>,
    visits: VisitCounter,
}

/// Path enumeration engine
pub struct PathEnumerator;

impl PathEnumerator {
    /// Enumerate every path from the query's start cave to `end`
    pub fn execute(layout: &Layout, query: &PathQuery) -> Result<PathResult> {
        tracing::debug!(
            "Enumerating paths: start={}, policy={:?}",
            query.start,
            query.policy
        );

        if !layout.contains(&query.start) {
            return Err(Error::CaveNotFound(query.start.clone()));
        }
        if let Some((from, to)) = layout.unbounded_passage(&query.start) {
            return Err(Error::UnboundedLayout {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        let mut count = 0;
        let mut paths = Vec::new();
        let mut stats = TraversalStats::default();
        let mut stack = vec![Frame {
            cave: query.start.as_str(),
            path: Vec::new(),
            visits: VisitCounter::new(),
        }];

        while let Some(Frame {
            cave,
            mut path,
            mut visits,
        }) = stack.pop()
        {
            if !query.policy.admits(cave, &visits) {
                tracing::trace!("Refused {} after {:?}", cave, path);
                stats.branches_refused += 1;
                continue;
            }

            visits.record(cave);
            path.push(cave);
            stats.caves_entered += 1;
            stats.longest_path = stats.longest_path.max(path.len());

            if cave::is_end(cave) {
                count += 1;
                if query.record_paths {
                    paths.push(CavePath {
                        caves: path.iter().map(|c| c.to_string()).collect(),
                    });
                }
                continue;
            }

            let neighbours = layout.neighbours(cave).ok_or_else(|| {
                Error::Internal(format!("cave {} reached but missing from layout", cave))
            })?;

            // Reverse so the first neighbour is explored first.
            for next in neighbours.iter().rev() {
                stack.push(Frame {
                    cave: next.as_str(),
                    path: path.clone(),
                    visits: visits.clone(),
                });
            }
        }

        tracing::debug!(
            "Found {} paths ({} caves entered, {} branches refused)",
            count,
            stats.caves_entered,
            stats.branches_refused
        );

        Ok(PathResult {
            count,
            paths,
            stats,
        })
    }
}
