//! Cave admission policies

use crate::cave::{self, CaveKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Number of times each cave appears on the path being explored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitCounter {
    counts: HashMap<String, usize>,
}

impl VisitCounter {
    /// Empty counter, no cave visited yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Visits recorded for `cave` (zero if never entered)
    pub fn count(&self, cave: &str) -> usize {
        self.counts.get(cave).copied().unwrap_or(0)
    }

    /// Count one more visit of `cave`
    pub fn record(&mut self, cave: &str) {
        *self.counts.entry(cave.to_string()).or_insert(0) += 1;
    }

    /// Visited caves with their counts
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(cave, count)| (cave.as_str(), *count))
    }
}

/// Rule deciding whether a cave may be entered given the visits so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitPolicy {
    /// Small caves at most once, big caves freely
    SingleVisit,
    /// As `SingleVisit`, but one small cave per path may be entered twice
    OneSmallTwice,
}

impl VisitPolicy {
    /// Whether `cave` may be entered next, given the visits so far
    pub fn admits(&self, cave: &str, visits: &VisitCounter) -> bool {
        let previous = visits.count(cave);
        if previous == 0 {
            return true;
        }

        match (self, CaveKind::of(cave)) {
            (_, Some(CaveKind::Start)) => false,
            (Self::SingleVisit, Some(CaveKind::Small)) => false,
            (Self::OneSmallTwice, Some(CaveKind::Small)) => {
                previous <= 1 && !Self::other_small_revisited(cave, visits)
            }
            _ => true,
        }
    }

    fn other_small_revisited(cave: &str, visits: &VisitCounter) -> bool {
        visits
            .iter()
            .any(|(other, count)| count > 1 && other != cave && cave::is_small(other))
    }
}

/// Puzzle part, selecting the visit policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Part {
    One,
    Two,
}

impl Part {
    /// Visit policy this part counts paths under
    pub fn policy(self) -> VisitPolicy {
        match self {
            Self::One => VisitPolicy::SingleVisit,
            Self::Two => VisitPolicy::OneSmallTwice,
        }
    }
}

impl From<Part> for u8 {
    fn from(part: Part) -> Self {
        match part {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

impl TryFrom<u8> for Part {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(format!("invalid part: {} (choose from 1, 2)", other)),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}
