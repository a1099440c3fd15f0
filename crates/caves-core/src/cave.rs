//! Cave labels and their classification

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Label of the cave every path begins in
pub const START: &str = "start";

/// Label of the cave every path ends in
pub const END: &str = "end";

/// Kind of a cave, derived from its label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaveKind {
    Start,
    End,
    /// All-lowercase label, revisits restricted by policy
    Small,
    /// All-uppercase label, revisits unrestricted
    Big,
}

impl CaveKind {
    /// Classify a label. Returns `None` for empty or mixed-case labels.
    pub fn of(label: &str) -> Option<Self> {
        if label.is_empty() {
            return None;
        }
        if label == START {
            return Some(Self::Start);
        }
        if label == END {
            return Some(Self::End);
        }
        if label.chars().all(|c| !c.is_uppercase()) {
            return Some(Self::Small);
        }
        if label.chars().all(|c| !c.is_lowercase()) {
            return Some(Self::Big);
        }
        None
    }
}

/// Check that a label classifies as exactly one kind of cave
pub fn validate_cave_name(label: &str) -> Result<CaveKind> {
    CaveKind::of(label).ok_or_else(|| Error::InvalidCave(label.to_string()))
}

/// Whether `label` is the `end` cave
pub fn is_end(label: &str) -> bool {
    label == END
}

/// Whether `label` names a small (all-lowercase) cave
pub fn is_small(label: &str) -> bool {
    CaveKind::of(label) == Some(CaveKind::Small)
}

/// Whether `label` names a big (all-uppercase) cave
pub fn is_big(label: &str) -> bool {
    CaveKind::of(label) == Some(CaveKind::Big)
}
