//! Cave layout (undirected graph) and its parser

use crate::cave;
use crate::error::{Error, Result};
use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};
use std::str::FromStr;

/// Undirected graph of caves, keyed by label.
///
/// Every cave named by a passage is a key, and every passage is stored in
/// both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    passages: BTreeMap<String, BTreeSet<String>>,
}

impl Layout {
    /// Parse a layout from `A-B` lines
    pub fn parse(input: &str) -> Result<Self> {
        let mut layout = Self::default();

        for line in input.lines() {
            let (first, second) = parse_passage(line)?;
            layout.connect(first, second);
        }

        tracing::debug!(
            "Parsed layout: {} caves, {} passages",
            layout.cave_count(),
            layout.passage_count()
        );

        Ok(layout)
    }

    fn connect(&mut self, first: &str, second: &str) {
        self.passages
            .entry(first.to_string())
            .or_default()
            .insert(second.to_string());
        self.passages
            .entry(second.to_string())
            .or_default()
            .insert(first.to_string());
    }

    /// Caves directly connected to `cave`
    pub fn neighbours(&self, cave: &str) -> Option<&BTreeSet<String>> {
        self.passages.get(cave)
    }

    /// Whether `cave` is named by any passage
    pub fn contains(&self, cave: &str) -> bool {
        self.passages.contains_key(cave)
    }

    /// All cave labels, in sorted order
    pub fn caves(&self) -> impl Iterator<Item = &str> {
        self.passages.keys().map(String::as_str)
    }

    /// Number of distinct caves
    pub fn cave_count(&self) -> usize {
        self.passages.len()
    }

    /// Number of distinct undirected passages
    pub fn passage_count(&self) -> usize {
        let ends: usize = self.passages.values().map(BTreeSet::len).sum();
        let loops = self
            .passages
            .iter()
            .filter(|(cave, neighbours)| neighbours.contains(*cave))
            .count();
        // A self-loop is stored once, every other passage twice.
        (ends - loops) / 2 + loops
    }

    /// First passage joining two big caves that a path from `start` can reach.
    ///
    /// Big caves admit any number of visits, so such a passage lets a path
    /// bounce between them forever. Caves only reachable through `end`, or
    /// not connected to `start` at all, are never entered.
    pub fn unbounded_passage(&self, start: &str) -> Option<(&str, &str)> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();

        if let Some((start, _)) = self.passages.get_key_value(start) {
            visited.insert(start.as_str());
            queue.push_back(start.as_str());
        }

        while let Some(current) = queue.pop_front() {
            let Some(neighbours) = self.passages.get(current) else {
                continue;
            };

            if cave::is_big(current) {
                if let Some(to) = neighbours.iter().find(|to| cave::is_big(to)) {
                    return Some((current, to.as_str()));
                }
            }

            if cave::is_end(current) {
                continue;
            }

            for next in neighbours {
                if visited.insert(next.as_str()) {
                    queue.push_back(next.as_str());
                }
            }
        }

        None
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_passage(line: &str) -> Result<(&str, &str)> {
    let tokens: Vec<&str> = line.split('-').collect();
    let [first, second] = tokens.as_slice() else {
        return Err(Error::Parse {
            line: line.to_string(),
            found: tokens.len(),
        });
    };

    cave::validate_cave_name(first)?;
    cave::validate_cave_name(second)?;

    Ok((*first, *second))
}
