//! Puzzle entry points: raw layout text in, path count out

use crate::error::Result;
use crate::layout::Layout;
use crate::policy::Part;
use crate::traversal::{PathEnumerator, PathQuery};

/// Count paths where small caves are visited at most once
pub fn part1(input: &str) -> Result<usize> {
    solve(input, Part::One)
}

/// Count paths where a single small cave may be visited twice
pub fn part2(input: &str) -> Result<usize> {
    solve(input, Part::Two)
}

/// Count paths for the given part
pub fn solve(input: &str, part: Part) -> Result<usize> {
    let layout = Layout::parse(input)?;
    let result = PathEnumerator::execute(&layout, &PathQuery::new(part.policy()))?;
    Ok(result.count)
}
