use super::blocked::BlockedSet;
use super::connection;
use super::grid::Grid;
use super::types::{MatchResult, MatchRule, PathType, Position};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MatchRejection {
    SameCell,
    InvalidCoordinate,
    /// One of the cells is empty or already matched.
    Unavailable,
    ValuesMismatch,
    NoValidPath,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchOutcome {
    pub path_type: PathType,
    pub points: u32,
    /// Indices, in the grid before compaction, of the rows removed by this match.
    pub rows_completed: Vec<usize>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MatchEngine {
    rule: MatchRule,
}

impl MatchEngine {
    pub fn new(rule: MatchRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> MatchRule {
        self.rule
    }

    /// Full legality check without touching the grid.
    pub fn check(
        &self,
        first: Position,
        second: Position,
        grid: &Grid,
        blocked: &BlockedSet,
    ) -> Result<MatchResult, MatchRejection> {
        if first == second {
            return Err(MatchRejection::SameCell);
        }
        if !grid.contains(first) || !grid.contains(second) {
            return Err(MatchRejection::InvalidCoordinate);
        }
        if blocked.contains(first) || blocked.contains(second) {
            return Err(MatchRejection::Unavailable);
        }
        let (Some(value1), Some(value2)) = (grid.value(first), grid.value(second)) else {
            return Err(MatchRejection::Unavailable);
        };
        if !self.rule.accepts(value1, value2) {
            return Err(MatchRejection::ValuesMismatch);
        }

        let result = connection::validate(first, second, grid, blocked);
        if !result.matched {
            return Err(MatchRejection::NoValidPath);
        }
        Ok(result)
    }

    /// Blocks both cells on success and compacts any row that became fully
    /// blocked.
    pub fn attempt_match(
        &self,
        first: Position,
        second: Position,
        grid: &mut Grid,
        blocked: &mut BlockedSet,
    ) -> Result<MatchOutcome, MatchRejection> {
        let result = self.check(first, second, grid, blocked)?;
        let Some(path_type) = result.path_type else {
            return Err(MatchRejection::NoValidPath);
        };

        blocked.insert(first);
        blocked.insert(second);
        let rows_completed = compact_completed_rows(grid, blocked);

        Ok(MatchOutcome {
            path_type,
            points: result.points,
            rows_completed,
        })
    }
}

/// Removes every fully blocked row and reindexes the blocked set to match.
pub fn compact_completed_rows(grid: &mut Grid, blocked: &mut BlockedSet) -> Vec<usize> {
    let columns = grid.columns();
    let completed: Vec<usize> = (0..grid.row_count())
        .filter(|&row| blocked.is_row_complete(row, columns))
        .collect();

    if !completed.is_empty() {
        grid.remove_rows(&completed);
        blocked.compact(&completed);
    }
    completed
}
