//! Connection rules between two grid cells.
//!
//! A pair is connectable when some path topology links them through slots
//! that are either empty or already matched (blocked). Topologies are tried in
//! [`PathType::ALL`] order and the first one that holds decides the reported
//! path and points. Value rules are not checked here.

use super::blocked::BlockedSet;
use super::grid::Grid;
use super::types::{MatchResult, PathType, Position};

pub fn validate(
    first: Position,
    second: Position,
    grid: &Grid,
    blocked: &BlockedSet,
) -> MatchResult {
    if first == second || !grid.contains(first) || !grid.contains(second) {
        return MatchResult::none();
    }

    let view = GridView { grid, blocked };
    PathType::ALL
        .into_iter()
        .find(|&path| view.connects(path, first, second))
        .map_or_else(MatchResult::none, MatchResult::via)
}

impl PathType {
    /// Checks this single topology, ignoring the priority order.
    pub fn connects(
        self,
        first: Position,
        second: Position,
        grid: &Grid,
        blocked: &BlockedSet,
    ) -> bool {
        if first == second || !grid.contains(first) || !grid.contains(second) {
            return false;
        }
        GridView { grid, blocked }.connects(self, first, second)
    }
}

struct GridView<'a> {
    grid: &'a Grid,
    blocked: &'a BlockedSet,
}

impl GridView<'_> {
    fn connects(&self, path: PathType, first: Position, second: Position) -> bool {
        match path {
            PathType::Adjacent => is_adjacent(first, second),
            PathType::Straight => self.has_straight_path(first, second),
            PathType::Diagonal => self.has_diagonal_path(first, second),
            PathType::SnakeWrap => self.has_snake_wrap(first, second),
            PathType::HeadToTail => self.has_head_to_tail(first, second),
        }
    }

    fn is_clear(&self, pos: Position) -> bool {
        self.blocked.contains(pos) || self.grid.value(pos).is_none()
    }

    fn is_clear_linear(&self, index: usize) -> bool {
        self.is_clear(Position::from_linear(index, self.grid.columns()))
    }

    fn is_active_linear(&self, index: usize) -> bool {
        !self.is_clear_linear(index)
    }

    fn row_segment_clear(&self, row: usize, cols: std::ops::Range<usize>) -> bool {
        cols.into_iter().all(|col| self.is_clear(Position::new(row, col)))
    }

    fn has_straight_path(&self, first: Position, second: Position) -> bool {
        if first.row == second.row {
            let (low, high) = ordered(first.col, second.col);
            return self.row_segment_clear(first.row, low + 1..high);
        }
        if first.col == second.col {
            let (low, high) = ordered(first.row, second.row);
            return (low + 1..high).all(|row| self.is_clear(Position::new(row, first.col)));
        }
        false
    }

    fn has_diagonal_path(&self, first: Position, second: Position) -> bool {
        let row_diff = second.row as isize - first.row as isize;
        let col_diff = second.col as isize - first.col as isize;
        if row_diff == 0 || row_diff.abs() != col_diff.abs() {
            return false;
        }

        let row_step = row_diff.signum();
        let col_step = col_diff.signum();
        (1..row_diff.abs()).all(|step| {
            let row = first.row as isize + row_step * step;
            let col = first.col as isize + col_step * step;
            self.is_clear(Position::new(row as usize, col as usize))
        })
    }

    fn has_snake_wrap(&self, first: Position, second: Position) -> bool {
        if first.row == second.row {
            return false;
        }
        let (upper, lower) = if first.row < second.row {
            (first, second)
        } else {
            (second, first)
        };
        let columns = self.grid.columns();
        let middle_clear =
            (upper.row + 1..lower.row).all(|row| self.row_segment_clear(row, 0..columns));
        if !middle_clear {
            return false;
        }

        let rightward = self.row_segment_clear(upper.row, upper.col + 1..columns)
            && self.row_segment_clear(lower.row, 0..lower.col);
        let leftward = self.row_segment_clear(upper.row, 0..upper.col)
            && self.row_segment_clear(lower.row, lower.col + 1..columns);
        rightward || leftward
    }

    fn has_head_to_tail(&self, first: Position, second: Position) -> bool {
        let len = self.grid.linear_len();
        let Some(head) = (0..len).find(|&i| self.is_active_linear(i)) else {
            return false;
        };
        let Some(tail) = (0..len).rev().find(|&i| self.is_active_linear(i)) else {
            return false;
        };
        if head == tail {
            return false;
        }

        let columns = self.grid.columns();
        let (a, b) = ordered(first.to_linear(columns), second.to_linear(columns));
        if (a, b) != (head, tail) {
            return false;
        }

        let clockwise = (head + 1..tail).all(|i| self.is_clear_linear(i));
        let counter_clockwise = (tail + 1..len).chain(0..head).all(|i| self.is_clear_linear(i));
        clockwise || counter_clockwise
    }
}

fn is_adjacent(first: Position, second: Position) -> bool {
    first != second && first.row.abs_diff(second.row) <= 1 && first.col.abs_diff(second.col) <= 1
}

fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}
