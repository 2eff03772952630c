use std::collections::BTreeSet;

use super::types::Position;

/// Cells that were matched but are still on the grid until their row is
/// compacted. Path checks treat them as see-through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockedSet {
    cells: BTreeSet<Position>,
}

impl BlockedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pos: Position) -> bool {
        self.cells.insert(pos)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }

    pub fn is_row_complete(&self, row: usize, columns: usize) -> bool {
        columns > 0 && (0..columns).all(|col| self.contains(Position::new(row, col)))
    }

    /// Drops coordinates on `removed_rows` and shifts every remaining
    /// coordinate up by the number of removed rows above it.
    pub fn compact(&mut self, removed_rows: &[usize]) {
        if removed_rows.is_empty() {
            return;
        }
        let mut removed: Vec<usize> = removed_rows.to_vec();
        removed.sort_unstable();
        removed.dedup();

        self.cells = self
            .cells
            .iter()
            .filter(|pos| removed.binary_search(&pos.row).is_err())
            .map(|pos| {
                let shift = removed.partition_point(|&r| r < pos.row);
                Position::new(pos.row - shift, pos.col)
            })
            .collect();
    }
}

impl FromIterator<Position> for BlockedSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
