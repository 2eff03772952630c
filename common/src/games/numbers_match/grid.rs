use super::types::{Cell, Position};

/// Rows of equally wide cell slots. Rows are appended at the bottom and
/// removed whole; a row is never resized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    columns: usize,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RowWidthMismatch {
    pub row: usize,
    pub expected: usize,
    pub found: usize,
}

impl Grid {
    pub fn new(columns: usize) -> Self {
        Self {
            rows: Vec::new(),
            columns,
        }
    }

    pub fn from_rows(columns: usize, rows: Vec<Vec<Cell>>) -> Result<Self, RowWidthMismatch> {
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != columns)
        {
            return Err(RowWidthMismatch {
                row,
                expected: columns,
                found,
            });
        }
        Ok(Self { rows, columns })
    }

    /// Builds a grid from a flat row-major list where `0` is an empty slot.
    /// The last row is padded with empty slots.
    pub fn from_values(columns: usize, values: &[u8]) -> Self {
        let mut grid = Self::new(columns);
        for chunk in values.chunks(columns.max(1)) {
            let mut row: Vec<Cell> = chunk.iter().map(|&v| (v > 0).then_some(v)).collect();
            row.resize(columns, None);
            grid.rows.push(row);
        }
        grid
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn linear_len(&self) -> usize {
        self.rows.len() * self.columns
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows.len() && pos.col < self.columns
    }

    /// Value at `pos`; `None` for empty slots and out-of-range positions alike.
    pub fn value(&self, pos: Position) -> Option<u8> {
        self.rows.get(pos.row)?.get(pos.col).copied().flatten()
    }

    pub fn value_at_linear(&self, index: usize) -> Option<u8> {
        if self.columns == 0 {
            return None;
        }
        self.value(Position::from_linear(index, self.columns))
    }

    /// Writes a slot. Returns false when `pos` is out of range.
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self.rows.get_mut(pos.row).and_then(|row| row.get_mut(pos.col)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) -> bool {
        if row.len() != self.columns {
            return false;
        }
        self.rows.push(row);
        true
    }

    /// Removes the given rows; indices refer to the grid before removal.
    pub fn remove_rows(&mut self, indices: &[usize]) {
        let mut sorted: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.rows.len())
            .collect();
        sorted.sort_unstable();
        sorted.dedup();
        for &index in sorted.iter().rev() {
            self.rows.remove(index);
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let columns = self.columns;
        (0..self.rows.len())
            .flat_map(move |row| (0..columns).map(move |col| Position::new(row, col)))
    }

    pub fn last_filled_linear(&self) -> Option<usize> {
        (0..self.linear_len())
            .rev()
            .find(|&i| self.value_at_linear(i).is_some())
    }

    /// Writes `values` into consecutive slots right after the last filled one,
    /// appending empty-padded rows as needed.
    pub fn append_values(&mut self, values: &[u8]) {
        if self.columns == 0 {
            return;
        }

        let mut write_index = self.last_filled_linear().map_or(0, |i| i + 1);
        for &value in values {
            while write_index >= self.linear_len() {
                self.rows.push(vec![None; self.columns]);
            }
            let pos = Position::from_linear(write_index, self.columns);
            self.rows[pos.row][pos.col] = Some(value);
            write_index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_creates_correct_layout() {
        let values: Vec<u8> = (0..42).map(|i| (i % 9) + 1).collect();
        let grid = Grid::from_values(9, &values);

        assert_eq!(grid.row_count(), 5);
        assert_eq!(grid.value(Position::new(0, 0)), Some(1));
        assert_eq!(grid.value(Position::new(0, 8)), Some(9));
        assert_eq!(grid.value(Position::new(4, 6)), None);
        assert_eq!(grid.rows()[4].len(), 9);
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let result = Grid::from_rows(2, vec![vec![Some(1), Some(2)], vec![Some(3)]]);

        assert_eq!(
            result,
            Err(RowWidthMismatch {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_value_out_of_range_is_none() {
        let grid = Grid::from_values(3, &[1, 2, 3]);

        assert_eq!(grid.value(Position::new(0, 3)), None);
        assert_eq!(grid.value(Position::new(1, 0)), None);
        assert!(!grid.contains(Position::new(1, 0)));
    }

    #[test]
    fn test_set_out_of_range_is_rejected() {
        let mut grid = Grid::from_values(3, &[1, 2, 3]);

        assert!(grid.set(Position::new(0, 1), Some(7)));
        assert!(!grid.set(Position::new(2, 0), Some(7)));
        assert_eq!(grid.value(Position::new(0, 1)), Some(7));
    }

    #[test]
    fn test_push_row_requires_matching_width() {
        let mut grid = Grid::new(3);

        assert!(!grid.push_row(vec![Some(1)]));
        assert!(grid.push_row(vec![Some(1), None, Some(2)]));
        assert_eq!(grid.row_count(), 1);
    }

    #[test]
    fn test_remove_rows_by_original_index() {
        #[rustfmt::skip]
        let mut grid = Grid::from_values(3, &[
            1, 1, 1,
            2, 2, 2,
            3, 3, 3,
            4, 4, 4,
        ]);

        grid.remove_rows(&[2, 0, 2]);

        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.value(Position::new(0, 0)), Some(2));
        assert_eq!(grid.value(Position::new(1, 0)), Some(4));
    }

    #[test]
    fn test_append_values_fills_trailing_slots_first() {
        #[rustfmt::skip]
        let mut grid = Grid::from_values(9, &[
            1, 0, 2, 0, 0, 0, 0, 0, 0,
            3, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 4, 0, 0, 0, 0, 0, 0, 0,
        ]);

        grid.append_values(&[1, 2, 3, 4]);

        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.value(Position::new(2, 2)), Some(1));
        assert_eq!(grid.value(Position::new(2, 3)), Some(2));
        assert_eq!(grid.value(Position::new(2, 4)), Some(3));
        assert_eq!(grid.value(Position::new(2, 5)), Some(4));
    }

    #[test]
    fn test_append_values_grows_rows_with_padding() {
        let mut grid = Grid::from_values(3, &[1, 2, 3]);

        grid.append_values(&[4, 5, 6, 7]);

        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.value(Position::new(1, 0)), Some(4));
        assert_eq!(grid.value(Position::new(2, 0)), Some(7));
        assert_eq!(grid.value(Position::new(2, 1)), None);
        assert!(grid.rows().iter().all(|row| row.len() == 3));
    }

    #[test]
    fn test_positions_are_row_major() {
        let grid = Grid::from_values(2, &[1, 2, 3, 4]);
        let positions: Vec<Position> = grid.positions().collect();

        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }
}
