use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::blocked::BlockedSet;
use super::grid::Grid;
use super::resources::ResourceCounts;
use super::state_machine::GameState;
use super::types::{Cell, Position, is_valid_value};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to access snapshot file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed snapshot: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell {cell} holds {value}, outside 1..=9")]
    InvalidValue { cell: Position, value: u8 },
    #[error("blocked cell {0} is out of range or empty")]
    InvalidBlockedCell(Position),
    #[error("level must be at least 1")]
    InvalidLevel,
}

/// Persisted form of a session. Keys are camelCase on disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub grid: Vec<Vec<Cell>>,
    pub blocked_cells: Vec<[usize; 2]>,
    pub resources: ResourceCounts,
    pub level: u32,
    pub score: u32,
    pub time_left: u32,
    pub state: GameState,
}

impl Snapshot {
    pub fn to_yaml(&self) -> Result<String, SnapshotError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_yaml_ng::from_str(content)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Column count is taken from the first row; an empty grid has none.
    pub fn columns(&self) -> Option<usize> {
        self.grid.first().map(Vec::len)
    }

    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.level == 0 {
            return Err(SnapshotError::InvalidLevel);
        }

        let columns = self.columns().unwrap_or(0);
        for (row, cells) in self.grid.iter().enumerate() {
            if cells.len() != columns {
                return Err(SnapshotError::RaggedRow {
                    row,
                    expected: columns,
                    found: cells.len(),
                });
            }
            for (col, cell) in cells.iter().enumerate() {
                if let Some(value) = *cell
                    && !is_valid_value(value)
                {
                    return Err(SnapshotError::InvalidValue {
                        cell: Position::new(row, col),
                        value,
                    });
                }
            }
        }

        for &[row, col] in &self.blocked_cells {
            let pos = Position::new(row, col);
            let filled = self
                .grid
                .get(row)
                .and_then(|cells| cells.get(col))
                .is_some_and(Option::is_some);
            if !filled {
                return Err(SnapshotError::InvalidBlockedCell(pos));
            }
        }

        Ok(())
    }

    /// Rebuilds the grid with the given column count, used when the snapshot
    /// grid is empty and carries no width of its own.
    pub fn build_grid(&self, default_columns: usize) -> Result<Grid, SnapshotError> {
        let columns = self.columns().unwrap_or(default_columns);
        Grid::from_rows(columns, self.grid.clone()).map_err(|e| SnapshotError::RaggedRow {
            row: e.row,
            expected: e.expected,
            found: e.found,
        })
    }

    pub fn build_blocked(&self) -> BlockedSet {
        self.blocked_cells
            .iter()
            .map(|&[row, col]| Position::new(row, col))
            .collect()
    }
}

pub fn save_snapshot(snapshot: &Snapshot, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
    fs::write(path, snapshot.to_yaml()?)?;
    Ok(())
}

pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Snapshot, SnapshotError> {
    let content = fs::read_to_string(path)?;
    Snapshot::from_yaml(&content)
}
