use super::blocked::BlockedSet;
use super::grid::Grid;
use super::hint;
use super::types::{Cell, MAX_CELL_VALUE, MIN_CELL_VALUE, MatchRule};
use crate::games::session_rng::SessionRng;
use crate::log_debug;

/// Fills a `rows × columns` grid with random values, never repeating a
/// value in the horizontally adjacent cell.
pub fn random_grid(rng: &mut SessionRng, columns: usize, rows: usize) -> Grid {
    let mut grid = Grid::new(columns);

    for _ in 0..rows {
        let mut row: Vec<Cell> = Vec::with_capacity(columns);
        for col in 0..columns {
            let prev_value = if col > 0 { row[col - 1] } else { None };

            loop {
                let value = rng.random_range(MIN_CELL_VALUE..=MAX_CELL_VALUE);
                if prev_value != Some(value) {
                    row.push(Some(value));
                    break;
                }
            }
        }
        grid.push_row(row);
    }

    grid
}

/// Draws grids until one has a legal move, up to `attempts` draws.
/// The last draw is kept if none qualifies.
pub fn playable_grid(
    rng: &mut SessionRng,
    columns: usize,
    rows: usize,
    rule: MatchRule,
    attempts: u32,
) -> Grid {
    let empty = BlockedSet::new();
    let mut grid = random_grid(rng, columns, rows);

    for attempt in 1..attempts.max(1) {
        if hint::has_any_valid_move(&grid, &empty, rule) {
            return grid;
        }
        log_debug!("Generated grid #{} has no moves, redrawing", attempt);
        grid = random_grid(rng, columns, rows);
    }

    grid
}
