use super::blocked::BlockedSet;
use super::connection;
use super::grid::Grid;
use super::types::{MatchRule, Position};

/// Non-empty, non-blocked cells in row-major order.
pub fn active_cells<'a>(
    grid: &'a Grid,
    blocked: &'a BlockedSet,
) -> impl Iterator<Item = (Position, u8)> + 'a {
    grid.positions()
        .filter(|&pos| !blocked.contains(pos))
        .filter_map(|pos| grid.value(pos).map(|value| (pos, value)))
}

pub fn active_cell_count(grid: &Grid, blocked: &BlockedSet) -> usize {
    active_cells(grid, blocked).count()
}

/// First legal pair `(i, j)` with `i < j` in row-major order. Identical
/// inputs always yield the same pair.
pub fn find_first_valid_pair(
    grid: &Grid,
    blocked: &BlockedSet,
    rule: MatchRule,
) -> Option<(Position, Position)> {
    let active: Vec<(Position, u8)> = active_cells(grid, blocked).collect();

    for i in 0..active.len() {
        for j in (i + 1)..active.len() {
            let (pos1, value1) = active[i];
            let (pos2, value2) = active[j];
            if rule.accepts(value1, value2)
                && connection::validate(pos1, pos2, grid, blocked).matched
            {
                return Some((pos1, pos2));
            }
        }
    }

    None
}

pub fn has_any_valid_move(grid: &Grid, blocked: &BlockedSet, rule: MatchRule) -> bool {
    find_first_valid_pair(grid, blocked, rule).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_first_valid_pair_finds_pair() {
        let grid = Grid::from_values(9, &[5, 5, 0, 0, 0, 0, 0, 0, 0]);

        let pair = find_first_valid_pair(&grid, &BlockedSet::new(), MatchRule::default());

        assert_eq!(pair, Some((Position::new(0, 0), Position::new(0, 1))));
    }

    #[test]
    fn test_find_first_valid_pair_no_pair() {
        let grid = Grid::from_values(9, &[1, 2, 3, 0, 0, 0, 0, 0, 0]);

        let pair = find_first_valid_pair(&grid, &BlockedSet::new(), MatchRule::default());

        assert!(pair.is_none());
    }

    #[test]
    fn test_first_pair_is_row_major_earliest() {
        #[rustfmt::skip]
        let grid = Grid::from_values(4, &[
            1, 2, 8, 4,
            6, 4, 3, 7,
        ]);

        let pair = find_first_valid_pair(&grid, &BlockedSet::new(), MatchRule::default());

        // (0,1)=2 and (0,2)=8 sum to ten; (0,0)=1 has no partner.
        assert_eq!(pair, Some((Position::new(0, 1), Position::new(0, 2))));
    }

    #[test]
    fn test_blocked_cells_are_skipped() {
        let grid = Grid::from_values(4, &[5, 5, 1, 2]);
        let blocked: BlockedSet = [Position::new(0, 0)].into_iter().collect();

        assert!(!has_any_valid_move(&grid, &blocked, MatchRule::default()));
        assert_eq!(active_cell_count(&grid, &blocked), 3);
    }

    #[test]
    fn test_has_any_valid_move_is_idempotent() {
        #[rustfmt::skip]
        let grid = Grid::from_values(4, &[
            1, 2, 3, 4,
            5, 6, 9, 8,
        ]);
        let blocked = BlockedSet::new();
        let rule = MatchRule::default();

        let first = has_any_valid_move(&grid, &blocked, rule);
        let second = has_any_valid_move(&grid, &blocked, rule);

        assert_eq!(first, second);
        assert_eq!(
            find_first_valid_pair(&grid, &blocked, rule),
            find_first_valid_pair(&grid, &blocked, rule)
        );
    }

    #[test]
    fn test_active_cell_count() {
        let grid = Grid::from_values(9, &[1, 0, 2, 0, 3, 0, 0, 0, 0]);

        assert_eq!(active_cell_count(&grid, &BlockedSet::new()), 3);
    }
}
