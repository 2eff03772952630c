use tilematch_common::config::GameConfig;
use tilematch_common::games::SessionRng;
use tilematch_common::games::numbers_match::{
    BlockedSet, GameEvent, GameSession, GameState, Grid, MatchEngine, MatchRule, PathType,
    Position, ResourceExhausted, ResourceKind, ResourceLedger, compact_completed_rows,
    has_any_valid_move, validate,
};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

#[test]
fn test_scenario_a_adjacent_pair() {
    let grid = Grid::from_rows(2, vec![vec![Some(5), Some(5)]]).unwrap();

    let result = validate(pos(0, 0), pos(0, 1), &grid, &BlockedSet::new());

    assert!(result.matched);
    assert_eq!(result.path_type, Some(PathType::Adjacent));
    assert_eq!(result.points, 1);
}

#[test]
fn test_scenario_b_straight_over_gap() {
    let grid = Grid::from_rows(5, vec![vec![Some(3), None, None, None, Some(7)]]).unwrap();

    let result = validate(pos(0, 0), pos(0, 4), &grid, &BlockedSet::new());

    assert!(result.matched);
    assert_eq!(result.path_type, Some(PathType::Straight));
    assert_eq!(result.points, 4);
}

#[test]
fn test_scenario_c_corner_pair_connects() {
    let grid = Grid::from_rows(2, vec![vec![Some(1), None], vec![None, Some(9)]]).unwrap();
    let blocked = BlockedSet::new();

    let result = validate(pos(0, 0), pos(1, 1), &grid, &blocked);

    assert!(result.matched);
    assert_eq!(result.path_type, Some(PathType::Adjacent));
    assert!(PathType::SnakeWrap.connects(pos(0, 0), pos(1, 1), &grid, &blocked));
    assert!(MatchRule::default().accepts(1, 9));
}

#[test]
fn test_scenario_d_both_rows_blocked_compact_together() {
    let mut grid = Grid::from_values(2, &[5, 5, 5, 5]);
    let mut blocked: BlockedSet = [pos(0, 0), pos(0, 1), pos(1, 0), pos(1, 1)]
        .into_iter()
        .collect();

    let removed = compact_completed_rows(&mut grid, &mut blocked);

    assert_eq!(removed, vec![0, 1]);
    assert_eq!(grid.row_count(), 0);
    assert!(blocked.is_empty());
}

#[test]
fn test_scenario_d_matching_clears_grid() {
    let engine = MatchEngine::new(MatchRule::default());
    let mut grid = Grid::from_values(2, &[5, 5, 5, 5]);
    let mut blocked = BlockedSet::new();

    let first = engine.attempt_match(pos(0, 0), pos(0, 1), &mut grid, &mut blocked).unwrap();
    let second = engine.attempt_match(pos(0, 0), pos(0, 1), &mut grid, &mut blocked).unwrap();

    assert_eq!(first.rows_completed, vec![0]);
    assert_eq!(second.rows_completed, vec![0]);
    assert!(grid.is_empty());
    assert!(blocked.is_empty());
}

fn two_rows_of_fives() -> GameSession {
    let config = GameConfig {
        grid_columns: 2,
        ..GameConfig::default()
    };
    let mut session =
        GameSession::from_grid(config, SessionRng::new(11), Grid::from_values(2, &[5, 5, 5, 5]));
    session.start();
    session.take_events();
    session
}

#[test]
fn test_scenario_d_session_reports_level_complete() {
    let mut session = two_rows_of_fives();

    session.cell_selected(0, 0);
    session.cell_selected(0, 1);
    session.cell_selected(0, 0);
    session.cell_selected(0, 1);

    let events = session.take_events();
    assert!(events.contains(&GameEvent::LevelComplete(1)));
    assert!(events.contains(&GameEvent::LevelUp(2)));
    assert_eq!(session.state(), GameState::Playing);
    assert_eq!(session.score(), 2 + 2 * 10);
}

#[test]
fn test_scenario_d_second_row_press_misses_after_compaction() {
    let mut session = two_rows_of_fives();

    session.cell_selected(0, 0);
    session.cell_selected(0, 1);
    session.cell_selected(1, 0);
    session.cell_selected(1, 1);

    let events = session.take_events();
    assert!(!events.contains(&GameEvent::LevelComplete(1)));
    assert_eq!(session.level(), 1);
    assert_eq!(session.grid().row_count(), 1);
    assert_eq!(session.score(), 1 + 10);
    assert_eq!(session.selected(), None);
    assert!(session.blocked().is_empty());
}

#[test]
fn test_scenario_e_resource_exhaustion() {
    let mut ledger = ResourceLedger::new(5);

    for _ in 0..5 {
        assert!(ledger.use_one(ResourceKind::Hint));
    }

    assert!(!ledger.use_one(ResourceKind::Hint));
    assert_eq!(ledger.try_use(ResourceKind::Hint), Err(ResourceExhausted(ResourceKind::Hint)));
    assert!(!ledger.can_use(ResourceKind::Hint));
    assert!(ledger.can_use(ResourceKind::AddCells));
}

#[test]
fn test_same_cell_never_matches_on_generated_grids() {
    for seed in 0..20u64 {
        let session = GameSession::new(GameConfig::default(), SessionRng::new(seed));
        let grid = session.grid();

        for cell in grid.positions() {
            assert!(!validate(cell, cell, grid, session.blocked()).matched);
        }
    }
}

#[test]
fn test_any_valid_move_is_idempotent() {
    let session = GameSession::new(GameConfig::default(), SessionRng::new(8));
    let rule = MatchRule::default();

    let first = has_any_valid_move(session.grid(), session.blocked(), rule);
    let second = has_any_valid_move(session.grid(), session.blocked(), rule);

    assert_eq!(first, second);
}
