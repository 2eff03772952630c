use std::fmt;

use serde::{Deserialize, Serialize};

pub const MIN_CELL_VALUE: u8 = 1;
pub const MAX_CELL_VALUE: u8 = 9;

/// Value held by a grid slot. `None` is an empty slot.
pub type Cell = Option<u8>;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn to_linear(self, columns: usize) -> usize {
        self.row * columns + self.col
    }

    pub fn from_linear(index: usize, columns: usize) -> Self {
        Self {
            row: index / columns,
            col: index % columns,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

pub fn is_valid_value(value: u8) -> bool {
    (MIN_CELL_VALUE..=MAX_CELL_VALUE).contains(&value)
}

/// Values that may be paired: equal, or summing to the target.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MatchRule {
    sum_target: u8,
}

impl MatchRule {
    pub fn new(sum_target: u8) -> Self {
        Self { sum_target }
    }

    pub fn sum_target(&self) -> u8 {
        self.sum_target
    }

    pub fn accepts(&self, first: u8, second: u8) -> bool {
        first == second || u16::from(first) + u16::from(second) == u16::from(self.sum_target)
    }
}

impl Default for MatchRule {
    fn default() -> Self {
        Self::new(10)
    }
}

/// Connection shapes in the order they are tried.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PathType {
    Adjacent,
    Straight,
    Diagonal,
    SnakeWrap,
    HeadToTail,
}

impl PathType {
    pub const ALL: [PathType; 5] = [
        PathType::Adjacent,
        PathType::Straight,
        PathType::Diagonal,
        PathType::SnakeWrap,
        PathType::HeadToTail,
    ];

    pub fn points(self) -> u32 {
        match self {
            PathType::Adjacent => 1,
            PathType::Straight
            | PathType::Diagonal
            | PathType::SnakeWrap
            | PathType::HeadToTail => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PathType::Adjacent => "adjacent",
            PathType::Straight => "straight",
            PathType::Diagonal => "diagonal",
            PathType::SnakeWrap => "snakeWrap",
            PathType::HeadToTail => "headToTail",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MatchResult {
    pub matched: bool,
    pub path_type: Option<PathType>,
    pub points: u32,
}

impl MatchResult {
    pub fn none() -> Self {
        Self {
            matched: false,
            path_type: None,
            points: 0,
        }
    }

    pub fn via(path_type: PathType) -> Self {
        Self {
            matched: true,
            path_type: Some(path_type),
            points: path_type.points(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    AddCells,
    Hint,
    ChangeValue,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::AddCells,
        ResourceKind::Hint,
        ResourceKind::ChangeValue,
    ];
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::AddCells => "addCells",
            ResourceKind::Hint => "hint",
            ResourceKind::ChangeValue => "change",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SessionStats {
    pub pairs_matched: u32,
    pub rows_cleared: u32,
    pub hints_used: u32,
    pub cells_added: u32,
    pub values_changed: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_linear_round_trip() {
        let pos = Position::new(3, 7);

        assert_eq!(pos.to_linear(9), 34);
        assert_eq!(Position::from_linear(34, 9), pos);
    }

    #[test]
    fn test_positions_order_row_major() {
        assert!(Position::new(0, 8) < Position::new(1, 0));
        assert!(Position::new(1, 0) < Position::new(1, 1));
    }

    #[test]
    fn test_match_rule_equal_or_sum() {
        let rule = MatchRule::default();

        assert!(rule.accepts(5, 5));
        assert!(rule.accepts(3, 7));
        assert!(rule.accepts(1, 9));
        assert!(!rule.accepts(3, 5));
    }

    #[test]
    fn test_match_rule_custom_target() {
        let rule = MatchRule::new(12);

        assert!(rule.accepts(3, 9));
        assert!(!rule.accepts(3, 7));
    }

    #[test]
    fn test_path_points() {
        assert_eq!(PathType::Adjacent.points(), 1);
        for path in &PathType::ALL[1..] {
            assert_eq!(path.points(), 4);
        }
    }
}
