use std::fmt::Write;

use tilematch_common::games::numbers_match::{GameSession, Position, ResourceKind};

/// Plain-text view of a session: a status line followed by the grid.
/// Matched cells print as `·`, the selection in brackets and hinted cells
/// between asterisks.
pub fn render_session(session: &GameSession) -> String {
    let mut out = String::new();
    let resources = session.resources();

    let _ = writeln!(
        out,
        "level {} | score {} | {}s left | {} | add {} hint {} change {}{}",
        session.level(),
        session.score(),
        session.time_left(),
        session.state(),
        resources.current(ResourceKind::AddCells),
        resources.current(ResourceKind::Hint),
        resources.current(ResourceKind::ChangeValue),
        if session.is_change_mode() { " | change mode" } else { "" },
    );

    let grid = session.grid();
    let _ = write!(out, "    ");
    for col in 0..grid.columns() {
        let _ = write!(out, "{:^3}", col);
    }
    out.push('\n');

    let hinted = session.hint();
    for row in 0..grid.row_count() {
        let _ = write!(out, "{:>3} ", row);
        for col in 0..grid.columns() {
            let pos = Position::new(row, col);
            let symbol = match grid.value(pos) {
                Some(_) if session.blocked().contains(pos) => "·".to_string(),
                Some(value) => value.to_string(),
                None => " ".to_string(),
            };
            let is_hinted = hinted.is_some_and(|(a, b)| a == pos || b == pos);
            let cell = if session.selected() == Some(pos) {
                format!("[{}]", symbol)
            } else if is_hinted {
                format!("*{}*", symbol)
            } else {
                format!(" {} ", symbol)
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }

    out
}
