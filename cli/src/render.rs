use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, PrintStyledContent, Stylize},
    terminal::{Clear, ClearType},
};
use snake_core::{CellView, Direction, GameSnapshot, RoundOutcome};

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "◀ ",
        Direction::Right => "▶ ",
        Direction::Up => "▲ ",
        Direction::Down => "▼ ",
    }
}

fn cell_glyph(view: CellView, direction: Direction) -> (&'static str, Color) {
    match view {
        CellView::Empty => ("· ", Color::DarkGrey),
        CellView::Food => ("● ", Color::Red),
        CellView::Head => (head_glyph(direction), Color::Green),
        CellView::Body => ("██", Color::DarkGreen),
        CellView::Digesting => ("▓▓", Color::Yellow),
        CellView::Failed => ("XX", Color::Magenta),
    }
}

pub fn status_line(snapshot: &GameSnapshot) -> String {
    let banner = match snapshot.outcome {
        RoundOutcome::InProgress => "",
        RoundOutcome::Won => "  YOU WIN! press q",
        RoundOutcome::Lost => "  GAME OVER, press q",
    };
    format!(
        "length {}  tick {}{banner}",
        snapshot.segments.len(),
        snapshot.ticks
    )
}

/// Plain text board, one line per row, for logs and headless output.
pub fn board_text(snapshot: &GameSnapshot) -> String {
    let board = snapshot.board();
    let mut text = String::new();
    for row in board.rows() {
        for &view in row {
            text.push_str(cell_glyph(view, snapshot.direction).0);
        }
        text.push('\n');
    }
    text
}

pub fn draw(out: &mut impl Write, snapshot: &GameSnapshot) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    let board = snapshot.board();
    for (y, row) in board.rows().into_iter().enumerate() {
        queue!(out, MoveTo(0, y as u16))?;
        for &view in row {
            let (glyph, color) = cell_glyph(view, snapshot.direction);
            queue!(out, PrintStyledContent(glyph.with(color)))?;
        }
    }
    let status_row = board.nrows() as u16 + 1;
    queue!(out, MoveTo(0, status_row), Print(status_line(snapshot)))?;
    out.flush()
}
