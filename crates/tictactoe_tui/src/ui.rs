//! Stateless UI rendering for tic-tac-toe.
//!
//! Layout is computed by pure functions so that mouse hit-testing uses the
//! same geometry as drawing.

use crate::accessibility::BOARD_HELP;
use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe::{GameStatus, Mark, Position, Square};

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Accent used for X.
pub const X_COLOR: Color = Color::Blue;
/// Accent used for O.
pub const O_COLOR: Color = Color::Yellow;
/// Background of squares on the winning line.
pub const WIN_BG: Color = Color::Green;
/// Background of the square under the cursor.
pub const CURSOR_BG: Color = Color::DarkGray;

struct Regions {
    header: Rect,
    status: Rect,
    board: Rect,
    controls: Rect,
    description: Rect,
}

fn regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Title + subtitle
            Constraint::Length(3),            // Status
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(1),            // Reset + legend
            Constraint::Length(2),            // Description
        ])
        .split(area);

    Regions {
        header: chunks[0],
        status: chunks[1],
        board: center_rect(chunks[2], BOARD_WIDTH, BOARD_HEIGHT),
        controls: chunks[3],
        description: chunks[4],
    }
}

/// Screen areas of the nine squares, in index order, for a frame of `area`.
pub fn cell_areas(area: Rect) -> [Rect; 9] {
    let board = regions(area).board;
    let gap = |n: u16| [
        Constraint::Length(n),
        Constraint::Length(1),
        Constraint::Length(n),
        Constraint::Length(1),
        Constraint::Length(n),
    ];
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(gap(CELL_HEIGHT))
        .split(board);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(gap(CELL_WIDTH))
        .split(board);

    Position::ALL.map(|pos| {
        let row = rows[pos.row() * 2];
        let col = cols[pos.col() * 2];
        Rect::new(col.x, row.y, col.width, row.height)
    })
}

/// Square under the terminal cell at (`column`, `row`), if any.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    cell_areas(area)
        .iter()
        .position(|r| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        })
        .and_then(Position::from_index)
}

/// Renders the whole application.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let regions = regions(area);

    draw_header(frame, regions.header);
    draw_status(frame, regions.status, app);
    draw_board(frame, area, app);
    draw_controls(frame, regions.controls);
    draw_description(frame, regions.description, app);
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => X_COLOR,
        Mark::O => O_COLOR,
    }
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Tic Tac Toe",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Classic 3×3 — Two players, one winner.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let accent = match app.game().status() {
        GameStatus::Won(result) => mark_color(result.winner()),
        GameStatus::Draw => Color::Gray,
        GameStatus::InProgress { next } => mark_color(next),
    };

    let status = Paragraph::new(app.status_text())
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board = regions(area).board;
    let separator = Style::default().fg(Color::DarkGray);

    for offset in [CELL_HEIGHT, CELL_HEIGHT * 2 + 1] {
        let line = Rect::new(board.x, board.y + offset, board.width, 1);
        frame.render_widget(
            Paragraph::new("─".repeat(board.width as usize)).style(separator),
            line,
        );
    }

    for (pos, cell) in Position::ALL.iter().zip(cell_areas(area)) {
        draw_cell(frame, cell, app, *pos);
        if pos.col() < 2 {
            let bar = Rect::new(cell.x + cell.width, cell.y, 1, cell.height);
            frame.render_widget(Paragraph::new(vec![Line::from("│"); 3]).style(separator), bar);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let game = app.game();
    let winning = game.winning_line().is_some_and(|line| line.contains(pos));
    let under_cursor = pos == app.cursor();

    let (symbol, mut style) = match game.board().get(pos) {
        Square::Occupied(mark) => (
            mark.to_string(),
            Style::default().fg(mark_color(mark)).add_modifier(Modifier::BOLD),
        ),
        // Preview the next mark on a playable square under the cursor.
        Square::Empty if under_cursor && game.is_playable(pos) => (
            game.turn().to_string(),
            Style::default().fg(mark_color(game.turn())).add_modifier(Modifier::DIM),
        ),
        Square::Empty => (String::new(), Style::default()),
    };

    if winning {
        style = style.bg(WIN_BG).fg(Color::Black);
    } else if under_cursor {
        style = style.bg(CURSOR_BG);
    }

    let text = vec![Line::from(""), Line::from(symbol)];
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Black).bg(Color::Gray);
    let line = Line::from(vec![
        Span::styled(" r ", key),
        Span::raw(" Reset Game   "),
        Span::styled(" q ", key),
        Span::raw(" Quit     "),
        Span::styled(" X ", Style::default().fg(Color::White).bg(X_COLOR)),
        Span::raw(" Player X   "),
        Span::styled(" O ", Style::default().fg(Color::Black).bg(O_COLOR)),
        Span::raw(" Player O"),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_description(frame: &mut Frame, area: Rect, app: &App) {
    let description = Paragraph::new(vec![
        Line::from(app.cursor_label()),
        Line::from(Span::styled(BOARD_HELP, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(description, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
