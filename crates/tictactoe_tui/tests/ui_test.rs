//! Rendering tests against an in-memory terminal.

use ratatui::{
    Terminal,
    backend::TestBackend,
    buffer::{Buffer, Cell},
    layout::Rect,
    style::Modifier,
};
use tictactoe::Position;
use tictactoe_tui::{Action, App, BOARD_HELP, CURSOR_BG, WIN_BG, X_COLOR, cell_areas, cell_at, draw};

fn render(app: &App) -> (Buffer, Rect) {
    let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
    let area = terminal.draw(|f| draw(f, app)).unwrap().area;
    (terminal.backend().buffer().clone(), area)
}

fn text(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.y..area.bottom())
        .map(|y| {
            (area.x..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The buffer cell in the middle of a square.
fn center<'a>(buffer: &'a Buffer, area: Rect, pos: Position) -> &'a Cell {
    let cell = cell_areas(area)[pos.to_index()];
    &buffer[(cell.x + cell.width / 2, cell.y + cell.height / 2)]
}

fn play(app: &mut App, positions: &[usize]) {
    for index in positions {
        app.handle(Action::Select(Position::from_index(*index).unwrap()));
    }
}

#[test]
fn test_fresh_render() {
    let app = App::new();
    let (buffer, _) = render(&app);
    let screen = text(&buffer);

    assert!(screen.contains("Tic Tac Toe"));
    assert!(screen.contains("Next turn: X"));
    assert!(screen.contains("Reset Game"));
    assert!(screen.contains("Player X"));
    assert!(screen.contains("Player O"));
    assert!(screen.contains("Square 5 is empty"));
    assert!(screen.contains(BOARD_HELP));
}

#[test]
fn test_cursor_previews_next_mark() {
    let app = App::new();
    let (buffer, area) = render(&app);

    let cell = center(&buffer, area, Position::Center);
    assert_eq!(cell.symbol(), "X");
    assert!(cell.modifier.contains(Modifier::DIM));
    assert_eq!(cell.bg, CURSOR_BG);
    assert_eq!(center(&buffer, area, Position::TopLeft).symbol(), " ");
}

#[test]
fn test_placed_mark_rendered() {
    let mut app = App::new();
    play(&mut app, &[4]);
    let (buffer, area) = render(&app);

    let cell = center(&buffer, area, Position::Center);
    assert_eq!(cell.symbol(), "X");
    assert_eq!(cell.fg, X_COLOR);
    assert!(!cell.modifier.contains(Modifier::DIM));
    assert!(text(&buffer).contains("Next turn: O"));
}

#[test]
fn test_winning_line_highlighted() {
    let mut app = App::new();
    play(&mut app, &[0, 3, 1, 4, 2]);
    let (buffer, area) = render(&app);

    for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
        assert_eq!(center(&buffer, area, pos).bg, WIN_BG, "{pos}");
    }
    for pos in [Position::MiddleLeft, Position::Center, Position::BottomRight] {
        assert_ne!(center(&buffer, area, pos).bg, WIN_BG, "{pos}");
    }
    assert!(text(&buffer).contains("Winner: X"));
}

#[test]
fn test_no_preview_after_win() {
    let mut app = App::new();
    play(&mut app, &[0, 3, 1, 4, 2]);
    app.handle(Action::Select(Position::BottomRight));
    let (buffer, area) = render(&app);

    assert_eq!(center(&buffer, area, Position::BottomRight).symbol(), " ");
}

#[test]
fn test_draw_status_rendered() {
    let mut app = App::new();
    play(&mut app, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);
    let (buffer, _) = render(&app);

    assert!(text(&buffer).contains("It's a draw"));
}

#[test]
fn test_reset_render() {
    let mut app = App::new();
    play(&mut app, &[0, 3, 1]);
    app.handle(Action::Reset);
    let (buffer, area) = render(&app);

    assert!(text(&buffer).contains("Next turn: X"));
    for pos in [Position::TopLeft, Position::MiddleLeft] {
        assert_eq!(center(&buffer, area, pos).symbol(), " ");
    }
    // The cursor stays on the last square and previews X there.
    let preview = center(&buffer, area, Position::TopCenter);
    assert_eq!(preview.symbol(), "X");
    assert!(preview.modifier.contains(Modifier::DIM));
}

#[test]
fn test_hit_testing_matches_layout() {
    let area = Rect::new(0, 0, 90, 30);
    for (i, cell) in cell_areas(area).iter().enumerate() {
        let expected = Position::from_index(i);
        assert_eq!(cell_at(area, cell.x, cell.y), expected);
        assert_eq!(cell_at(area, cell.right() - 1, cell.bottom() - 1), expected);
    }
    assert_eq!(cell_at(area, 0, 0), None);
}

#[test]
fn test_squares_do_not_overlap() {
    let cells = cell_areas(Rect::new(0, 0, 90, 30));
    for (i, a) in cells.iter().enumerate() {
        assert_eq!(a.width, 11);
        assert_eq!(a.height, 3);
        for b in &cells[i + 1..] {
            assert!(!a.intersects(*b));
        }
    }
}
