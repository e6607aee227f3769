use core::fmt;
use sapper_core::{GameState, GameStatus, MinefieldGenerator, Overlay, Truth, iter_coords};
use serde::Serialize;

fn glyph(cell: Overlay) -> char {
    match cell {
        Overlay::Hidden => '.',
        Overlay::Flagged => 'F',
        Overlay::Revealed(Truth::Mine) => '*',
        Overlay::Revealed(Truth::Count(0)) => ' ',
        Overlay::Revealed(Truth::Count(n)) => char::from(b'0' + n),
    }
}

pub fn status_line<G: MinefieldGenerator>(game: &GameState<G>) -> String {
    match game.status() {
        GameStatus::Playing => format!("Total mines: {}", game.mine_count()),
        GameStatus::Won => "You won!".to_string(),
        GameStatus::Lost => "You lost. Reset or undo to continue.".to_string(),
    }
}

/// Board with row and column headers, followed by the status line.
struct BoardView<'a, G>(&'a GameState<G>);

impl<G: MinefieldGenerator> fmt::Display for BoardView<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        let (rows, cols) = game.size();

        write!(f, "   ")?;
        for col in 0..cols {
            write!(f, "{:>2}", col % 100)?;
        }

        for (row, col) in iter_coords((rows, cols)) {
            if col == 0 {
                write!(f, "\n{row:>2} ")?;
            }
            let cell = game.cell((row, col)).unwrap_or(Overlay::Hidden);
            write!(f, " {}", glyph(cell))?;
        }

        write!(f, "\n{}", status_line(game))
    }
}

pub fn board<G: MinefieldGenerator>(game: &GameState<G>) -> String {
    BoardView(game).to_string()
}

#[derive(Serialize)]
struct Dump {
    status: GameStatus,
    active: bool,
    history: usize,
    flags: u16,
    overlay: Vec<Vec<Overlay>>,
}

pub fn dump<G: MinefieldGenerator>(game: &GameState<G>) -> serde_json::Result<String> {
    let overlay = game
        .overlay()
        .rows()
        .into_iter()
        .map(|row| row.to_vec())
        .collect();
    serde_json::to_string_pretty(&Dump {
        status: game.status(),
        active: game.is_active(),
        history: game.history_depth(),
        flags: game.flag_count(),
        overlay,
    })
}
