use rand::Rng;

use crate::config::{Board, GRID_SIZE};
use crate::snake::{Cell, Snake};

/// Random cells tried before falling back to a deterministic scan.
const MAX_SPAWN_ATTEMPTS: u32 = 64;

/// Food entity currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    /// Creates a food at `position`.
    #[must_use]
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Spawns food on a grid-aligned cell not occupied by the snake.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, board: Board, snake: &Snake) -> Self {
        Self::at(spawn_cell(rng, board, snake))
    }
}

/// Picks a free grid-aligned cell by rejection sampling.
///
/// Once the attempt budget is spent, a row-major scan places the food on the
/// first free cell, so placement terminates even on a nearly full board.
#[must_use]
pub fn spawn_cell<R: Rng + ?Sized>(rng: &mut R, board: Board, snake: &Snake) -> Cell {
    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let cell = Cell {
            x: rng.gen_range(0..board.columns()) * GRID_SIZE,
            y: rng.gen_range(0..board.rows()) * GRID_SIZE,
        };
        if !snake.occupies(cell) {
            return cell;
        }
    }

    for y in 0..board.rows() {
        for x in 0..board.columns() {
            let cell = Cell {
                x: x * GRID_SIZE,
                y: y * GRID_SIZE,
            };
            if !snake.occupies(cell) {
                return cell;
            }
        }
    }

    panic!(
        "spawn_cell: no free cells on a {}x{} board",
        board.columns(),
        board.rows(),
    );
}
