use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{
    Board, Wall, INITIAL_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS, POINTS_PER_FOOD,
    SPEED_UP_SCORE_STEP, TICK_INTERVAL_STEP_MS,
};
use crate::food::Food;
use crate::input::Direction;
use crate::snake::{Cell, Snake};

/// What ended a session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CollisionKind {
    OutOfBounds,
    SelfCollision,
    WallCollision,
}

/// What a single [`GameState::tick`] did, for the scheduler to act on.
///
/// The engine owns no timer. Interval changes are reported here and the
/// caller rearms its own cadence.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The session is paused; nothing moved.
    Paused,
    /// The snake advanced one cell without eating.
    Moved,
    /// The snake ate the food. `rearm_interval_ms` is set when the score
    /// crossed a speed threshold and the timer should be rearmed.
    Ate { rearm_interval_ms: Option<u64> },
    /// The head hit a board edge, the body, or a wall. The session has
    /// already been reset to its initial state, so the timer should be
    /// rearmed at the initial interval.
    SessionEnded {
        final_score: u32,
        new_record: bool,
        collision: CollisionKind,
    },
}

/// Mutable aggregate for one run of the game.
///
/// Created at startup and again after every game-over. Fields are public so
/// tests can script exact situations.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub tick_interval_ms: u64,
    pub paused: bool,
    pub tick_count: u64,
}

impl GameSession {
    /// Fresh session: a one-cell snake at the board center moving right.
    fn initial<R: Rng + ?Sized>(rng: &mut R, board: Board) -> Self {
        let snake = Snake::new(board.center_cell(), Direction::Right);
        let food = Food::spawn(rng, board, &snake);

        Self {
            snake,
            food,
            score: 0,
            tick_interval_ms: INITIAL_TICK_INTERVAL_MS,
            paused: false,
            tick_count: 0,
        }
    }
}

/// Game-state engine: owns the current session plus the cross-session
/// high score.
///
/// All mutation happens inside [`GameState::tick`],
/// [`GameState::set_direction`], and [`GameState::toggle_pause`]; nothing
/// here blocks, and no I/O happens in this module.
#[derive(Debug, Clone)]
pub struct GameState {
    pub session: GameSession,
    board: Board,
    walls: Vec<Wall>,
    high_score: u32,
    rng: StdRng,
}

impl GameState {
    /// Creates an engine with an entropy-seeded RNG.
    #[must_use]
    pub fn new(board: Board, walls: Vec<Wall>, high_score: u32) -> Self {
        Self::with_rng(StdRng::from_entropy(), board, walls, high_score)
    }

    /// Creates a deterministic engine for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(board: Board, walls: Vec<Wall>, high_score: u32, seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), board, walls, high_score)
    }

    fn with_rng(mut rng: StdRng, board: Board, walls: Vec<Wall>, high_score: u32) -> Self {
        let session = GameSession::initial(&mut rng, board);

        Self {
            session,
            board,
            walls,
            high_score,
            rng,
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// While paused this is a no-op. Otherwise the snake moves one cell,
    /// eating and the speed ramp are applied, and the new head is checked
    /// against the board edges, the body, and the walls. A collision ends
    /// the session and resets it in place; the outcome carries everything
    /// the caller needs to persist a record and rearm its timer.
    pub fn tick(&mut self) -> TickOutcome {
        if self.session.paused {
            return TickOutcome::Paused;
        }

        self.session.tick_count += 1;

        let new_head = self.session.snake.next_head();
        let ate = new_head == self.session.food.position;
        self.session.snake.advance(ate);

        let mut rearm_interval_ms = None;
        if ate {
            self.session.score += POINTS_PER_FOOD;
            self.session.food = Food::spawn(&mut self.rng, self.board, &self.session.snake);

            if self.session.score % SPEED_UP_SCORE_STEP == 0 {
                let faster = self
                    .session
                    .tick_interval_ms
                    .saturating_sub(TICK_INTERVAL_STEP_MS)
                    .max(MIN_TICK_INTERVAL_MS);
                if faster != self.session.tick_interval_ms {
                    self.session.tick_interval_ms = faster;
                    rearm_interval_ms = Some(faster);
                }
            }
        }

        if let Some(collision) = self.detect_collision(new_head) {
            let final_score = self.session.score;
            let new_record = final_score > self.high_score;
            if new_record {
                self.high_score = final_score;
            }

            self.session = GameSession::initial(&mut self.rng, self.board);

            return TickOutcome::SessionEnded {
                final_score,
                new_record,
                collision,
            };
        }

        if ate {
            TickOutcome::Ate { rearm_interval_ms }
        } else {
            TickOutcome::Moved
        }
    }

    /// Applies a direction request.
    ///
    /// Ignored while paused; a request that reverses the current direction
    /// is dropped. An accepted direction takes effect on the next tick.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.session.paused {
            return;
        }

        let _ = self.session.snake.set_direction(requested);
    }

    /// Flips the pause flag. No other effect.
    pub fn toggle_pause(&mut self) {
        self.session.paused = !self.session.paused;
    }

    fn detect_collision(&self, head: Cell) -> Option<CollisionKind> {
        if !self.board.contains(head) {
            return Some(CollisionKind::OutOfBounds);
        }
        if self.session.snake.head_overlaps_body() {
            return Some(CollisionKind::SelfCollision);
        }
        if self.walls.iter().any(|wall| wall.overlaps_cell(head)) {
            return Some(CollisionKind::WallCollision);
        }

        None
    }

    /// Highest score seen across sessions, including the current one's
    /// predecessor.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Current tick interval in milliseconds.
    #[must_use]
    pub fn tick_interval_ms(&self) -> u64 {
        self.session.tick_interval_ms
    }

    /// Playfield bounds.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Static wall set.
    #[must_use]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }
}
