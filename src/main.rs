use std::io;
use std::time::{Duration, Instant};

use clap::Parser;

use pixel_snake::config::{Board, DEFAULT_WALLS, THEMES};
use pixel_snake::game::{GameState, TickOutcome};
use pixel_snake::input::{GameInput, InputHandler};
use pixel_snake::renderer;
use pixel_snake::score::{load_high_score, save_high_score};
use pixel_snake::terminal_runtime::{install_panic_hook, AppTerminal, TerminalSession};
use pixel_snake::ui::hud::HudInfo;
use pixel_snake::ui::Screen;

/// How long one input poll may block; keeps redraws responsive between
/// gameplay ticks.
const INPUT_POLL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Play the open board without the built-in walls.
    #[arg(long = "no-walls")]
    no_walls: bool,

    /// Seed food placement for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Warn about an unreadable store before raw mode owns the terminal;
    // a missing or broken file plays on from zero.
    let high_score = match load_high_score() {
        Ok(score) => score,
        Err(error) => {
            eprintln!("warning: ignoring unreadable high score: {error}");
            0
        }
    };

    let board = Board::standard();
    let walls = if cli.no_walls {
        Vec::new()
    } else {
        DEFAULT_WALLS.to_vec()
    };
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(board, walls, high_score, seed),
        None => GameState::new(board, walls, high_score),
    };

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    let warnings = run(session.terminal_mut(), &mut state);
    drop(session);

    for warning in warnings? {
        eprintln!("{warning}");
    }
    Ok(())
}

/// Scheduler and input adapter around the engine.
///
/// Redraws every iteration; delivers a tick only while the playing screen
/// is up and the engine-reported interval has elapsed. Warnings raised in
/// raw mode are returned and printed after the terminal is restored.
fn run(terminal: &mut AppTerminal, state: &mut GameState) -> io::Result<Vec<String>> {
    let mut input = InputHandler::new(INPUT_POLL);
    let mut screen = Screen::Start;
    let mut theme_idx = 0;
    let mut tick_interval = Duration::from_millis(state.tick_interval_ms());
    let mut last_tick = Instant::now();
    let mut warnings = Vec::new();

    loop {
        let info = HudInfo {
            high_score: state.high_score(),
            theme: &THEMES[theme_idx],
        };
        terminal.draw(|frame| renderer::render(frame, state, &screen, &info))?;

        if let Some(event) = input.poll_input()? {
            match (screen, event) {
                (_, GameInput::Quit) => break,
                (_, GameInput::CycleTheme) => theme_idx = (theme_idx + 1) % THEMES.len(),
                (
                    Screen::Start | Screen::GameOver { .. },
                    GameInput::Confirm | GameInput::Pause,
                ) => {
                    // The engine already holds a fresh session; only the
                    // overlay and the tick clock need to move on.
                    screen = Screen::Playing;
                    last_tick = Instant::now();
                }
                (Screen::Playing, GameInput::Direction(direction)) => {
                    state.set_direction(direction);
                }
                (Screen::Playing, GameInput::Pause) => state.toggle_pause(),
                _ => {}
            }
        }

        if screen == Screen::Playing && last_tick.elapsed() >= tick_interval {
            match state.tick() {
                TickOutcome::Ate {
                    rearm_interval_ms: Some(ms),
                } => tick_interval = Duration::from_millis(ms),
                TickOutcome::SessionEnded {
                    final_score,
                    new_record,
                    collision,
                } => {
                    tick_interval = Duration::from_millis(state.tick_interval_ms());
                    if new_record {
                        if let Err(error) = save_high_score(state.high_score()) {
                            warnings.push(format!("warning: could not save high score: {error}"));
                        }
                    }
                    screen = Screen::GameOver {
                        final_score,
                        new_record,
                        collision,
                    };
                }
                TickOutcome::Paused | TickOutcome::Moved | TickOutcome::Ate { .. } => {}
            }
            last_tick = Instant::now();
        }
    }

    Ok(warnings)
}
