pub mod hud;
pub mod menu;

use crate::game::CollisionKind;

/// Overlay state owned by the runtime loop, separate from the engine.
///
/// The engine resets its session the instant a collision lands; the runtime
/// keeps the summary on screen and withholds ticks until the player
/// confirms.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Screen {
    /// Start overlay shown before the first session.
    Start,
    /// Session in progress, ticking unless the engine is paused.
    Playing,
    /// Summary of a finished session.
    GameOver {
        final_score: u32,
        new_record: bool,
        collision: CollisionKind,
    },
}
