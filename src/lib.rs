//! Classic canvas-style Snake in the terminal.
//!
//! The playfield uses a canvas-style pixel model: cells are 20×20 pixel
//! boxes on a 400×400 board, and the static walls are free-floating pixel
//! rectangles resolved by rectangle intersection. The [`game`] module owns
//! all gameplay rules; everything else adapts it to a terminal.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
