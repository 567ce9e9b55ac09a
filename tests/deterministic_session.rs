use pixel_snake::config::{Board, DEFAULT_WALLS};
use pixel_snake::food::Food;
use pixel_snake::game::{CollisionKind, GameState, TickOutcome};
use pixel_snake::input::Direction;
use pixel_snake::snake::{Cell, Snake};

#[test]
fn stepwise_eat_turn_and_wall_collision() {
    let mut state = GameState::new_with_seed(Board::standard(), DEFAULT_WALLS.to_vec(), 0, 42);
    state.session.snake = Snake::new(Cell { x: 200, y: 200 }, Direction::Right);
    state.session.food = Food::at(Cell { x: 220, y: 200 });

    // Eat the food one cell to the right of the start.
    let outcome = state.tick();
    assert_eq!(
        outcome,
        TickOutcome::Ate {
            rearm_interval_ms: None
        }
    );
    assert_eq!(state.session.score, 10);
    assert_eq!(state.session.snake.len(), 2);
    assert_eq!(state.session.snake.head(), Cell { x: 220, y: 200 });
    assert_ne!(state.session.food.position, Cell { x: 220, y: 200 });

    // Park the food out of the way so the walk below is fully scripted.
    state.session.food = Food::at(Cell { x: 380, y: 380 });

    // Turn up and march into the long wall spanning y 100..120.
    state.set_direction(Direction::Up);
    for expected_y in [180, 160, 140, 120] {
        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_eq!(
            state.session.snake.head(),
            Cell {
                x: 220,
                y: expected_y
            }
        );
    }

    // Head box at y 100..120 intersects the wall.
    let outcome = state.tick();
    assert!(matches!(
        outcome,
        TickOutcome::SessionEnded {
            final_score: 10,
            new_record: true,
            collision: CollisionKind::WallCollision,
        }
    ));

    // The engine already reset for the next session.
    assert_eq!(state.session.snake.head(), Cell { x: 200, y: 200 });
    assert_eq!(state.session.snake.len(), 1);
    assert_eq!(state.session.score, 0);
    assert_eq!(state.high_score(), 10);
}

#[test]
fn speed_ramp_over_a_scripted_meal_run() {
    let mut state = GameState::new_with_seed(Board::standard(), Vec::new(), 0, 7);
    state.session.snake = Snake::new(Cell { x: 20, y: 200 }, Direction::Right);

    // Five foods in a row: score hits 50, the interval steps down once.
    for i in 0..5 {
        state.session.food = Food::at(state.session.snake.next_head());

        match state.tick() {
            TickOutcome::Ate { rearm_interval_ms } => {
                if i == 4 {
                    assert_eq!(rearm_interval_ms, Some(140));
                } else {
                    assert_eq!(rearm_interval_ms, None);
                }
            }
            other => panic!("expected Ate, got {other:?}"),
        }
    }

    assert_eq!(state.session.score, 50);
    assert_eq!(state.session.snake.len(), 6);
    assert_eq!(state.tick_interval_ms(), 140);
}
