use gridsnake::config::GameConfig;
use gridsnake::game::{Game, Status};
use gridsnake::grid::Grid;
use gridsnake::snake::{Cell, Direction};

#[test]
fn first_move_and_food_pickup_on_a_40x30_grid() {
    let config = GameConfig::default();
    let mut game = Game::with_seed(&config, 42);

    let start = game.snapshot();
    assert_eq!(start.status, Status::Playing);
    assert_eq!(start.snake, &[Cell::new(20, 15)]);
    assert_eq!(start.score, 0);

    // Ticks before any input leave the snake at its starting cell.
    game.tick();
    assert_eq!(game.snapshot().snake, &[Cell::new(20, 15)]);

    // Steer right with food waiting one cell ahead.
    game.request_direction(Direction::Right);
    game.place_food(Cell::new(21, 15));
    game.tick();

    let after = game.snapshot();
    assert_eq!(after.status, Status::Playing);
    assert_eq!(after.snake, &[Cell::new(21, 15)]);
    assert_eq!(after.score, 10);
    assert_eq!(game.target_len(), 2);
    assert!(Grid::new(40, 30).contains(after.food));

    // Growth shows up on the following tick.
    game.tick();
    let grown = game.snapshot();
    assert_eq!(grown.snake.len(), 2);
    assert_eq!(grown.snake.last(), Some(&Cell::new(22, 15)));
}

#[test]
fn a_full_session_survives_game_over_and_restart() {
    let config = GameConfig { grid_width: 10, grid_height: 10, ..GameConfig::default() };
    let mut game = Game::with_seed(&config, 7);

    game.request_direction(Direction::Right);
    while game.status() == Status::Playing {
        game.place_food(Cell::new(0, 0));
        game.tick();
    }
    assert_eq!(game.status(), Status::GameOver);

    game.reset();

    assert_eq!(game.status(), Status::Playing);
    assert_eq!(game.score(), 0);
    assert_eq!(game.snapshot().snake, &[Cell::new(5, 5)]);
    assert_eq!(game.target_len(), 1);
}
