use std::collections::HashSet;

use grid_snake::game::{
    Cell, Collision, Direction, FoodPlacer, GameConfig, GameEngine, GameStatus, Grid, Snake,
    StepOutcome,
};
use grid_snake::modes::Autopilot;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn cells(raw: &[(i32, i32)]) -> Vec<Cell> {
    raw.iter().copied().map(Cell::from).collect()
}

fn engine_with(body: &[(i32, i32)], direction: Direction, food: (i32, i32)) -> GameEngine {
    let config = GameConfig {
        seed: Some(99),
        ..GameConfig::with_grid(10, 10)
    };
    let snake = Snake::from_cells(cells(body), direction).unwrap();
    GameEngine::with_state(config, snake, food.into()).unwrap()
}

fn assert_invariants(engine: &GameEngine) {
    let body = &engine.snapshot().body;
    assert!(!body.is_empty());

    for pair in body.windows(2) {
        assert!(pair[0].is_adjacent(pair[1]), "gap between {:?} and {:?}", pair[0], pair[1]);
    }

    if engine.is_alive() {
        let unique: HashSet<Cell> = body.iter().copied().collect();
        assert_eq!(unique.len(), body.len(), "overlapping body {body:?}");
        assert!(body.iter().all(|cell| engine.grid().in_bounds(*cell)));
    }

    if let Some(food) = engine.food() {
        assert!(!body.contains(&food), "food {food:?} inside body");
        assert!(engine.grid().in_bounds(food));
    }
}

#[test]
fn eating_food_grows_by_one() {
    let mut engine = engine_with(&[(5, 5), (4, 5), (3, 5)], Direction::Right, (6, 5));

    assert_eq!(engine.step(), StepOutcome::Ate);
    assert_eq!(
        engine.snapshot().body,
        cells(&[(6, 5), (5, 5), (4, 5), (3, 5)])
    );
    assert_invariants(&engine);
}

#[test]
fn moving_without_food_keeps_length() {
    let mut engine = engine_with(&[(5, 5), (4, 5), (3, 5)], Direction::Right, (1, 1));

    assert_eq!(engine.step(), StepOutcome::Moved);
    assert_eq!(engine.snapshot().body, cells(&[(6, 5), (5, 5), (4, 5)]));
}

#[test]
fn hitting_the_wall_kills_without_moving() {
    let mut engine = engine_with(&[(9, 5), (8, 5), (7, 5)], Direction::Right, (1, 1));
    let before = engine.snapshot().body;

    assert_eq!(engine.step(), StepOutcome::Died(Collision::Wall));
    assert!(!engine.is_alive());
    assert_eq!(engine.snapshot().body, before);
}

#[test]
fn hitting_a_body_segment_kills() {
    // Moving Up from (3,5) enters (3,4), the fourth segment
    let mut engine = engine_with(
        &[(3, 5), (2, 5), (2, 4), (3, 4), (4, 4), (4, 3)],
        Direction::Up,
        (8, 8),
    );

    assert_eq!(engine.step(), StepOutcome::Died(Collision::SelfCollision));
    assert_eq!(engine.status(), GameStatus::Dead(Collision::SelfCollision));
}

#[test]
fn entering_the_vacating_tail_is_safe() {
    let mut engine = engine_with(&[(4, 4), (5, 4), (5, 5), (4, 5)], Direction::Down, (8, 8));

    assert_eq!(engine.step(), StepOutcome::Moved);
    assert_eq!(engine.snapshot().body, cells(&[(4, 5), (4, 4), (5, 4), (5, 5)]));
    assert_invariants(&engine);
}

#[test]
fn reversal_requests_never_change_state() {
    for direction in Direction::ALL {
        let head = Cell::new(5, 5);
        let snake = Snake::new(head, direction, 3);
        let config = GameConfig::with_grid(10, 10);
        let mut engine = GameEngine::with_state(config, snake, Cell::new(0, 0)).unwrap();
        let before = engine.snapshot();

        assert!(!engine.steer(direction.opposite()));
        assert_eq!(engine.snapshot(), before);
    }
}

#[test]
fn last_free_cell_is_always_chosen() {
    let grid = Grid::new(6, 4);
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..25 {
        let free = Cell::new(rng.gen_range(0..6), rng.gen_range(0..4));
        let occupied: HashSet<Cell> = grid.cells().filter(|cell| *cell != free).collect();
        let mut placer = FoodPlacer::seeded(grid, rng.gen_range(0..u64::MAX));
        assert_eq!(placer.place(&occupied), Ok(free));
    }
}

#[test]
fn random_play_preserves_invariants() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for game in 0..40 {
        let config = GameConfig {
            seed: Some(game),
            initial_snake_length: 3,
            ..GameConfig::with_grid(8, 6)
        };
        let mut engine = GameEngine::new(config).unwrap();
        assert_invariants(&engine);

        for _ in 0..400 {
            let length_before = engine.snake().len();
            engine.steer(Direction::ALL[rng.gen_range(0..4)]);
            let outcome = engine.step();

            match outcome {
                StepOutcome::Moved => assert_eq!(engine.snake().len(), length_before),
                StepOutcome::Ate | StepOutcome::Filled => {
                    assert_eq!(engine.snake().len(), length_before + 1)
                }
                StepOutcome::Died(_) => assert_eq!(engine.snake().len(), length_before),
                StepOutcome::Halted => unreachable!("stepped a finished game"),
            }
            assert_invariants(&engine);

            if engine.status() != GameStatus::Running {
                break;
            }
        }
    }
}

#[test]
fn autopilot_play_preserves_invariants() {
    let config = GameConfig {
        seed: Some(17),
        initial_snake_length: 3,
        ..GameConfig::with_grid(12, 12)
    };
    let mut engine = GameEngine::new(config).unwrap();

    for _ in 0..2_000 {
        if let Some(direction) = Autopilot.choose(&engine) {
            engine.steer(direction);
        }
        engine.step();
        assert_invariants(&engine);
        if engine.status() != GameStatus::Running {
            break;
        }
    }

    assert!(engine.score() > 0);
}
