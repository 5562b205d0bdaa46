use tracing::{error, info};

use super::{
    config::{DeathPolicy, GameConfig},
    direction::Direction,
    error::GameError,
    food::FoodPlacer,
    grid::{Cell, Grid},
    snake::Snake,
};

/// What the snake ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfCollision,
}

/// Lifecycle of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Dead(Collision),
    /// The snake covers the whole grid and no food can be placed
    Filled,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    Ate,
    Died(Collision),
    Filled,
    /// The game is over; nothing changed
    Halted,
}

/// Read-only copy of everything a renderer needs
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub grid: Grid,
    pub body: Vec<Cell>,
    pub food: Option<Cell>,
    pub direction: Direction,
    pub status: GameStatus,
    pub score: u32,
    pub steps: u64,
}

/// The game engine that owns and advances all game state
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    placer: FoodPlacer,
    snake: Snake,
    food: Option<Cell>,
    status: GameStatus,
    score: u32,
    steps: u64,
}

impl GameEngine {
    /// Validate `config` and start a game
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let grid = config.grid();
        let mut placer = match config.seed {
            Some(seed) => FoodPlacer::seeded(grid, seed),
            None => FoodPlacer::new(grid),
        };

        let snake = Self::initial_snake(&config, grid);
        let food = placer.place(&snake.occupied())?;

        info!(
            cols = grid.cols(),
            rows = grid.rows(),
            length = snake.len(),
            "game started"
        );

        Ok(Self {
            config,
            grid,
            placer,
            snake,
            food: Some(food),
            status: GameStatus::Running,
            score: 0,
            steps: 0,
        })
    }

    /// Start from an explicit snake and food cell, e.g. a scripted scenario
    pub fn with_state(config: GameConfig, snake: Snake, food: Cell) -> Result<Self, GameError> {
        config.validate()?;
        let grid = config.grid();

        if let Some(cell) = snake.body().iter().find(|cell| !grid.in_bounds(**cell)) {
            return Err(GameError::OutOfBounds { cell: *cell });
        }
        if !grid.in_bounds(food) || snake.contains(food) {
            return Err(GameError::InvalidFood { cell: food });
        }

        let placer = match config.seed {
            Some(seed) => FoodPlacer::seeded(grid, seed),
            None => FoodPlacer::new(grid),
        };

        Ok(Self {
            config,
            grid,
            placer,
            snake,
            food: Some(food),
            status: GameStatus::Running,
            score: 0,
            steps: 0,
        })
    }

    fn initial_snake(config: &GameConfig, grid: Grid) -> Snake {
        Snake::new(grid.center(), Direction::Right, config.initial_snake_length)
    }

    /// Throw the current game away and start over with fresh food
    pub fn reset(&mut self) -> Result<(), GameError> {
        let snake = Self::initial_snake(&self.config, self.grid);
        let food = self.placer.place(&snake.occupied())?;

        self.snake = snake;
        self.food = Some(food);
        self.status = GameStatus::Running;
        self.score = 0;
        self.steps = 0;
        info!("game reset");
        Ok(())
    }

    /// Record a direction change for the next tick.
    ///
    /// Returns false when the game is over or `direction` reverses the
    /// direction the snake last moved in.
    pub fn steer(&mut self, direction: Direction) -> bool {
        self.status == GameStatus::Running && self.snake.set_direction(direction)
    }

    /// Advance the game by one tick
    pub fn step(&mut self) -> StepOutcome {
        if self.status != GameStatus::Running {
            return StepOutcome::Halted;
        }

        let new_head = self.snake.next_head();

        if !self.grid.in_bounds(new_head) {
            return self.die(Collision::Wall);
        }
        if self.snake.hits_body(new_head) {
            return self.die(Collision::SelfCollision);
        }

        let ate = self.food == Some(new_head);
        if ate {
            self.snake.grow();
            let mut occupied = self.snake.occupied();
            occupied.insert(new_head);
            self.food = self.placer.place(&occupied).ok();
            self.score += 1;
        }

        self.snake.advance(new_head);
        self.steps += 1;

        match (ate, self.food) {
            (false, _) => StepOutcome::Moved,
            (true, Some(_)) => StepOutcome::Ate,
            (true, None) => {
                info!(length = self.snake.len(), "snake filled the grid");
                self.status = GameStatus::Filled;
                StepOutcome::Filled
            }
        }
    }

    fn die(&mut self, collision: Collision) -> StepOutcome {
        self.snake.kill();
        self.status = GameStatus::Dead(collision);
        info!(
            ?collision,
            score = self.score,
            steps = self.steps,
            "snake died"
        );

        if self.config.on_death == DeathPolicy::Reset {
            if let Err(err) = self.reset() {
                error!(%err, "automatic reset failed");
            }
        }

        StepOutcome::Died(collision)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_alive(&self) -> bool {
        self.snake.is_alive()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid,
            body: self.snake.body().iter().copied().collect(),
            food: self.food,
            direction: self.snake.direction(),
            status: self.status,
            score: self.score,
            steps: self.steps,
        }
    }
}
