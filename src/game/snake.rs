use std::collections::{HashSet, VecDeque};

use super::direction::Direction;
use super::error::GameError;
use super::grid::Cell;

/// The snake in the game
///
/// The body is ordered head first. `direction` is where the next tick moves;
/// `heading` is the direction the last tick actually moved, and is what
/// reversal checks compare against.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    heading: Direction,
    alive: bool,
    growing: bool,
}

impl Snake {
    /// Create a straight snake of `length` cells trailing behind `head`
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        let back = direction.opposite();
        let mut body = VecDeque::with_capacity(length.max(1));
        body.push_back(head);

        for _ in 1..length {
            let last = body[body.len() - 1];
            body.push_back(last.step(back));
        }

        Self {
            body,
            direction,
            heading: direction,
            alive: true,
            growing: false,
        }
    }

    /// Build a snake from explicit cells, head first.
    ///
    /// The cells must be non-empty, pairwise distinct and contiguous.
    pub fn from_cells(cells: Vec<Cell>, direction: Direction) -> Result<Self, GameError> {
        if cells.is_empty() {
            return Err(GameError::EmptyBody);
        }

        let mut seen = HashSet::with_capacity(cells.len());
        for cell in &cells {
            if !seen.insert(*cell) {
                return Err(GameError::Overlap { cell: *cell });
            }
        }

        if let Some(index) = cells.windows(2).position(|pair| !pair[0].is_adjacent(pair[1])) {
            return Err(GameError::Discontiguous { index });
        }

        Ok(Self {
            body: cells.into(),
            direction,
            heading: direction,
            alive: true,
            growing: false,
        })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true for a snake built through `new` or `from_cells`
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction committed by the most recent move
    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Every occupied cell
    pub fn occupied(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    /// Cell the head enters on the next move
    pub fn next_head(&self) -> Cell {
        self.head().step(self.direction)
    }

    /// Record a direction change. Reversals of the committed heading are ignored.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !self.alive || self.heading.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Queue one cell of growth for the next move
    pub fn grow(&mut self) {
        self.growing = true;
    }

    /// Would entering `cell` run into the body?
    ///
    /// The tail is exempt unless growth is pending, because it moves out of
    /// the way on the same tick.
    pub fn hits_body(&self, cell: Cell) -> bool {
        let checked = if self.growing {
            self.body.len()
        } else {
            self.body.len() - 1
        };
        self.body.iter().take(checked).any(|segment| *segment == cell)
    }

    /// Move the head to `new_head`, keeping the tail if growth was pending
    pub(crate) fn advance(&mut self, new_head: Cell) {
        self.body.push_front(new_head);
        if self.growing {
            self.growing = false;
        } else {
            self.body.pop_back();
        }
        self.heading = self.direction;
    }

    pub(crate) fn kill(&mut self) {
        self.alive = false;
    }
}
