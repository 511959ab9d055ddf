//! The single-player game: the move list, move validation, and status
//! queries over a board of hidden ships.

use rand::Rng;

use crate::{
    board::{
        Board, BoardSetup, CellSymbol, Coordinate, Dimensions, SetupError, ShotError, ShotOutcome,
    },
    ships::ShipClass,
};

/// Whether the game is still accepting moves.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameStatus {
    /// At least one ship is still afloat.
    InProgress,
    /// Every ship has been sunk. Terminal.
    Ended,
}

/// A game in progress: a board with a hidden fleet plus the chronological
/// record of moves made against it.
///
/// A freshly constructed game is simply [`InProgress`][GameStatus::InProgress]
/// with zero moves; there is no separate not-yet-started state. The game
/// never terminates the process or performs I/O; quitting is the driving
/// loop's business.
pub struct Game {
    board: Board,
    /// Accepted moves in the order they were made. Rejected moves are never
    /// recorded.
    moves: Vec<Coordinate>,
}

impl Game {
    /// Construct a game over a fully set-up board, with no moves made.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            moves: Vec::new(),
        }
    }

    /// Construct a game on a grid of the given dimensions with the fleet
    /// seated randomly. Fails only if the fleet cannot be seated on the
    /// grid.
    pub fn random<R: Rng>(dim: Dimensions, rng: &mut R) -> Result<Self, SetupError> {
        let mut setup = BoardSetup::new(dim);
        setup.place_fleet(rng)?;
        match setup.start() {
            Ok(board) => Ok(Self::new(board)),
            // place_fleet seats every class, so the setup is always ready.
            Err(_) => unreachable!(),
        }
    }

    /// Get the [`Dimensions`] of the board being played.
    pub fn dimensions(&self) -> Dimensions {
        self.board.dimensions()
    }

    /// The moves accepted so far, oldest first.
    pub fn moves(&self) -> &[Coordinate] {
        &self.moves
    }

    /// Number of moves accepted so far.
    pub fn turns(&self) -> usize {
        self.moves.len()
    }

    /// Check whether a move would be accepted, without making it: the
    /// coordinate must be on the grid and not already played.
    pub fn check_shot(&self, coord: Coordinate) -> Result<(), ShotError> {
        self.board.check_shot(coord)
    }

    /// Validate and apply a move. On success the move is appended to the
    /// move list and any ship on the cell takes a hit. A rejected move
    /// leaves the game completely unchanged; the caller re-prompts.
    pub fn fire(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        let outcome = self.board.shoot(coord)?;
        self.moves.push(coord);
        Ok(outcome)
    }

    /// Get the ship occupying the given cell, if any, independent of hit
    /// history.
    pub fn ship_at(&self, coord: Coordinate) -> Option<ShipClass> {
        self.board.ship_at(coord)
    }

    /// Outcome of the most recent move, derived from the move list and the
    /// current ship state. `None` before the first move.
    pub fn last_outcome(&self) -> Option<ShotOutcome> {
        let &coord = self.moves.last()?;
        Some(match self.board.ship_at(coord) {
            None => ShotOutcome::Miss,
            Some(ship) if !self.board.sunk(ship) => ShotOutcome::Hit(ship),
            Some(ship) if self.board.all_sunk() => ShotOutcome::Victory(ship),
            Some(ship) => ShotOutcome::Sunk(ship),
        })
    }

    /// Get the status of the game.
    pub fn status(&self) -> GameStatus {
        if self.board.all_sunk() {
            GameStatus::Ended
        } else {
            GameStatus::InProgress
        }
    }

    /// True iff every ship has been sunk.
    pub fn has_ended(&self) -> bool {
        self.status() == GameStatus::Ended
    }

    /// Iterate the ship classes with whether each has been sunk.
    pub fn ships(&self) -> impl Iterator<Item = (ShipClass, bool)> + '_ {
        ShipClass::ALL
            .iter()
            .map(move |&ship| (ship, self.board.sunk(ship)))
    }

    /// Classify the cell at the given coordinate for rendering. Returns
    /// `None` if the coordinate is out of range.
    pub fn symbol(&self, coord: Coordinate) -> Option<CellSymbol> {
        self.board.symbol(coord)
    }

    /// Get an iterator over the board's rows for rendering. Each item is an
    /// iterator over the cell classifications of one row.
    pub fn iter_board<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = CellSymbol>> {
        let board = &self.board;
        board
            .dimensions()
            .iter_rows()
            .map(move |row| row.map(move |coord| board.symbol(coord).expect("coordinate in range")))
    }
}
