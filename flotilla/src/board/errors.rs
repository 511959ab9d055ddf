//! Errors used by the `Board` and `BoardSetup`.

use thiserror::Error;

use crate::{board::Coordinate, ships::ShipClass};

/// Reason why a ship could not be placed at a given position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The run would leave the grid in the requested orientation.
    #[error("insufficient space for the ship at the specified position")]
    InsufficientSpace,
    /// The ship was already placed.
    #[error("specified ship was already placed")]
    AlreadyPlaced,
    /// The run overlaps a ship that was already placed.
    #[error("the specified position was already occupied")]
    AlreadyOccupied,
}

/// Error caused when attempting to place a ship in an invalid position.
/// Rejected placements never change the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not place {ship} at {anchor}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    ship: ShipClass,
    anchor: Coordinate,
}

impl PlaceError {
    /// Construct a placement error from a reason, ship, and anchor.
    pub(super) fn new(reason: CannotPlaceReason, ship: ShipClass, anchor: Coordinate) -> Self {
        Self {
            reason,
            ship,
            anchor,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the ship whose placement was attempted.
    pub fn ship(&self) -> ShipClass {
        self.ship
    }

    /// Get the anchor coordinate where placement was attempted.
    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }
}

/// Reason why a particular cell could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The cell is outside the grid. Carries the smallest and largest legal
    /// coordinates so callers can cite the accepted range.
    #[error("out of range, must be between {first} and {last}")]
    OutOfRange {
        /// Smallest legal coordinate on the board.
        first: Coordinate,
        /// Largest legal coordinate on the board.
        last: Coordinate,
    },
    /// A shot has already been fired at that cell.
    #[error("already used")]
    AlreadyShot,
}

/// Error returned when trying to shoot a cell. Rejected shots never change
/// the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("cannot fire at {coord}: {reason}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    #[source]
    reason: CannotShootReason,

    /// The coordinate of the cell.
    coord: Coordinate,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(super) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the shot cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

/// Fatal configuration error raised while seating the fleet at game
/// construction. Play never produces this; a game that constructs
/// successfully holds a fully placed fleet.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum SetupError {
    /// Neither orientation of the ship fits on the grid at all.
    #[error("a {rows}x{cols} grid cannot fit the {ship}")]
    GridTooSmall {
        ship: ShipClass,
        rows: usize,
        cols: usize,
    },
    /// The retry budget ran out before a free run was found; the grid is
    /// too crowded for the ship set.
    #[error("no free position for the {ship} after {attempts} attempts")]
    Exhausted { ship: ShipClass, attempts: usize },
}
