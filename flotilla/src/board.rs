//! Types that make up the game board.

use std::collections::HashMap;

use crate::ships::ShipClass;

use self::grid::Grid;
pub use self::{
    coordinate::{Coordinate, ParseCoordinateError},
    dimensions::{Dimensions, MAX_COLS},
    errors::{CannotPlaceReason, CannotShootReason, PlaceError, SetupError, ShotError},
    setup::{BoardSetup, MAX_PLACEMENT_ATTEMPTS},
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;
mod setup;

/// Classification of a single cell for rendering.
///
/// `Ship` means an intact ship cell. In the real game a renderer must draw
/// it exactly like [`Empty`][CellSymbol::Empty] while play is in progress;
/// ship positions are only revealed by hits. The variant exists so an
/// end-of-game view can show where the fleet was hiding.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellSymbol {
    /// Open water, not yet fired at.
    Empty,
    /// An intact cell of the given ship.
    Ship(ShipClass),
    /// A ship cell that has been hit.
    Hit(ShipClass),
    /// Open water that was fired at.
    Miss,
}

/// Result of a shot on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit the given ship, but did not sink it.
    Hit(ShipClass),
    /// The shot sank the given ship, but other ships are still afloat.
    Sunk(ShipClass),
    /// The shot sank the given ship, and no ships remain afloat.
    Victory(ShipClass),
}

impl ShotOutcome {
    /// Get the ship that was hit, if any.
    pub fn ship(&self) -> Option<ShipClass> {
        match self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(ship) | ShotOutcome::Sunk(ship) | ShotOutcome::Victory(ship) => {
                Some(*ship)
            }
        }
    }

    /// Whether the shot sank a ship.
    pub fn is_sink(&self) -> bool {
        matches!(self, ShotOutcome::Sunk(_) | ShotOutcome::Victory(_))
    }
}

/// The playing board: the hidden fleet and the record of which cells have
/// been fired at. Built from a [`BoardSetup`] once every ship is placed;
/// ship positions never change afterwards.
pub struct Board {
    /// Grid of cells occupied by ships.
    grid: Grid,

    /// Mapping of all ship classes to the runs they occupy in the grid.
    ships: HashMap<ShipClass, Vec<Coordinate>>,
}

impl Board {
    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> Dimensions {
        self.grid.dim
    }

    /// Get the run of cells occupied by the given ship.
    pub fn placement(&self, ship: ShipClass) -> Option<&[Coordinate]> {
        self.ships.get(&ship).map(Vec::as_slice)
    }

    /// Get the ship occupying the given cell, if any, independent of hit
    /// history. Returns `None` for water and for out-of-range coordinates.
    pub fn ship_at(&self, coord: Coordinate) -> Option<ShipClass> {
        self.grid.get(coord).and_then(|cell| cell.ship)
    }

    /// Check if the given ship has been sunk: every cell of its run hit.
    pub fn sunk(&self, ship: ShipClass) -> bool {
        self.placement(ship)
            .map_or(false, |run| run.iter().all(|&coord| self.grid[coord].hit))
    }

    /// Returns true if every ship on this board has been sunk.
    pub fn all_sunk(&self) -> bool {
        ShipClass::ALL.iter().all(|&ship| self.sunk(ship))
    }

    /// Classify the cell at the given coordinate for rendering. Returns
    /// `None` if the coordinate is out of range.
    pub fn symbol(&self, coord: Coordinate) -> Option<CellSymbol> {
        self.grid.get(coord).map(|cell| match (cell.ship, cell.hit) {
            (None, false) => CellSymbol::Empty,
            (None, true) => CellSymbol::Miss,
            (Some(ship), false) => CellSymbol::Ship(ship),
            (Some(ship), true) => CellSymbol::Hit(ship),
        })
    }

    /// Check whether a shot at `coord` would be accepted, without firing
    /// it. Validation never changes the board.
    pub fn check_shot(&self, coord: Coordinate) -> Result<(), ShotError> {
        match self.grid.get(coord) {
            None => Err(out_of_range(self.grid.dim, coord)),
            Some(cell) if cell.hit => Err(ShotError::new(CannotShootReason::AlreadyShot, coord)),
            Some(_) => Ok(()),
        }
    }

    /// Fire a shot at this board, returning why the shot was rejected or
    /// the result of the shot.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        let dim = self.grid.dim;
        let hit_ship = match self.grid.get_mut(coord) {
            None => return Err(out_of_range(dim, coord)),
            Some(cell) if cell.hit => {
                return Err(ShotError::new(CannotShootReason::AlreadyShot, coord))
            }
            Some(cell) => {
                cell.hit = true;
                cell.ship
            }
        };
        Ok(match hit_ship {
            None => ShotOutcome::Miss,
            Some(ship) if !self.sunk(ship) => ShotOutcome::Hit(ship),
            Some(ship) if self.all_sunk() => ShotOutcome::Victory(ship),
            Some(ship) => ShotOutcome::Sunk(ship),
        })
    }
}

fn out_of_range(dim: Dimensions, coord: Coordinate) -> ShotError {
    ShotError::new(
        CannotShootReason::OutOfRange {
            first: dim.first(),
            last: dim.last(),
        },
        coord,
    )
}
