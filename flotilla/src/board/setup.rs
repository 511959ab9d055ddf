//! Implements the setup phase of the board.

use std::collections::HashMap;

use rand::Rng;
use tracing::debug;

use crate::{
    board::{
        grid::Grid, Board, CannotPlaceReason, Coordinate, Dimensions, PlaceError, SetupError,
    },
    ships::{Orientation, ShipClass},
};

/// Retry budget for finding a free run for a single ship. Exhausting it
/// fails setup with [`SetupError::Exhausted`], which means the grid is too
/// crowded for the ship set rather than that the caller did anything wrong.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1024;

/// Setup phase for a [`Board`]. Allows placing ships and does not allow
/// shooting. Every setup owns its own grid and ship table; nothing is
/// shared between instances.
pub struct BoardSetup {
    /// Grid that ships are being placed into.
    grid: Grid,

    /// Mapping of placed ship classes to the runs they occupy.
    ships: HashMap<ShipClass, Vec<Coordinate>>,
}

impl BoardSetup {
    /// Begin setup by constructing an empty board with the given
    /// [`Dimensions`].
    pub fn new(dim: Dimensions) -> Self {
        Self {
            grid: Grid::new(dim),
            ships: HashMap::new(),
        }
    }

    /// Get the [`Dimensions`] of the board being set up.
    pub fn dimensions(&self) -> Dimensions {
        self.grid.dim
    }

    /// Checks if this board is ready to start. Returns `true` once all five
    /// ship classes are placed.
    pub fn ready(&self) -> bool {
        ShipClass::ALL.iter().all(|ship| self.ships.contains_key(ship))
    }

    /// If the ship is placed, get the run it occupies. Otherwise return
    /// `None`.
    pub fn placement(&self, ship: ShipClass) -> Option<&[Coordinate]> {
        self.ships.get(&ship).map(Vec::as_slice)
    }

    /// Attempts to place `ship` with its bow at `anchor`, extending along
    /// `orientation`. The whole run is validated before anything is
    /// committed, so a rejected placement leaves the setup untouched.
    pub fn place_ship(
        &mut self,
        ship: ShipClass,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<(), PlaceError> {
        if self.ships.contains_key(&ship) {
            return Err(PlaceError::new(
                CannotPlaceReason::AlreadyPlaced,
                ship,
                anchor,
            ));
        }
        let run = match ship.run(anchor, orientation, self.grid.dim) {
            Some(run) => run,
            None => {
                return Err(PlaceError::new(
                    CannotPlaceReason::InsufficientSpace,
                    ship,
                    anchor,
                ))
            }
        };
        if run.iter().any(|&coord| self.grid[coord].ship.is_some()) {
            return Err(PlaceError::new(
                CannotPlaceReason::AlreadyOccupied,
                ship,
                anchor,
            ));
        }
        // Every cell of the run is free and in bounds.
        for &coord in &run {
            self.grid[coord].ship = Some(ship);
        }
        self.ships.insert(ship, run);
        Ok(())
    }

    /// Seat every ship class that is not yet placed, sequentially in
    /// [`ShipClass::ALL`] order. Each placement draws a uniformly random
    /// orientation and an anchor constrained so the run fits on the grid,
    /// retrying on overlap up to [`MAX_PLACEMENT_ATTEMPTS`] times. Only
    /// ships placed earlier are consulted; there is no backtracking.
    pub fn place_fleet<R: Rng>(&mut self, rng: &mut R) -> Result<(), SetupError> {
        let dim = self.grid.dim;
        for &ship in ShipClass::ALL.iter() {
            if self.ships.contains_key(&ship) {
                continue;
            }
            if ship.len() > dim.rows() && ship.len() > dim.cols() {
                return Err(SetupError::GridTooSmall {
                    ship,
                    rows: dim.rows(),
                    cols: dim.cols(),
                });
            }
            let mut attempts = 0;
            loop {
                attempts += 1;
                if attempts > MAX_PLACEMENT_ATTEMPTS {
                    return Err(SetupError::Exhausted {
                        ship,
                        attempts: MAX_PLACEMENT_ATTEMPTS,
                    });
                }
                let orientation = if ship.len() > dim.cols() {
                    Orientation::Vertical
                } else if ship.len() > dim.rows() {
                    Orientation::Horizontal
                } else {
                    rng.gen()
                };
                // Shrink the anchor range so the run always fits; only
                // overlap can reject the attempt.
                let (max_col, max_row) = match orientation {
                    Orientation::Horizontal => (dim.cols() - ship.len(), dim.rows() - 1),
                    Orientation::Vertical => (dim.cols() - 1, dim.rows() - ship.len()),
                };
                let anchor =
                    Coordinate::new(rng.gen_range(0..=max_col), rng.gen_range(0..=max_row));
                if self.place_ship(ship, anchor, orientation).is_ok() {
                    debug!(ship = ship.name(), %anchor, ?orientation, attempts, "placed ship");
                    break;
                }
            }
        }
        Ok(())
    }

    /// Tries to start the game. If all ships are placed, returns a [`Board`]
    /// with the current placements, otherwise returns self.
    pub fn start(self) -> Result<Board, Self> {
        if !self.ready() {
            Err(self)
        } else {
            Ok(Board {
                grid: self.grid,
                ships: self.ships,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn coord(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    /// A run produced by placement must be a straight contiguous line,
    /// ascending along exactly one axis.
    fn assert_straight_run(ship: ShipClass, run: &[Coordinate]) {
        assert_eq!(run.len(), ship.len(), "{ship} run has the wrong length");
        let vertical = run
            .windows(2)
            .all(|w| w[1].col == w[0].col && w[1].row == w[0].row + 1);
        let horizontal = run
            .windows(2)
            .all(|w| w[1].row == w[0].row && w[1].col == w[0].col + 1);
        assert!(
            vertical || horizontal,
            "{ship} run is not a straight contiguous line: {run:?}"
        );
    }

    #[test]
    fn placed_ship_occupies_its_run() {
        let mut setup = BoardSetup::new(Dimensions::default());
        setup
            .place_ship(ShipClass::Cruiser, coord("B2"), Orientation::Vertical)
            .unwrap();
        assert_eq!(
            setup.placement(ShipClass::Cruiser),
            Some(&[coord("B2"), coord("B3"), coord("B4")][..])
        );
        assert_eq!(setup.dimensions(), Dimensions::default());
        assert!(!setup.ready());
    }

    #[test]
    fn overlapping_placement_is_rejected() {
        let mut setup = BoardSetup::new(Dimensions::default());
        setup
            .place_ship(ShipClass::Cruiser, coord("B2"), Orientation::Vertical)
            .unwrap();
        let err = setup
            .place_ship(ShipClass::Destroyer, coord("A3"), Orientation::Horizontal)
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
        assert_eq!(err.ship(), ShipClass::Destroyer);
        assert_eq!(err.anchor(), coord("A3"));
        // The rejected destroyer left no trace.
        assert!(setup.placement(ShipClass::Destroyer).is_none());
    }

    #[test]
    fn placement_off_the_grid_is_rejected() {
        let mut setup = BoardSetup::new(Dimensions::default());
        let err = setup
            .place_ship(ShipClass::Carrier, coord("H1"), Orientation::Horizontal)
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::InsufficientSpace);
    }

    #[test]
    fn each_class_is_placed_at_most_once() {
        let mut setup = BoardSetup::new(Dimensions::default());
        setup
            .place_ship(ShipClass::Destroyer, coord("A1"), Orientation::Horizontal)
            .unwrap();
        let err = setup
            .place_ship(ShipClass::Destroyer, coord("E5"), Orientation::Horizontal)
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyPlaced);
    }

    #[test]
    fn start_requires_a_full_fleet() {
        let setup = BoardSetup::new(Dimensions::default());
        let setup = match setup.start() {
            Ok(_) => panic!("an empty setup must not start"),
            Err(setup) => setup,
        };
        assert!(!setup.ready());
    }

    #[test]
    fn random_fleet_fills_the_standard_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut setup = BoardSetup::new(Dimensions::default());
        setup.place_fleet(&mut rng).unwrap();
        assert!(setup.ready());
    }

    #[test]
    fn random_fleet_respects_manual_placements() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut setup = BoardSetup::new(Dimensions::default());
        setup
            .place_ship(ShipClass::Carrier, coord("F4"), Orientation::Vertical)
            .unwrap();
        setup.place_fleet(&mut rng).unwrap();
        assert_eq!(
            setup.placement(ShipClass::Carrier).unwrap()[0],
            coord("F4")
        );
        assert!(setup.ready());
    }

    #[test]
    fn fleet_cannot_fit_on_a_tiny_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut setup = BoardSetup::new(Dimensions::new(4, 4));
        let err = setup.place_fleet(&mut rng).unwrap_err();
        assert_eq!(
            err,
            SetupError::GridTooSmall {
                ship: ShipClass::Carrier,
                rows: 4,
                cols: 4,
            }
        );
    }

    proptest! {
        /// On any grid with room to spare, the seated fleet is five
        /// pairwise-disjoint straight runs of the class lengths, fully in
        /// bounds.
        #[test]
        fn fleet_runs_are_disjoint_straight_and_in_bounds(
            rows in 7usize..=20,
            cols in 7usize..=20,
            seed in any::<u64>(),
        ) {
            let dim = Dimensions::new(rows, cols);
            let mut rng = StdRng::seed_from_u64(seed);
            let mut setup = BoardSetup::new(dim);
            setup.place_fleet(&mut rng).unwrap();

            let mut occupied = HashSet::new();
            for ship in ShipClass::ALL {
                let run = setup.placement(ship).unwrap();
                assert_straight_run(ship, run);
                for &coord in run {
                    prop_assert!(dim.contains(coord), "{coord} is off the grid");
                    prop_assert!(occupied.insert(coord), "{coord} is occupied twice");
                }
            }
            let total: usize = ShipClass::ALL.iter().map(|s| s.len()).sum();
            prop_assert_eq!(occupied.len(), total);
        }
    }
}
