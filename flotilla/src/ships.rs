//! The fixed ship classes and the straight runs of cells they occupy.

use std::fmt;

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::{Coordinate, Dimensions};

/// One of the five fixed ship classes of the standard game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShipClass {
    /// Carrier: length 5.
    Carrier,
    /// Battleship: length 4.
    Battleship,
    /// Cruiser: length 3.
    Cruiser,
    /// Submarine: length 3.
    Submarine,
    /// Destroyer: length 2.
    Destroyer,
}

impl ShipClass {
    /// Every class, in placement order. The fleet is seated sequentially in
    /// this order, longest ship first.
    pub const ALL: [ShipClass; 5] = [
        ShipClass::Carrier,
        ShipClass::Battleship,
        ShipClass::Cruiser,
        ShipClass::Submarine,
        ShipClass::Destroyer,
    ];

    /// Get the display name of this ship class.
    pub fn name(self) -> &'static str {
        match self {
            ShipClass::Carrier => "Carrier",
            ShipClass::Battleship => "Battleship",
            ShipClass::Cruiser => "Cruiser",
            ShipClass::Submarine => "Submarine",
            ShipClass::Destroyer => "Destroyer",
        }
    }

    /// Get the number of cells this class occupies.
    pub fn len(self) -> usize {
        match self {
            ShipClass::Carrier => 5,
            ShipClass::Battleship => 4,
            ShipClass::Cruiser => 3,
            ShipClass::Submarine => 3,
            ShipClass::Destroyer => 2,
        }
    }

    /// Compute the contiguous run of cells this class covers when anchored
    /// at `anchor` and extended along `orientation`. The run grows toward
    /// higher columns or higher rows. Returns `None` if any cell of the run
    /// falls outside `dim`.
    pub(crate) fn run(
        self,
        anchor: Coordinate,
        orientation: Orientation,
        dim: Dimensions,
    ) -> Option<Vec<Coordinate>> {
        let mut cells = Vec::with_capacity(self.len());
        for step in 0..self.len() {
            let coord = match orientation {
                Orientation::Horizontal => Coordinate::new(anchor.col + step, anchor.row),
                Orientation::Vertical => Coordinate::new(anchor.col, anchor.row + step),
            };
            if !dim.contains(coord) {
                return None;
            }
            cells.push(coord);
        }
        Some(cells)
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Placement orientation of a ship. Ships occupy a straight line within a
/// single row or a single column.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Distribution<Orientation> for Standard {
    /// Sample an orientation uniformly, so `rng.gen()` works on
    /// [`Orientation`].
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}
