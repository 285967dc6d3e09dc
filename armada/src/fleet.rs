//! The fleet: the ships placed on one player's board.

use log::debug;

use crate::{position::GridCoordinate, ships::{Ship, ShipKind}};

pub use self::{
    errors::{AddShipError, CannotPlaceReason, RandomPlacementError},
    rules::{Edge, Rules, BOARD_SIZE, FLEET_SIZE},
    shared::SharedFleet,
};
#[cfg(feature = "rng_gen")]
pub use self::random::random_anchor;

mod errors;
#[cfg(feature = "rng_gen")]
mod random;
mod rules;
mod shared;

/// Ships making up a standard fleet, largest first.
pub const STANDARD_FLEET: &[ShipKind] = &[
    ShipKind::Galleon,
    ShipKind::Frigate,
    ShipKind::Carrack,
    ShipKind::Carrack,
    ShipKind::Caravel,
    ShipKind::Caravel,
    ShipKind::Caravel,
    ShipKind::Barge,
    ShipKind::Barge,
    ShipKind::Barge,
];

/// The ships placed on one board, in the order they were added.
///
/// Every ship is checked against the [`Rules`] and against the ships already present at
/// the moment it is added. Ships are never removed, and later changes made through
/// [`Fleet::ships_mut`] are not re-validated.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    /// Limits applied when adding ships.
    rules: Rules,

    /// Placed ships in insertion order.
    ships: Vec<Ship>,
}

impl Fleet {
    /// Create an empty fleet with the default [`Rules`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty fleet with the given [`Rules`].
    pub fn with_rules(rules: Rules) -> Self {
        Self {
            rules,
            ships: Vec::new(),
        }
    }

    /// Get the [`Rules`] of this fleet.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Number of ships placed.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Check whether the ship could be added right now, without adding it.
    ///
    /// Checks run in order: fleet size, board bounds, then proximity to each placed ship
    /// in insertion order. The first failure is reported.
    pub fn check_placement(&self, ship: &Ship) -> Result<(), CannotPlaceReason> {
        if self.ships.len() >= self.rules.fleet_size() {
            return Err(CannotPlaceReason::FleetFull);
        }
        let edges = self.rules.edges_exceeded(ship);
        if !edges.is_empty() {
            return Err(CannotPlaceReason::OutOfBounds(edges));
        }
        match self.ships.iter().position(|placed| placed.too_close_to_ship(ship)) {
            Some(idx) => Err(CannotPlaceReason::TooClose(idx)),
            None => Ok(()),
        }
    }

    /// Attempt to add the ship. On success every cell of the ship is marked occupied and
    /// the ship is appended. On failure the fleet is unchanged and the ship is returned
    /// inside the error.
    pub fn try_add_ship(&mut self, mut ship: Ship) -> Result<(), AddShipError> {
        if let Err(reason) = self.check_placement(&ship) {
            debug!("rejected {}: {}", ship, reason);
            return Err(AddShipError::new(reason, ship));
        }
        debug!("placed {} as ship #{}", ship, self.ships.len());
        ship.occupy();
        self.ships.push(ship);
        Ok(())
    }

    /// Add the ship if it satisfies the rules, returning whether it was added.
    pub fn add_ship(&mut self, ship: Ship) -> bool {
        self.try_add_ship(ship).is_ok()
    }

    /// All placed ships.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Live, mutable access to the placed ships. Nothing pushed or changed through this
    /// is checked against the rules.
    pub fn ships_mut(&mut self) -> &mut Vec<Ship> {
        &mut self.ships
    }

    /// Ships whose category is exactly `category`. Matching is case sensitive.
    pub fn ships_like(&self, category: &str) -> Vec<&Ship> {
        self.ships
            .iter()
            .filter(|ship| ship.category() == category)
            .collect()
    }

    /// Ships with at least one cell not yet hit.
    pub fn floating_ships(&self) -> Vec<&Ship> {
        self.ships.iter().filter(|ship| ship.still_floating()).collect()
    }

    /// The first ship, in insertion order, with a cell at `pos`.
    pub fn ship_at<C: GridCoordinate + ?Sized>(&self, pos: &C) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.occupies(pos))
    }

    /// Mutable access to the first ship with a cell at `pos`.
    pub fn ship_at_mut<C: GridCoordinate + ?Sized>(&mut self, pos: &C) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|ship| ship.occupies(pos))
    }

    /// Fire at `pos`, marking the cell of the ship there as hit. Returns the ship that was
    /// hit, or `None` on a miss.
    pub fn shoot<C: GridCoordinate + ?Sized>(&mut self, pos: &C) -> Option<&Ship> {
        let ship = self.ship_at_mut(pos)?;
        ship.shoot(pos);
        debug!(
            "hit {} at ({}, {}), still floating: {}",
            ship,
            pos.row(),
            pos.column(),
            ship.still_floating()
        );
        Some(&*ship)
    }

    /// Returns true if no placed ship is still floating. An empty fleet counts as sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|ship| !ship.still_floating())
    }
}
