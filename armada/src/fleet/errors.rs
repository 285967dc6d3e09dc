//! Errors used by the [`Fleet`][crate::Fleet].

use std::fmt::{self, Debug};

use enumflags2::BitFlags;
use thiserror::Error;

use crate::{fleet::Edge, ships::{Ship, ShipKind}};

/// Reason why a ship could not be added to a fleet.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The fleet already holds as many ships as the rules allow.
    #[error("the fleet is already full")]
    FleetFull,
    /// One or more cells of the ship are off the board.
    #[error("the ship extends past the board edges {0:?}")]
    OutOfBounds(BitFlags<Edge>),
    /// The ship touches or overlaps the ship at the given index in the fleet.
    #[error("the ship is too close to ship #{0}")]
    TooClose(usize),
}

/// Error caused when attempting to add a ship to a fleet. Hands the ship back.
#[derive(Error)]
#[error("could not place {ship}: {reason}")]
pub struct AddShipError {
    #[source]
    reason: CannotPlaceReason,
    ship: Ship,
}

impl Debug for AddShipError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl AddShipError {
    /// Construct an error from a reason and the rejected ship.
    pub(super) fn new(reason: CannotPlaceReason, ship: Ship) -> Self {
        Self { reason, ship }
    }

    /// Get the reason the ship was rejected.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get a reference to the rejected ship.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Extract the rejected ship from this error.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

impl From<AddShipError> for Ship {
    /// Allows retrieving the rejected ship from the error with into.
    fn from(err: AddShipError) -> Self {
        err.into_ship()
    }
}

/// Error returned when random placement gives up.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum RandomPlacementError {
    /// The fleet has no room left for another ship.
    #[error("the fleet is already full")]
    FleetFull,
    /// No legal spot was found for the ship within the allowed attempts.
    #[error("no room found for a {kind} after {attempts} attempts")]
    Exhausted {
        /// Kind of ship that could not be placed.
        kind: ShipKind,
        /// Number of placements tried.
        attempts: usize,
    },
}
