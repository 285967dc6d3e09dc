//! Ship placement and geometry for a Battleship-style naval game.
//!
//! A [`Ship`] is built from a [`ShipKind`], a [`Compass`] bearing and an anchor
//! [`Position`]; the kind's shape lays out every cell the ship owns. Ships are then
//! offered to a [`Fleet`], which accepts them only if they fit on the board, the fleet
//! has room, and they do not touch any ship already placed.
//!
//! ```
//! use armada::{build_ship, Compass, Fleet, Position};
//!
//! let mut fleet = Fleet::new();
//! let caravel = build_ship("caravela", Compass::North, Position::new(3, 5)).unwrap();
//! assert!(fleet.add_ship(caravel));
//!
//! // Touching the caravel diagonally is not allowed.
//! let barge = build_ship("barca", Compass::North, Position::new(5, 6)).unwrap();
//! assert!(!fleet.add_ship(barge));
//!
//! fleet.shoot(&(3, 5));
//! fleet.shoot(&(4, 5));
//! assert!(fleet.all_sunk());
//! ```
//!
//! Enable the `rng_gen` feature for random bearings and placements.

pub use crate::{
    compass::{Compass, ParseCompassError},
    fleet::{
        AddShipError, CannotPlaceReason, Edge, Fleet, RandomPlacementError, Rules, SharedFleet,
        BOARD_SIZE, FLEET_SIZE, STANDARD_FLEET,
    },
    position::{GridCoordinate, Position},
    ships::{build_ship, Ship, ShipError, ShipKind, UnknownKindError},
};

pub mod compass;
pub mod fleet;
pub mod position;
pub mod ships;
