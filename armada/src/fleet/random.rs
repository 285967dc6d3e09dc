//! Random placement of ships, for bots and impatient players.
use rand::Rng;

use crate::{
    compass::Compass,
    fleet::{CannotPlaceReason, Fleet, RandomPlacementError, Rules},
    position::Position,
    ships::{Ship, ShipKind},
};

/// Pick a uniformly random position on the board described by `rules`.
pub fn random_anchor<R: Rng + ?Sized>(rng: &mut R, rules: &Rules) -> Position {
    let size = rules.board_size();
    Position::new(rng.gen_range(0, size), rng.gen_range(0, size))
}

impl Fleet {
    /// Try up to `attempts` random anchors and bearings for a ship of the given kind,
    /// adding the first one the fleet accepts.
    pub fn place_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        kind: ShipKind,
        attempts: usize,
    ) -> Result<&Ship, RandomPlacementError> {
        for _ in 0..attempts {
            let bearing: Compass = rng.gen();
            let ship = Ship::new(kind, bearing, random_anchor(rng, &self.rules));
            match self.try_add_ship(ship) {
                Ok(()) => {
                    let idx = self.ships.len() - 1;
                    return Ok(&self.ships[idx]);
                }
                Err(err) if err.reason() == CannotPlaceReason::FleetFull => {
                    return Err(RandomPlacementError::FleetFull)
                }
                Err(_) => {}
            }
        }
        Err(RandomPlacementError::Exhausted { kind, attempts })
    }
}
