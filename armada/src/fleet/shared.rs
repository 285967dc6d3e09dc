//! A fleet handle that can be shared between threads.
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    fleet::{AddShipError, Fleet},
    ships::Ship,
};

/// Cloneable handle to a [`Fleet`] behind a lock. Each add runs its checks and the
/// append under one lock acquisition.
#[derive(Debug, Clone, Default)]
pub struct SharedFleet(Arc<Mutex<Fleet>>);

impl SharedFleet {
    /// Wrap the given fleet.
    pub fn new(fleet: Fleet) -> Self {
        SharedFleet(Arc::new(Mutex::new(fleet)))
    }

    /// Lock the fleet for arbitrary access. A poisoned lock is recovered, since every
    /// fleet mutation leaves the fleet consistent.
    pub fn lock(&self) -> MutexGuard<Fleet> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`Fleet::try_add_ship`].
    pub fn try_add_ship(&self, ship: Ship) -> Result<(), AddShipError> {
        self.lock().try_add_ship(ship)
    }

    /// See [`Fleet::add_ship`].
    pub fn add_ship(&self, ship: Ship) -> bool {
        self.lock().add_ship(ship)
    }
}

impl From<Fleet> for SharedFleet {
    fn from(fleet: Fleet) -> Self {
        Self::new(fleet)
    }
}
