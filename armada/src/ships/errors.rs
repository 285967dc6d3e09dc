//! Errors raised while building ships.

use thiserror::Error;

use crate::compass::Compass;

/// Error caused when a ship shape cannot be laid out from its anchor.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ShipError {
    /// The bearing does not name a direction the shape can extend along.
    #[error("{bearing:?} is not a valid bearing for a {cells}-cell ship")]
    InvalidBearing {
        /// The rejected bearing.
        bearing: Compass,
        /// Number of cells of the shape that rejected it.
        cells: usize,
    },
}

/// Error returned when a ship kind name is not recognized.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown ship kind {kind:?}, expected barca, caravela, nau, fragata or galeao")]
pub struct UnknownKindError {
    kind: String,
}

impl UnknownKindError {
    pub(super) fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_owned(),
        }
    }

    /// The name that was not recognized.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Extract the unrecognized name.
    pub fn into_kind(self) -> String {
        self.kind
    }
}
