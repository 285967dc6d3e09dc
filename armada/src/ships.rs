//! Ship kinds, their shapes, and the ships built from them.
use std::{fmt, str::FromStr};

use crate::{
    compass::Compass,
    position::{GridCoordinate, Position},
};

pub use self::{
    errors::{ShipError, UnknownKindError},
    galleon::Cross,
    linear::Line,
};

mod errors;
mod galleon;
mod linear;

/// Projection of a shape onto the board from a particular anchor. Order is the order in
/// which the shape generated the cells, with the anchor first.
pub type ShapeProjection = Vec<Position>;

/// Trait for shapes that a ship can be.
pub trait ShipShape {
    /// Number of cells the shape covers.
    fn cells(&self) -> usize;

    /// Lay out the shape from the given anchor along the given bearing. Does not account
    /// for board bounds or other ships.
    fn project(&self, bearing: Compass, anchor: &Position) -> Result<ShapeProjection, ShipError>;
}

/// The kinds of ship a fleet is made of.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShipKind {
    /// Barca: 1 cell.
    Barge,
    /// Caravela: 2 cells in a line.
    Caravel,
    /// Nau: 3 cells in a line.
    Carrack,
    /// Fragata: 4 cells in a line.
    Frigate,
    /// Galeao: 5 cells in a cross.
    Galleon,
}

impl ShipKind {
    /// Every ship kind, smallest first.
    pub const ALL: &'static [ShipKind] = &[
        ShipKind::Barge,
        ShipKind::Caravel,
        ShipKind::Carrack,
        ShipKind::Frigate,
        ShipKind::Galleon,
    ];

    /// Number of cells a ship of this kind covers.
    pub fn size(self) -> usize {
        match self {
            ShipKind::Barge => 1,
            ShipKind::Caravel => 2,
            ShipKind::Carrack => 3,
            ShipKind::Frigate => 4,
            ShipKind::Galleon => 5,
        }
    }

    /// Category name given to ships of this kind.
    pub fn category(self) -> &'static str {
        match self {
            ShipKind::Barge => "Barca",
            ShipKind::Caravel => "Caravela",
            ShipKind::Carrack => "Nau",
            ShipKind::Frigate => "Fragata",
            ShipKind::Galleon => "Galeao",
        }
    }

    /// Lay out a ship of this kind from the given anchor.
    pub fn project(
        self,
        bearing: Compass,
        anchor: &Position,
    ) -> Result<ShapeProjection, ShipError> {
        match self {
            ShipKind::Galleon => Cross.project(bearing, anchor),
            other => Line::new(other.size()).project(bearing, anchor),
        }
    }
}

impl FromStr for ShipKind {
    type Err = UnknownKindError;

    /// Parse the factory name of a ship kind, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "barca" => Ok(ShipKind::Barge),
            "caravela" => Ok(ShipKind::Caravel),
            "nau" => Ok(ShipKind::Carrack),
            "fragata" => Ok(ShipKind::Frigate),
            "galeao" => Ok(ShipKind::Galleon),
            _ => Err(UnknownKindError::new(s)),
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.category())
    }
}

/// Build a ship from its factory name, bearing, and anchor. Returns `None` if `kind` is
/// not one of `barca`, `caravela`, `nau`, `fragata` or `galeao` (any case).
///
/// Panics if the bearing is [`Compass::Unknown`] for any kind other than a barge.
pub fn build_ship(kind: &str, bearing: Compass, anchor: Position) -> Option<Ship> {
    kind.parse::<ShipKind>()
        .ok()
        .map(|kind| Ship::new(kind, bearing, anchor))
}

/// A ship and the cells it owns.
///
/// All ship kinds share this one type; the kind only decides the initial layout.
#[derive(Debug, Clone)]
pub struct Ship {
    /// Kind the ship was built from, or `None` for a ship with custom positions.
    kind: Option<ShipKind>,

    /// Category name of the ship.
    category: String,

    /// Bearing the ship was laid out along.
    bearing: Compass,

    /// Anchor the layout started from.
    position: Position,

    /// Cells owned by the ship, in generation order.
    positions: Vec<Position>,
}

impl Ship {
    /// Build a ship of the given kind. Panics if the kind's shape cannot be laid out
    /// along `bearing`.
    pub fn new(kind: ShipKind, bearing: Compass, anchor: Position) -> Self {
        match Self::try_new(kind, bearing, anchor) {
            Ok(ship) => ship,
            Err(err) => panic!("cannot build {}: {}", kind, err),
        }
    }

    /// Build a ship of the given kind, returning an error if the kind's shape cannot be
    /// laid out along `bearing`.
    pub fn try_new(kind: ShipKind, bearing: Compass, anchor: Position) -> Result<Self, ShipError> {
        let positions = kind.project(bearing, &anchor)?;
        Ok(Self {
            kind: Some(kind),
            category: kind.category().to_owned(),
            bearing,
            position: anchor,
            positions,
        })
    }

    /// Build a ship with an arbitrary category and set of cells.
    pub fn with_positions<S: Into<String>>(
        category: S,
        bearing: Compass,
        anchor: Position,
        positions: Vec<Position>,
    ) -> Self {
        Self {
            kind: None,
            category: category.into(),
            bearing,
            position: anchor,
            positions,
        }
    }

    /// Kind this ship was built from, if any.
    pub fn kind(&self) -> Option<ShipKind> {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn bearing(&self) -> Compass {
        self.bearing
    }

    /// The anchor position the ship was built from.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Number of cells of this ship. Fixed by the kind for built ships.
    pub fn size(&self) -> usize {
        self.kind
            .map_or_else(|| self.positions.len(), |kind| kind.size())
    }

    /// The cells owned by this ship.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Live, mutable access to the cells owned by this ship.
    pub fn positions_mut(&mut self) -> &mut Vec<Position> {
        &mut self.positions
    }

    /// Returns true while at least one cell has not been hit. A ship with no cells is
    /// never floating.
    pub fn still_floating(&self) -> bool {
        self.positions.iter().any(|pos| !pos.is_hit())
    }

    /// Smallest row of any cell, or `None` if the ship has no cells.
    pub fn top_most_pos(&self) -> Option<i32> {
        self.positions.iter().map(Position::row).min()
    }

    /// Largest row of any cell, or `None` if the ship has no cells.
    pub fn bottom_most_pos(&self) -> Option<i32> {
        self.positions.iter().map(Position::row).max()
    }

    /// Smallest column of any cell, or `None` if the ship has no cells.
    pub fn left_most_pos(&self) -> Option<i32> {
        self.positions.iter().map(Position::column).min()
    }

    /// Largest column of any cell, or `None` if the ship has no cells.
    pub fn right_most_pos(&self) -> Option<i32> {
        self.positions.iter().map(Position::column).max()
    }

    /// Returns true if one of this ship's cells is at `pos`, whatever its hit state.
    pub fn occupies<C: GridCoordinate + ?Sized>(&self, pos: &C) -> bool {
        self.positions.iter().any(|own| own.same_cell(pos))
    }

    /// Returns true if any cell of this ship is adjacent to, or on, `pos`.
    pub fn too_close_to<C: GridCoordinate + ?Sized>(&self, pos: &C) -> bool {
        self.positions.iter().any(|own| own.is_adjacent_to(pos))
    }

    /// Returns true if any cell of this ship is adjacent to, or on, any cell of `other`.
    pub fn too_close_to_ship(&self, other: &Ship) -> bool {
        other.positions.iter().any(|pos| self.too_close_to(pos))
    }

    /// Fire at `pos`. Marks the matching cell hit and returns true, or returns false
    /// without effect if no cell of this ship is there.
    pub fn shoot<C: GridCoordinate + ?Sized>(&mut self, pos: &C) -> bool {
        let mut hit = false;
        for own in self.positions.iter_mut().filter(|own| own.same_cell(pos)) {
            own.shoot();
            hit = true;
        }
        hit
    }

    /// Mark every cell of this ship as occupied.
    pub(crate) fn occupy(&mut self) {
        self.positions.iter_mut().for_each(Position::occupy);
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{} {} {}]", self.category, self.bearing, self.position)
    }
}
