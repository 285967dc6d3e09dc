//! Board size and fleet size limits applied when placing ships.
use enumflags2::BitFlags;

use crate::{
    position::{GridCoordinate, Position},
    ships::Ship,
};

/// Default extent of the square board.
pub const BOARD_SIZE: i32 = 10;

/// Default maximum number of ships in a fleet.
pub const FLEET_SIZE: usize = 10;

/// Edges of the board a ship can cross.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Edge {
    /// Some cell has a negative row.
    Top = 0b0001,
    /// Some cell has a row of `board_size` or more.
    Bottom = 0b0010,
    /// Some cell has a negative column.
    Left = 0b0100,
    /// Some cell has a column of `board_size` or more.
    Right = 0b1000,
}

/// Placement limits for a fleet: a square board and a maximum ship count.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Rules {
    /// Number of rows and of columns on the board.
    board_size: i32,
    /// Maximum number of ships the fleet accepts.
    fleet_size: usize,
}

impl Rules {
    /// Create new [`Rules`] for a `board_size` x `board_size` board holding at most
    /// `fleet_size` ships. Panics if either is not positive.
    pub fn new(board_size: i32, fleet_size: usize) -> Self {
        match Self::try_new(board_size, fleet_size) {
            Some(rules) => rules,
            None => panic!(
                "Rules must be positive, got board {} and fleet {}",
                board_size, fleet_size
            ),
        }
    }

    /// Create new [`Rules`]. Returns `None` if `board_size` or `fleet_size` is not
    /// positive.
    pub fn try_new(board_size: i32, fleet_size: usize) -> Option<Self> {
        if board_size <= 0 || fleet_size == 0 {
            None
        } else {
            Some(Self {
                board_size,
                fleet_size,
            })
        }
    }

    /// Get the extent of the board.
    pub fn board_size(&self) -> i32 {
        self.board_size
    }

    /// Get the maximum number of ships.
    pub fn fleet_size(&self) -> usize {
        self.fleet_size
    }

    /// Check if the given coordinate lies on the board.
    pub fn contains<C: GridCoordinate + ?Sized>(&self, coord: &C) -> bool {
        let range = 0..self.board_size;
        range.contains(&coord.row()) && range.contains(&coord.column())
    }

    /// Get the set of board edges the ship extends past, judged from its extreme rows
    /// and columns. Empty if the ship is entirely on the board or has no cells.
    pub fn edges_exceeded(&self, ship: &Ship) -> BitFlags<Edge> {
        let last = self.board_size - 1;
        let mut edges = BitFlags::empty();
        if ship.top_most_pos().map_or(false, |top| top < 0) {
            edges.insert(Edge::Top);
        }
        if ship.bottom_most_pos().map_or(false, |bottom| bottom > last) {
            edges.insert(Edge::Bottom);
        }
        if ship.left_most_pos().map_or(false, |left| left < 0) {
            edges.insert(Edge::Left);
        }
        if ship.right_most_pos().map_or(false, |right| right > last) {
            edges.insert(Edge::Right);
        }
        edges
    }

    /// Get an iterator over rows of the board. Each row is an iterator over the
    /// positions of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Position>> {
        let size = self.board_size;
        (0..size).map(move |row| (0..size).map(move |column| Position::new(row, column)))
    }
}

impl Default for Rules {
    /// The default rules: a 10x10 board with up to 10 ships.
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            fleet_size: FLEET_SIZE,
        }
    }
}
