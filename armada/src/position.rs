//! Grid positions occupied by ships.
use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// Trait for anything that names a cell on the board by row and column.
///
/// Equality between a [`Position`] and any other [`GridCoordinate`] is structural: only
/// the row and column take part, never the occupied or hit state of the cell.
pub trait GridCoordinate {
    /// Row of the cell.
    fn row(&self) -> i32;

    /// Column of the cell.
    fn column(&self) -> i32;
}

impl GridCoordinate for (i32, i32) {
    fn row(&self) -> i32 {
        self.0
    }

    fn column(&self) -> i32 {
        self.1
    }
}

impl<C: GridCoordinate + ?Sized> GridCoordinate for &C {
    fn row(&self) -> i32 {
        (**self).row()
    }

    fn column(&self) -> i32 {
        (**self).column()
    }
}

/// A single cell owned by a ship.
///
/// The coordinate is fixed at construction and is not range checked; bounds are only
/// enforced when a ship is offered to a [`Fleet`][crate::Fleet]. The `occupied` and `hit`
/// flags are mutable and are ignored by `PartialEq` and `Hash`.
#[derive(Debug, Copy, Clone)]
pub struct Position {
    row: i32,
    column: i32,
    occupied: bool,
    hit: bool,
}

impl Position {
    /// Construct an unoccupied, unhit [`Position`] at the given row and column.
    pub fn new(row: i32, column: i32) -> Self {
        Self {
            row,
            column,
            occupied: false,
            hit: false,
        }
    }

    /// Row of this position.
    pub fn row(&self) -> i32 {
        self.row
    }

    /// Column of this position.
    pub fn column(&self) -> i32 {
        self.column
    }

    /// Mark this position as occupied by a ship.
    pub fn occupy(&mut self) {
        self.occupied = true;
    }

    /// Mark this position as hit. Shooting the same position again has no further effect.
    pub fn shoot(&mut self) {
        self.hit = true;
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    /// Returns true if `other` is within one row and one column of this position. A
    /// position is adjacent to itself.
    pub fn is_adjacent_to<C: GridCoordinate + ?Sized>(&self, other: &C) -> bool {
        let rows = i64::from(self.row) - i64::from(other.row());
        let columns = i64::from(self.column) - i64::from(other.column());
        rows.abs() <= 1 && columns.abs() <= 1
    }

    /// Returns true if `other` names the same cell as this position.
    pub fn same_cell<C: GridCoordinate + ?Sized>(&self, other: &C) -> bool {
        self.row == other.row() && self.column == other.column()
    }
}

impl GridCoordinate for Position {
    fn row(&self) -> i32 {
        self.row
    }

    fn column(&self) -> i32 {
        self.column
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.same_cell(other)
    }
}

impl Eq for Position {}

impl PartialEq<(i32, i32)> for Position {
    fn eq(&self, other: &(i32, i32)) -> bool {
        self.same_cell(other)
    }
}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.column.hash(state);
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Linha = {} Coluna = {}", self.row, self.column)
    }
}

impl From<(i32, i32)> for Position {
    /// Construct a [`Position`] from the given `(row, column)` pair.
    fn from((row, column): (i32, i32)) -> Self {
        Self::new(row, column)
    }
}

impl From<Position> for (i32, i32) {
    /// Convert the [`Position`] into a `(row, column)` pair.
    fn from(pos: Position) -> Self {
        (pos.row, pos.column)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn new_position_is_clear() {
        let pos = Position::new(2, 3);
        assert_eq!(pos.row(), 2);
        assert_eq!(pos.column(), 3);
        assert!(!pos.is_occupied());
        assert!(!pos.is_hit());
    }

    #[test]
    fn occupy_and_shoot_set_flags() {
        let mut pos = Position::new(0, 0);
        pos.occupy();
        assert!(pos.is_occupied());
        assert!(!pos.is_hit());
        pos.shoot();
        pos.shoot();
        assert!(pos.is_hit());
        assert!(pos.is_occupied());
    }

    #[test]
    fn adjacency_is_chebyshev_distance_one() {
        let pos = Position::new(5, 5);
        for dr in -1..=1 {
            for dc in -1..=1 {
                assert!(pos.is_adjacent_to(&(5 + dr, 5 + dc)), "{} {}", dr, dc);
            }
        }
        assert!(!pos.is_adjacent_to(&(7, 5)));
        assert!(!pos.is_adjacent_to(&(5, 3)));
        assert!(!pos.is_adjacent_to(&Position::new(3, 3)));
    }

    #[test]
    fn adjacency_across_extreme_coordinates() {
        assert!(!Position::new(i32::MIN, 0).is_adjacent_to(&(1, 0)));
        assert!(!Position::new(0, i32::MAX).is_adjacent_to(&(0, i32::MIN)));
        let corner = Position::new(i32::MAX, i32::MIN);
        assert!(corner.is_adjacent_to(&(i32::MAX - 1, i32::MIN + 1)));
    }

    #[test]
    fn equality_ignores_flags() {
        let mut hit = Position::new(1, 4);
        hit.shoot();
        hit.occupy();
        let clean = Position::new(1, 4);
        assert_eq!(hit, clean);
        assert_eq!(hit, (1, 4));
        assert_ne!(clean, Position::new(4, 1));

        let mut set = HashSet::new();
        set.insert(hit);
        assert!(set.contains(&clean));
    }

    #[test]
    fn display_format() {
        assert_eq!(Position::new(2, 3).to_string(), "Linha = 2 Coluna = 3");
        assert_eq!(Position::new(-1, 10).to_string(), "Linha = -1 Coluna = 10");
    }

    #[test]
    fn tuple_conversions() {
        let pos: Position = (7, 8).into();
        assert_eq!(pos, Position::new(7, 8));
        let pair: (i32, i32) = pos.into();
        assert_eq!(pair, (7, 8));
    }
}
