use crate::{
    compass::Compass,
    position::Position,
    ships::{ShapeProjection, ShipError, ShipShape},
};

/// The five-cell cross footprint of a galleon.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Cross;

impl Cross {
    /// Offsets from the anchor for each bearing, in generation order.
    fn offsets(bearing: Compass) -> Option<&'static [(i32, i32); 5]> {
        match bearing {
            Compass::North => Some(&[(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)]),
            Compass::South => Some(&[(0, 0), (1, 0), (2, -1), (2, 0), (2, 1)]),
            Compass::East => Some(&[(0, 0), (1, -2), (1, -1), (1, 0), (2, 0)]),
            Compass::West => Some(&[(0, 0), (1, 0), (1, 1), (1, 2), (2, 0)]),
            Compass::Unknown => None,
        }
    }
}

impl ShipShape for Cross {
    fn cells(&self) -> usize {
        5
    }

    fn project(&self, bearing: Compass, anchor: &Position) -> Result<ShapeProjection, ShipError> {
        let offsets = Self::offsets(bearing).ok_or(ShipError::InvalidBearing {
            bearing,
            cells: self.cells(),
        })?;
        Ok(offsets
            .iter()
            .map(|&(dr, dc)| {
                Position::new(anchor.row().wrapping_add(dr), anchor.column().wrapping_add(dc))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(bearing: Compass, row: i32, column: i32) -> Vec<(i32, i32)> {
        Cross
            .project(bearing, &Position::new(row, column))
            .unwrap()
            .into_iter()
            .map(Into::into)
            .collect()
    }

    #[test]
    fn north() {
        assert_eq!(
            project(Compass::North, 2, 3),
            vec![(2, 3), (2, 4), (2, 5), (3, 4), (4, 4)]
        );
    }

    #[test]
    fn south() {
        assert_eq!(
            project(Compass::South, 3, 4),
            vec![(3, 4), (4, 4), (5, 3), (5, 4), (5, 5)]
        );
    }

    #[test]
    fn east() {
        assert_eq!(
            project(Compass::East, 5, 5),
            vec![(5, 5), (6, 3), (6, 4), (6, 5), (7, 5)]
        );
    }

    #[test]
    fn west() {
        assert_eq!(
            project(Compass::West, 7, 2),
            vec![(7, 2), (8, 2), (8, 3), (8, 4), (9, 2)]
        );
    }

    #[test]
    fn cells_past_i32_wrap() {
        assert_eq!(
            project(Compass::East, 0, i32::MIN),
            vec![
                (0, i32::MIN),
                (1, i32::MAX - 1),
                (1, i32::MAX),
                (1, i32::MIN),
                (2, i32::MIN),
            ]
        );
    }

    #[test]
    fn unknown_rejected() {
        assert!(Cross.project(Compass::Unknown, &Position::new(0, 0)).is_err());
    }
}
