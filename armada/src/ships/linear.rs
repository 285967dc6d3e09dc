// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use crate::{
    compass::Compass,
    position::Position,
    ships::{ShapeProjection, ShipError, ShipShape},
};

/// A straight ship shape with a given length.
///
/// North and South both extend along increasing rows, East and West both extend along
/// increasing columns. A single-cell line ignores its bearing entirely.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line(usize);

impl Line {
    /// Construct a linear ship with the specified length. Panics if len is 0.
    pub fn new(len: usize) -> Self {
        assert!(len > 0);
        Line(len)
    }

    /// Row and column step taken for each cell past the anchor.
    fn step(&self, bearing: Compass) -> Result<(i32, i32), ShipError> {
        match bearing {
            _ if self.0 == 1 => Ok((0, 0)),
            Compass::North | Compass::South => Ok((1, 0)),
            Compass::East | Compass::West => Ok((0, 1)),
            Compass::Unknown => Err(ShipError::InvalidBearing {
                bearing,
                cells: self.0,
            }),
        }
    }
}

impl ShipShape for Line {
    fn cells(&self) -> usize {
        self.0
    }

    fn project(&self, bearing: Compass, anchor: &Position) -> Result<ShapeProjection, ShipError> {
        let (dr, dc) = self.step(bearing)?;
        // Cells past the edge of i32 wrap; the fleet rejects them as out of bounds.
        Ok((0..self.0 as i32)
            .map(|i| {
                Position::new(
                    anchor.row().wrapping_add(i.wrapping_mul(dr)),
                    anchor.column().wrapping_add(i.wrapping_mul(dc)),
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(proj: &ShapeProjection) -> Vec<(i32, i32)> {
        proj.iter().map(|&p| p.into()).collect()
    }

    #[test]
    #[should_panic]
    fn zero_length_panics() {
        Line::new(0);
    }

    #[test]
    fn single_cell_ignores_bearing() {
        let line = Line::new(1);
        for &bearing in Compass::ALL {
            let proj = line.project(bearing, &Position::new(3, 5)).unwrap();
            assert_eq!(coords(&proj), vec![(3, 5)]);
        }
    }

    #[test]
    fn north_and_south_grow_rows() {
        let line = Line::new(3);
        for &bearing in &[Compass::North, Compass::South] {
            let proj = line.project(bearing, &Position::new(6, 2)).unwrap();
            assert_eq!(coords(&proj), vec![(6, 2), (7, 2), (8, 2)]);
        }
    }

    #[test]
    fn east_and_west_grow_columns() {
        let line = Line::new(4);
        for &bearing in &[Compass::East, Compass::West] {
            let proj = line.project(bearing, &Position::new(1, 6)).unwrap();
            assert_eq!(coords(&proj), vec![(1, 6), (1, 7), (1, 8), (1, 9)]);
        }
    }

    #[test]
    fn cells_past_i32_wrap() {
        let proj = Line::new(2)
            .project(Compass::North, &Position::new(i32::MAX, 0))
            .unwrap();
        assert_eq!(coords(&proj), vec![(i32::MAX, 0), (i32::MIN, 0)]);
    }

    #[test]
    fn unknown_bearing_rejected() {
        let err = Line::new(2)
            .project(Compass::Unknown, &Position::new(0, 0))
            .unwrap_err();
        assert_eq!(
            err,
            ShipError::InvalidBearing {
                bearing: Compass::Unknown,
                cells: 2
            }
        );
    }
}
