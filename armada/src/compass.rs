//! Bearings used to lay out a ship from its anchor position.
use std::{fmt, str::FromStr};

use thiserror::Error;

/// Placement bearing of a ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Compass {
    North,
    South,
    East,
    West,
    /// Catch-all for characters that do not name a bearing.
    Unknown,
}

impl Compass {
    /// Every member, in declaration order.
    pub const ALL: &'static [Compass] = &[
        Compass::North,
        Compass::South,
        Compass::East,
        Compass::West,
        Compass::Unknown,
    ];

    /// The four bearings a ship can actually be placed along.
    pub const BEARINGS: &'static [Compass] =
        &[Compass::North, Compass::South, Compass::East, Compass::West];

    /// Display character of this bearing.
    pub fn to_char(self) -> char {
        match self {
            Compass::North => 'n',
            Compass::South => 's',
            Compass::East => 'e',
            Compass::West => 'o',
            Compass::Unknown => 'u',
        }
    }

    /// Map a display character back to its bearing. Matching is exact, so anything other
    /// than `n`, `s`, `e` or `o` (including upper case) maps to [`Compass::Unknown`].
    pub fn from_char(c: char) -> Self {
        match c {
            'n' => Compass::North,
            's' => Compass::South,
            'e' => Compass::East,
            'o' => Compass::West,
            _ => Compass::Unknown,
        }
    }

    /// Upper-case name of this bearing.
    pub fn name(self) -> &'static str {
        match self {
            Compass::North => "NORTH",
            Compass::South => "SOUTH",
            Compass::East => "EAST",
            Compass::West => "WEST",
            Compass::Unknown => "UNKNOWN",
        }
    }

    /// Whether this is one of the four real bearings.
    pub fn is_known(self) -> bool {
        self != Compass::Unknown
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0u8; 4];
        f.pad(self.to_char().encode_utf8(&mut buf))
    }
}

/// Error returned when parsing a [`Compass`] from a string fails.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid bearing {input:?}, expected one of n, s, e, o or a compass direction")]
pub struct ParseCompassError {
    input: String,
}

impl ParseCompassError {
    /// The input that could not be parsed.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Compass {
    type Err = ParseCompassError;

    /// Parses either a single display character or a full direction name. Unlike
    /// [`Compass::from_char`], this never yields [`Compass::Unknown`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let bearing = match lower.as_str() {
            "n" | "north" => Compass::North,
            "s" | "south" => Compass::South,
            "e" | "east" => Compass::East,
            "o" | "w" | "west" => Compass::West,
            _ => {
                return Err(ParseCompassError {
                    input: s.to_owned(),
                })
            }
        };
        Ok(bearing)
    }
}

#[cfg(feature = "rng_gen")]
mod rng {
    use rand::{
        distributions::{Distribution, Standard},
        seq::SliceRandom,
        Rng,
    };

    use super::Compass;

    impl Distribution<Compass> for Standard {
        /// Samples one of the four real bearings, never [`Compass::Unknown`].
        fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Compass {
            // BEARINGS is non-empty.
            *Compass::BEARINGS.choose(rng).unwrap()
        }
    }
}
