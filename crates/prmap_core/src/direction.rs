//! Direction flags shared by autotiling and collision derivation

use bitflags::bitflags;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// Set of neighbour directions.
    ///
    /// Only the four cardinal bits are ever produced by this workspace. The
    /// diagonal bits exist so catalogs written against the full vocabulary
    /// still parse.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Direction: u8 {
        const NORTH = 1 << 0;
        const SOUTH = 1 << 1;
        const WEST = 1 << 2;
        const EAST = 1 << 3;
        const NORTH_WEST = 1 << 4;
        const NORTH_EAST = 1 << 5;
        const SOUTH_WEST = 1 << 6;
        const SOUTH_EAST = 1 << 7;
    }
}

/// Display names in bit order, as catalogs spell them
const NAMES: [(Direction, &str); 8] = [
    (Direction::NORTH, "North"),
    (Direction::SOUTH, "South"),
    (Direction::WEST, "West"),
    (Direction::EAST, "East"),
    (Direction::NORTH_WEST, "NorthWest"),
    (Direction::NORTH_EAST, "NorthEast"),
    (Direction::SOUTH_WEST, "SouthWest"),
    (Direction::SOUTH_EAST, "SouthEast"),
];

const NONE_NAME: &str = "None";

impl Default for Direction {
    fn default() -> Self {
        Direction::empty()
    }
}

impl Direction {
    /// Cardinal directions paired with their grid offset (y grows downward)
    pub const CARDINALS: [(Direction, i32, i32); 4] = [
        (Direction::WEST, -1, 0),
        (Direction::EAST, 1, 0),
        (Direction::NORTH, 0, -1),
        (Direction::SOUTH, 0, 1),
    ];

    /// North, South, West and East together
    pub const fn all_cardinals() -> Direction {
        Direction::from_bits_truncate(0b0000_1111)
    }

    /// The direction pointing back at us from the neighbour.
    ///
    /// Applies per flag, so `NORTH | WEST` becomes `SOUTH | EAST`.
    pub fn opposite(self) -> Direction {
        const PAIRS: [(Direction, Direction); 8] = [
            (Direction::NORTH, Direction::SOUTH),
            (Direction::SOUTH, Direction::NORTH),
            (Direction::WEST, Direction::EAST),
            (Direction::EAST, Direction::WEST),
            (Direction::NORTH_WEST, Direction::SOUTH_EAST),
            (Direction::NORTH_EAST, Direction::SOUTH_WEST),
            (Direction::SOUTH_WEST, Direction::NORTH_EAST),
            (Direction::SOUTH_EAST, Direction::NORTH_WEST),
        ];

        PAIRS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .fold(Direction::empty(), |acc, (_, opposite)| acc | *opposite)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(NONE_NAME);
        }
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(", ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Error returned when a direction string names an unknown flag
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction '{0}'")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parse `"North, West"`, `"None"`, or a raw bit value like `"5"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(bits) = trimmed.parse::<u8>() {
            return Direction::from_bits(bits)
                .ok_or_else(|| ParseDirectionError(trimmed.to_string()));
        }

        let mut result = Direction::empty();
        for part in trimmed.split(',').map(str::trim) {
            if part.eq_ignore_ascii_case(NONE_NAME) {
                continue;
            }
            let flag = NAMES
                .iter()
                .find(|(_, name)| name.eq_ignore_ascii_case(part))
                .map(|(flag, _)| *flag)
                .ok_or_else(|| ParseDirectionError(part.to_string()))?;
            result |= flag;
        }
        Ok(result)
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct DirectionVisitor;

impl<'de> Visitor<'de> for DirectionVisitor {
    type Value = Direction;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a direction name list like \"North, West\" or a bit value")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Direction, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Direction, E> {
        u8::try_from(v)
            .ok()
            .and_then(Direction::from_bits)
            .ok_or_else(|| E::custom(ParseDirectionError(v.to_string())))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Direction, E> {
        u64::try_from(v)
            .map_err(|_| E::custom(ParseDirectionError(v.to_string())))
            .and_then(|v| self.visit_u64(v))
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DirectionVisitor)
    }
}
