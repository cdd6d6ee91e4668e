//! Inlet / outlet cross-section combinations of the S-Duct.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize, Serializer};
use crate::dataset::errors::DatasetError;


/// Duct shape variants.
///
/// Each shape has three spellings:
/// ├ `id`   : short identifier, `"Circle-Square"`
/// ├ `name` : display name,     `"Circle to Square"`
/// └ `key`  : data-file key,    `"circle_inlet_to_square_outlet"`
///
/// Parsing accepts `id` or `key`, case-insensitively. Serializes as `id`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum DuctShape {
    CircleToCircle,
    CircleToSquare,
    SquareToSquare,
    SquareToCircle,
}

impl DuctShape {
    pub const ALL: [DuctShape; 4] = [
        DuctShape::CircleToCircle,
        DuctShape::CircleToSquare,
        DuctShape::SquareToSquare,
        DuctShape::SquareToCircle,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            DuctShape::CircleToCircle => "Circle-Circle",
            DuctShape::CircleToSquare => "Circle-Square",
            DuctShape::SquareToSquare => "Square-Square",
            DuctShape::SquareToCircle => "Square-Circle",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            DuctShape::CircleToCircle => "Circle to Circle",
            DuctShape::CircleToSquare => "Circle to Square",
            DuctShape::SquareToSquare => "Square to Square",
            DuctShape::SquareToCircle => "Square to Circle",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            DuctShape::CircleToCircle => "circle_inlet_to_circle_outlet",
            DuctShape::CircleToSquare => "circle_inlet_to_square_outlet",
            DuctShape::SquareToSquare => "square_inlet_to_square_outlet",
            DuctShape::SquareToCircle => "square_inlet_to_circle_outlet",
        }
    }
}

impl fmt::Display for DuctShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for DuctShape {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        DuctShape::ALL
            .into_iter()
            .find(|d| d.id().eq_ignore_ascii_case(s) || d.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| DatasetError::UnknownShape(s.to_string()))
    }
}

impl TryFrom<String> for DuctShape {
    type Error = DatasetError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for DuctShape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}
