//! Board coordinates.
//!
//! A position names one slot of the ring board: a `circle` (0 is the
//! outermost ring, [`CAPITAL`] the innermost) and a `rank` (the angular
//! slot within the ring). The capital has exactly one slot, rank 0.

use crate::constants::{CAPITAL, INNER_CIRCLE, NUM_CIRCLES, NUM_RANKS, OUTER_CIRCLE};
use crate::error::RulesError;
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

/// A validated slot on the board.
///
/// Positions can only be built through [`Position::new`] (or parsing and
/// deserialization, which route through it), so holding one proves the
/// coordinates are on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition", into = "RawPosition")]
pub struct Position {
    circle: u8,
    rank: u8,
}

/// Unvalidated wire form of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RawPosition {
    /// Ring index, 0 = outermost.
    pub circle: i64,
    /// Slot index within the ring.
    pub rank: i64,
}

impl Position {
    /// The single capital slot.
    pub const CAPITAL: Position = Position::at(CAPITAL, 0);

    /// Validates and builds a position.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::InvalidCoordinate`] when either coordinate is
    /// off the board or the capital is given a non-zero rank.
    pub fn new(circle: i64, rank: i64) -> Result<Self, RulesError> {
        let invalid = || RulesError::InvalidCoordinate { circle, rank };
        let (Ok(c), Ok(r)) = (u8::try_from(circle), u8::try_from(rank)) else {
            return Err(invalid());
        };
        if c >= NUM_CIRCLES || r >= NUM_RANKS || (c == CAPITAL && r != 0) {
            return Err(invalid());
        }
        Ok(Self::at(c, r))
    }

    /// Builds a position from coordinates already known to be valid.
    pub(crate) const fn at(circle: u8, rank: u8) -> Self {
        Self { circle, rank }
    }

    /// Ring index.
    pub fn circle(self) -> u8 {
        self.circle
    }

    /// Slot index within the ring.
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// True for the single capital slot.
    pub fn is_capital(self) -> bool {
        self.circle == CAPITAL
    }

    /// True for slots on the ring just outside the capital.
    pub fn is_inner_circle(self) -> bool {
        self.circle == INNER_CIRCLE
    }

    /// True for slots on the outermost ring.
    pub fn is_outer_circle(self) -> bool {
        self.circle == OUTER_CIRCLE
    }

    /// Canonical lookup key, `"circle,rank"`.
    pub fn key(self) -> String {
        format!("{},{}", self.circle, self.rank)
    }

    /// Human-readable label used when printing the history log.
    ///
    /// Rings are lettered from the capital outward (`A` is the capital's ring
    /// letter, `E` the outer ring); the capital itself reads `Capital`.
    pub fn history_key(self) -> String {
        if self.is_capital() {
            return "Capital".to_string();
        }
        let letter = char::from(b'A' + (CAPITAL - self.circle));
        let label = format!("{},{}", letter, self.rank);
        if self.is_inner_circle() {
            format!("Inner Circle {label}")
        } else {
            label
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.circle, self.rank)
    }
}

impl FromStr for Position {
    type Err = RulesError;

    /// Parses a canonical key such as `"3,11"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = RulesError::InvalidCoordinate {
            circle: -1,
            rank: -1,
        };
        let (circle, rank) = s.split_once(',').ok_or_else(|| malformed.clone())?;
        let circle = circle.trim().parse::<i64>().map_err(|_| malformed.clone())?;
        let rank = rank.trim().parse::<i64>().map_err(|_| malformed)?;
        Self::new(circle, rank)
    }
}

impl TryFrom<RawPosition> for Position {
    type Error = RulesError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Self::new(raw.circle, raw.rank)
    }
}

impl From<Position> for RawPosition {
    fn from(position: Position) -> Self {
        Self {
            circle: i64::from(position.circle),
            rank: i64::from(position.rank),
        }
    }
}

impl JsonSchema for Position {
    fn schema_name() -> Cow<'static, str> {
        "Position".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        RawPosition::json_schema(generator)
    }
}
