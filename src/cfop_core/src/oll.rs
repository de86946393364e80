use std::{fmt, str::FromStr};

use itertools::Itertools;
use log::trace;
use serde::Serialize;
use thiserror::Error;

use crate::{
    catalog::Algorithm,
    cube::{Color, LastLayerColors, Orientation, Position},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrientationError {
    #[error("The sticker at {position} cannot face {orientation}")]
    Unreachable {
        position: Position,
        orientation: Orientation,
    },
    #[error("Expected 9 orientations but found {0}")]
    WrongCount(usize),
    #[error("`{0}` is not an orientation; expected top, back, left, right, or front")]
    UnknownOrientation(String),
}

/// The orientation of every last layer sticker, guaranteed to be physically possible:
/// corners only point up or at one of their two sides, edges only up or at their side,
/// and the center only up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OllOrientations([Orientation; 9]);

impl OllOrientations {
    /// Builds a case for a constant. Inconsistent data fails to compile when evaluated in
    /// a const context and panics otherwise; use `try_new` for anything read at runtime.
    pub const fn new(orientations: [Orientation; 9]) -> Self {
        let mut i = 0;
        while i < orientations.len() {
            assert!(
                Position::ALL[i].accepts(orientations[i]),
                "a sticker points at a side its piece doesn't touch"
            );
            i += 1;
        }

        OllOrientations(orientations)
    }

    pub fn try_new(orientations: [Orientation; 9]) -> Result<Self, OrientationError> {
        for (position, orientation) in Position::ALL.into_iter().zip(orientations) {
            if !position.accepts(orientation) {
                return Err(OrientationError::Unreachable {
                    position,
                    orientation,
                });
            }
        }

        Ok(OllOrientations(orientations))
    }

    pub fn as_array(&self) -> &[Orientation; 9] {
        &self.0
    }

    pub fn at(&self, position: Position) -> Orientation {
        self.0[position.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, Orientation)> + '_ {
        Position::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// How many stickers already show yellow on top, center included
    pub fn oriented_count(&self) -> usize {
        self.0
            .iter()
            .filter(|&&orientation| orientation == Orientation::Top)
            .count()
    }
}

impl FromStr for OllOrientations {
    type Err = OrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let orientations = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(str::parse::<Orientation>)
            .collect::<Result<Vec<_>, _>>()?;

        let count = orientations.len();
        let orientations: [Orientation; 9] = orientations
            .try_into()
            .map_err(|_| OrientationError::WrongCount(count))?;

        Self::try_new(orientations)
    }
}

impl fmt::Display for OllOrientations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OllCase {
    /// 1 to 57
    pub number: u8,
    pub name: &'static str,
    pub orientations: OllOrientations,
    pub algorithms: &'static [Algorithm],
}

impl OllCase {
    pub fn colors(&self) -> LastLayerColors {
        oll_to_colors(&self.orientations)
    }
}

/// Lays out which stickers of the last layer are yellow for an OLL case. Oriented
/// stickers are painted on the top face; misoriented ones on the side row they face.
/// Everything else stays gray.
pub fn oll_to_colors(orientations: &OllOrientations) -> LastLayerColors {
    paint(&orientations.0)
}

fn paint(orientations: &[Orientation; 9]) -> LastLayerColors {
    let mut colors = LastLayerColors::blank();

    for (position, &orientation) in Position::ALL.iter().zip(orientations) {
        match orientation.side() {
            None => colors.top[position.index()] = Color::Yellow,
            Some(side) => match position.adjacency().slot_facing(side) {
                Some(slot) => colors.sides[slot.side][slot.index] = Color::Yellow,
                None => {
                    trace!("{position} has no sticker on the {side} side; leaving it gray");
                }
            },
        }
    }

    colors
}
