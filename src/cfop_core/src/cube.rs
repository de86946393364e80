use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{oll::OrientationError, rotation::Yaw};

/// A sticker color. `Gray` marks a sticker that doesn't matter for the case being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Blue,
    Green,
    #[serde(alias = "grey")]
    Gray,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("`{0}` is not a cube color")]
pub struct ParseColorError(pub String);

impl Color {
    pub const ALL: [Self; 7] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Blue,
        Color::Green,
        Color::Gray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Gray => "gray",
        }
    }

    /// The RGB value a renderer should paint this sticker with
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::White => (255, 255, 255),
            Color::Yellow => (250, 204, 21),
            Color::Red => (220, 38, 38),
            Color::Orange => (249, 115, 22),
            Color::Blue => (37, 99, 235),
            Color::Green => (22, 163, 74),
            Color::Gray => (107, 114, 128),
        }
    }

    /// Whether this color belongs to one of the four faces that move under a yaw rotation
    pub fn is_side(self) -> bool {
        SideColor::try_from(self).is_ok()
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed.eq_ignore_ascii_case("grey") {
            return Ok(Color::Gray);
        }

        Color::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseColorError(s.to_owned()))
    }
}

/// One of the four side colors, in the order they appear when turning the cube about
/// the vertical axis with yellow on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideColor {
    Blue,
    Red,
    Green,
    Orange,
}

impl SideColor {
    pub const CYCLE: [Self; 4] = {
        use SideColor::*;
        let v = [Blue, Red, Green, Orange];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    pub const fn index(self) -> usize {
        self as usize
    }

    /// The side color reached after turning the cube by `yaw`
    #[must_use]
    pub const fn advanced(self, yaw: Yaw) -> Self {
        Self::CYCLE[(self.index() + yaw.count() as usize) % 4]
    }
}

impl From<SideColor> for Color {
    fn from(value: SideColor) -> Self {
        match value {
            SideColor::Blue => Color::Blue,
            SideColor::Red => Color::Red,
            SideColor::Green => Color::Green,
            SideColor::Orange => Color::Orange,
        }
    }
}

impl TryFrom<Color> for SideColor {
    /// The color is handed back when it is white, yellow, or gray
    type Error = Color;

    fn try_from(value: Color) -> Result<Self, Self::Error> {
        match value {
            Color::Blue => Ok(SideColor::Blue),
            Color::Red => Ok(SideColor::Red),
            Color::Green => Ok(SideColor::Green),
            Color::Orange => Ok(SideColor::Orange),
            other => Err(other),
        }
    }
}

impl Display for SideColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Color::from(*self).fmt(f)
    }
}

impl FromStr for SideColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SideColor::try_from(s.parse::<Color>()?).map_err(|_| ParseColorError(s.to_owned()))
    }
}

/// Which way the colored facet of a last layer sticker points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Top,
    Back,
    Left,
    Right,
    Front,
}

impl Orientation {
    pub const ALL: [Self; 5] = [
        Orientation::Top,
        Orientation::Back,
        Orientation::Left,
        Orientation::Right,
        Orientation::Front,
    ];

    /// The side face the sticker points at, or `None` when it points up
    pub const fn side(self) -> Option<Side> {
        match self {
            Orientation::Top => None,
            Orientation::Back => Some(Side::Back),
            Orientation::Left => Some(Side::Left),
            Orientation::Right => Some(Side::Right),
            Orientation::Front => Some(Side::Front),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Orientation::Top => "top",
            Orientation::Back => "back",
            Orientation::Left => "left",
            Orientation::Right => "right",
            Orientation::Front => "front",
        }
    }
}

impl From<Side> for Orientation {
    fn from(value: Side) -> Self {
        match value {
            Side::Back => Orientation::Back,
            Side::Left => Orientation::Left,
            Side::Right => Orientation::Right,
            Side::Front => Orientation::Front,
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = OrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "t" | "top" | "u" => Ok(Orientation::Top),
            "b" | "back" => Ok(Orientation::Back),
            "l" | "left" => Ok(Orientation::Left),
            "r" | "right" => Ok(Orientation::Right),
            "f" | "front" => Ok(Orientation::Front),
            _ => Err(OrientationError::UnknownOrientation(s.trim().to_owned())),
        }
    }
}

/// A side face of the last layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Back,
    Left,
    Right,
    Front,
}

impl Side {
    pub const ALL: [Self; 4] = [Side::Back, Side::Left, Side::Right, Side::Front];

    pub fn name(self) -> &'static str {
        Orientation::from(self).name()
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("`{0}` is not a last layer position; expected one of BL, B, BR, L, C, R, FL, F, FR")]
pub struct ParsePositionError(pub String);

/// A sticker on the top face, row-major from the back-left corner:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    BackLeft,
    Back,
    BackRight,
    Left,
    Center,
    Right,
    FrontLeft,
    Front,
    FrontRight,
}

impl Position {
    pub const ALL: [Self; 9] = {
        use Position::*;
        let v = [
            BackLeft, Back, BackRight, Left, Center, Right, FrontLeft, Front, FrontRight,
        ];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// The short name cubers use for the piece in this slot
    pub fn abbreviation(self) -> &'static str {
        match self {
            Position::BackLeft => "BL",
            Position::Back => "B",
            Position::BackRight => "BR",
            Position::Left => "L",
            Position::Center => "C",
            Position::Right => "R",
            Position::FrontLeft => "FL",
            Position::Front => "F",
            Position::FrontRight => "FR",
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        Position::ALL
            .into_iter()
            .find(|position| position.abbreviation().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParsePositionError(s.to_owned()))
    }
}

/// The nine stickers of the top face, indexed by `Position::index`
pub type TopFace = [Color; 9];

/// The three last layer stickers on one side: corner, edge, corner
pub type SideRow = [Color; 3];

/// The last layer rows of the four side faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideColors {
    pub back: SideRow,
    pub left: SideRow,
    pub right: SideRow,
    pub front: SideRow,
}

impl SideColors {
    pub const fn uniform(color: Color) -> Self {
        SideColors {
            back: [color; 3],
            left: [color; 3],
            right: [color; 3],
            front: [color; 3],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Side, &SideRow)> {
        Side::ALL.into_iter().map(|side| (side, &self[side]))
    }

    pub fn stickers(&self) -> impl Iterator<Item = Color> + '_ {
        self.iter().flat_map(|(_, row)| row.iter().copied())
    }

    /// How many of the twelve side stickers have the given color
    pub fn count(&self, color: Color) -> usize {
        self.stickers().filter(|&sticker| sticker == color).count()
    }

    /// Applies `f` to every sticker
    #[must_use]
    pub fn map(&self, mut f: impl FnMut(Color) -> Color) -> Self {
        SideColors {
            back: self.back.map(&mut f),
            left: self.left.map(&mut f),
            right: self.right.map(&mut f),
            front: self.front.map(&mut f),
        }
    }
}

impl Index<Side> for SideColors {
    type Output = SideRow;

    fn index(&self, index: Side) -> &Self::Output {
        match index {
            Side::Back => &self.back,
            Side::Left => &self.left,
            Side::Right => &self.right,
            Side::Front => &self.front,
        }
    }
}

impl IndexMut<Side> for SideColors {
    fn index_mut(&mut self, index: Side) -> &mut Self::Output {
        match index {
            Side::Back => &mut self.back,
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
            Side::Front => &mut self.front,
        }
    }
}

/// Everything visible of the last layer: the top face and the top row of each side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LastLayerColors {
    pub top: TopFace,
    pub sides: SideColors,
}

impl LastLayerColors {
    /// A layout with every sticker gray
    pub const fn blank() -> Self {
        LastLayerColors {
            top: [Color::Gray; 9],
            sides: SideColors::uniform(Color::Gray),
        }
    }

    pub fn top_at(&self, position: Position) -> Color {
        self.top[position.index()]
    }
}

impl Default for LastLayerColors {
    fn default() -> Self {
        Self::blank()
    }
}
