//! Which side-row stickers sit next to each top face position.
//!
//! Corners touch two side faces, edges touch one, and the center touches none. The
//! table encodes the fixed geometry of the last layer and never changes.

use crate::cube::{Orientation, Position, Side};

/// One of the three stickers in a side row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SideSlot {
    pub side: Side,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionKind {
    Corner,
    Edge,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Adjacency {
    Corner(SideSlot, SideSlot),
    Edge(SideSlot),
    Center,
}

const fn slot(side: Side, index: usize) -> SideSlot {
    SideSlot { side, index }
}

/// The side stickers that belong to the same piece as the top sticker at `position`
pub const fn lookup(position: Position) -> Adjacency {
    use Side::{Back, Front, Left, Right};

    match position {
        Position::BackLeft => Adjacency::Corner(slot(Back, 0), slot(Left, 0)),
        Position::Back => Adjacency::Edge(slot(Back, 1)),
        Position::BackRight => Adjacency::Corner(slot(Back, 2), slot(Right, 0)),
        Position::Left => Adjacency::Edge(slot(Left, 1)),
        Position::Center => Adjacency::Center,
        Position::Right => Adjacency::Edge(slot(Right, 1)),
        Position::FrontLeft => Adjacency::Corner(slot(Front, 0), slot(Left, 2)),
        Position::Front => Adjacency::Edge(slot(Front, 1)),
        Position::FrontRight => Adjacency::Corner(slot(Front, 2), slot(Right, 2)),
    }
}

impl Adjacency {
    pub const fn kind(self) -> PositionKind {
        match self {
            Adjacency::Corner(_, _) => PositionKind::Corner,
            Adjacency::Edge(_) => PositionKind::Edge,
            Adjacency::Center => PositionKind::Center,
        }
    }

    /// The slot this piece shows on `side`, if it touches that side at all
    pub const fn slot_facing(self, side: Side) -> Option<SideSlot> {
        match self {
            Adjacency::Corner(a, _) if a.side as u8 == side as u8 => Some(a),
            Adjacency::Corner(_, b) if b.side as u8 == side as u8 => Some(b),
            Adjacency::Edge(a) if a.side as u8 == side as u8 => Some(a),
            _ => None,
        }
    }

    pub fn slots(self) -> impl Iterator<Item = SideSlot> {
        let (first, second) = match self {
            Adjacency::Corner(a, b) => (Some(a), Some(b)),
            Adjacency::Edge(a) => (Some(a), None),
            Adjacency::Center => (None, None),
        };

        first.into_iter().chain(second)
    }
}

impl Position {
    pub const fn adjacency(self) -> Adjacency {
        lookup(self)
    }

    pub const fn kind(self) -> PositionKind {
        lookup(self).kind()
    }

    pub const fn is_corner(self) -> bool {
        matches!(self.kind(), PositionKind::Corner)
    }

    pub const fn is_edge(self) -> bool {
        matches!(self.kind(), PositionKind::Edge)
    }

    /// Whether a sticker in this position can physically point in `orientation`
    pub const fn accepts(self, orientation: Orientation) -> bool {
        match orientation.side() {
            None => true,
            Some(side) => lookup(self).slot_facing(side).is_some(),
        }
    }
}
