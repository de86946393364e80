//! Whole-cube pictures for the first two layers and the cross. Faces other than the top
//! use the same row-major numbering as the top face, read while looking straight at them.

use serde::Serialize;

use crate::{
    cube::{Color, SideColor},
    rotation::{ColorRotation, color_rotations},
};

pub type Face = [Color; 9];

pub const fn solid_face(color: Color) -> Face {
    [color; 9]
}

/// A side face with its first two layers solved and the last layer row unknown
pub const fn f2l_face(color: Color) -> Face {
    let mut face = [color; 9];
    face[0] = Color::Gray;
    face[1] = Color::Gray;
    face[2] = Color::Gray;
    face
}

/// The center and the four edges colored, corners unknown
pub const fn cross_face(center: Color, edge: Color) -> Face {
    let mut face = [Color::Gray; 9];
    face[1] = edge;
    face[3] = edge;
    face[4] = center;
    face[5] = edge;
    face[7] = edge;
    face
}

/// A gray face with its center and the listed stickers filled in
pub const fn make_face(center: Color, stickers: &[(usize, Color)]) -> Face {
    let mut face = [Color::Gray; 9];
    face[4] = center;

    let mut i = 0;
    while i < stickers.len() {
        let (index, color) = stickers[i];
        face[index] = color;
        i += 1;
    }

    face
}

/// The faces a picture shows; the rest are hidden from view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CubeFaces {
    pub top: Option<Face>,
    pub front: Option<Face>,
    pub right: Option<Face>,
    pub left: Option<Face>,
    pub bottom: Option<Face>,
}

pub const CROSS_GOAL: CubeFaces = CubeFaces {
    top: None,
    front: Some(make_face(Color::Blue, &[(7, Color::Blue)])),
    right: Some(make_face(Color::Red, &[(7, Color::Red)])),
    left: None,
    bottom: Some(cross_face(Color::White, Color::White)),
};

pub const F2L_GOAL: CubeFaces = CubeFaces {
    top: None,
    front: Some(f2l_face(Color::Blue)),
    right: Some(f2l_face(Color::Red)),
    left: None,
    bottom: Some(solid_face(Color::White)),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Slot {
    FrontLeft,
    FrontRight,
}

impl Slot {
    pub fn label(self) -> &'static str {
        match self {
            Slot::FrontLeft => "Left Slot (FL)",
            Slot::FrontRight => "Right Slot (FR)",
        }
    }

    /// The front color of the first variation. Left slot pictures start from red so that
    /// blue and red are the visible pair, like the right slot pictures that start from
    /// blue.
    pub fn starting_front(self) -> SideColor {
        match self {
            Slot::FrontLeft => SideColor::Red,
            Slot::FrontRight => SideColor::Blue,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct F2lPattern {
    pub name: &'static str,
    pub description: &'static str,
    pub slot: Slot,
    pub algorithm: &'static str,
    faces: fn(ColorRotation) -> CubeFaces,
}

impl F2lPattern {
    pub fn faces(&self, colors: ColorRotation) -> CubeFaces {
        (self.faces)(colors)
    }

    /// The pattern drawn once for each way the cube can be turned about the vertical axis
    pub fn variations(&self) -> [CubeFaces; 4] {
        color_rotations(self.slot.starting_front()).map(|colors| self.faces(colors))
    }
}

const JOINED_PAIR: &str = "Corner and edge already paired (touching, colors aligned). Pair is in \
                           front, slot is behind. U move hides pair, then insert.";
const SPLIT_PAIR: &str = "Corner and edge separated. Corner in front with white facing \
                          sideways. Edge in back with front-color facing up.";

pub static F2L_PATTERNS: &[F2lPattern] = &[
    F2lPattern {
        name: "Joined Pair - Easy Insert",
        description: JOINED_PAIR,
        slot: Slot::FrontLeft,
        algorithm: "**U' L' U L**",
        faces: |c| {
            let front = Color::from(c.front);
            let left = Color::from(c.left);
            CubeFaces {
                top: Some(make_face(Color::Yellow, &[(6, left), (3, left)])),
                front: Some(make_face(front, &[(0, Color::White)])),
                left: Some(make_face(left, &[(2, front), (1, front)])),
                ..CubeFaces::default()
            }
        },
    },
    F2lPattern {
        name: "Joined Pair - Easy Insert",
        description: JOINED_PAIR,
        slot: Slot::FrontRight,
        algorithm: "**U R U' R'**",
        faces: |c| {
            let front = Color::from(c.front);
            let right = Color::from(c.right);
            CubeFaces {
                top: Some(make_face(Color::Yellow, &[(8, right), (5, right)])),
                front: Some(make_face(front, &[(2, Color::White)])),
                right: Some(make_face(right, &[(0, front), (1, front)])),
                ..CubeFaces::default()
            }
        },
    },
    F2lPattern {
        name: "Split Pair - Three Move Insert",
        description: SPLIT_PAIR,
        slot: Slot::FrontLeft,
        algorithm: "**L' U' L**",
        faces: |c| {
            let front = Color::from(c.front);
            let left = Color::from(c.left);
            CubeFaces {
                top: Some(make_face(Color::Yellow, &[(6, left), (1, front)])),
                front: Some(make_face(front, &[(0, front)])),
                left: Some(make_face(left, &[(2, Color::White)])),
                ..CubeFaces::default()
            }
        },
    },
    F2lPattern {
        name: "Split Pair - Three Move Insert",
        description: SPLIT_PAIR,
        slot: Slot::FrontRight,
        algorithm: "**R U R'**",
        faces: |c| {
            let front = Color::from(c.front);
            let right = Color::from(c.right);
            CubeFaces {
                top: Some(make_face(Color::Yellow, &[(8, right), (1, front)])),
                front: Some(make_face(front, &[(2, front)])),
                right: Some(make_face(right, &[(0, Color::White)])),
                ..CubeFaces::default()
            }
        },
    },
];

#[cfg(test)]
mod tests {
    use super::{
        CROSS_GOAL, F2L_PATTERNS, Slot, cross_face, f2l_face, make_face, solid_face,
    };
    use crate::cube::Color::{Blue, Gray, Green, Orange, Red, White, Yellow};

    #[test]
    fn face_helpers() {
        assert_eq!(solid_face(White), [White; 9]);
        assert_eq!(
            f2l_face(Blue),
            [Gray, Gray, Gray, Blue, Blue, Blue, Blue, Blue, Blue]
        );
        assert_eq!(
            cross_face(White, Red),
            [Gray, Red, Gray, Red, White, Red, Gray, Red, Gray]
        );
        assert_eq!(
            make_face(Yellow, &[(0, Blue), (8, Red)]),
            [Blue, Gray, Gray, Gray, Yellow, Gray, Gray, Gray, Red]
        );
    }

    #[test]
    fn cross_goal_shows_the_bottom_cross() {
        assert_eq!(CROSS_GOAL.bottom, Some(cross_face(White, White)));
        assert_eq!(CROSS_GOAL.front.map(|face| face[7]), Some(Blue));
        assert!(CROSS_GOAL.top.is_none());
    }

    #[test]
    fn variations_cycle_the_front_color() {
        let right = F2L_PATTERNS
            .iter()
            .find(|pattern| pattern.slot == Slot::FrontRight)
            .unwrap();
        let fronts = right
            .variations()
            .map(|faces| faces.front.map(|face| face[4]));
        assert_eq!(fronts, [Some(Blue), Some(Red), Some(Green), Some(Orange)]);

        let left = F2L_PATTERNS
            .iter()
            .find(|pattern| pattern.slot == Slot::FrontLeft)
            .unwrap();
        let first = left.variations()[0];
        assert_eq!(first.front.map(|face| face[4]), Some(Red));
        assert_eq!(first.left.map(|face| face[4]), Some(Blue));
        assert!(first.right.is_none());
    }
}
