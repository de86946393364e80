use std::{borrow::Cow, fmt};

use log::debug;
use serde::Serialize;

use crate::{
    cube::{Color, SideColor, SideColors},
    pll::PllCase,
};

/// The side color every PLL case is drawn with at the front
pub const REFERENCE_COLOR: SideColor = SideColor::Blue;

/// A turn of the whole cube about the vertical axis, counted in quarter steps along
/// `SideColor::CYCLE`. Yellow stays on top and white on the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Yaw(u8);

impl Yaw {
    pub const IDENTITY: Yaw = Yaw(0);

    /// `steps` is taken modulo 4
    pub const fn steps(steps: u8) -> Yaw {
        Yaw(steps % 4)
    }

    pub const fn count(self) -> u8 {
        self.0
    }

    /// The yaw that brings `from` to where `to` was
    #[allow(clippy::cast_possible_truncation)]
    pub const fn between(from: SideColor, to: SideColor) -> Yaw {
        Yaw(((to.index() + 4 - from.index()) % 4) as u8)
    }

    /// `self` followed by `other`
    #[must_use]
    pub const fn then(self, other: Yaw) -> Yaw {
        Yaw((self.0 + other.0) % 4)
    }

    #[must_use]
    pub const fn inverse(self) -> Yaw {
        Yaw((4 - self.0) % 4)
    }

    pub const fn is_identity(self) -> bool {
        self.0 == 0
    }

    /// Relabels a sticker. White, yellow, and gray are fixed.
    pub fn apply(self, color: Color) -> Color {
        match SideColor::try_from(color) {
            Ok(side) => side.advanced(self).into(),
            Err(fixed) => fixed,
        }
    }
}

impl fmt::Display for Yaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => f.write_str("y0"),
            1 => f.write_str("y"),
            2 => f.write_str("y2"),
            _ => f.write_str("y'"),
        }
    }
}

pub const fn rotation_steps(from: SideColor, to: SideColor) -> Yaw {
    Yaw::between(from, to)
}

pub fn is_side_color(color: Color) -> bool {
    color.is_side()
}

/// Which side color ends up on each side face for one yaw of a cube with yellow on top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorRotation {
    pub front: SideColor,
    pub right: SideColor,
    pub back: SideColor,
    pub left: SideColor,
}

pub const fn color_rotation(front: SideColor) -> ColorRotation {
    ColorRotation {
        front,
        right: front.advanced(Yaw(1)),
        back: front.advanced(Yaw(2)),
        left: front.advanced(Yaw(3)),
    }
}

/// All four rotations in cycle order, beginning with `starting_front` at the front
pub fn color_rotations(starting_front: SideColor) -> [ColorRotation; 4] {
    [0, 1, 2, 3].map(|steps| color_rotation(starting_front.advanced(Yaw(steps))))
}

impl SideColors {
    #[must_use]
    pub fn relabeled(&self, yaw: Yaw) -> SideColors {
        self.map(|color| yaw.apply(color))
    }
}

/// Redraws side rows authored with `reference` at the front as they look with
/// `target_front` at the front. Nothing is copied when the target isn't a side color or
/// is the reference itself.
pub fn rotate_side_colors(
    colors: &SideColors,
    reference: SideColor,
    target_front: Color,
) -> Cow<'_, SideColors> {
    let Ok(target) = SideColor::try_from(target_front) else {
        debug!("{target_front} is not a side color; keeping the reference coloring");
        return Cow::Borrowed(colors);
    };

    let yaw = rotation_steps(reference, target);
    if yaw.is_identity() {
        return Cow::Borrowed(colors);
    }

    Cow::Owned(colors.relabeled(yaw))
}

pub fn rotate_pll_colors(case: &PllCase, target_front: Color) -> Cow<'_, SideColors> {
    rotate_side_colors(&case.side_colors, case.reference, target_front)
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{Yaw, color_rotation, color_rotations, rotate_side_colors, rotation_steps};
    use crate::cube::{
        Color::{self, Blue as B, Gray as X, Green as G, Orange as O, Red as R},
        SideColor, SideColors,
    };

    const T_PERM: SideColors = SideColors {
        back: [B, G, G],
        left: [O, R, O],
        right: [G, O, B],
        front: [R, B, R],
    };

    #[test]
    fn steps_follow_the_cycle() {
        assert_eq!(
            rotation_steps(SideColor::Blue, SideColor::Red),
            Yaw::steps(1)
        );
        assert_eq!(
            rotation_steps(SideColor::Blue, SideColor::Orange),
            Yaw::steps(3)
        );
        assert_eq!(
            rotation_steps(SideColor::Orange, SideColor::Blue),
            Yaw::steps(1)
        );
        assert_eq!(
            rotation_steps(SideColor::Green, SideColor::Green),
            Yaw::IDENTITY
        );
    }

    #[test]
    fn yaws_compose_and_invert() {
        let quarter = Yaw::steps(1);
        assert_eq!(quarter.then(quarter).then(quarter), quarter.inverse());
        assert!(quarter.then(quarter.inverse()).is_identity());
        assert_eq!(Yaw::steps(6), Yaw::steps(2));
    }

    #[test]
    fn two_steps_swaps_opposites() {
        let yaw = Yaw::steps(2);
        assert_eq!(yaw.apply(B), G);
        assert_eq!(yaw.apply(R), O);
        assert_eq!(yaw.apply(G), B);
        assert_eq!(yaw.apply(O), R);
        assert_eq!(yaw.apply(Color::Yellow), Color::Yellow);
        assert_eq!(yaw.apply(X), X);
    }

    #[test]
    fn the_reference_front_is_borrowed() {
        let original = T_PERM;
        let rotated = rotate_side_colors(&original, SideColor::Blue, Color::Blue);
        let Cow::Borrowed(colors) = rotated else {
            panic!("expected the original coloring");
        };
        assert!(std::ptr::eq(colors, &original));

        assert!(matches!(
            rotate_side_colors(&T_PERM, SideColor::Blue, Color::Yellow),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn rotating_there_and_back_restores_the_colors() {
        for target in SideColor::CYCLE {
            let there = rotate_side_colors(&T_PERM, SideColor::Blue, target.into());
            let back = rotate_side_colors(&there, target, Color::Blue);
            assert_eq!(*back, T_PERM, "{target}");
        }
    }

    #[test]
    fn red_front_relabels_by_one_step() {
        let rotated = rotate_side_colors(&T_PERM, SideColor::Blue, Color::Red);
        assert_eq!(rotated.front, [G, R, G]);
        assert_eq!(rotated.back, [R, O, O]);
        assert_eq!(rotated.count(B), 3);
    }

    #[test]
    fn rotations_list_every_front_once() {
        let rotations = color_rotations(SideColor::Red);
        assert_eq!(rotations[0], color_rotation(SideColor::Red));
        assert_eq!(
            rotations.map(|r| r.front),
            [SideColor::Red, SideColor::Green, SideColor::Orange, SideColor::Blue]
        );

        let blue = color_rotation(SideColor::Blue);
        assert_eq!(blue.right, SideColor::Red);
        assert_eq!(blue.back, SideColor::Green);
        assert_eq!(blue.left, SideColor::Orange);
    }
}
