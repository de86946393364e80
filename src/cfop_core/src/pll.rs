use std::fmt;

use itertools::Itertools;
use log::trace;
use serde::Serialize;

use crate::{
    catalog::Algorithm,
    cube::{Color, LastLayerColors, Position, SideColor, SideColors},
    rotation::{Yaw, rotate_pll_colors, rotation_steps},
    topology::PositionKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CycleDirection {
    Clockwise,
    CounterClockwise,
}

impl CycleDirection {
    pub fn abbreviation(self) -> &'static str {
        match self {
            CycleDirection::Clockwise => "cw",
            CycleDirection::CounterClockwise => "ccw",
        }
    }
}

/// Pieces that trade places. Two positions swap; three cycle in the listed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cycle {
    pub positions: &'static [Position],
    pub direction: Option<CycleDirection>,
}

/// A straight arrow between two sticker centers of the top face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Arrow {
    pub from: Position,
    pub to: Position,
    pub bidirectional: bool,
}

impl Cycle {
    pub const fn swap(positions: &'static [Position]) -> Cycle {
        Cycle {
            positions,
            direction: None,
        }
    }

    pub const fn clockwise(positions: &'static [Position]) -> Cycle {
        Cycle {
            positions,
            direction: Some(CycleDirection::Clockwise),
        }
    }

    pub const fn counter_clockwise(positions: &'static [Position]) -> Cycle {
        Cycle {
            positions,
            direction: Some(CycleDirection::CounterClockwise),
        }
    }

    pub fn arrows(&self) -> Vec<Arrow> {
        match *self.positions {
            [from, to] => vec![Arrow {
                from,
                to,
                bidirectional: true,
            }],
            [a, b, c] => [(a, b), (b, c), (c, a)]
                .into_iter()
                .map(|(from, to)| Arrow {
                    from,
                    to,
                    bidirectional: false,
                })
                .collect(),
            _ => {
                trace!("No arrows for a cycle of {} pieces", self.positions.len());
                Vec::new()
            }
        }
    }

    /// Whether every piece in the cycle is of the given kind
    pub fn is_all(&self, kind: PositionKind) -> bool {
        self.positions.iter().all(|position| position.kind() == kind)
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.positions.len() == 2 { "↔" } else { "→" };
        write!(f, "{}", self.positions.iter().join(separator))?;

        if let Some(direction) = self.direction {
            write!(f, " ({})", direction.abbreviation())?;
        }

        Ok(())
    }
}

impl fmt::Display for Arrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.bidirectional { "↔" } else { "→" };
        write!(f, "{} {arrow} {}", self.from, self.to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SwapInfo {
    pub corners: &'static [Cycle],
    pub edges: &'static [Cycle],
    pub description: &'static str,
}

impl SwapInfo {
    /// Every arrow to draw over the top face, corners first
    pub fn arrows(&self) -> Vec<(PositionKind, Arrow)> {
        let corners = self
            .corners
            .iter()
            .flat_map(Cycle::arrows)
            .map(|arrow| (PositionKind::Corner, arrow));
        let edges = self
            .edges
            .iter()
            .flat_map(Cycle::arrows)
            .map(|arrow| (PositionKind::Edge, arrow));

        corners.chain(edges).collect()
    }
}

impl Position {
    /// Where the middle of this sticker sits, as a percentage of the face width and height
    pub const fn sticker_center(self) -> (u8, u8) {
        const fn coordinate(third: usize) -> u8 {
            match third {
                0 => 17,
                1 => 50,
                _ => 83,
            }
        }

        let index = self.index();
        (coordinate(index % 3), coordinate(index / 3))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PllCase {
    pub name: &'static str,
    /// The side color at the front when `side_colors` were drawn
    pub reference: SideColor,
    pub side_colors: SideColors,
    pub algorithms: &'static [Algorithm],
    pub swaps: SwapInfo,
}

impl PllCase {
    /// Names this case goes by; `Ja/L` answers to both `Ja` and `L`
    pub fn aliases(&self) -> impl Iterator<Item = &'static str> {
        self.name.split('/').map(str::trim)
    }

    pub fn colors_for(&self, front: Color) -> LastLayerColors {
        pll_to_colors(&rotate_pll_colors(self, front))
    }

    /// The same case, redrawn with `front` as its reference
    #[must_use]
    pub fn reoriented(&self, front: SideColor) -> PllCase {
        let yaw = rotation_steps(self.reference, front);

        PllCase {
            reference: front,
            side_colors: self.side_colors.relabeled(yaw),
            ..*self
        }
    }

    pub fn yaw_to(&self, front: SideColor) -> Yaw {
        rotation_steps(self.reference, front)
    }
}

/// Lays out a PLL case: the top is fully oriented so every top sticker is yellow
pub fn pll_to_colors(side_colors: &SideColors) -> LastLayerColors {
    LastLayerColors {
        top: [Color::Yellow; 9],
        sides: *side_colors,
    }
}

#[cfg(test)]
mod tests {
    use super::{Arrow, Cycle, CycleDirection, PllCase, SwapInfo, pll_to_colors};
    use crate::{
        cube::{
            Color::{self, Blue as B, Green as G, Orange as O, Red as R},
            Position, SideColor, SideColors,
        },
        topology::PositionKind,
    };

    const H_PERM: PllCase = PllCase {
        name: "H",
        reference: SideColor::Blue,
        side_colors: SideColors {
            back: [G, B, G],
            left: [O, R, O],
            right: [R, O, R],
            front: [B, G, B],
        },
        algorithms: &[],
        swaps: SwapInfo {
            corners: &[],
            edges: &[
                Cycle {
                    positions: &[Position::Front, Position::Back],
                    direction: None,
                },
                Cycle {
                    positions: &[Position::Left, Position::Right],
                    direction: None,
                },
            ],
            description: "Swap opposite edges",
        },
    };

    #[test]
    fn top_is_all_yellow() {
        let colors = pll_to_colors(&H_PERM.side_colors);
        assert_eq!(colors.top, [Color::Yellow; 9]);
        assert_eq!(colors.sides, H_PERM.side_colors);
    }

    #[test]
    fn colors_for_non_side_front_keep_the_reference() {
        assert_eq!(H_PERM.colors_for(Color::White).sides, H_PERM.side_colors);
        assert_eq!(H_PERM.colors_for(Color::Green).sides.front, [G, B, G]);
    }

    #[test]
    fn reorienting_composes() {
        let red = H_PERM.reoriented(SideColor::Red);
        let green = red.reoriented(SideColor::Green);

        assert_eq!(green, H_PERM.reoriented(SideColor::Green));
        assert_eq!(green.reoriented(SideColor::Blue), H_PERM);
        assert_eq!(red.colors_for(Color::Red).sides, red.side_colors);
    }

    #[test]
    fn swaps_draw_one_double_arrow() {
        let arrows = H_PERM.swaps.arrows();
        assert_eq!(arrows.len(), 2);
        assert_eq!(
            arrows[0],
            (
                PositionKind::Edge,
                Arrow {
                    from: Position::Front,
                    to: Position::Back,
                    bidirectional: true,
                }
            )
        );
    }

    #[test]
    fn three_cycles_draw_a_triangle() {
        let cycle = Cycle {
            positions: &[Position::BackRight, Position::FrontLeft, Position::BackLeft],
            direction: Some(CycleDirection::Clockwise),
        };

        let arrows = cycle.arrows();
        assert_eq!(arrows.len(), 3);
        assert!(arrows.iter().all(|arrow| !arrow.bidirectional));
        assert_eq!(arrows[2].from, Position::BackLeft);
        assert_eq!(arrows[2].to, Position::BackRight);
        assert!(cycle.is_all(PositionKind::Corner));
        assert_eq!(cycle.to_string(), "BR→FL→BL (cw)");

        let lonely = Cycle {
            positions: &[Position::Back],
            direction: None,
        };
        assert!(lonely.arrows().is_empty());
    }

    #[test]
    fn sticker_centers() {
        assert_eq!(Position::BackLeft.sticker_center(), (17, 17));
        assert_eq!(Position::Back.sticker_center(), (50, 17));
        assert_eq!(Position::Right.sticker_center(), (83, 50));
        assert_eq!(Position::FrontRight.sticker_center(), (83, 83));
    }

    #[test]
    fn aliases_split_on_slashes() {
        let case = PllCase {
            name: "Ja/L",
            ..H_PERM
        };
        assert_eq!(case.aliases().collect::<Vec<_>>(), ["Ja", "L"]);
    }
}
