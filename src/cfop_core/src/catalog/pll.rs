use super::{Algorithm, Entry, PllCategory};
use crate::{
    cube::{
        Color::{Blue as B, Green as G, Orange as O, Red as R},
        Position::{Back, BackLeft, BackRight, Front, FrontLeft, FrontRight, Left, Right},
        SideColors,
    },
    pll::{Cycle, PllCase, SwapInfo},
    rotation::REFERENCE_COLOR,
};

/// Side colors are drawn with blue at the front, green at the back, orange on the left,
/// and red on the right
pub static PLL_CATEGORIES: &[PllCategory] = &[
    PllCategory {
        name: "Edges Only",
        description: "Only edges need to be permuted - all corners are solved. Look for 4 headlights.",
        cases: &[
            Entry::Pair(
                PllCase {
                    name: "Ua",
                    reference: REFERENCE_COLOR,
                    side_colors: SideColors {
                        back: [G, O, G],
                        left: [O, R, O],
                        right: [R, G, R],
                        front: [B, B, B],
                    },
                    algorithms: &[
                        Algorithm::new("L² (U L) (U L') (U' L') (U' L') (U L')"),
                        Algorithm::new("M² U' M' U² M U' M²"),
                    ],
                    swaps: SwapInfo {
                        corners: &[],
                        edges: &[Cycle::clockwise(&[Left, Right, Back])],
                        description: "3-cycle edges: L→R→B",
                    },
                },
                PllCase {
                    name: "Ub",
                    reference: REFERENCE_COLOR,
                    side_colors: SideColors {
                        back: [G, R, G],
                        left: [O, G, O],
                        right: [R, O, R],
                        front: [B, B, B],
                    },
                    algorithms: &[
                        Algorithm::new("R² (U' R') (U' R) (U R) (U R) (U' R)"),
                        Algorithm::new("M² U M' U² M U M²"),
                    ],
                    swaps: SwapInfo {
                        corners: &[],
                        edges: &[Cycle::counter_clockwise(&[Back, Right, Left])],
                        description: "3-cycle edges: B→R→L",
                    },
                },
            ),
            Entry::Single(PllCase {
                name: "H",
                reference: REFERENCE_COLOR,
                side_colors: SideColors {
                    back: [G, B, G],
                    left: [O, R, O],
                    right: [R, O, R],
                    front: [B, G, B],
                },
                algorithms: &[Algorithm::new("M² U' M² U² M² U' M²")],
                swaps: SwapInfo {
                    corners: &[],
                    edges: &[Cycle::swap(&[Front, Back]), Cycle::swap(&[Left, Right])],
                    description: "Swap opposite edges: F↔B and L↔R",
                },
            }),
            Entry::Single(PllCase {
                name: "Z",
                reference: REFERENCE_COLOR,
                side_colors: SideColors {
                    back: [G, O, G],
                    left: [O, G, O],
                    right: [R, B, R],
                    front: [B, R, B],
                },
                algorithms: &[Algorithm::new("M' U' M² U' M² U' M' U² M²")],
                swaps: SwapInfo {
                    corners: &[],
                    edges: &[Cycle::swap(&[Front, Right]), Cycle::swap(&[Back, Left])],
                    description: "Swap adjacent edges: F↔R and B↔L",
                },
            }),
        ],
    },
    PllCategory {
        name: "Corners Only",
        description: "Only corners need to be permuted - all edges are solved.",
        cases: &[
            Entry::Pair(
                PllCase {
                    name: "Aa",
                    reference: REFERENCE_COLOR,
                    side_colors: SideColors {
                        back: [R, G, B],
                        left: [G, O, G],
                        right: [O, R, R],
                        front: [O, B, B],
                    },
                    algorithms: &[Algorithm::new("L² B² L' F' L B² L' F L'")],
                    swaps: SwapInfo {
                        corners: &[Cycle::clockwise(&[BackRight, FrontLeft, BackLeft])],
                        edges: &[],
                        description: "3-cycle corners: BR→FL→BL",
                    },
                },
                PllCase {
                    name: "Ab",
                    reference: REFERENCE_COLOR,
                    side_colors: SideColors {
                        back: [B, G, O],
                        left: [R, O, O],
                        right: [G, R, G],
                        front: [B, B, R],
                    },
                    algorithms: &[Algorithm::new("R² B² R F R' B² R F' R")],
                    swaps: SwapInfo {
                        corners: &[
                            Cycle::counter_clockwise(&[BackLeft, FrontRight, BackRight]),
                        ],
                        edges: &[],
                        description: "3-cycle corners: BL→FR→BR",
                    },
                },
            ),
            Entry::Single(PllCase {
                name: "E",
                reference: REFERENCE_COLOR,
                side_colors: SideColors {
                    back: [O, G, R],
                    left: [B, O, G],
                    right: [B, R, G],
                    front: [O, B, R],
                },
                algorithms: &[
                    Algorithm::new("(r' U r F' r' U' r F) (r' U' r F' r' U r F)"),
                ],
                swaps: SwapInfo {
                    corners: &[
                        Cycle::swap(&[BackLeft, FrontLeft]),
                        Cycle::swap(&[BackRight, FrontRight]),
                    ],
                    edges: &[],
                    description: "Swap left corners and right corners",
                },
            }),
        ],
    },
    PllCategory {
        name: "Swap Adjacent Corners",
        description: "Cases that swap two adjacent corners plus edges. Look for headlights to identify.",
        cases: &[
            Entry::Single(PllCase {
                name: "T",
                reference: REFERENCE_COLOR,
                side_colors: SideColors {
                    back: [G, G, R],
                    left: [O, R, O],
                    right: [B, O, G],
                    front: [B, B, R],
                },
                algorithms: &[
                    Algorithm::with_shorthand(
                        "(R U R' U') R' F R² U' R' U' R U R' F'",
                        "{sexy} R' F R² U' R' U' R U R' F'",
                    ),
                ],
                swaps: SwapInfo {
                    corners: &[Cycle::swap(&[BackRight, FrontRight])],
                    edges: &[Cycle::swap(&[Left, Right])],
                    description: "Swap right corners, swap edges L↔R",
                },
            }),
            Entry::Single(PllCase {
                name: "F",
                reference: REFERENCE_COLOR,
                side_colors: SideColors {
                    back: [R, G, O],
                    left: [G, R, O],
                    right: [G, O, R],
                    front: [B, B, B],
                },
                algorithms: &[
                    Algorithm::with_shorthand(
                        "R' U R U' R² F' U' F U R (F R' F' R) R",
                        "R' U R U' R² F' U' F U R {sledge}' R",
                    ),
                ],
                swaps: SwapInfo {
                    corners: &[Cycle::swap(&[BackLeft, BackRight])],
                    edges: &[Cycle::swap(&[Right, Left])],
                    description: "Swap back corners, swap edges R↔L",
                },
            }),
            Entry::Pair(
                PllCase {
                    name: "Ja/L",
                    reference: REFERENCE_COLOR,
                    side_colors: SideColors {
                        back: [G, R, R],
                        left: [O, O, R],
                        right: [B, B, B],
                        front: [G, G, O],
                    },
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "(L' U' L F) (L' U' L U) (L F' L') (L' U L)",
                            "(L' U' L F) {left-sexy} (L F' L') (L' U L)",
                        ),
                    ],
                    swaps: SwapInfo {
                        corners: &[Cycle::swap(&[FrontLeft, BackLeft])],
                        edges: &[Cycle::swap(&[Front, Left])],
                        description: "Swap left corners, swap edges F↔L",
                    },
                },
                PllCase {
                    name: "Jb",
                    reference: REFERENCE_COLOR,
                    side_colors: SideColors {
                        back: [O, O, G],
                        left: [B, B, B],
                        right: [R, R, O],
                        front: [R, G, G],
                    },
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "(R U R' F') (R U R' U') (R' F R) (R U' R')",
                            "(R U R' F') {sexy} (R' F R) (R U' R')",
                        ),
                    ],
                    swaps: SwapInfo {
                        corners: &[Cycle::swap(&[BackRight, FrontRight])],
                        edges: &[Cycle::swap(&[Front, Right])],
                        description: "Swap right corners, swap edges F↔R",
                    },
                },
            ),
            Entry::Pair(
                PllCase {
                    name: "Ra",
                    reference: REFERENCE_COLOR,
                    side_colors: SideColors {
                        back: [R, G, O],
                        left: [G, B, O],
                        right: [G, R, R],
                        front: [B, O, B],
                    },
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "L U² L' U² L F' (L' U' L U) L F L²",
                            "L U² L' U² L F' {left-sexy} L F L²",
                        ),
                    ],
                    swaps: SwapInfo {
                        corners: &[Cycle::swap(&[BackLeft, BackRight])],
                        edges: &[Cycle::swap(&[Left, Front])],
                        description: "Swap back corners, swap edges L↔F",
                    },
                },
                PllCase {
                    name: "Rb",
                    reference: REFERENCE_COLOR,
                    side_colors: SideColors {
                        back: [R, G, O],
                        left: [G, O, O],
                        right: [G, B, R],
                        front: [B, R, B],
                    },
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "R' U² R U² R' F (R U R' U') R' F' R²",
                            "R' U² R U² R' F {sexy} R' F' R²",
                        ),
                    ],
                    swaps: SwapInfo {
                        corners: &[Cycle::swap(&[BackLeft, BackRight])],
                        edges: &[Cycle::swap(&[Right, Front])],
                        description: "Swap back corners, swap edges R↔F",
                    },
                },
            ),
        ],
    },
    PllCategory {
        name: "Swap Diagonal Corners",
        description: "Cases that swap two diagonal corners. Usually no headlights visible.",
        cases: &[
            Entry::Single(PllCase {
                name: "Y",
                reference: REFERENCE_COLOR,
                side_colors: SideColors {
                    back: [B, O, G],
                    left: [R, G, O],
                    right: [R, R, O],
                    front: [B, B, G],
                },
                algorithms: &[
                    Algorithm::with_shorthand(
                        "F R U' R' U' R U R' F' (R U R' U') (R' F R F')",
                        "F R U' R' U' R U R' F' {sexy} {sledge}",
                    ),
                ],
                swaps: SwapInfo {
                    corners: &[Cycle::swap(&[BackLeft, FrontRight])],
                    edges: &[Cycle::swap(&[Left, Back])],
                    description: "Swap diagonal corners BL↔FR, swap edges L↔B",
                },
            }),
            Entry::Single(PllCase {
                name: "V",
                reference: REFERENCE_COLOR,
                side_colors: SideColors {
                    back: [B, R, G],
                    left: [R, O, O],
                    right: [R, G, O],
                    front: [B, B, G],
                },
                algorithms: &[
                    Algorithm::new("R' U R' U' y R' F' R² U' R' U R' F R F"),
                    Algorithm::new("R' U R' d' R' F' R² U' R' U R' F R F"),
                ],
                swaps: SwapInfo {
                    corners: &[Cycle::swap(&[BackLeft, FrontRight])],
                    edges: &[Cycle::swap(&[Right, Back])],
                    description: "Swap diagonal corners BL↔FR, swap edges R↔B",
                },
            }),
            Entry::Pair(
                PllCase {
                    name: "Na",
                    reference: REFERENCE_COLOR,
                    side_colors: SideColors {
                        back: [G, G, B],
                        left: [O, R, R],
                        right: [O, O, R],
                        front: [G, B, B],
                    },
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "L (U' L' U L) (F U F') (L' U' L) (F' L F L') U L'",
                            "L {left-sexy}' (F U F') (L' U' L) {left-sledge}' U L'",
                        ),
                    ],
                    swaps: SwapInfo {
                        corners: &[Cycle::swap(&[FrontLeft, BackRight])],
                        edges: &[Cycle::swap(&[Left, Right])],
                        description: "Swap diagonal corners FL↔BR, swap edges L↔R",
                    },
                },
                PllCase {
                    name: "Nb",
                    reference: REFERENCE_COLOR,
                    side_colors: SideColors {
                        back: [B, G, G],
                        left: [R, R, O],
                        right: [R, O, O],
                        front: [B, B, G],
                    },
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "R' (U R U' R') (F' U' F) (R U R') (F R' F' R) U' R",
                            "R' {sexy}' (F' U' F) (R U R') {sledge}' U' R",
                        ),
                    ],
                    swaps: SwapInfo {
                        corners: &[Cycle::swap(&[BackLeft, FrontRight])],
                        edges: &[Cycle::swap(&[Left, Right])],
                        description: "Swap diagonal corners BL↔FR, swap edges L↔R",
                    },
                },
            ),
        ],
    },
    PllCategory {
        name: "G Permutations",
        description: "Complex cases: 3-cycle of corners + 3-cycle of edges. Look for one headlight.",
        cases: &[
            Entry::Pair(
                PllCase {
                    name: "Ga",
                    reference: REFERENCE_COLOR,
                    side_colors: SideColors {
                        back: [R, O, B],
                        left: [G, R, G],
                        right: [O, G, R],
                        front: [O, B, B],
                    },
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "L² F² L' U² L' U² L F' (L' U' L U) L F' L²",
                            "L² F² L' U² L' U² L F' {left-sexy} L F' L²",
                        ),
                    ],
                    swaps: SwapInfo {
                        corners: &[Cycle::clockwise(&[FrontLeft, BackLeft, BackRight])],
                        edges: &[Cycle::clockwise(&[Left, Right, Back])],
                        description: "3-cycle corners FL→BL→BR, 3-cycle edges L→R→B",
                    },
                },
                PllCase {
                    name: "Gc",
                    reference: REFERENCE_COLOR,
                    side_colors: SideColors {
                        back: [R, G, B],
                        left: [G, O, B],
                        right: [O, B, O],
                        front: [R, R, G],
                    },
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "R² F² R U² R U² R' F (R U R' U') R' F R²",
                            "R² F² R U² R U² R' F {sexy} R' F R²",
                        ),
                    ],
                    swaps: SwapInfo {
                        corners: &[Cycle::clockwise(&[FrontRight, BackRight, BackLeft])],
                        edges: &[Cycle::clockwise(&[Left, Back, Right])],
                        description: "3-cycle corners FR→BR→BL, 3-cycle edges L→B→R",
                    },
                },
            ),
            Entry::Pair(
                PllCase {
                    name: "Gb",
                    reference: REFERENCE_COLOR,
                    side_colors: SideColors {
                        back: [O, R, O],
                        left: [B, G, R],
                        right: [G, O, R],
                        front: [G, B, B],
                    },
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "L² F L' (U' L' U L) F L' U² L U² L F² L²",
                            "L² F L' {left-sexy}' F L' U² L U² L F² L²",
                        ),
                    ],
                    swaps: SwapInfo {
                        corners: &[
                            Cycle::counter_clockwise(&[FrontLeft, BackRight, BackLeft]),
                        ],
                        edges: &[Cycle::counter_clockwise(&[Left, Back, Right])],
                        description: "3-cycle corners FL→BR→BL, 3-cycle edges L→B→R",
                    },
                },
                PllCase {
                    name: "Gd",
                    reference: REFERENCE_COLOR,
                    side_colors: SideColors {
                        back: [R, O, R],
                        left: [G, R, O],
                        right: [B, G, O],
                        front: [B, B, G],
                    },
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "R² F' R (U R U' R') F' R U² R' U² R' F² R²",
                            "R² F' R {sexy}' F' R U² R' U² R' F² R²",
                        ),
                    ],
                    swaps: SwapInfo {
                        corners: &[
                            Cycle::counter_clockwise(&[FrontRight, BackLeft, BackRight]),
                        ],
                        edges: &[Cycle::counter_clockwise(&[Left, Right, Back])],
                        description: "3-cycle corners FR→BL→BR, 3-cycle edges L→R→B",
                    },
                },
            ),
        ],
    },
];
