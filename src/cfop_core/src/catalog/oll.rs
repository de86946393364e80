use super::{Algorithm, Entry, OllCategory};
use crate::{
    cube::Orientation::{Back as B, Front as F, Left as L, Right as R, Top as T},
    oll::{OllCase, OllOrientations},
};

pub static OLL_CATEGORIES: &[OllCategory] = &[
    OllCategory {
        name: "Solved Cross",
        description: "All 4 edges are oriented correctly, only corners need orientation",
        cases: &[
            Entry::Single(OllCase {
                number: 21,
                name: "H",
                orientations: OllOrientations::new([B, T, B, T, T, T, F, T, F]),
                algorithms: &[
                    Algorithm::with_shorthand(
                        "(R U² R' U' R ~U' R') (R U²~ **U** R' U' R U' R')",
                        "{chair}²",
                    ),
                    Algorithm::with_shorthand(
                        "F (R U R' U') (R U R' U') (R U R' U') F'",
                        "F {sexy}³ F'",
                    ),
                ],
            }),
            Entry::Single(OllCase {
                number: 22,
                name: "Pi",
                orientations: OllOrientations::new([L, T, B, T, T, T, L, T, F]),
                algorithms: &[
                    Algorithm::with_shorthand(
                        "(R U² R' U' R U' R') U' (R U² R' U' R U' R')",
                        "{chair} U' {chair}",
                    ),
                    Algorithm::new("R U² R² U' R² U' R² U² R"),
                ],
            }),
            Entry::Single(OllCase {
                number: 23,
                name: "Headlights",
                orientations: OllOrientations::new([T, T, R, T, T, T, T, T, R]),
                algorithms: &[
                    Algorithm::with_shorthand(
                        "(R U² R' U' R U' R') (L' U² L U L' U L)",
                        "{chair} {left-chair}",
                    ),
                    Algorithm::new("[u] R² D (R' U² R) D' (R' U² R')"),
                ],
            }),
            Entry::Single(OllCase {
                number: 24,
                name: "Chameleon",
                orientations: OllOrientations::new([B, T, T, T, T, T, F, T, T]),
                algorithms: &[
                    Algorithm::with_shorthand(
                        "[u²] [f'] (R U² R' U' R U' R') (L' U² L U L' U L) [f]",
                        "[u²] [f'] {chair} {left-chair} [f]",
                    ),
                    Algorithm::with_shorthand("(r U R' U') (r' F R F')", "{fat-sexy} {fat-sledge}"),
                ],
            }),
            Entry::Single(OllCase {
                number: 25,
                name: "Bowtie",
                orientations: OllOrientations::new([T, T, R, T, T, T, F, T, T]),
                algorithms: &[
                    Algorithm::with_shorthand(
                        "F (R U² R' U' R U' R') (L' U² L U L' U L) F'",
                        "F {chair} {left-chair} F'",
                    ),
                    Algorithm::with_shorthand(
                        "(F R' F' r) (U R U' r')",
                        "{fat-sledge}' {fat-sexy}'",
                    ),
                    Algorithm::new("[u] (F' L F R') (F' L' F R)"),
                ],
            }),
            Entry::Pair(
                OllCase {
                    number: 27,
                    name: "Sune",
                    orientations: OllOrientations::new([T, T, R, T, T, T, L, T, F]),
                    algorithms: &[
                        Algorithm::with_shorthand("L' U² L U L' U L", "{left-chair}"),
                    ],
                },
                OllCase {
                    number: 26,
                    name: "Anti-Sune",
                    orientations: OllOrientations::new([L, T, T, T, T, T, F, T, R]),
                    algorithms: &[Algorithm::with_shorthand("R U² R' U' R U' R'", "{chair}")],
                },
            ),
        ],
    },
    OllCategory {
        name: "L Shapes",
        description: "Cases forming an \"L\" pattern on the top face",
        cases: &[
            Entry::Pair(
                OllCase {
                    number: 47,
                    name: "L Shape 1",
                    orientations: OllOrientations::new([B, T, R, L, T, T, F, F, R]),
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "F' (L' U' L U) (L' U' L U) F",
                            "F' {left-sexy}² F",
                        ),
                    ],
                },
                OllCase {
                    number: 48,
                    name: "L Shape 2",
                    orientations: OllOrientations::new([L, T, B, T, T, R, L, F, F]),
                    algorithms: &[
                        Algorithm::with_shorthand("F (R U R' U') (R U R' U') F'", "F {sexy}² F'"),
                    ],
                },
            ),
            Entry::Pair(
                OllCase {
                    number: 49,
                    name: "L Shape 3",
                    orientations: OllOrientations::new([B, B, R, T, T, R, F, T, R]),
                    algorithms: &[Algorithm::new("l U' (l² U l² U l²) U' l")],
                },
                OllCase {
                    number: 50,
                    name: "L Shape 4",
                    orientations: OllOrientations::new([L, B, B, L, T, T, L, T, F]),
                    algorithms: &[Algorithm::new("r' U (r² U' r² U' r²) U r'")],
                },
            ),
            Entry::Pair(
                OllCase {
                    number: 54,
                    name: "L Shape 6",
                    orientations: OllOrientations::new([L, B, R, T, T, R, L, T, R]),
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "l (U L' U L) (U' L' U L) U² l'",
                            "l (U L' U L) {left-sexy}' U² l'",
                        ),
                    ],
                },
                OllCase {
                    number: 53,
                    name: "L Shape 5",
                    orientations: OllOrientations::new([L, B, R, L, T, T, L, T, R]),
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "r' (U' R U' R') (U R U' R') U² r",
                            "r' (U' R U' R') {sexy}' U² r",
                        ),
                    ],
                },
            ),
        ],
    },
    OllCategory {
        name: "P Shapes",
        description: "Cases forming a \"P\" pattern on the top face",
        cases: &[
            Entry::Pair(
                OllCase {
                    number: 31,
                    name: "P Shape",
                    orientations: OllOrientations::new([T, B, B, T, T, R, T, T, F]),
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "S' (L' U' L U) (L F' L' ~F) S~ **f**",
                            "S' {left-sexy} {left-sledge} S",
                        ),
                    ],
                },
                OllCase {
                    number: 32,
                    name: "P Shape",
                    orientations: OllOrientations::new([B, B, T, L, T, T, F, T, T]),
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "S (R U R' U') (R' F R ~F') S'~ **f'**",
                            "S {sexy} {sledge} S'",
                        ),
                    ],
                },
            ),
            Entry::Pair(
                OllCase {
                    number: 43,
                    name: "P Shape",
                    orientations: OllOrientations::new([L, T, T, L, T, T, L, F, T]),
                    algorithms: &[
                        Algorithm::with_shorthand("F' (U' L' U L) F", "F' {left-sexy}' F"),
                    ],
                },
                OllCase {
                    number: 44,
                    name: "P Shape",
                    orientations: OllOrientations::new([T, T, R, T, T, R, T, F, R]),
                    algorithms: &[
                        Algorithm::with_shorthand("F (U R U' R') F'", "F {sexy}' F'"),
                    ],
                },
            ),
        ],
    },
    OllCategory {
        name: "T Shapes",
        description: "T patterns with 2 adjacent edges oriented",
        cases: &[
            Entry::Single(OllCase {
                number: 33,
                name: "T Shape 1",
                orientations: OllOrientations::new([B, B, T, T, T, T, F, F, T]),
                algorithms: &[
                    Algorithm::with_shorthand("(R U R' U') (R' F R F')", "{sexy} {sledge}"),
                ],
            }),
            Entry::Single(OllCase {
                number: 45,
                name: "T Shape 2",
                orientations: OllOrientations::new([L, B, T, T, T, T, L, F, T]),
                algorithms: &[
                    Algorithm::with_shorthand("F (R U R' U') F'", "F {sexy} F'"),
                ],
            }),
        ],
    },
    OllCategory {
        name: "Dots",
        description: "No edges oriented correctly",
        cases: &[
            Entry::Single(OllCase {
                number: 1,
                name: "Dot + 2 sides",
                orientations: OllOrientations::new([L, B, R, L, T, R, L, F, R]),
                algorithms: &[
                    Algorithm::with_shorthand(
                        "R U² R² F R F' U² (R' F R F')",
                        "R U² R² F R F' U² {sledge}",
                    ),
                ],
            }),
            Entry::Single(OllCase {
                number: 2,
                name: "Dot + 1 side",
                orientations: OllOrientations::new([L, B, B, L, T, R, L, F, F]),
                algorithms: &[
                    Algorithm::with_shorthand(
                        "F (R U R' U') F' f (R U R' U') f'",
                        "F {sexy} F' f {sexy} f'",
                    ),
                ],
            }),
            Entry::Pair(
                OllCase {
                    number: 3,
                    name: "Half-diagonal 1",
                    orientations: OllOrientations::new([T, B, R, L, T, R, L, F, F]),
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "f' (L' U' L U) f U' F' (L' U' L U) F",
                            "f' {left-sexy} f U' F' {left-sexy} F",
                        ),
                    ],
                },
                OllCase {
                    number: 4,
                    name: "Half-diagonal 2",
                    orientations: OllOrientations::new([L, B, T, L, T, R, F, F, R]),
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "f (R U R' U') f' U F (R U R' U') F'",
                            "f {sexy} f' U F {sexy} F'",
                        ),
                    ],
                },
            ),
            Entry::Single(OllCase {
                number: 18,
                name: "V Shape 1",
                orientations: OllOrientations::new([T, B, T, L, T, R, F, F, F]),
                algorithms: &[Algorithm::new("(r U R' U R U² r') (r' U' R U' R' U² r)")],
            }),
            Entry::Single(OllCase {
                number: 19,
                name: "V Shape 2",
                orientations: OllOrientations::new([T, B, T, L, T, R, L, F, R]),
                algorithms: &[
                    Algorithm::with_shorthand(
                        "M U (R U R' U') M' (R' F R F')",
                        "M U {sexy} M' {sledge}",
                    ),
                ],
            }),
            Entry::Single(OllCase {
                number: 17,
                name: "Diagonal",
                orientations: OllOrientations::new([T, B, R, L, T, R, F, F, T]),
                algorithms: &[
                    Algorithm::with_shorthand(
                        "(R U R' U) (R' F R F') U² (R' F R F')",
                        "(R U R' U) {sledge} U² {sledge}",
                    ),
                ],
            }),
            Entry::Single(OllCase {
                number: 20,
                name: "Checkers",
                orientations: OllOrientations::new([T, B, T, L, T, R, T, F, T]),
                algorithms: &[
                    Algorithm::with_shorthand(
                        "(r U R' U') M² (U R U' R') U' M'",
                        "{fat-sexy} M² {sexy}' U' M'",
                    ),
                ],
            }),
        ],
    },
    OllCategory {
        name: "Line",
        description: "Horizontal line of 2 oriented edges",
        cases: &[
            Entry::Single(OllCase {
                number: 51,
                name: "Line + T-Shape side",
                orientations: OllOrientations::new([L, B, B, T, T, T, L, F, F]),
                algorithms: &[
                    Algorithm::with_shorthand("f (R U R' U') (R U R' U') f'", "f {sexy}² f'"),
                    Algorithm::with_shorthand(
                        "[u2] F (U R U' R') (U R U' R') F'",
                        "[u2] F {sexy}'² F'",
                    ),
                ],
            }),
            Entry::Single(OllCase {
                number: 52,
                name: "Line + 1 side",
                orientations: OllOrientations::new([B, T, R, L, T, R, F, T, R]),
                algorithms: &[Algorithm::new("(R U R' U) R d' R U' R' F'")],
            }),
            Entry::Single(OllCase {
                number: 55,
                name: "Line + 2 sides",
                orientations: OllOrientations::new([L, T, R, L, T, R, L, T, R]),
                algorithms: &[Algorithm::new("R' F U R U' R² F' R² U' R' U R U R'")],
            }),
            Entry::Single(OllCase {
                number: 56,
                name: "Line 4",
                orientations: OllOrientations::new([L, B, R, T, T, T, L, F, R]),
                algorithms: &[
                    Algorithm::with_shorthand(
                        "r' U' r U' R' (U R U' R') U R r' U r",
                        "r' U' r U' R' {sexy}' U R r' U r",
                    ),
                ],
            }),
        ],
    },
    OllCategory {
        name: "Square",
        description: "Square shape with adjacent edges oriented",
        cases: &[
            Entry::Pair(
                OllCase {
                    number: 5,
                    name: "Square 1",
                    orientations: OllOrientations::new([T, T, R, T, T, R, L, F, F]),
                    algorithms: &[Algorithm::new("l' U² (L U L' U) l")],
                },
                OllCase {
                    number: 6,
                    name: "Square 2",
                    orientations: OllOrientations::new([L, T, T, L, T, T, F, F, R]),
                    algorithms: &[Algorithm::new("r U² (R' U' R U') r'")],
                },
            ),
        ],
    },
    OllCategory {
        name: "Small Lightning",
        description: "Lightning bolt shapes with 2 adjacent edges oriented",
        cases: &[
            Entry::Pair(
                OllCase {
                    number: 8,
                    name: "Lightning 2",
                    orientations: OllOrientations::new([L, T, B, L, T, T, F, F, T]),
                    algorithms: &[Algorithm::new("l' (U' L U' L') U² l")],
                },
                OllCase {
                    number: 7,
                    name: "Lightning 1",
                    orientations: OllOrientations::new([B, T, R, T, T, R, T, F, F]),
                    algorithms: &[Algorithm::new("r (U R' U R) U² r'")],
                },
            ),
            Entry::Pair(
                OllCase {
                    number: 12,
                    name: "Lightning 4",
                    orientations: OllOrientations::new([L, B, B, T, T, R, F, T, T]),
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "M (L' U' L U' L' U² L) U' M'",
                            "M {left-chair}' U' M'",
                        ),
                    ],
                },
                OllCase {
                    number: 11,
                    name: "Lightning 3",
                    orientations: OllOrientations::new([B, B, R, L, T, T, T, T, F]),
                    algorithms: &[
                        Algorithm::with_shorthand("M (R U R' U R U² R') U M'", "M {sune} U M'"),
                    ],
                },
            ),
        ],
    },
    OllCategory {
        name: "Fish",
        description: "Fish shapes with 2 adjacent edges oriented",
        cases: &[
            Entry::Single(OllCase {
                number: 9,
                name: "Fish 1",
                orientations: OllOrientations::new([L, B, T, T, T, R, F, T, R]),
                algorithms: &[
                    Algorithm::with_shorthand(
                        "(R U R' U') R' F R² U R' U' F'",
                        "{sexy} R' F R² U R' U' F'",
                    ),
                ],
            }),
            Entry::Single(OllCase {
                number: 10,
                name: "Fish 2",
                orientations: OllOrientations::new([B, B, T, T, T, R, L, T, F]),
                algorithms: &[
                    Algorithm::with_shorthand(
                        "(R U R' U) (R' F R F') R U² R'",
                        "(R U R' U) {sledge} R U² R'",
                    ),
                ],
            }),
            Entry::Single(OllCase {
                number: 35,
                name: "Fish 3",
                orientations: OllOrientations::new([T, B, R, L, T, T, F, T, T]),
                algorithms: &[Algorithm::new("R U² R² F R F' R U² R'")],
            }),
            Entry::Single(OllCase {
                number: 37,
                name: "Fish 4",
                orientations: OllOrientations::new([T, T, R, T, T, R, F, F, T]),
                algorithms: &[
                    Algorithm::with_shorthand("(F R' F' R) (U R U' R')", "{sledge}' {sexy}'"),
                ],
            }),
        ],
    },
    OllCategory {
        name: "W Shapes",
        description: "W patterns with 2 adjacent edges oriented",
        cases: &[
            Entry::Pair(
                OllCase {
                    number: 36,
                    name: "W Shape 1",
                    orientations: OllOrientations::new([T, B, R, T, T, R, F, T, T]),
                    algorithms: &[Algorithm::new("R' U' R U' R' U R U l U' R' U x")],
                },
                OllCase {
                    number: 38,
                    name: "W Shape 2",
                    orientations: OllOrientations::new([B, T, T, T, T, R, T, F, R]),
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "R U R' (U R U' R') U' (R' F R F')",
                            "R U R' {sexy}' U' {sledge}",
                        ),
                    ],
                },
            ),
        ],
    },
    OllCategory {
        name: "Big Lightning",
        description: "Large lightning bolt patterns",
        cases: &[
            Entry::Pair(
                OllCase {
                    number: 39,
                    name: "Big Lightning 1",
                    orientations: OllOrientations::new([B, B, T, T, T, T, T, F, R]),
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "L F' (L' U' L U) F U' L'",
                            "L F' {left-sexy} F U' L'",
                        ),
                    ],
                },
                OllCase {
                    number: 40,
                    name: "Big Lightning 2",
                    orientations: OllOrientations::new([T, B, B, T, T, T, L, F, T]),
                    algorithms: &[
                        Algorithm::with_shorthand("R' F (R U R' U') F' U R", "R' F {sexy} F' U R"),
                    ],
                },
            ),
        ],
    },
    OllCategory {
        name: "Knight Move",
        description: "Knight move patterns with 2 opposite edges oriented",
        cases: &[
            Entry::Pair(
                OllCase {
                    number: 13,
                    name: "Knight 1",
                    orientations: OllOrientations::new([B, B, R, T, T, T, T, F, F]),
                    algorithms: &[Algorithm::new("r U' r' U' r U r' F' U F")],
                },
                OllCase {
                    number: 14,
                    name: "Knight 2",
                    orientations: OllOrientations::new([L, B, B, T, T, T, F, F, T]),
                    algorithms: &[Algorithm::new("R' F R U R' F' R F U' F'")],
                },
            ),
            Entry::Pair(
                OllCase {
                    number: 15,
                    name: "Knight 3",
                    orientations: OllOrientations::new([B, B, R, T, T, T, L, F, T]),
                    algorithms: &[Algorithm::new("r' U' r R' U' R U r' U r")],
                },
                OllCase {
                    number: 16,
                    name: "Knight 4",
                    orientations: OllOrientations::new([L, B, T, T, T, T, F, F, R]),
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "r U r' (R U R' U') r U' r'",
                            "r U r' {sexy} r U' r'",
                        ),
                    ],
                },
            ),
        ],
    },
    OllCategory {
        name: "Awkward",
        description: "Awkward patterns with 2 opposite edges oriented",
        cases: &[
            Entry::Pair(
                OllCase {
                    number: 30,
                    name: "Awkward 2",
                    orientations: OllOrientations::new([T, B, T, L, T, T, L, T, R]),
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "M U' (L' U' L U) (L F' L' F) M'",
                            "M U' {left-sexy} {left-sledge} M'",
                        ),
                    ],
                },
                OllCase {
                    number: 29,
                    name: "Awkward 1",
                    orientations: OllOrientations::new([T, B, T, T, T, R, L, T, R]),
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "M U (R U R' U') (R' F R F') M'",
                            "M U {sexy} {sledge} M'",
                        ),
                    ],
                },
            ),
            Entry::Pair(
                OllCase {
                    number: 41,
                    name: "Awkward 3",
                    orientations: OllOrientations::new([T, B, T, L, T, T, F, T, F]),
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "(R U R' U R U² R') F (R U R' U') F'",
                            "{sune} F {sexy} F'",
                        ),
                    ],
                },
                OllCase {
                    number: 42,
                    name: "Awkward 4",
                    orientations: OllOrientations::new([T, B, T, T, T, R, F, T, F]),
                    algorithms: &[
                        Algorithm::with_shorthand(
                            "R' U' R U' R' U² R F (R U R' U') F'",
                            "R' U' R U' R' U² R F {sexy} F'",
                        ),
                    ],
                },
            ),
        ],
    },
    OllCategory {
        name: "C Shapes",
        description: "C patterns with 2 adjacent edges oriented",
        cases: &[
            Entry::Single(OllCase {
                number: 34,
                name: "C Shape 1",
                orientations: OllOrientations::new([L, B, R, T, T, T, T, F, T]),
                algorithms: &[
                    Algorithm::with_shorthand(
                        "(R U R' U') B' (R' F R F') B",
                        "{sexy} B' {sledge} B",
                    ),
                ],
            }),
            Entry::Single(OllCase {
                number: 46,
                name: "C Shape 2",
                orientations: OllOrientations::new([T, T, R, L, T, R, T, T, R]),
                algorithms: &[
                    Algorithm::with_shorthand("R' U' (R' F R F') U R", "R' U' {sledge} U R"),
                ],
            }),
        ],
    },
    OllCategory {
        name: "Solved Corners",
        description: "I patterns with opposite edges oriented",
        cases: &[
            Entry::Single(OllCase {
                number: 28,
                name: "Adjacent Edges",
                orientations: OllOrientations::new([T, T, T, T, T, R, T, F, T]),
                algorithms: &[
                    Algorithm::with_shorthand("(r U R' U') M (U R U' R')", "{fat-sexy} M {sexy}'"),
                    Algorithm::new("M U M' U² M U M'"),
                ],
            }),
            Entry::Single(OllCase {
                number: 57,
                name: "Opposite Edges",
                orientations: OllOrientations::new([T, B, T, T, T, T, T, F, T]),
                algorithms: &[
                    Algorithm::with_shorthand(
                        "(R U R' U') M' (U R U' r')",
                        "{sexy} M' {fat-sexy}'",
                    ),
                ],
            }),
        ],
    },
];
