use std::collections::HashSet;

use cfop_core::{
    catalog::{
        OLL_CATEGORIES, PLL_CATEGORIES, all_oll_cases, all_pll_cases, all_triggers, oll_case,
        pll_case, trigger_book,
    },
    cube::{Color, SideColor},
    expand,
    notation::{MoveSequence, Segment, parse_markup},
    topology::PositionKind,
};
use itertools::Itertools;
use log::info;

#[test_log::test]
fn oll_numbers_cover_one_to_fifty_seven_once() {
    let numbers = all_oll_cases().map(|case| case.number).collect_vec();
    assert_eq!(numbers.len(), 57);
    assert_eq!(
        numbers.iter().copied().sorted().collect_vec(),
        (1..=57).collect_vec()
    );
    assert_eq!(OLL_CATEGORIES.len(), 15);
}

#[test_log::test]
fn pll_names_are_unique() {
    let names = all_pll_cases().map(|case| case.name).collect_vec();
    assert_eq!(names.len(), 21);
    assert_eq!(names.iter().collect::<HashSet<_>>().len(), 21);
    assert_eq!(PLL_CATEGORIES.len(), 5);

    for name in names {
        assert_eq!(pll_case(name).map(|case| case.name), Some(name));
    }
}

#[test_log::test]
fn pll_cases_use_each_side_color_three_times() {
    for case in all_pll_cases() {
        assert!(
            case.side_colors.stickers().all(Color::is_side),
            "{} has a non side color",
            case.name
        );

        for color in SideColor::CYCLE {
            assert_eq!(
                case.side_colors.count(color.into()),
                3,
                "{} {color}",
                case.name
            );
        }
    }
}

#[test_log::test]
fn swap_cycles_stay_within_their_piece_kind() {
    for case in all_pll_cases() {
        let swaps = case.swaps;
        assert!(
            !swaps.corners.is_empty() || !swaps.edges.is_empty(),
            "{}",
            case.name
        );

        for cycle in swaps.corners {
            assert!(cycle.is_all(PositionKind::Corner), "{}: {cycle}", case.name);
            assert!(matches!(cycle.positions.len(), 2 | 3));
        }

        for cycle in swaps.edges {
            assert!(cycle.is_all(PositionKind::Edge), "{}: {cycle}", case.name);
            assert!(matches!(cycle.positions.len(), 2 | 3));
        }
    }
}

#[test_log::test]
fn every_case_lists_an_algorithm() {
    assert!(all_oll_cases().all(|case| !case.algorithms.is_empty()));
    assert!(all_pll_cases().all(|case| !case.algorithms.is_empty()));
}

#[test_log::test]
fn trigger_inverses_undo_their_moves() {
    for trigger in all_triggers() {
        let moves = trigger.moves.parse::<MoveSequence>().unwrap();
        let inverse = trigger.inverse.parse::<MoveSequence>().unwrap();
        assert_eq!(moves.inverse(), inverse, "{}", trigger.name);

        if let Some(key) = trigger.inverse_key() {
            assert_eq!(trigger_book().resolve(key).unwrap(), inverse);
        }
    }
}

#[test_log::test]
fn every_trigger_reference_resolves() {
    let book = trigger_book();

    let algorithms = all_oll_cases()
        .flat_map(|case| case.algorithms)
        .chain(all_pll_cases().flat_map(|case| case.algorithms));

    let mut checked = 0;
    for algorithm in algorithms {
        for text in [Some(algorithm.full), algorithm.shorthand].into_iter().flatten() {
            for segment in parse_markup(text).unwrap() {
                if let Segment::Trigger(key) = segment {
                    assert!(book.contains(key), "{{{key}}} in {text}");
                }
            }

            expand(text, book).unwrap();
            checked += 1;
        }
    }

    info!("Expanded {checked} algorithms");
}

/// OLL 31 and 32 write `f` as `F S`, which only a cube model could show to be the same
const WIDE_MOVE_SHORTHANDS: [u8; 2] = [31, 32];

#[test_log::test]
fn shorthand_matches_the_full_algorithm() {
    let book = trigger_book();

    let oll = all_oll_cases()
        .filter(|case| !WIDE_MOVE_SHORTHANDS.contains(&case.number))
        .flat_map(|case| {
            let label = format!("OLL {}", case.number);
            case.algorithms
                .iter()
                .map(move |algorithm| (label.clone(), algorithm))
        });
    let pll = all_pll_cases().flat_map(|case| {
        case.algorithms
            .iter()
            .map(move |algorithm| (format!("{} Perm", case.name), algorithm))
    });

    let mut checked = 0;
    for (label, algorithm) in oll.chain(pll) {
        let Some(shorthand) = algorithm.shorthand else {
            continue;
        };

        assert_eq!(
            expand(shorthand, book).unwrap().simplified(),
            expand(algorithm.full, book).unwrap().simplified(),
            "{label}: {shorthand}"
        );
        checked += 1;
    }

    assert_eq!(checked, 58);
}

#[test_log::test]
fn fixed_shorthands_expand_to_their_algorithms() {
    let book = trigger_book();

    for (number, shorthand, full) in [
        (21, "F {sexy}³ F'", "F (R U R' U') (R U R' U') (R U R' U') F'"),
        (54, "l (U L' U L) {left-sexy}' U² l'", "l (U L' U L) (U' L' U L) U² l'"),
        (12, "M {left-chair}' U' M'", "M (L' U' L U' L' U² L) U' M'"),
    ] {
        let case = oll_case(number).unwrap();
        assert!(
            case.algorithms
                .iter()
                .any(|algorithm| algorithm.shorthand == Some(shorthand)),
            "OLL {number}"
        );

        let expanded = expand(shorthand, book).unwrap().simplified();
        assert!(!expanded.is_empty());
        assert_eq!(expanded, expand(full, book).unwrap().simplified());
    }
}

#[test_log::test]
fn chair_twice_cancels_into_the_h_algorithm() {
    let book = trigger_book();
    let expanded = expand("{chair}²", book).unwrap();

    assert_eq!(expanded.len(), 14);
    assert_eq!(
        expanded.simplified().to_string(),
        "R U² R' U' R U R' U' R U' R'"
    );
}
