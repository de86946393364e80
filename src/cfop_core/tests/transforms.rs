use std::{borrow::Cow, ptr};

use cfop_core::{
    catalog::{all_oll_cases, all_pll_cases, oll_case, pll_case},
    cube::{
        Color::{self, Gray as G, Yellow as Y},
        Orientation::{Front, Left, Right, Top},
        Position, SideColor,
    },
    oll::{OllOrientations, oll_to_colors},
    rotation::{REFERENCE_COLOR, Yaw, rotate_pll_colors, rotate_side_colors},
};
use log::debug;

#[test_log::test]
fn sune_layout() {
    let sune = OllOrientations::new([Top, Top, Right, Top, Top, Top, Left, Top, Front]);
    let colors = oll_to_colors(&sune);

    assert_eq!(colors.top, [Y, Y, G, Y, Y, Y, G, Y, G]);
    assert_eq!(colors.sides.right, [Y, G, G]);
    assert_eq!(colors.sides.left, [G, G, Y]);
    assert_eq!(colors.sides.front, [G, G, Y]);
    assert_eq!(colors.sides.back, [G, G, G]);

    assert_eq!(oll_case(27).map(|case| case.colors().top), Some(colors.top));
}

#[test_log::test]
fn every_oll_case_shows_nine_yellow_stickers() {
    for case in all_oll_cases() {
        let colors = case.colors();
        let stickers = colors.top.iter().copied().chain(colors.sides.stickers());

        let mut yellow = 0;
        for sticker in stickers {
            assert!(sticker == Y || sticker == G, "OLL {}", case.number);
            yellow += usize::from(sticker == Y);
        }

        assert_eq!(yellow, 9, "OLL {}", case.number);
        assert_eq!(colors.top_at(Position::Center), Y);
        assert_eq!(
            case.orientations.oriented_count(),
            colors.top.iter().filter(|&&c| c == Y).count()
        );
    }
}

#[test_log::test]
fn the_reference_front_returns_the_stored_colors() {
    for case in all_pll_cases() {
        let rotated = rotate_pll_colors(case, REFERENCE_COLOR.into());
        assert!(matches!(rotated, Cow::Borrowed(_)), "{}", case.name);
        assert!(ptr::eq(&*rotated, &case.side_colors));

        for fixed in [Color::White, Color::Yellow, Color::Gray] {
            assert!(ptr::eq(&*rotate_pll_colors(case, fixed), &case.side_colors));
        }
    }
}

#[test_log::test]
fn two_steps_replaces_each_color_with_its_opposite() {
    let target = REFERENCE_COLOR.advanced(Yaw::steps(2));
    assert_eq!(target, SideColor::Green);

    for case in all_pll_cases() {
        let rotated = rotate_pll_colors(case, target.into());

        for (original, new) in case
            .side_colors
            .stickers()
            .zip(rotated.stickers())
        {
            let Ok(side) = SideColor::try_from(original) else {
                panic!("{} has a non side color", case.name);
            };
            assert_eq!(new, Color::from(side.advanced(Yaw::steps(2))));
        }
    }
}

#[test_log::test]
fn rotations_round_trip_and_compose() {
    for case in all_pll_cases() {
        for first in SideColor::CYCLE {
            let there = rotate_pll_colors(case, first.into());
            let back = rotate_side_colors(&there, first, REFERENCE_COLOR.into());
            assert_eq!(*back, case.side_colors, "{} via {first}", case.name);

            for second in SideColor::CYCLE {
                let composed = rotate_side_colors(&there, first, second.into());
                let direct = rotate_pll_colors(case, second.into());
                assert_eq!(composed, direct, "{}: {first} then {second}", case.name);
            }
        }

        debug!("{} rotates consistently", case.name);
    }
}

#[test_log::test]
fn red_front_t_perm() {
    let t_perm = pll_case("T").unwrap();
    let red = t_perm.colors_for(Color::Red);

    assert_eq!(red.top, [Y; 9]);
    for color in SideColor::CYCLE {
        assert_eq!(red.sides.count(color.into()), 3);
    }
    assert_eq!(red.sides, t_perm.reoriented(SideColor::Red).side_colors);
}
