//! The built in algorithm sheets: every OLL and PLL case, the triggers their algorithms
//! are written with, and the F2L and cross reference patterns.

use std::{collections::HashMap, sync::LazyLock};

use itertools::Itertools;
use log::debug;
use serde::Serialize;

use crate::{oll::OllCase, pll::PllCase};

mod f2l;
mod oll;
mod pll;
mod triggers;

pub use f2l::{
    CROSS_GOAL, CubeFaces, F2L_GOAL, F2L_PATTERNS, F2lPattern, Face, Slot, cross_face, f2l_face,
    make_face, solid_face,
};
pub use oll::OLL_CATEGORIES;
pub use pll::PLL_CATEGORIES;
pub use triggers::{TRIGGER_CATEGORIES, Trigger, TriggerCategory, all_triggers, trigger_book};

/// One way to execute a case. `shorthand` spells the same moves using trigger names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Algorithm {
    pub full: &'static str,
    pub shorthand: Option<&'static str>,
}

impl Algorithm {
    pub const fn new(full: &'static str) -> Self {
        Algorithm {
            full,
            shorthand: None,
        }
    }

    pub const fn with_shorthand(full: &'static str, shorthand: &'static str) -> Self {
        Algorithm {
            full,
            shorthand: Some(shorthand),
        }
    }

    /// The text to show when the reader wants the compact form
    pub fn display_text(&self) -> &'static str {
        self.shorthand.unwrap_or(self.full)
    }
}

/// Cases that are usually learned together, such as mirrors or inverses, are kept in a
/// pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Entry<T> {
    Single(T),
    Pair(T, T),
}

impl<T> Entry<T> {
    pub fn cases(&self) -> impl Iterator<Item = &T> {
        let (first, second) = match self {
            Entry::Single(case) => (case, None),
            Entry::Pair(left, right) => (left, Some(right)),
        };

        std::iter::once(first).chain(second)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category<T: 'static> {
    pub name: &'static str,
    pub description: &'static str,
    pub cases: &'static [Entry<T>],
}

pub type OllCategory = Category<OllCase>;
pub type PllCategory = Category<PllCase>;

impl<T: 'static> Category<T> {
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cases.iter().flat_map(Entry::cases)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn slug(&self) -> String {
        slug(self.name)
    }
}

/// Turns a category name into the form used in links: whitespace runs become a single
/// `-` and everything is lowercased
pub fn slug(name: &str) -> String {
    name.split_whitespace().join("-").to_lowercase()
}

static OLL_BY_NUMBER: LazyLock<HashMap<u8, (&'static OllCategory, &'static OllCase)>> =
    LazyLock::new(|| {
        let index: HashMap<_, _> = OLL_CATEGORIES
            .iter()
            .flat_map(|category| {
                category
                    .iter()
                    .map(move |case| (case.number, (category, case)))
            })
            .collect();

        debug!("Indexed {} OLL cases", index.len());
        index
    });

static PLL_BY_NAME: LazyLock<HashMap<String, (&'static PllCategory, &'static PllCase)>> =
    LazyLock::new(|| {
        let index: HashMap<_, _> = PLL_CATEGORIES
            .iter()
            .flat_map(|category| category.iter().map(move |case| (category, case)))
            .flat_map(|(category, case)| {
                std::iter::once(case.name)
                    .chain(case.aliases())
                    .map(move |alias| (alias.to_lowercase(), (category, case)))
            })
            .collect();

        debug!("Indexed {} PLL names", index.len());
        index
    });

pub fn oll_case(number: u8) -> Option<&'static OllCase> {
    OLL_BY_NUMBER.get(&number).map(|&(_, case)| case)
}

pub fn oll_category_of(number: u8) -> Option<&'static OllCategory> {
    OLL_BY_NUMBER.get(&number).map(|&(category, _)| category)
}

/// Looks a case up by any of its names, ignoring case and surrounding whitespace
pub fn pll_case(name: &str) -> Option<&'static PllCase> {
    PLL_BY_NAME
        .get(&name.trim().to_lowercase())
        .map(|&(_, case)| case)
}

pub fn pll_category_of(name: &str) -> Option<&'static PllCategory> {
    PLL_BY_NAME
        .get(&name.trim().to_lowercase())
        .map(|&(category, _)| category)
}

pub fn all_oll_cases() -> impl Iterator<Item = &'static OllCase> {
    OLL_CATEGORIES.iter().flat_map(Category::iter)
}

pub fn all_pll_cases() -> impl Iterator<Item = &'static PllCase> {
    PLL_CATEGORIES.iter().flat_map(Category::iter)
}

#[cfg(test)]
mod tests {
    use super::{Algorithm, Entry, oll_case, pll_case, pll_category_of, slug};

    #[test]
    fn shorthand_is_preferred_for_display() {
        assert_eq!(Algorithm::new("R U R'").display_text(), "R U R'");
        assert_eq!(
            Algorithm::with_shorthand("R U R' U'", "{sexy}").display_text(),
            "{sexy}"
        );
    }

    #[test]
    fn pairs_yield_both_cases() {
        assert_eq!(
            Entry::Pair(1, 2).cases().copied().collect::<Vec<_>>(),
            [1, 2]
        );
        assert_eq!(Entry::Single(3).cases().count(), 1);
    }

    #[test]
    fn slugs_collapse_whitespace() {
        assert_eq!(slug("Swap Adjacent Corners"), "swap-adjacent-corners");
        assert_eq!(slug("  G   Permutations "), "g-permutations");
    }

    #[test]
    fn lookups() {
        assert_eq!(oll_case(27).map(|case| case.name), Some("Sune"));
        assert!(oll_case(0).is_none());
        assert!(oll_case(58).is_none());

        assert_eq!(pll_case(" t ").map(|case| case.name), Some("T"));
        assert_eq!(pll_case("l").map(|case| case.name), Some("Ja/L"));
        assert_eq!(pll_case("ja/l").map(|case| case.name), Some("Ja/L"));
        assert_eq!(
            pll_category_of("Gd").map(|category| category.name),
            Some("G Permutations")
        );
    }
}
