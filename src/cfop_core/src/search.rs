//! Finding cases by what a reader types

use log::debug;

use crate::{
    catalog::{self, Category, OLL_CATEGORIES, OllCategory, PLL_CATEGORIES, PllCategory},
    oll::OllCase,
    pll::PllCase,
};

pub use crate::catalog::slug as category_slug;

/// An exact, case-insensitive match against a PLL name or one of its aliases
pub fn find_pll(query: &str) -> Option<&'static PllCase> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    catalog::pll_case(query)
}

/// A query that names nothing. The empty query isn't invalid; it shows everything.
pub fn is_invalid_pll_query(query: &str) -> bool {
    !query.trim().is_empty() && find_pll(query).is_none()
}

fn matches_category<T: 'static>(category: &Category<T>, name: &str) -> bool {
    let name = name.trim();
    category.name.eq_ignore_ascii_case(name) || category.slug() == category_slug(name)
}

/// A PLL category by its name or slug
pub fn find_pll_category(name: &str) -> Option<&'static PllCategory> {
    PLL_CATEGORIES
        .iter()
        .find(|category| matches_category(category, name))
}

/// An OLL category by its name or slug
pub fn find_oll_category(name: &str) -> Option<&'static OllCategory> {
    OLL_CATEGORIES
        .iter()
        .find(|category| matches_category(category, name))
}

/// Every PLL case, or only those in `category`. An unknown category yields nothing.
pub fn filter_pll(category: Option<&str>) -> Vec<&'static PllCase> {
    match category {
        None => catalog::all_pll_cases().collect(),
        Some(name) => match find_pll_category(name) {
            Some(category) => category.iter().collect(),
            None => {
                debug!("No PLL category matches `{name}`");
                Vec::new()
            }
        },
    }
}

/// A number finds that case; anything else is matched as a substring of the case name or
/// its category name. The empty query finds every case.
pub fn search_oll(query: &str) -> Vec<&'static OllCase> {
    let query = query.trim();
    if query.is_empty() {
        return catalog::all_oll_cases().collect();
    }

    if let Ok(number) = query.parse::<u8>() {
        return catalog::oll_case(number).into_iter().collect();
    }

    let query = query.to_lowercase();
    OLL_CATEGORIES
        .iter()
        .flat_map(|category| {
            let category_matches = category.name.to_lowercase().contains(&query);
            let query = query.clone();

            category
                .iter()
                .filter(move |case| category_matches || case.name.to_lowercase().contains(&query))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        category_slug, filter_pll, find_oll_category, find_pll, find_pll_category,
        is_invalid_pll_query, search_oll,
    };

    #[test]
    fn pll_names_match_exactly() {
        assert_eq!(find_pll("  ua ").map(|case| case.name), Some("Ua"));
        assert_eq!(find_pll("Ja").map(|case| case.name), Some("Ja/L"));
        assert!(find_pll("U").is_none());
        assert!(find_pll("").is_none());
    }

    #[test]
    fn invalid_queries() {
        assert!(!is_invalid_pll_query(""));
        assert!(!is_invalid_pll_query("   "));
        assert!(!is_invalid_pll_query("gb"));
        assert!(is_invalid_pll_query("sune"));
    }

    #[test]
    fn categories_match_by_name_or_slug() {
        assert!(find_pll_category("edges only").is_some());
        assert!(find_pll_category("g-permutations").is_some());
        assert!(find_oll_category("Solved Cross").is_some());
        assert!(find_pll_category("nothing").is_none());
        assert_eq!(category_slug("Edges Only"), "edges-only");
    }

    #[test]
    fn filtering() {
        assert_eq!(filter_pll(None).len(), 21);
        assert_eq!(filter_pll(Some("Edges Only")).len(), 4);
        assert!(filter_pll(Some("nothing")).is_empty());
    }

    #[test]
    fn oll_search() {
        assert_eq!(search_oll("").len(), 57);
        assert_eq!(
            search_oll("27").first().map(|case| case.name),
            Some("Sune")
        );
        assert!(search_oll("99").is_empty());

        let fish = search_oll("FISH");
        assert_eq!(fish.len(), 4);
        assert!(fish.iter().all(|case| case.name.starts_with("Fish")));

        assert!(
            search_oll("sune")
                .iter()
                .any(|case| case.name == "Anti-Sune")
        );
    }
}
