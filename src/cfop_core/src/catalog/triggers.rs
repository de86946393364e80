use std::sync::LazyLock;

use serde::Serialize;

use crate::notation::TriggerBook;

/// A short move sequence that algorithms are built from, referenced in shorthand as
/// `{key}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Trigger {
    pub name: &'static str,
    pub notation: &'static str,
    pub moves: &'static str,
    pub inverse: &'static str,
    /// Some inverses are common enough to have their own name, such as `{sune}`
    pub inverse_notation: Option<&'static str>,
    pub description: Option<&'static str>,
}

impl Trigger {
    /// The notation without its braces
    pub fn key(&self) -> &'static str {
        strip_braces(self.notation)
    }

    pub fn inverse_key(&self) -> Option<&'static str> {
        self.inverse_notation.map(strip_braces)
    }
}

fn strip_braces(notation: &'static str) -> &'static str {
    notation
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .unwrap_or(notation)
}

/// Triggers are listed as `[left hand, right hand]` mirror pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TriggerCategory {
    pub name: &'static str,
    pub description: &'static str,
    pub triggers: &'static [[Trigger; 2]],
}

impl TriggerCategory {
    pub fn iter(&self) -> impl Iterator<Item = &Trigger> {
        self.triggers.iter().flatten()
    }
}

pub static TRIGGER_CATEGORIES: &[TriggerCategory] = &[
    TriggerCategory {
        name: "Core Triggers",
        description: "The most frequently used algorithm building blocks",
        triggers: &[
            [
                Trigger {
                    name: "Left Sexy",
                    notation: "{left-sexy}",
                    moves: "L' U' L U",
                    inverse: "U' L' U L",
                    inverse_notation: None,
                    description: Some("Mirror of sexy move, executed with left hand."),
                },
                Trigger {
                    name: "Sexy Move",
                    notation: "{sexy}",
                    moves: "R U R' U'",
                    inverse: "U R U' R'",
                    inverse_notation: None,
                    description: Some(
                        "The most common trigger. Used in nearly half of all OLL algorithms.",
                    ),
                },
            ],
            [
                Trigger {
                    name: "Left Sledgehammer",
                    notation: "{left-sledge}",
                    moves: "L F' L' F",
                    inverse: "F' L F L'",
                    inverse_notation: None,
                    description: Some("Mirror of sledgehammer."),
                },
                Trigger {
                    name: "Sledgehammer",
                    notation: "{sledge}",
                    moves: "R' F R F'",
                    inverse: "F R' F' R",
                    inverse_notation: None,
                    description: Some("Second most common trigger. Often paired with sexy move."),
                },
            ],
        ],
    },
    TriggerCategory {
        name: "Wide Triggers",
        description: "Triggers using wide moves. Lowercase r/l = two layers together.",
        triggers: &[
            [
                Trigger {
                    name: "Left Fat Sexy",
                    notation: "{left-fat-sexy}",
                    moves: "l U L' U'",
                    inverse: "U L U' l'",
                    inverse_notation: None,
                    description: Some("Wide version of left sexy move."),
                },
                Trigger {
                    name: "Fat Sexy",
                    notation: "{fat-sexy}",
                    moves: "r U R' U'",
                    inverse: "U R U' r'",
                    inverse_notation: None,
                    description: Some("Wide version of sexy move. Affects the M slice."),
                },
            ],
            [
                Trigger {
                    name: "Left Fat Sledgehammer",
                    notation: "{left-fat-sledge}",
                    moves: "l F' L' F",
                    inverse: "F' L F l'",
                    inverse_notation: None,
                    description: Some("Wide version of left sledgehammer."),
                },
                Trigger {
                    name: "Fat Sledgehammer",
                    notation: "{fat-sledge}",
                    moves: "r' F R F'",
                    inverse: "F R' F' r",
                    inverse_notation: None,
                    description: Some("Wide version of sledgehammer."),
                },
            ],
        ],
    },
    TriggerCategory {
        name: "Sune Family",
        description: "Corner-oriented algorithms. Chair and Sune are inverses of each other.",
        triggers: &[[
            Trigger {
                name: "Left Chair",
                notation: "{left-chair}",
                moves: "L' U² L U L' U L",
                inverse: "L' U' L U' L' U² L",
                inverse_notation: Some("{left-sune}"),
                description: Some("Mirror of Chair. Inverse is Left Sune."),
            },
            Trigger {
                name: "Chair",
                notation: "{chair}",
                moves: "R U² R' U' R U' R'",
                inverse: "R U R' U R U² R'",
                inverse_notation: Some("{sune}"),
                description: Some("Also known as Anti-Sune. Inverse is Sune."),
            },
        ]],
    },
];

pub fn all_triggers() -> impl Iterator<Item = &'static Trigger> {
    TRIGGER_CATEGORIES.iter().flat_map(TriggerCategory::iter)
}

static TRIGGER_BOOK: LazyLock<TriggerBook> = LazyLock::new(|| TriggerBook::new(all_triggers()));

/// Every built in trigger, ready to expand shorthand with
pub fn trigger_book() -> &'static TriggerBook {
    &TRIGGER_BOOK
}

#[cfg(test)]
mod tests {
    use super::{TRIGGER_CATEGORIES, all_triggers};

    #[test]
    fn keys_drop_the_braces() {
        let chair = all_triggers().find(|t| t.name == "Chair").unwrap();
        assert_eq!(chair.key(), "chair");
        assert_eq!(chair.inverse_key(), Some("sune"));

        let sexy = all_triggers().find(|t| t.key() == "sexy").unwrap();
        assert_eq!(sexy.inverse_key(), None);
    }

    #[test]
    fn triggers_come_in_pairs() {
        assert_eq!(TRIGGER_CATEGORIES.len(), 3);
        assert_eq!(all_triggers().count(), 10);

        for category in TRIGGER_CATEGORIES {
            for [left, right] in category.triggers {
                assert!(left.key().starts_with("left-"), "{}", left.name);
                assert!(!right.key().starts_with("left-"), "{}", right.name);
            }
        }
    }
}
