use std::collections::VecDeque;

use log::{debug, info};
use serde::Serialize;

use crate::{
    catalog::Algorithm,
    cube::{Color, LastLayerColors},
    oll::OllCase,
    pll::PllCase,
};

/// Something that can be drilled: a diagram to recognise and the algorithms that solve it
pub trait Flashcard {
    fn label(&self) -> String;

    /// The diagram to show, with `front` at the front where the case cares about it
    fn diagram(&self, front: Color) -> LastLayerColors;

    fn answers(&self) -> &'static [Algorithm];
}

impl Flashcard for OllCase {
    fn label(&self) -> String {
        format!("OLL {}: {}", self.number, self.name)
    }

    fn diagram(&self, _: Color) -> LastLayerColors {
        self.colors()
    }

    fn answers(&self) -> &'static [Algorithm] {
        self.algorithms
    }
}

impl Flashcard for PllCase {
    fn label(&self) -> String {
        format!("{} Perm", self.name)
    }

    fn diagram(&self, front: Color) -> LastLayerColors {
        self.colors_for(front)
    }

    fn answers(&self) -> &'static [Algorithm] {
        self.algorithms
    }
}

impl<T: Flashcard + ?Sized> Flashcard for &T {
    fn label(&self) -> String {
        (**self).label()
    }

    fn diagram(&self, front: Color) -> LastLayerColors {
        (**self).diagram(front)
    }

    fn answers(&self) -> &'static [Algorithm] {
        (**self).answers()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    Known,
    Missed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DeckStats {
    pub known: usize,
    pub missed: usize,
    pub remaining: usize,
}

impl DeckStats {
    pub fn attempts(&self) -> usize {
        self.known + self.missed
    }
}

/// A shuffled pile of cards. Known cards leave the pile and missed ones go to the bottom,
/// so a deck is finished once every card has been known once.
#[derive(Debug, Clone)]
pub struct Deck<C> {
    cards: VecDeque<C>,
    stats: DeckStats,
}

impl<C: Flashcard> Deck<C> {
    pub fn new(cards: impl IntoIterator<Item = C>, seed: u64) -> Deck<C> {
        let mut cards = cards.into_iter().collect::<Vec<_>>();
        fastrand::Rng::with_seed(seed).shuffle(&mut cards);

        debug!("Shuffled {} cards with seed {seed}", cards.len());

        Deck {
            stats: DeckStats {
                remaining: cards.len(),
                ..DeckStats::default()
            },
            cards: cards.into(),
        }
    }

    /// Keeps only the first `limit` cards of the shuffled deck
    #[must_use]
    pub fn truncated(mut self, limit: usize) -> Deck<C> {
        self.cards.truncate(limit);
        self.stats.remaining = self.cards.len();
        self
    }

    pub fn current(&self) -> Option<&C> {
        self.cards.front()
    }

    pub fn answer(&mut self, outcome: Outcome) {
        let Some(card) = self.cards.pop_front() else {
            return;
        };

        match outcome {
            Outcome::Known => {
                self.stats.known += 1;
                info!("{} known", card.label());
            }
            Outcome::Missed => {
                self.stats.missed += 1;
                info!("{} missed", card.label());
                self.cards.push_back(card);
            }
        }

        self.stats.remaining = self.cards.len();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_finished(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn stats(&self) -> DeckStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::{Deck, Flashcard, Outcome};
    use crate::{
        catalog::Algorithm,
        cube::{Color, LastLayerColors},
    };

    #[derive(Debug, Clone, PartialEq)]
    struct Card(u8);

    impl Flashcard for Card {
        fn label(&self) -> String {
            self.0.to_string()
        }

        fn diagram(&self, _: Color) -> LastLayerColors {
            LastLayerColors::blank()
        }

        fn answers(&self) -> &'static [Algorithm] {
            &[]
        }
    }

    fn deck() -> Deck<Card> {
        Deck::new((0..5).map(Card), 7)
    }

    #[test]
    fn the_same_seed_deals_the_same_order() {
        let mut a = deck();
        let mut b = deck();

        while let (Some(x), Some(y)) = (a.current().cloned(), b.current().cloned()) {
            assert_eq!(x, y);
            a.answer(Outcome::Known);
            b.answer(Outcome::Known);
        }

        assert!(a.is_finished() && b.is_finished());
    }

    #[test]
    fn missed_cards_come_back() {
        let mut deck = deck();
        let first = deck.current().cloned().unwrap();

        deck.answer(Outcome::Missed);
        assert_eq!(deck.remaining(), 5);

        for _ in 0..4 {
            deck.answer(Outcome::Known);
        }
        assert_eq!(deck.current(), Some(&first));

        deck.answer(Outcome::Known);
        assert!(deck.is_finished());

        let stats = deck.stats();
        assert_eq!((stats.known, stats.missed, stats.remaining), (5, 1, 0));
        assert_eq!(stats.attempts(), 6);
    }

    #[test]
    fn truncation_limits_the_deck() {
        let mut deck = deck().truncated(2);
        assert_eq!(deck.remaining(), 2);

        deck.answer(Outcome::Known);
        deck.answer(Outcome::Known);
        deck.answer(Outcome::Known);
        assert!(deck.is_finished());
        assert_eq!(deck.stats().known, 2);
    }
}
