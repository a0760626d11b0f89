use crate::card_art::{
    models::{Card, Clan, GameKind, Rank},
    rng::{hash32, Mulberry32, SeededRng},
};

/// The full 52-card deck in seed order, dealt from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

/// All 52 cards in canonical order: every rank of BLADE, then WAGASA, FAN,
/// MASK.
pub fn canonical_cards() -> Vec<Card> {
    Clan::ALL
        .iter()
        .flat_map(|&clan| Rank::ALL.iter().map(move |&rank| Card::new(rank, clan)))
        .collect()
}

/// Fisher-Yates, last index down to 1, `j = floor(next * (i + 1))`.
pub fn shuffle<T, R: SeededRng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

impl Deck {
    /// Canonical deck shuffled with `rng`.
    pub fn new_shuffled<R: SeededRng>(rng: &mut R) -> Self {
        let mut cards = canonical_cards();
        shuffle(&mut cards, rng);
        Deck { cards, cursor: 0 }
    }

    /// Deal one card; panics if the deck is exhausted.
    pub fn deal(&mut self) -> Card {
        self.try_deal().expect("Deck exhausted")
    }

    /// Deal one card, or `None` once the deck is empty.
    pub fn try_deal(&mut self) -> Option<Card> {
        let card = self.cards.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(card)
    }

    /// Deal up to `n` cards. Stops early when the deck runs out.
    pub fn deal_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.try_deal()).collect()
    }

    /// Remaining cards available.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// All dealt cards so far.
    pub fn dealt_cards(&self) -> &[Card] {
        &self.cards[..self.cursor]
    }

    /// The whole deck in order, dealt or not.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Reshuffle every card (dealt ones included) with `rng` and reset the
    /// cursor.
    pub fn reshuffle<R: SeededRng>(&mut self, rng: &mut R) {
        shuffle(&mut self.cards, rng);
        self.cursor = 0;
    }
}

/// Seeded deck: `hash32(seed)` drives the shuffle.
#[tracing::instrument]
pub fn build_deck(seed: &str) -> Deck {
    let mut rng = Mulberry32::new(hash32(seed));
    let deck = Deck::new_shuffled(&mut rng);
    tracing::debug!(first = %deck.cards[0], "deck built");
    deck
}

/// Seeded deck reshuffled with the game's own salt, so each game on the same
/// seed deals a different (but reproducible) order.
#[tracing::instrument]
pub fn build_game_deck(seed: &str, game: GameKind) -> Deck {
    let mut deck = build_deck(seed);
    let mut rng = Mulberry32::salted(seed, game.salt());
    deck.reshuffle(&mut rng);
    deck
}

/// Copy of `cards` sorted by ascending value. The sort is stable, so equal
/// values keep their dealt order.
pub fn sort_by_value(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|c| c.value());
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deck_has_52_unique_cards() {
        let mut deck = build_deck("42");
        let all: Vec<Card> = (0..52).map(|_| deck.deal()).collect();

        let seen: HashSet<Card> = all.iter().copied().collect();
        assert_eq!(seen.len(), 52);
        assert_eq!(all.len(), 52);
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn deck_is_deterministic_with_seed() {
        let make = |seed: &str| -> Vec<Card> { build_deck(seed).deal_n(5) };
        assert_eq!(make("99"), make("99"));
        assert_ne!(make("99"), make("100"));
    }

    #[test]
    fn canonical_order_is_clan_major() {
        let cards = canonical_cards();
        assert_eq!(cards[0].id(), "2-BLADE");
        assert_eq!(cards[12].id(), "A-BLADE");
        assert_eq!(cards[13].id(), "2-WAGASA");
        assert_eq!(cards[51].id(), "A-MASK");
    }

    #[test]
    fn golden_order_for_default_seed() {
        let ids: Vec<String> = build_deck("123456").deal_n(5).iter().map(Card::id).collect();
        assert_eq!(ids, ["9-BLADE", "5-MASK", "4-WAGASA", "6-WAGASA", "2-WAGASA"]);
    }

    #[test]
    fn golden_order_for_duel_deck() {
        let ids: Vec<String> = build_game_deck("123456", GameKind::Duel)
            .deal_n(3)
            .iter()
            .map(Card::id)
            .collect();
        assert_eq!(ids, ["10-BLADE", "J-MASK", "7-MASK"]);
    }

    #[test]
    fn game_decks_differ_from_each_other() {
        let orders: HashSet<Vec<Card>> = GameKind::ALL
            .iter()
            .map(|&g| build_game_deck("123456", g).into_cards())
            .chain(std::iter::once(build_deck("123456").into_cards()))
            .collect();
        assert_eq!(orders.len(), GameKind::ALL.len() + 1);
    }

    #[test]
    fn deal_n_stops_when_exhausted() {
        let mut deck = build_deck("x");
        let first = deck.deal_n(50);
        assert_eq!(first.len(), 50);
        let rest = deck.deal_n(10);
        assert_eq!(rest.len(), 2);
        assert!(deck.try_deal().is_none());
        assert_eq!(deck.dealt_cards().len(), 52);
    }

    #[test]
    #[should_panic(expected = "Deck exhausted")]
    fn deal_panics_when_exhausted() {
        let mut deck = build_deck("x");
        deck.deal_n(52);
        deck.deal();
    }

    #[test]
    fn dealt_cards_track_the_cursor() {
        let mut deck = build_deck("cursor");
        let hand = deck.deal_n(7);
        assert_eq!(deck.dealt_cards(), hand.as_slice());
        assert_eq!(deck.remaining(), 45);
    }

    #[test]
    fn reshuffle_resets_cursor_and_keeps_cards() {
        let mut deck = build_deck("reshuffle");
        deck.deal_n(10);
        deck.reshuffle(&mut Mulberry32::new(1));
        assert_eq!(deck.remaining(), 52);
        let seen: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn sort_by_value_is_ascending_and_stable() {
        let hand: Vec<Card> = ["K-FAN", "2-MASK", "K-BLADE", "7-WAGASA"]
            .iter()
            .map(|id| id.parse().unwrap())
            .collect();
        let ids: Vec<String> = sort_by_value(&hand).iter().map(Card::id).collect();
        assert_eq!(ids, ["2-MASK", "7-WAGASA", "K-FAN", "K-BLADE"]);
    }

    /// Scripted generator: always returns the same value.
    struct Fixed(f64);

    impl SeededRng for Fixed {
        fn next_f64(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn shuffle_with_zero_stub_rotates_left() {
        // j = 0 every step: each position i swaps with the front.
        let mut items = [1, 2, 3, 4];
        shuffle(&mut items, &mut Fixed(0.0));
        assert_eq!(items, [2, 3, 4, 1]);
    }

    #[test]
    fn shuffle_with_top_stub_is_identity() {
        let mut items = [1, 2, 3, 4];
        shuffle(&mut items, &mut Fixed(0.999_999));
        assert_eq!(items, [1, 2, 3, 4]);
    }
}
