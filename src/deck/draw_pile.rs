//! The shared draw pile and its recycle buffer.
//!
//! Completed shared piles are not shuffled back one by one. They collect in
//! a pending buffer; once three piles (36 cards) are waiting, the buffer is
//! shuffled and slid under the draw pile. An exhausted draw pile forces an
//! early recycle of whatever is pending.
//!
//! ```
//! use skipbo_engine::core::GameRng;
//! use skipbo_engine::deck::DrawPile;
//!
//! let mut pile = DrawPile::new(GameRng::new(42));
//! assert_eq!(pile.count(), 162);
//!
//! let hand = pile.draw(5);
//! assert_eq!(hand.len(), 5);
//! assert_eq!(pile.count(), 157);
//! ```

use tracing::debug;

use crate::cards::{Card, CardId};
use crate::core::config::{COMPLETED_PILE_SIZE, COPIES_PER_RANK, MAX_RANK, RECYCLE_THRESHOLD, WILD_COUNT};
use crate::core::rng::GameRng;

/// Draw pile (top = end of vec) plus the pending-recycle buffer.
#[derive(Clone, Debug)]
pub struct DrawPile {
    cards: Vec<Card>,
    pending: Vec<Card>,
    rng: GameRng,
}

impl DrawPile {
    /// Generate the full 162-card set and shuffle it.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        let mut pile = Self::stacked(Self::generate(), rng);
        pile.shuffle();
        pile
    }

    /// Use `cards` as the draw pile in the given order, without shuffling.
    ///
    /// The last card is drawn first. `rng` is only used for recycling.
    #[must_use]
    pub fn stacked(cards: Vec<Card>, rng: GameRng) -> Self {
        Self {
            cards,
            pending: Vec::new(),
            rng,
        }
    }

    /// The full card set in a fixed order: twelve runs of 1..=12, then the
    /// wilds. Ids are assigned 0..162 in that order.
    #[must_use]
    pub fn generate() -> Vec<Card> {
        let numbered = (0..COPIES_PER_RANK).flat_map(|_| 1..=MAX_RANK);
        let mut cards: Vec<Card> = numbered
            .enumerate()
            .map(|(i, rank)| Card::numbered(CardId::new(i as u16), rank))
            .collect();

        let first_wild = cards.len();
        cards.extend((0..WILD_COUNT).map(|i| Card::wild(CardId::new((first_wild + i) as u16))));
        cards
    }

    /// Uniformly permute the draw pile.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.cards);
    }

    /// Take up to `count` cards from the top.
    ///
    /// When the draw pile runs dry mid-draw, pending cards are recycled
    /// immediately. Returns fewer than `count` cards only when both the
    /// draw pile and the pending buffer are exhausted.
    pub fn draw(&mut self, count: usize) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            if self.cards.is_empty() && !self.pending.is_empty() {
                self.recycle_now();
            }
            match self.cards.pop() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        if drawn.len() < count {
            debug!(requested = count, drawn = drawn.len(), "draw pile starved");
        }
        drawn
    }

    /// Accept the cards of a completed shared pile.
    ///
    /// Wilds go back to rank 0. Returns `true` when this push filled the
    /// buffer to the recycle threshold and a recycle ran.
    pub fn push_to_pending(&mut self, pile: Vec<Card>) -> bool {
        self.pending.extend(pile.into_iter().map(Card::at_rest));

        if self.pending.len() >= RECYCLE_THRESHOLD {
            self.recycle_now();
            return true;
        }
        false
    }

    /// Shuffle the pending buffer and slide it under the draw pile.
    fn recycle_now(&mut self) {
        let mut recycled = std::mem::take(&mut self.pending);
        self.rng.shuffle(&mut recycled);
        debug!(recycled = recycled.len(), draw_pile = self.cards.len(), "recycling completed piles");

        recycled.append(&mut self.cards);
        self.cards = recycled;
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Completed piles waiting to be recycled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len() / COMPLETED_PILE_SIZE
    }

    /// Raw number of cards in the pending buffer.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Draw pile contents, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Pending buffer contents.
    #[must_use]
    pub fn pending(&self) -> &[Card] {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DECK_SIZE;
    use std::collections::HashSet;

    fn run(start: u16, wilds_at: &[usize]) -> Vec<Card> {
        (0..12)
            .map(|i| {
                let id = CardId::new(start + i as u16);
                if wilds_at.contains(&i) {
                    Card::wild(id)
                } else {
                    Card::numbered(id, i as u8 + 1)
                }
            })
            .collect()
    }

    #[test]
    fn test_generate_composition() {
        let cards = DrawPile::generate();
        assert_eq!(cards.len(), DECK_SIZE);
        assert_eq!(cards.iter().filter(|c| c.is_wild()).count(), 18);
        for rank in 1..=12 {
            assert_eq!(cards.iter().filter(|c| !c.is_wild() && c.rank() == rank).count(), 12);
        }

        let ids: HashSet<_> = cards.iter().map(Card::id).collect();
        assert_eq!(ids.len(), DECK_SIZE);
    }

    #[test]
    fn test_new_is_shuffled() {
        let pile = DrawPile::new(GameRng::new(1));
        assert_eq!(pile.count(), DECK_SIZE);
        assert_ne!(pile.cards(), DrawPile::generate().as_slice());
    }

    #[test]
    fn test_new_is_seeded() {
        let a = DrawPile::new(GameRng::new(5));
        let b = DrawPile::new(GameRng::new(5));
        assert_eq!(a.cards(), b.cards());
    }

    #[test]
    fn test_draw_from_top() {
        let cards = run(0, &[]);
        let mut pile = DrawPile::stacked(cards.clone(), GameRng::new(0));

        let drawn = pile.draw(2);
        assert_eq!(drawn, vec![cards[11], cards[10]]);
        assert_eq!(pile.count(), 10);
    }

    #[test]
    fn test_draw_short_when_starved() {
        let mut pile = DrawPile::stacked(run(0, &[]), GameRng::new(0));
        let drawn = pile.draw(20);
        assert_eq!(drawn.len(), 12);
        assert!(pile.draw(1).is_empty());
    }

    #[test]
    fn test_draw_forces_recycle() {
        let mut pile = DrawPile::stacked(vec![Card::numbered(CardId::new(100), 3)], GameRng::new(0));
        assert!(!pile.push_to_pending(run(0, &[])));
        assert_eq!(pile.pending_count(), 1);

        let drawn = pile.draw(5);
        assert_eq!(drawn.len(), 5);
        assert_eq!(drawn[0].id(), CardId::new(100));
        assert_eq!(pile.pending_len(), 0);
        assert_eq!(pile.count(), 8);
    }

    #[test]
    fn test_recycle_threshold() {
        let mut pile = DrawPile::stacked(Vec::new(), GameRng::new(0));

        assert!(!pile.push_to_pending(run(0, &[])));
        assert!(!pile.push_to_pending(run(12, &[])));
        assert_eq!(pile.pending_count(), 2);
        assert_eq!(pile.count(), 0);

        assert!(pile.push_to_pending(run(24, &[])));
        assert_eq!(pile.pending_len(), 0);
        assert_eq!(pile.pending_count(), 0);
        assert_eq!(pile.count(), 36);
    }

    #[test]
    fn test_recycled_cards_go_to_bottom() {
        let top = Card::numbered(CardId::new(500), 7);
        let mut pile = DrawPile::stacked(vec![top], GameRng::new(3));

        for start in [0, 12, 24] {
            pile.push_to_pending(run(start, &[]));
        }

        assert_eq!(pile.count(), 37);
        assert_eq!(pile.draw(1), vec![top]);
    }

    #[test]
    fn test_recycled_wilds_are_at_rest() {
        let mut pile = DrawPile::stacked(Vec::new(), GameRng::new(0));
        pile.push_to_pending(run(0, &[0, 5, 11]));
        pile.push_to_pending(run(12, &[3]));
        pile.push_to_pending(run(24, &[]));

        let wilds: Vec<_> = pile.cards().iter().filter(|c| c.is_wild()).collect();
        assert_eq!(wilds.len(), 4);
        assert!(wilds.iter().all(|c| c.rank() == 0));
    }
}
