//! Per-player card containers.

use smallvec::SmallVec;

use crate::cards::{Card, CardId};
use crate::core::config::{DISCARD_SLOT_COUNT, HAND_SIZE};
use crate::core::player::PlayerId;
use crate::deck::DrawPile;

/// A hand. Never holds more than `HAND_SIZE` cards.
pub type Hand = SmallVec<[Card; HAND_SIZE]>;

/// One seated player's private state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerState {
    pub(crate) id: PlayerId,
    pub(crate) name: String,
    pub(crate) hand: Hand,
    /// Top = last.
    pub(crate) goal_pile: Vec<Card>,
    /// Each slot is LIFO; top = last.
    pub(crate) discards: [Vec<Card>; DISCARD_SLOT_COUNT],
}

impl PlayerState {
    pub(crate) fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            hand: Hand::new(),
            goal_pile: Vec::new(),
            discards: Default::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn goal_pile(&self) -> &[Card] {
        &self.goal_pile
    }

    /// Cards left to win.
    #[must_use]
    pub fn goal_remaining(&self) -> usize {
        self.goal_pile.len()
    }

    #[must_use]
    pub fn goal_top(&self) -> Option<&Card> {
        self.goal_pile.last()
    }

    #[must_use]
    pub fn discards(&self) -> &[Vec<Card>; DISCARD_SLOT_COUNT] {
        &self.discards
    }

    /// Top card of a discard slot, `None` for an empty or unknown slot.
    #[must_use]
    pub fn discard_top(&self, slot: usize) -> Option<&Card> {
        self.discards.get(slot).and_then(|s| s.last())
    }

    pub(crate) fn hand_position(&self, card_id: CardId) -> Option<usize> {
        self.hand.iter().position(|c| c.id() == card_id)
    }

    /// Draw until the hand holds `HAND_SIZE` cards or the deck runs dry.
    pub(crate) fn refill_hand(&mut self, deck: &mut DrawPile) {
        let missing = HAND_SIZE.saturating_sub(self.hand.len());
        if missing > 0 {
            self.hand.extend(deck.draw(missing));
        }
    }

    /// Every card this player holds, in any container.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.goal_pile.len() + self.discards.iter().map(Vec::len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::GameRng;

    #[test]
    fn test_new_player_is_empty() {
        let player = PlayerState::new(PlayerId::new("a"), "Ann".to_string());
        assert_eq!(player.card_count(), 0);
        assert_eq!(player.goal_remaining(), 0);
        assert!(player.goal_top().is_none());
        assert!(player.discard_top(0).is_none());
        assert!(player.discard_top(9).is_none());
    }

    #[test]
    fn test_refill_hand_tops_up() {
        let mut deck = DrawPile::new(GameRng::new(1));
        let mut player = PlayerState::new(PlayerId::new("a"), "Ann".to_string());

        player.hand.extend(deck.draw(2));
        player.refill_hand(&mut deck);

        assert_eq!(player.hand().len(), HAND_SIZE);
        assert_eq!(deck.count(), 162 - HAND_SIZE);

        player.refill_hand(&mut deck);
        assert_eq!(deck.count(), 162 - HAND_SIZE);
    }

    #[test]
    fn test_hand_position() {
        let mut player = PlayerState::new(PlayerId::new("a"), "Ann".to_string());
        player.hand.push(Card::numbered(CardId::new(4), 2));
        player.hand.push(Card::wild(CardId::new(9)));

        assert_eq!(player.hand_position(CardId::new(9)), Some(1));
        assert_eq!(player.hand_position(CardId::new(5)), None);
    }
}
