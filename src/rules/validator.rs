//! Stateless move validation.
//!
//! A shared pile is an ascending run 1..=12. A wild card counts as whatever
//! position it occupies: the Nth card placed on a pile behaves as rank N.
//! That value is recomputed on every query and never stored on the card.

use crate::cards::Card;
use crate::core::config::MAX_RANK;

/// Value `card` stands for when it is the `position`th card (1-indexed)
/// on a pile.
///
/// ```
/// use skipbo_engine::cards::{Card, CardId};
/// use skipbo_engine::rules::effective_value;
///
/// assert_eq!(effective_value(&Card::wild(CardId::new(0)), 4), 4);
/// assert_eq!(effective_value(&Card::numbered(CardId::new(1), 9), 4), 9);
/// ```
#[must_use]
pub fn effective_value(card: &Card, position: usize) -> usize {
    if card.is_wild() {
        position
    } else {
        usize::from(card.rank())
    }
}

/// Effective value of the top card, or `None` for an empty pile.
#[must_use]
pub fn top_value(pile: &[Card]) -> Option<usize> {
    pile.last().map(|top| effective_value(top, pile.len()))
}

/// Can `candidate` be placed on `pile`?
///
/// ```
/// use skipbo_engine::cards::{Card, CardId};
/// use skipbo_engine::rules::is_valid_move;
///
/// let one = Card::numbered(CardId::new(0), 1);
/// let two = Card::numbered(CardId::new(1), 2);
///
/// assert!(is_valid_move(&[], &one));
/// assert!(!is_valid_move(&[], &two));
/// assert!(is_valid_move(&[one], &two));
/// ```
#[must_use]
pub fn is_valid_move(pile: &[Card], candidate: &Card) -> bool {
    match top_value(pile) {
        None => candidate.is_wild() || candidate.rank() == 1,
        // Completed piles are cleared before this can be reached.
        Some(top) if candidate.is_wild() => top < usize::from(MAX_RANK),
        Some(top) => usize::from(candidate.rank()) == top + 1,
    }
}

/// Has `pile` reached 12?
#[must_use]
pub fn is_pile_complete(pile: &[Card]) -> bool {
    top_value(pile) == Some(usize::from(MAX_RANK))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use proptest::prelude::*;

    fn num(rank: u8) -> Card {
        Card::numbered(CardId::new(u16::from(rank)), rank)
    }

    fn wild() -> Card {
        Card::wild(CardId::new(999))
    }

    /// A legal pile of `len` cards where positions in `wild_mask` are wild.
    fn pile(len: usize, wild_mask: u16) -> Vec<Card> {
        (1..=len)
            .map(|pos| if wild_mask & (1 << (pos - 1)) != 0 { wild() } else { num(pos as u8) })
            .collect()
    }

    #[test]
    fn test_empty_pile() {
        assert!(is_valid_move(&[], &num(1)));
        assert!(is_valid_move(&[], &wild()));
        for rank in 2..=12 {
            assert!(!is_valid_move(&[], &num(rank)));
        }
    }

    #[test]
    fn test_wild_takes_position() {
        let p = vec![num(1), wild(), wild()];
        assert_eq!(top_value(&p), Some(3));
        assert!(is_valid_move(&p, &num(4)));
        assert!(!is_valid_move(&p, &num(3)));
    }

    #[test]
    fn test_wild_on_eleven() {
        let p = pile(11, 0);
        assert!(is_valid_move(&p, &wild()));
        assert!(is_valid_move(&p, &num(12)));
    }

    #[test]
    fn test_wild_rejected_on_full_value() {
        let p = pile(12, 0);
        assert!(!is_valid_move(&p, &wild()));
        assert!(!is_valid_move(&p, &num(1)));
    }

    #[test]
    fn test_completion() {
        assert!(!is_pile_complete(&[]));
        assert!(!is_pile_complete(&pile(11, 0)));
        assert!(is_pile_complete(&pile(12, 0)));
        assert!(is_pile_complete(&pile(12, 1 << 11)));
        assert!(is_pile_complete(&pile(12, 0xFFF)));
    }

    proptest! {
        #[test]
        fn prop_numbered_top_needs_successor(len in 1usize..=12, mask in 0u16..0x800, rank in 1u8..=12) {
            // Top card always numbered: clear its bit.
            let p = pile(len, mask & !(1 << (len - 1)));
            let top = p.last().unwrap().rank() as usize;
            prop_assert_eq!(is_valid_move(&p, &num(rank)), rank as usize == top + 1);
            prop_assert_eq!(is_valid_move(&p, &wild()), top < 12);
        }

        #[test]
        fn prop_complete_iff_top_is_twelve(len in 1usize..=12, mask in 0u16..0x1000) {
            let p = pile(len, mask);
            prop_assert_eq!(is_pile_complete(&p), len == 12);
        }

        #[test]
        fn prop_empty_pile(rank in 1u8..=12) {
            prop_assert_eq!(is_valid_move(&[], &num(rank)), rank == 1);
        }
    }
}
