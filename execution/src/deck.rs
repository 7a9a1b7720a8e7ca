//! The 52-card deck.
//!
//! The top of the deck is the end of the backing vector: dealing draws by popping, so
//! hand `i` receives the `cards_per_hand` cards drawn after hands `0..i`.

use cardtable_types::{Card, Suit, CARDS_PER_DECK, RANKS_PER_SUIT};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::{GameError, GameResult};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Builds the ordered deck: suits in [`Suit::ALL`] order, ranks `1..=13` within each.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(CARDS_PER_DECK);
        for suit in Suit::ALL {
            for rank in 1..=RANKS_PER_SUIT {
                if let Some(card) = Card::new(suit, rank) {
                    cards.push(card);
                }
            }
        }
        Self { cards }
    }

    /// Uniformly permutes the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes `num_hands * cards_per_hand` cards and splits them into `num_hands`
    /// disjoint hands.
    ///
    /// The size check happens before any card is drawn, so on error the deck is untouched.
    pub fn deal(&mut self, num_hands: usize, cards_per_hand: usize) -> GameResult<Vec<Vec<Card>>> {
        let requested = num_hands.saturating_mul(cards_per_hand);
        if requested > self.cards.len() {
            return Err(GameError::InsufficientCards {
                requested,
                available: self.cards.len(),
            });
        }

        let mut hands = Vec::with_capacity(num_hands);
        for _ in 0..num_hands {
            let mut hand = Vec::with_capacity(cards_per_hand);
            for _ in 0..cards_per_hand {
                // Length was checked above.
                if let Some(card) = self.cards.pop() {
                    hand.push(card);
                }
            }
            hands.push(hand);
        }
        Ok(hands)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Sorts a hand by suit, then ascending rank. Membership is unchanged.
pub fn sort_for_display(mut hand: Vec<Card>) -> Vec<Card> {
    hand.sort();
    hand
}
