//! Registered players for one game epoch.
//!
//! Players are keyed by [`PlayerId`] and remember registration order, which decides the
//! order hands are dealt in.

use cardtable_types::{Card, PlayerId, PlayerPhase};
use std::collections::HashMap;

use crate::{GameError, GameResult};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// `None` until the player is dealt in.
    pub hand: Option<Vec<Card>>,
}

impl Player {
    fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            hand: None,
        }
    }

    pub fn phase(&self) -> PlayerPhase {
        match self.hand {
            Some(_) => PlayerPhase::Dealt,
            None => PlayerPhase::Registered,
        }
    }

    /// The dealt hand, or an empty slice before the deal.
    pub fn hand(&self) -> &[Card] {
        self.hand.as_deref().unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Registry {
    players: HashMap<PlayerId, Player>,
    order: Vec<PlayerId>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a player under a fresh identifier. Names need not be unique.
    pub fn register(&mut self, name: impl Into<String>) -> PlayerId {
        let mut id = PlayerId::generate();
        while self.players.contains_key(&id) {
            id = PlayerId::generate();
        }
        self.players.insert(id, Player::new(id, name.into()));
        self.order.push(id);
        id
    }

    pub fn assign_hand(&mut self, id: &PlayerId, hand: Vec<Card>) -> GameResult<()> {
        let player = self
            .players
            .get_mut(id)
            .ok_or(GameError::UnknownPlayer(*id))?;
        player.hand = Some(hand);
        Ok(())
    }

    pub fn get_hand(&self, id: &PlayerId) -> GameResult<&[Card]> {
        self.get(id)
            .map(Player::hand)
            .ok_or(GameError::UnknownPlayer(*id))
    }

    /// Removes `card` from the player's hand and returns it.
    ///
    /// A player that has not been dealt in holds no cards, so this fails with
    /// [`GameError::CardNotInHand`].
    pub fn remove_card(&mut self, id: &PlayerId, card: &Card) -> GameResult<Card> {
        let player = self
            .players
            .get_mut(id)
            .ok_or(GameError::UnknownPlayer(*id))?;
        let hand = player
            .hand
            .as_mut()
            .ok_or(GameError::CardNotInHand(*card))?;
        let position = hand
            .iter()
            .position(|held| held == card)
            .ok_or(GameError::CardNotInHand(*card))?;
        Ok(hand.remove(position))
    }

    pub fn get(&self, id: &PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn contains(&self, id: &PlayerId) -> bool {
        self.players.contains_key(id)
    }

    /// Player identifiers in registration order.
    pub fn ids(&self) -> &[PlayerId] {
        &self.order
    }

    /// Players in registration order.
    pub fn players(&self) -> impl Iterator<Item = &Player> + '_ {
        self.order.iter().filter_map(|id| self.players.get(id))
    }

    pub fn player_count(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Drops every player. Idempotent.
    pub fn reset(&mut self) {
        self.players.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardtable_types::Suit;

    fn card(suit: Suit, rank: u8) -> Card {
        Card::new(suit, rank).unwrap()
    }

    #[test]
    fn test_register_issues_unique_ids_in_order() {
        let mut registry = Registry::new();
        let a = registry.register("ben");
        let b = registry.register("ben");
        let c = registry.register("ian");

        assert_ne!(a, b);
        assert_eq!(registry.player_count(), 3);
        assert_eq!(registry.ids(), &[a, b, c]);
        let names: Vec<&str> = registry.players().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["ben", "ben", "ian"]);
    }

    #[test]
    fn test_hand_is_empty_before_deal() {
        let mut registry = Registry::new();
        let id = registry.register("ben");

        assert!(registry.get_hand(&id).unwrap().is_empty());
        assert_eq!(registry.get(&id).unwrap().phase(), PlayerPhase::Registered);
        assert_eq!(registry.get(&id).unwrap().hand, None);
    }

    #[test]
    fn test_assign_hand_marks_dealt() {
        let mut registry = Registry::new();
        let id = registry.register("jackson");
        let hand = vec![card(Suit::Hearts, 1), card(Suit::Spades, 4)];

        registry.assign_hand(&id, hand.clone()).unwrap();
        assert_eq!(registry.get_hand(&id).unwrap(), hand.as_slice());
        assert_eq!(registry.get(&id).unwrap().phase(), PlayerPhase::Dealt);
    }

    #[test]
    fn test_unknown_player() {
        let mut registry = Registry::new();
        let stranger = PlayerId::generate();

        assert_eq!(
            registry.assign_hand(&stranger, Vec::new()),
            Err(GameError::UnknownPlayer(stranger))
        );
        assert_eq!(
            registry.get_hand(&stranger),
            Err(GameError::UnknownPlayer(stranger))
        );
        assert_eq!(
            registry.remove_card(&stranger, &card(Suit::Hearts, 1)),
            Err(GameError::UnknownPlayer(stranger))
        );
    }

    #[test]
    fn test_remove_card() {
        let mut registry = Registry::new();
        let id = registry.register("bel");
        let played = card(Suit::Diamonds, 10);
        registry
            .assign_hand(&id, vec![card(Suit::Hearts, 2), played])
            .unwrap();

        assert_eq!(registry.remove_card(&id, &played), Ok(played));
        assert_eq!(registry.get_hand(&id).unwrap(), &[card(Suit::Hearts, 2)]);
        assert_eq!(
            registry.remove_card(&id, &played),
            Err(GameError::CardNotInHand(played))
        );
        assert_eq!(registry.get_hand(&id).unwrap().len(), 1);
    }

    #[test]
    fn test_remove_card_before_deal() {
        let mut registry = Registry::new();
        let id = registry.register("bel");
        let wanted = card(Suit::Clubs, 5);
        assert_eq!(
            registry.remove_card(&id, &wanted),
            Err(GameError::CardNotInHand(wanted))
        );
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut registry = Registry::new();
        let id = registry.register("ian");
        registry.reset();
        assert_eq!(registry.player_count(), 0);
        assert!(!registry.contains(&id));
        registry.reset();
        assert!(registry.is_empty());
    }
}
