use alloc::string::String;
use tracing::debug;

use crate::card::Card;
use crate::hand::BLACKJACK;
use crate::result::RoundResult;

use super::Blackjack;

impl Blackjack {
    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 loses the round. Reaching exactly 21 stands
    /// automatically; observers are notified once for the whole sequence.
    ///
    /// Returns the card drawn, or `None` without changing anything if the
    /// round is over, the player has stood, or the deck is empty.
    pub fn hit(&mut self) -> Option<Card> {
        if !self.started || self.game_over || self.player_stood {
            return None;
        }

        let card = self.draw()?;
        self.player.add_card(card);

        let value = self.player.value();
        debug!(card = %card, player = value, "player hit");

        if value > BLACKJACK {
            self.player_busted = true;
            self.game_over = true;
            self.result = RoundResult::Lose;
            self.message = String::from("BUST! You went over 21!");
            debug!(player = value, "player bust");
        } else if value == BLACKJACK {
            self.resolve_stand();
        }

        self.notify();
        Some(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer plays out its hand and the round is settled.
    ///
    /// Returns the result, or `None` without changing anything if the round
    /// is over.
    pub fn stand(&mut self) -> Option<RoundResult> {
        if !self.started || self.game_over {
            return None;
        }

        let result = self.resolve_stand();
        self.notify();
        Some(result)
    }
}
