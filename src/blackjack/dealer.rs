use core::cmp::Ordering;

use alloc::format;
use alloc::string::String;
use tracing::{debug, trace};

use crate::hand::BLACKJACK;
use crate::result::RoundResult;

use super::Blackjack;

/// The dealer stands on any hand worth at least this much.
pub const DEALER_STANDS_ON: u8 = 17;

impl Blackjack {
    /// Stands the player, plays the dealer and settles the round, without
    /// notifying observers.
    pub(super) fn resolve_stand(&mut self) -> RoundResult {
        self.player_stood = true;
        self.dealer_play();

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();

        if dealer_value > BLACKJACK {
            self.dealer_busted = true;
            self.result = RoundResult::Win;
            self.message = String::from("Dealer BUSTS! You win!");
        } else {
            self.compare_hands(player_value, dealer_value);
        }

        self.game_over = true;
        debug!(
            player = player_value,
            dealer = dealer_value,
            result = ?self.result,
            "blackjack round settled"
        );
        self.result
    }

    /// Dealer draws until reaching 17 or higher. Stops early if the deck runs
    /// out.
    fn dealer_play(&mut self) {
        while self.dealer.value() < DEALER_STANDS_ON {
            let Some(card) = self.draw() else {
                break;
            };
            self.dealer.add_card(card);
            trace!(card = %card, dealer = self.dealer.value(), "dealer draw");
        }
    }

    fn compare_hands(&mut self, player_value: u8, dealer_value: u8) {
        let (result, message) = match player_value.cmp(&dealer_value) {
            Ordering::Greater => (
                RoundResult::Win,
                format!("YOU WIN! {player_value} beats {dealer_value}!"),
            ),
            Ordering::Less => (
                RoundResult::Lose,
                format!("Dealer wins. {dealer_value} beats {player_value}."),
            ),
            Ordering::Equal => (
                RoundResult::Push,
                format!("PUSH! It's a tie at {player_value}."),
            ),
        };
        self.result = result;
        self.message = message;
    }
}
