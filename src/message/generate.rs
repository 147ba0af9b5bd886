use rand::Rng;

use super::types::{Game, MatchMessage};
use crate::config::roster::PLAYERS;

/// Draw a random match: both players independently from the roster (they may
/// coincide), and one game uniformly from [`Game::ALL`].
pub fn random_match<R: Rng>(rng: &mut R) -> MatchMessage {
    let player1 = PLAYERS[rng.random_range(0..PLAYERS.len())];
    let player2 = PLAYERS[rng.random_range(0..PLAYERS.len())];
    let game = Game::ALL[rng.random_range(0..Game::ALL.len())];
    MatchMessage::new(player1, player2, game)
}
