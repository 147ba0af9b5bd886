use std::fmt;

use serde::{Deserialize, Serialize};

/// Fighting games a match can be played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Game {
    SamSho,
    SF6,
    Strive,
    T8,
    VF5,
    Mahvel3,
}

impl Game {
    pub const ALL: [Game; 6] = [
        Game::SamSho,
        Game::SF6,
        Game::Strive,
        Game::T8,
        Game::VF5,
        Game::Mahvel3,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Game::SamSho => "SamSho",
            Game::SF6 => "SF6",
            Game::Strive => "Strive",
            Game::T8 => "T8",
            Game::VF5 => "VF5",
            Game::Mahvel3 => "Mahvel3",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A match between two players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchMessage {
    #[serde(rename = "p1")]
    pub player1: String,
    #[serde(rename = "p2")]
    pub player2: String,
    pub game: Game,
}

impl MatchMessage {
    pub fn new(player1: impl Into<String>, player2: impl Into<String>, game: Game) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
            game,
        }
    }
}

impl fmt::Display for MatchMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MatchMessage(p1={}, p2={}, game={})",
            self.player1, self.player2, self.game
        )
    }
}

/// Every message that can cross the broker channel.
///
/// The variant name is written to the `@type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum Message {
    MatchMessage(MatchMessage),
}

impl From<MatchMessage> for Message {
    fn from(msg: MatchMessage) -> Self {
        Message::MatchMessage(msg)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::MatchMessage(msg) => fmt::Display::fmt(msg, f),
        }
    }
}
