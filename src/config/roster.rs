/// Players a random match is drawn from.
pub const PLAYERS: [&str; 7] = [
    "Tib",
    "Schub",
    "MrCosta",
    "Sami",
    "DayWalker",
    "MrBoomer",
    "Miguel Rossington",
];
