pub mod balldontlie;
pub mod client;
pub mod nba;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Domain types — normalized response shapes, independent of either upstream
// wire format
// ---------------------------------------------------------------------------

/// Upstream game identifiers are strings on the NBA feed and numbers on
/// balldontlie; both pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameId {
    Num(u64),
    Str(String),
}

impl Default for GameId {
    fn default() -> Self {
        GameId::Str(String::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: u64,
    pub full_name: String,
    pub city: String,
    pub abbreviation: String,
}

/// One normalized game, the unit returned to clients.
///
/// `status` is one of `"Scheduled"`, a live-period label like `"Q3 5:12"`,
/// or `"Final"` when sourced from the live feed; balldontlie status text is
/// passed through verbatim. `period` and `time` are null unless the game is
/// in progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub status: String,
    pub period: Option<u8>,
    pub time: Option<String>,
    pub datetime: Option<String>,
    pub home_team_score: u32,
    pub visitor_team_score: u32,
    pub home_team: TeamRef,
    pub visitor_team: TeamRef,
}

/// Which upstream produced the returned games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Nba,
    Balldontlie,
    #[default]
    None,
}

/// Payload for `/api/scores`.
///
/// `games` is empty only when `source` is `"none"` or a healthy upstream
/// genuinely had no games scheduled that day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub date: String,
    pub games: Vec<GameRecord>,
    pub source: Source,
}

impl Scoreboard {
    /// The degraded-but-successful shape returned when every upstream failed.
    pub fn unavailable(date: String) -> Self {
        Self { date, games: Vec::new(), source: Source::None }
    }
}

/// Payload for `/api/status`: recomputed per request, no upstream calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub configured: bool,
    pub date: String,
}
