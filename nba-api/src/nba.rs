/// NBA CDN raw wire types — serde shapes for the `todaysScoreboard_00.json`
/// live feed. These map to the clean domain types in client.rs.
use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct LiveScoreboardResponse {
    pub scoreboard: Option<LiveScoreboard>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LiveScoreboard {
    pub game_date: Option<String>,
    pub games: Option<Vec<LiveGame>>,
}

/// Game status codes on this feed: 1 = pregame, 2 = in progress, 3 = final.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LiveGame {
    pub game_id: Option<String>,
    pub game_status: Option<u8>,
    pub period: Option<u8>,
    pub game_clock: Option<String>,
    /// Scheduled tip-off, ISO 8601.
    #[serde(rename = "gameTimeUTC")]
    pub game_time_utc: Option<String>,
    pub home_team: Option<LiveTeam>,
    pub away_team: Option<LiveTeam>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LiveTeam {
    pub team_id: Option<u64>,
    pub team_city: Option<String>,
    pub team_name: Option<String>,
    pub team_tricode: Option<String>,
    pub score: Option<u32>,
}
