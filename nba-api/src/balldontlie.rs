/// Wire types for the balldontlie schedule API.
/// Endpoint: https://api.balldontlie.io/v1/games?dates[]={date}
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct GamesResponse {
    #[serde(default)]
    pub data: Vec<BdlGame>,
}

/// Already close to the normalized shape; status arrives as display text
/// ("Final", a tip-off time, etc.) and is passed through untranslated.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct BdlGame {
    pub id: Option<u64>,
    pub status: Option<String>,
    pub period: Option<u8>,
    pub time: Option<String>,
    pub datetime: Option<String>,
    #[serde(default)]
    pub home_team_score: u32,
    #[serde(default)]
    pub visitor_team_score: u32,
    pub home_team: Option<BdlTeam>,
    pub visitor_team: Option<BdlTeam>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BdlTeam {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub abbreviation: String,
}
