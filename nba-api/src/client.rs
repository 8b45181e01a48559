use crate::balldontlie::{BdlGame, BdlTeam, GamesResponse};
use crate::nba::{LiveGame, LiveScoreboardResponse, LiveTeam};
use crate::{GameId, GameRecord, Scoreboard, Source, StatusReport, TeamRef};
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

pub type ApiResult<T> = Result<T, ApiError>;

const NBA_LIVE_SCOREBOARD_URL: &str =
    "https://cdn.nba.com/static/json/liveData/scoreboard/todaysScoreboard_00.json";
const BALLDONTLIE_GAMES_URL: &str = "https://api.balldontlie.io/v1/games";

/// Scores client backed by the NBA CDN live feed with the balldontlie
/// schedule API as fallback.
#[derive(Debug, Clone)]
pub struct ScoresApi {
    client: Client,
    timeout: Duration,
    api_key: Option<String>,
    live_url: String,
    schedule_url: String,
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    MissingCredential,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::MissingCredential => write!(f, "balldontlie API key not configured"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ScoresApi {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .user_agent("nba-tracker/0.1 (scoreboard proxy)")
                .build()
                .unwrap_or_default(),
            timeout: Duration::from_secs(10),
            api_key,
            live_url: NBA_LIVE_SCOREBOARD_URL.to_owned(),
            schedule_url: BALLDONTLIE_GAMES_URL.to_owned(),
        }
    }

    /// Point the client at alternate endpoints (mock servers in tests).
    pub fn with_endpoints(mut self, live_url: String, schedule_url: String) -> Self {
        self.live_url = live_url;
        self.schedule_url = schedule_url;
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Snapshot for `/api/status`: credential presence plus today's date.
    pub fn status(&self) -> StatusReport {
        StatusReport { configured: self.has_credential(), date: today() }
    }

    /// Fetch today's games under the fallback policy:
    ///
    /// 1) live NBA feed, when it has at least one game (`source: "nba"`);
    /// 2) balldontlie schedule for today (`source: "balldontlie"`), which
    ///    requires the API key — missing key is the one error surfaced to
    ///    the caller;
    /// 3) an empty list tagged `source: "none"` when both feeds are down.
    ///
    /// Each feed is attempted exactly once; upstream failures are logged
    /// here and never propagated.
    pub async fn scoreboard(&self) -> ApiResult<Scoreboard> {
        // One date for the whole request, so the `date` field cannot
        // disagree with the schedule query across a UTC midnight boundary.
        let date = today();

        match self.fetch_live().await {
            Ok(games) if !games.is_empty() => {
                return Ok(Scoreboard { date, games, source: Source::Nba });
            }
            // An empty live feed falls through exactly like a failed one.
            Ok(_) => debug!("live scoreboard has no games, trying schedule API"),
            Err(e) => warn!(error = %e, "live scoreboard unavailable, trying schedule API"),
        }

        if self.api_key.is_none() {
            return Err(ApiError::MissingCredential);
        }

        match self.fetch_schedule(&date).await {
            Ok(games) => Ok(Scoreboard { date, games, source: Source::Balldontlie }),
            Err(e) => {
                warn!(error = %e, "schedule API unavailable, returning empty scoreboard");
                Ok(Scoreboard::unavailable(date))
            }
        }
    }

    /// Fetch the live scoreboard snapshot. The feed is always "today"; it
    /// takes no parameters and needs no credential. An empty list is a
    /// valid result meaning no games are scheduled.
    pub async fn fetch_live(&self) -> ApiResult<Vec<GameRecord>> {
        let raw: LiveScoreboardResponse = self
            .send(self.client.get(&self.live_url), &self.live_url)
            .await?;
        let games = raw.scoreboard.and_then(|s| s.games).unwrap_or_default();
        Ok(games.iter().map(map_live_game).collect())
    }

    /// Fetch the balldontlie schedule for `date` (`YYYY-MM-DD`). Returns
    /// `MissingCredential` without touching the network when no key is
    /// configured.
    pub async fn fetch_schedule(&self, date: &str) -> ApiResult<Vec<GameRecord>> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(ApiError::MissingCredential);
        };
        let request = self
            .client
            .get(&self.schedule_url)
            .header("Authorization", key)
            .query(&[("dates[]", date)]);
        let raw: GamesResponse = self.send(request, &self.schedule_url).await?;
        Ok(raw.data.into_iter().map(map_schedule_game).collect())
    }

    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> ApiResult<T> {
        let response = request
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?
            .error_for_status()
            .map_err(|e| ApiError::Api(e, url.to_owned()))?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(e, url.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Date provider
// ---------------------------------------------------------------------------

/// Today's date in `YYYY-MM-DD`, in UTC. UTC is the single timezone for the
/// whole system so the fallback query and the response date always agree.
pub fn today() -> String {
    format_date(Utc::now())
}

pub fn format_date(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

// ---------------------------------------------------------------------------
// Mapping: NBA live wire types → normalized records
// ---------------------------------------------------------------------------

fn map_live_game(g: &LiveGame) -> GameRecord {
    let code = g.game_status.unwrap_or(0);
    let period = g.period.unwrap_or(0);
    let clock = g.game_clock.as_deref().unwrap_or("");
    let live = code == 2;

    GameRecord {
        id: GameId::Str(g.game_id.clone().unwrap_or_default()),
        status: live_status_label(code, period, clock),
        period: live.then_some(period),
        time: live.then(|| clock.to_owned()),
        datetime: g.game_time_utc.clone(),
        home_team_score: team_score(g.home_team.as_ref()),
        visitor_team_score: team_score(g.away_team.as_ref()),
        home_team: g.home_team.as_ref().map(map_live_team).unwrap_or_default(),
        visitor_team: g.away_team.as_ref().map(map_live_team).unwrap_or_default(),
    }
}

/// Three buckets only: 1 pregame, 2 in progress, everything else (3 and any
/// code this feed grows later) reads as finished.
fn live_status_label(code: u8, period: u8, clock: &str) -> String {
    match code {
        1 => "Scheduled".to_owned(),
        2 => format!("Q{period} {clock}").trim_end().to_owned(),
        _ => "Final".to_owned(),
    }
}

fn team_score(team: Option<&LiveTeam>) -> u32 {
    team.and_then(|t| t.score).unwrap_or(0)
}

fn map_live_team(t: &LiveTeam) -> TeamRef {
    let city = t.team_city.as_deref().unwrap_or("");
    let name = t.team_name.as_deref().unwrap_or("");
    TeamRef {
        id: t.team_id.unwrap_or_default(),
        full_name: format!("{city} {name}"),
        city: city.to_owned(),
        abbreviation: t.team_tricode.clone().unwrap_or_default(),
    }
}

// ---------------------------------------------------------------------------
// Mapping: balldontlie wire types → normalized records
// ---------------------------------------------------------------------------

/// Schedule games arrive close to the output shape already; status text and
/// period/time fields pass through as received.
fn map_schedule_game(g: BdlGame) -> GameRecord {
    GameRecord {
        id: GameId::Num(g.id.unwrap_or_default()),
        status: g.status.unwrap_or_default(),
        period: g.period,
        time: g.time,
        datetime: g.datetime,
        home_team_score: g.home_team_score,
        visitor_team_score: g.visitor_team_score,
        home_team: g.home_team.map(map_schedule_team).unwrap_or_default(),
        visitor_team: g.visitor_team.map(map_schedule_team).unwrap_or_default(),
    }
}

fn map_schedule_team(t: BdlTeam) -> TeamRef {
    TeamRef {
        id: t.id,
        full_name: t.full_name,
        city: t.city,
        abbreviation: t.abbreviation,
    }
}
