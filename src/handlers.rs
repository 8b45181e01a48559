use axum::{Json, extract::State};
use nba_api::client::ScoresApi;
use nba_api::{Scoreboard, StatusReport};

use crate::error::WebResult;

/// `GET /api/scores` — today's games from the live feed, the schedule API,
/// or an empty `"none"` board, in that order. Only a missing credential (or
/// an unexpected internal failure) turns into an error response.
pub async fn get_scores(State(api): State<ScoresApi>) -> WebResult<Json<Scoreboard>> {
    let board = api.scoreboard().await?;
    Ok(Json(board))
}

/// `GET /api/status` — credential presence and today's date; always 200.
pub async fn get_status(State(api): State<ScoresApi>) -> Json<StatusReport> {
    Json(api.status())
}
