use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::status::{BotDetailDto, BotSummaryDto, StatusDto},
    server::{
        config::DeploymentMode, error::AppError, service::status::StatusService, state::AppState,
    },
};

/// Get the status of every configured bot.
///
/// Intended as an uptime probe, so it never fails. In single-bot mode the response
/// is a short plain-text banner followed by one line per bot; in multi-bot mode it
/// is a JSON document.
///
/// # Returns
/// - `200 OK` - `text/plain` banner (single mode) or `StatusDto` (multi mode)
pub async fn get_status(State(state): State<AppState>) -> Response {
    let bots = StatusService::new(&state.registry).get_all().await;

    match state.mode {
        DeploymentMode::Single => status_text(&bots).into_response(),
        DeploymentMode::Multi => Json(StatusDto {
            status: "online".to_string(),
            bots,
        })
        .into_response(),
    }
}

/// Get detailed status of one bot by its position in the configuration.
///
/// # Arguments
/// - `index` - Zero-based position of the bot in the configuration list
///
/// # Returns
/// - `200 OK` - `BotDetailDto` with controller and live voice connection state
/// - `404 Not Found` - `index` is out of range or not a number
pub async fn get_bot(
    State(state): State<AppState>,
    Path(index): Path<String>,
) -> Result<Json<BotDetailDto>, AppError> {
    let not_found = || AppError::NotFound("Bot not found".to_string());

    let index: usize = index.parse().map_err(|_| not_found())?;

    let detail = StatusService::new(&state.registry)
        .get_by_index(index)
        .await
        .ok_or_else(not_found)?;

    Ok(Json(detail))
}

fn status_text(bots: &[BotSummaryDto]) -> String {
    let mut text = String::from("✅ Discord bot is running!");

    for bot in bots {
        let user = bot.user.as_deref().unwrap_or("not logged in");
        let ready = if bot.ready { "ready" } else { "not ready" };

        text.push_str(&format!(
            "\n{}: {} ({}, guild {}, channel {})",
            bot.name, user, ready, bot.guild_id, bot.channel_id
        ));
    }

    text
}
