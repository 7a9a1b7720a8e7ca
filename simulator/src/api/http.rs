use axum::{
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cardtable_execution::GameError;
use cardtable_types::{
    api::{hand_to_wire, PlayCardRequest, PlayerInfo, ReadyRequest, Registration},
    format_hand, PlayerId,
};
use serde::Serialize;
use std::sync::Arc;

use crate::Simulator;

#[derive(Serialize)]
struct HealthzResponse {
    ok: bool,
}

fn error_response(err: GameError) -> Response {
    let status = match &err {
        GameError::UnknownPlayer(_) => StatusCode::NOT_FOUND,
        GameError::InsufficientCards { .. }
        | GameError::NoPlayers
        | GameError::NotDealt
        | GameError::RegistrationClosed => StatusCode::CONFLICT,
        GameError::CardNotInHand(_) => return (StatusCode::OK, "false").into_response(),
    };
    tracing::debug!(%err, status = status.as_u16(), "request rejected");
    (status, err.to_string()).into_response()
}

pub(super) async fn index() -> &'static str {
    "NULL"
}

pub(super) async fn healthz() -> Response {
    Json(HealthzResponse { ok: true }).into_response()
}

pub(super) async fn config(AxumState(simulator): AxumState<Arc<Simulator>>) -> Response {
    Json(simulator.config.clone()).into_response()
}

pub(super) async fn http_metrics(AxumState(simulator): AxumState<Arc<Simulator>>) -> Response {
    Json(simulator.http_metrics_snapshot()).into_response()
}

pub(super) async fn ready(
    AxumState(simulator): AxumState<Arc<Simulator>>,
    Json(payload): Json<ReadyRequest>,
) -> Response {
    match simulator.table().register(&payload.name) {
        Ok(id) => {
            let mut registration = Registration::new();
            registration.insert(id, PlayerInfo { name: payload.name });
            Json(registration).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(super) async fn start(AxumState(simulator): AxumState<Arc<Simulator>>) -> Response {
    match simulator.table().start() {
        Ok(_) => "true".into_response(),
        Err(err) => error_response(err),
    }
}

pub(super) async fn get_hand(
    AxumState(simulator): AxumState<Arc<Simulator>>,
    Path(id): Path<PlayerId>,
) -> Response {
    match simulator.table().get_hand(&id) {
        Ok(hand) => Json(hand_to_wire(&hand)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(super) async fn play_card(
    AxumState(simulator): AxumState<Arc<Simulator>>,
    Path(id): Path<PlayerId>,
    Json(payload): Json<PlayCardRequest>,
) -> Response {
    let card = match payload.card() {
        Ok(card) => card,
        Err(err) => return (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    };
    match simulator.table().play_card(&id, &card) {
        Ok(played) => Json(played.to_wire()).into_response(),
        Err(err) => error_response(err),
    }
}

pub(super) async fn clear(AxumState(simulator): AxumState<Arc<Simulator>>) -> &'static str {
    simulator.table().reset();
    "{}"
}

pub(super) async fn check_players(AxumState(simulator): AxumState<Arc<Simulator>>) -> String {
    simulator.table().player_count().to_string()
}

pub(super) async fn draw_cards(AxumState(simulator): AxumState<Arc<Simulator>>) -> Response {
    let hands = match simulator.preview_hands() {
        Ok(hands) => hands,
        Err(err) => return error_response(err),
    };
    hands
        .iter()
        .enumerate()
        .map(|(idx, hand)| format!("Player{} hand: {}\n", idx + 1, format_hand(hand)))
        .collect::<String>()
        .into_response()
}
