//! WebSocket + REST endpoints for the tour system.
//!
//! This is the host UI contract: the dashboard reads status and steps,
//! drives the coordinator through the POST mutators, and observes live
//! updates over the WebSocket.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{debug, info, warn};

use crate::catalog::{DemoType, SectionId, StepCatalog, TourStep};
use crate::checklist;

use super::coordinator::{TourCoordinator, TourStatus, TourUpdate};
use super::state::TourEvent;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub coordinator: Arc<TourCoordinator>,
    pub catalog: Arc<StepCatalog>,
}

/// Build the Axum router with tour WebSocket and REST routes.
pub fn tour_routes(coordinator: Arc<TourCoordinator>, catalog: Arc<StepCatalog>) -> Router {
    let state = AppState {
        coordinator,
        catalog,
    };

    Router::new()
        .route("/ws", get(ws_handler))
        .route("/health", get(health))
        .route("/api/tour/status", get(get_status))
        .route("/api/tour/start", post(start_tour))
        .route("/api/tour/event", post(tour_event))
        .route("/api/tour/demo-type", post(select_demo_type))
        .route("/api/tour/reset", post(reset_tour))
        .route("/api/checklist", get(get_checklist))
        .route("/api/checklist/replay", post(replay_step))
        .route("/api/sections/{section}/steps", get(section_steps))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ── Health ──────────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "dash-tour"
    }))
}

// ── Tour ────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct StatusResponse {
    status: TourStatus,
    steps: Vec<TourStep>,
}

/// GET /api/tour/status
///
/// Current coordinator snapshot plus the resolved steps for the active
/// demo type — everything the rendering collaborator needs.
async fn get_status(State(state): State<AppState>) -> impl IntoResponse {
    let status = state.coordinator.status().await;
    let steps = state.coordinator.steps().await;
    Json(StatusResponse { status, steps })
}

#[derive(Debug, Deserialize)]
struct StartRequest {
    #[serde(default)]
    from_index: usize,
}

/// POST /api/tour/start
async fn start_tour(
    State(state): State<AppState>,
    Json(req): Json<StartRequest>,
) -> impl IntoResponse {
    state.coordinator.start(req.from_index).await;
    Json(state.coordinator.status().await)
}

/// POST /api/tour/event
///
/// The rendering collaborator reports exactly one tagged event per user
/// action; this is the single dispatch point for all of them.
async fn tour_event(
    State(state): State<AppState>,
    Json(event): Json<TourEvent>,
) -> impl IntoResponse {
    state.coordinator.handle_event(event).await;
    Json(state.coordinator.status().await)
}

#[derive(Debug, Deserialize)]
struct DemoTypeRequest {
    demo_type: DemoType,
}

/// POST /api/tour/demo-type
async fn select_demo_type(
    State(state): State<AppState>,
    Json(req): Json<DemoTypeRequest>,
) -> impl IntoResponse {
    state.coordinator.select_demo_type(req.demo_type).await;
    Json(state.coordinator.status().await)
}

/// POST /api/tour/reset
async fn reset_tour(State(state): State<AppState>) -> impl IntoResponse {
    state.coordinator.reset().await;
    Json(state.coordinator.status().await)
}

// ── Checklist ───────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ChecklistEntry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    completed: bool,
    current: bool,
    accessible: bool,
}

#[derive(Serialize)]
struct ChecklistResponse {
    steps: Vec<ChecklistEntry>,
    completed_step_ids: Vec<String>,
    progress_percent: u8,
}

/// GET /api/checklist
///
/// Derived view over the tour state for the active demo type.
async fn get_checklist(State(state): State<AppState>) -> impl IntoResponse {
    let status = state.coordinator.status().await;
    let steps = checklist::checklist_steps(status.demo_type);
    let view = checklist::derive(&steps, status.step_index, status.completed);

    let entries = steps
        .iter()
        .enumerate()
        .map(|(position, step)| ChecklistEntry {
            id: step.id,
            title: step.title,
            description: step.description,
            icon: step.icon,
            completed: view.completed_step_ids.iter().any(|id| id == step.id),
            current: position == status.step_index,
            accessible: checklist::is_accessible(
                &steps,
                status.step_index,
                status.completed,
                step.id,
            ),
        })
        .collect();

    Json(ChecklistResponse {
        steps: entries,
        completed_step_ids: view.completed_step_ids,
        progress_percent: view.progress_percent,
    })
}

#[derive(Debug, Deserialize)]
struct ReplayRequest {
    step_id: String,
}

/// POST /api/checklist/replay
///
/// Replay the tour from an accessible checklist step. This is the only
/// write path from the checklist back into the coordinator.
async fn replay_step(
    State(state): State<AppState>,
    Json(req): Json<ReplayRequest>,
) -> impl IntoResponse {
    let status = state.coordinator.status().await;
    let steps = checklist::checklist_steps(status.demo_type);

    let Some(position) = steps.iter().position(|s| s.id == req.step_id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": format!("Unknown step: {}", req.step_id)})),
        )
            .into_response();
    };

    if !checklist::is_accessible(&steps, status.step_index, status.completed, &req.step_id) {
        return (
            StatusCode::CONFLICT,
            Json(serde_json::json!({"error": format!("Step not yet accessible: {}", req.step_id)})),
        )
            .into_response();
    }

    info!(step_id = %req.step_id, position, "Replaying tour from checklist step");
    state.coordinator.start(position).await;
    Json(state.coordinator.status().await).into_response()
}

// ── Sections ────────────────────────────────────────────────────────────

/// GET /api/sections/{section}/steps
///
/// Detail tour for one dashboard section, resolved for the active demo
/// type. Sections without a tour yield an empty list.
async fn section_steps(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> impl IntoResponse {
    let Some(section) = SectionId::from_slug(&section) else {
        return Json(Vec::<TourStep>::new());
    };
    let demo_type = state.coordinator.status().await.demo_type;
    Json(state.catalog.section_tour(section, demo_type))
}

// ── WebSocket ───────────────────────────────────────────────────────────

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    info!("WebSocket client connecting");
    ws.on_upgrade(|socket| handle_socket(socket, state.coordinator))
}

async fn handle_socket(mut socket: WebSocket, coordinator: Arc<TourCoordinator>) {
    info!("WebSocket client connected");

    // Subscribe before the initial sync so no update is missed between.
    let mut rx = coordinator.subscribe();

    let sync = TourUpdate::StateSync {
        status: coordinator.status().await,
    };
    if !send_update(&mut socket, &sync).await {
        warn!("Failed to send initial sync, client disconnected");
        return;
    }

    loop {
        tokio::select! {
            // Forward broadcast events to this client
            result = rx.recv() => {
                match result {
                    Ok(update) => {
                        if !send_update(&mut socket, &update).await {
                            debug!("Client disconnected during send");
                            break;
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                        warn!(missed = n, "WS client lagged behind broadcast");
                        let sync = TourUpdate::StateSync {
                            status: coordinator.status().await,
                        };
                        if !send_update(&mut socket, &sync).await {
                            break;
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                        debug!("Broadcast channel closed");
                        break;
                    }
                }
            }

            result = socket.recv() => {
                match result {
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        info!("WebSocket client disconnected");
                        break;
                    }
                    Some(Err(e)) => {
                        warn!(error = %e, "WebSocket error");
                        break;
                    }
                    _ => {}
                }
            }
        }
    }

    info!("WebSocket connection closed");
}

async fn send_update(socket: &mut WebSocket, update: &TourUpdate) -> bool {
    match serde_json::to_string(update) {
        Ok(json) => socket.send(Message::Text(json.into())).await.is_ok(),
        Err(e) => {
            warn!(error = %e, "Failed to serialize tour update");
            true
        }
    }
}
