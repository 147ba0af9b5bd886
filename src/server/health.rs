//! Health endpoint.
//!
//! The service itself is `UP` while it answers; the listener component is
//! `DOWN` whenever it holds no live subscription.

use actix_web::{HttpResponse, web};
use log::warn;
use serde_json::json;

use crate::listener::GetStatus;
use crate::server::state::AppState;

/// `GET /actuator/health`
pub async fn health(data: web::Data<AppState>) -> HttpResponse {
    let listener = match data.listener.send(GetStatus).await {
        Ok(status) => json!({
            "status": if status.subscribed { "UP" } else { "DOWN" },
            "received": status.received,
            "restarts": status.restarts,
            "lastReceived": status.last_received,
        }),
        Err(e) => {
            warn!("[Http] Listener unavailable: {}", e);
            json!({ "status": "DOWN" })
        }
    };

    HttpResponse::Ok().json(json!({
        "status": "UP",
        "components": { "listener": listener },
    }))
}
