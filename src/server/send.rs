//! Match publishing endpoint.

use actix_web::{HttpResponse, web};
use log::{error, info};

use crate::message::{Message, random_match};
use crate::server::state::AppState;
use crate::service::ServiceError;

/// `POST /send/match`: publish a random match.
///
/// Responds `200` with an empty body once the broker acknowledged the publish.
pub async fn send_match(data: web::Data<AppState>) -> Result<HttpResponse, ServiceError> {
    let message: Message = random_match(&mut *data.rng()).into();
    info!("[Http] Publishing {}", message);

    if let Err(e) = data.message_service.send(&message).await {
        error!("[Http] Failed to publish {}: {}", message, e);
        return Err(e);
    }
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use actix::prelude::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use futures::StreamExt;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::Value;

    use crate::broker::testing::UnreachableBroker;
    use crate::broker::{Broker, MemoryBroker};
    use crate::config::roster::PLAYERS;
    use crate::listener::{GetStatus, MessageListener};
    use crate::message::types::Game;
    use crate::message::{Message, random_match};
    use crate::server::state::AppState;
    use crate::service::MessageService;

    const CHANNEL: &str = "redisTopic";

    fn state_for(broker: Arc<dyn Broker>, seed: u64) -> web::Data<AppState> {
        let service = MessageService::new(broker, CHANNEL);
        let listener = MessageListener::new(service.clone()).start();
        web::Data::new(AppState::new(
            service,
            listener,
            StdRng::seed_from_u64(seed),
        ))
    }

    fn assert_random_match(message: &Message) {
        let Message::MatchMessage(msg) = message;
        assert!(PLAYERS.contains(&msg.player1.as_str()));
        assert!(PLAYERS.contains(&msg.player2.as_str()));
        assert!(Game::ALL.contains(&msg.game));
    }

    #[actix_web::test]
    async fn test_send_match_publishes_seeded_match() {
        let broker = Arc::new(MemoryBroker::new());
        let state = state_for(broker.clone(), 42);
        let mut stream = state.message_service.subscribe().await.expect("subscribe");
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(crate::server::router::config),
        )
        .await;

        let req = test::TestRequest::post().uri("/send/match").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = to_bytes(resp.into_body()).await.expect("body");
        assert!(body.is_empty());

        let received = tokio::time::timeout(Duration::from_secs(1), stream.next())
            .await
            .expect("timed out")
            .expect("stream ended");
        let expected: Message = random_match(&mut StdRng::seed_from_u64(42)).into();
        assert_eq!(received, expected);
        assert_random_match(&received);
    }

    #[actix_web::test]
    async fn test_consecutive_requests_follow_the_seeded_sequence() {
        let broker = Arc::new(MemoryBroker::new());
        let state = state_for(broker.clone(), 7);
        let mut stream = state.message_service.subscribe().await.expect("subscribe");
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(crate::server::router::config),
        )
        .await;

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..3 {
            let req = test::TestRequest::post().uri("/send/match").to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

            let received = tokio::time::timeout(Duration::from_secs(1), stream.next())
                .await
                .expect("timed out")
                .expect("stream ended");
            assert_eq!(received, Message::from(random_match(&mut rng)));
        }
    }

    #[actix_web::test]
    async fn test_send_match_reaches_background_listener() {
        let broker = Arc::new(MemoryBroker::new());
        let state = state_for(broker.clone(), 1);
        for _ in 0..200 {
            if broker.subscriber_count(CHANNEL) == 1 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(crate::server::router::config),
        )
        .await;
        let req = test::TestRequest::post().uri("/send/match").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let expected: Message = random_match(&mut StdRng::seed_from_u64(1)).into();
        for _ in 0..200 {
            let status = state.listener.send(GetStatus).await.expect("status");
            if status.received == 1 {
                assert_eq!(status.last_received, Some(expected));
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("listener never received the published match");
    }

    #[actix_web::test]
    async fn test_send_match_reports_unreachable_broker() {
        let app = test::init_service(
            App::new()
                .app_data(state_for(Arc::new(UnreachableBroker), 0))
                .configure(crate::server::router::config),
        )
        .await;

        let req = test::TestRequest::post().uri("/send/match").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "BROKER_UNAVAILABLE");
    }

    #[actix_web::test]
    async fn test_send_match_rejects_get() {
        let broker = Arc::new(MemoryBroker::new());
        let app = test::init_service(
            App::new()
                .app_data(state_for(broker, 0))
                .configure(crate::server::router::config),
        )
        .await;

        let req = test::TestRequest::get().uri("/send/match").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }
}
