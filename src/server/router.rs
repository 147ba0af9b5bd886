//! HTTP routing configuration.

use actix_web::web;

use crate::server::health::health;
use crate::server::send::send_match;

/// Configure the application's HTTP routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/send")
            .route("/match", web::post().to(send_match))
    )
    .service(
        web::resource("/actuator/health")
            .route(web::get().to(health))
    );
}
