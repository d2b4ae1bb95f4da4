use actix_web::{web, HttpResponse, Result};

use crate::routes::{
    balances::configure_balance_routes, tokens::configure_token_routes,
    transfers::configure_transfer_routes, users::configure_user_routes,
};

/// Health check endpoint
async fn health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({"status": "ok"})))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("", web::get().to(health_check))
            .configure(configure_user_routes)
            .configure(configure_token_routes)
            .configure(configure_balance_routes)
            .configure(configure_transfer_routes),
    );
}
