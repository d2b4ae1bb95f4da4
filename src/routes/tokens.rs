use actix_web::web;

use crate::handlers::tokens::{
    get_market_data_handler, get_token_price_handler, get_token_prices_handler, get_tokens_handler,
};

pub fn configure_token_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/tokens", web::get().to(get_tokens_handler))
        .route("/tokens/prices", web::get().to(get_token_prices_handler))
        .route(
            "/tokens/prices/token/{id}",
            web::get().to(get_token_price_handler),
        )
        .route(
            "/tokens/markets/{id}",
            web::get().to(get_market_data_handler),
        );
}
