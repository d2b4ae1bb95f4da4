use actix_web::web;

use crate::handlers::balances::{balances_index_handler, get_balances_handler};

pub fn configure_balance_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/balances", web::get().to(balances_index_handler))
        .route("/balances/{address}", web::get().to(get_balances_handler));
}
