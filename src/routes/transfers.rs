use actix_web::web;

use crate::handlers::transfers::{get_transactions_handler, get_transfers_handler};

pub fn configure_transfer_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/transfers", web::get().to(get_transfers_handler))
        .route("/transactions", web::get().to(get_transactions_handler));
}
