use actix_web::web;

use crate::handlers::users::create_user_handler;

pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/users", web::post().to(create_user_handler));
}
