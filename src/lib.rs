pub mod config;
pub mod errors;
pub mod handlers;
pub mod providers;
pub mod routes;
pub mod storage;
pub mod validation;
