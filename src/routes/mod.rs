pub mod balances;
pub mod routes;
pub mod tokens;
pub mod transfers;
pub mod users;

pub use routes::*;
