pub mod balances;
pub mod tokens;
pub mod transfers;
pub mod users;
