pub mod balances;
pub mod dto;
pub mod service;

pub use balances::*;
