pub mod dto;
pub mod service;
pub mod tokens;

pub use tokens::*;
