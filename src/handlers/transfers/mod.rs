pub mod dto;
pub mod service;
pub mod transfers;

pub use transfers::*;
