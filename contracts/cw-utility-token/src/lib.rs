#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

pub mod contract;
mod error;
pub mod execute;
pub mod helpers;
mod ids;
pub mod msg;
pub mod queries;
pub mod state;


pub use crate::error::ContractError;
