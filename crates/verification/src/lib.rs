pub mod audit;
pub mod config;
pub mod dto;
pub mod error;
pub mod events;
pub mod models;
pub mod reference;
pub mod repository;
pub mod services;

pub use error::{Result, VerificationError};
pub use services::review::ReviewService;
