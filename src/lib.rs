pub mod config;
pub mod error;
pub mod measurement;
pub mod models;
pub mod session;
pub mod ui;

pub use error::{AppError, Result};
