pub mod auth;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod store;
pub mod ui;

pub use error::{AppError, Result};
