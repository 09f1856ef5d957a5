pub mod analyzer;
pub mod commands;
pub mod config;
pub mod error;
pub mod filters;
pub mod model;
pub mod source;
pub mod state;

pub use config::DashboardConfig;
pub use error::AppError;
pub use state::AppState;
