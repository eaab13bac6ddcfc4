//! HTTP surface: router, handlers, forms, views and shared state

pub mod error;
pub mod forms;
pub mod health;
pub mod router;
pub mod state;
pub mod users;
pub mod views;

pub use error::PageError;
pub use router::create_router;
pub use state::AppState;
