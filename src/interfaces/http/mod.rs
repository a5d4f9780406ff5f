pub mod export;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod types;

pub use routes::router;
pub use types::AppState;
