//! HTTP API server module
//!
//! REST API for handbook upload, question answering, status, and feedback.

pub mod handlers;
pub mod routes;
pub mod server;
pub mod types;

pub use handlers::AppState;
pub use server::HttpServer;
