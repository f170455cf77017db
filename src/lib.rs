pub mod app;
pub mod config;
pub mod constants;
pub mod error_handlers;
pub mod flow;
pub mod interaction;
pub mod middleware;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod state;
pub mod types;
pub mod utils;
