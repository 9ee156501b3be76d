pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod observability;
pub mod session;
pub mod state;
pub mod view;
