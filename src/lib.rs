pub mod app;
pub mod cache;
pub mod config;
pub mod error;
pub mod fallback;
pub mod mappers;
pub mod provider_client;
pub mod proxy;
pub mod routes;
pub mod services;
pub mod state;
pub mod types;
