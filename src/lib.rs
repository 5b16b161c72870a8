pub mod audit;
pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod reports;
pub mod response;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;
pub mod store;
