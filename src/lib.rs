pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod market;
pub mod query;
pub mod routes;
pub mod session;
pub mod view;
