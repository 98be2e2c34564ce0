pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod methods;
pub mod openapi;
pub mod shutdown;
pub mod state;
